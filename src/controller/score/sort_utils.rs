use crate::model::FighterTotal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Score,
    Name,
    Fights,
}

impl SortKey {
    #[must_use]
    pub fn from_param(param: &str) -> Self {
        match param.trim().to_lowercase().as_str() {
            "name" => Self::Name,
            "fights" => Self::Fights,
            _ => Self::Score,
        }
    }

    #[must_use]
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Name => "name",
            Self::Fights => "fights",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn from_param(param: &str) -> Self {
        match param.trim().to_lowercase().as_str() {
            "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }

    #[must_use]
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Re-sorts a leaderboard for display. The sort is stable, so rows that
/// compare equal stay in leaderboard order.
pub fn sort_totals(totals: &mut [FighterTotal], key: SortKey, direction: SortDirection) {
    totals.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Score => a.total_score.cmp(&b.total_score),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Fights => a.fight_count.cmp(&b.fight_count),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
