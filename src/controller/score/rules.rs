use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const KO_TKO_WIN: u32 = 100;
pub const SUBMISSION_WIN: u32 = 90;
pub const UNANIMOUS_DECISION_WIN: u32 = 80;
pub const MAJORITY_DECISION_WIN: u32 = 75;
pub const SPLIT_DECISION_WIN: u32 = 70;
pub const OTHER_WIN: u32 = 60;
pub const LOSS: u32 = 25;
pub const FIVE_ROUND_BONUS: u32 = 25;
pub const FIGHT_OF_THE_NIGHT_BONUS: u32 = 50;
pub const CHAMPIONSHIP_BONUS: u32 = 25;

/// Bonuses that can be switched on or off. The outcome base score always
/// applies.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BonusKind {
    StrikeDifferential,
    FiveRoundFormat,
    FightOfTheNight,
    Championship,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoringRules {
    enabled: BTreeSet<BonusKind>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::new([
            BonusKind::StrikeDifferential,
            BonusKind::FiveRoundFormat,
            BonusKind::FightOfTheNight,
        ])
    }
}

impl ScoringRules {
    pub fn new(enabled: impl IntoIterator<Item = BonusKind>) -> Self {
        Self {
            enabled: enabled.into_iter().collect(),
        }
    }

    /// The default rules plus the championship bonus.
    #[must_use]
    pub fn with_championship() -> Self {
        Self::default().enable(BonusKind::Championship)
    }

    #[must_use]
    pub fn enable(mut self, bonus: BonusKind) -> Self {
        self.enabled.insert(bonus);
        self
    }

    #[must_use]
    pub fn disable(mut self, bonus: BonusKind) -> Self {
        self.enabled.remove(&bonus);
        self
    }

    #[must_use]
    pub fn is_enabled(&self, bonus: BonusKind) -> bool {
        self.enabled.contains(&bonus)
    }

    /// Enabled bonuses in a fixed order.
    pub fn enabled(&self) -> impl Iterator<Item = BonusKind> + '_ {
        self.enabled.iter().copied()
    }
}
