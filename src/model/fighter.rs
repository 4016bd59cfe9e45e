use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::fight::FightRecord;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FighterTotal {
    pub name: String,
    pub total_score: u64,
    pub fight_count: usize,
}

/// Points earned by each scoring rule for one fight.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub base: u32,
    pub strike_differential: u32,
    pub five_round: u32,
    pub fight_of_the_night: u32,
    pub championship: u32,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn components(&self) -> [u32; 5] {
        [
            self.base,
            self.strike_differential,
            self.five_round,
            self.fight_of_the_night,
            self.championship,
        ]
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.components().iter().sum()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FightDetail {
    pub record: FightRecord,
    pub breakdown: ScoreBreakdown,
    pub warnings: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FighterDetail {
    pub total: FighterTotal,
    pub fights: Vec<FightDetail>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum RefreshSource {
    Input,
    Cache,
}

impl fmt::Display for RefreshSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RefreshSource::Input => "input file",
            RefreshSource::Cache => "cache",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LeaderboardData {
    pub totals: Vec<FighterTotal>,
    pub last_refresh: DateTime<Utc>,
    pub last_refresh_source: RefreshSource,
    pub warning_count: usize,
    pub skipped_rows: usize,
}
