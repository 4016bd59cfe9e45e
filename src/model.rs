pub mod fight;
pub mod fighter;
pub mod utils;

pub use fight::{
    FieldWarning, FightField, FightMethod, FightRecord, FightResult, FightRow, NormalizedFight,
    RawFight, WarningKind,
};
pub use fighter::{
    FightDetail, FighterDetail, FighterTotal, LeaderboardData, RefreshSource, ScoreBreakdown,
};
pub use utils::format_time_ago;
