pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod cache;
    pub mod ingest;
    pub mod normalize;
    pub mod score;
}
pub mod view {
    pub mod fighter;
    pub mod index;
    pub mod leaderboard;
}
pub mod output;

pub use controller::normalize::{normalize, normalize_with_warnings};
pub use controller::score::{BonusKind, ScoringRules, fighter_total, leaderboard, score};
pub use error::CoreError;
pub use model::{FightMethod, FightRecord, FightResult, FighterTotal, RawFight};
