pub mod data_service;
pub mod http_handlers;
pub mod rules;
pub mod score_aggregators;
pub mod score_calculator;
pub mod sort_utils;

pub use data_service::*;
pub use http_handlers::*;
pub use rules::{BonusKind, ScoringRules};
pub use score_aggregators::*;
pub use score_calculator::*;
pub use sort_utils::*;
