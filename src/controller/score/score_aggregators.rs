use ahash::RandomState;
use rayon::prelude::*;
use std::collections::HashMap;

use super::rules::ScoringRules;
use super::score_calculator::score;
use crate::model::{FightRecord, FightRow, FighterTotal};

/// Groups rows by fighter, keeping fighters in the order they were first seen
/// and each fighter's rows in input order.
#[must_use]
pub fn group_by_fighter(rows: Vec<FightRow>) -> Vec<(String, Vec<FightRow>)> {
    let mut index_by_name: HashMap<String, usize, RandomState> = HashMap::default();
    let mut grouped: Vec<(String, Vec<FightRow>)> = Vec::new();

    for row in rows {
        match index_by_name.get(&row.fighter) {
            Some(&idx) => grouped[idx].1.push(row),
            None => {
                index_by_name.insert(row.fighter.clone(), grouped.len());
                grouped.push((row.fighter.clone(), vec![row]));
            }
        }
    }

    grouped
}

#[must_use]
pub fn fighter_total(name: &str, records: &[FightRecord], rules: &ScoringRules) -> FighterTotal {
    FighterTotal {
        name: name.to_string(),
        total_score: records.iter().map(|r| u64::from(score(r, rules))).sum(),
        fight_count: records.len(),
    }
}

/// Totals every fighter and orders by score, highest first. Fighters with the
/// same total keep their input order.
#[must_use]
pub fn leaderboard(fighters: &[(String, Vec<FightRecord>)], rules: &ScoringRules) -> Vec<FighterTotal> {
    let mut totals: Vec<FighterTotal> = fighters
        .par_iter()
        .map(|(name, records)| fighter_total(name, records, rules))
        .collect();

    totals.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    totals
}

/// Competition rank by score: ties share a place, the next place skips.
#[must_use]
pub fn competition_place(totals: &[FighterTotal], total: &FighterTotal) -> usize {
    1 + totals
        .iter()
        .filter(|other| other.total_score > total.total_score)
        .count()
}
