use chrono::{DateTime, Utc};

use super::score_aggregators::{fighter_total, group_by_fighter, leaderboard};
use super::score_calculator::score_breakdown;
use crate::args::CleanArgs;
use crate::controller::cache::{CacheFingerprint, CachedLeaderboard, LeaderboardCache};
use crate::controller::ingest::load_raw_fights;
use crate::controller::normalize::normalize_with_warnings;
use crate::error::CoreError;
use crate::model::{
    FightDetail, FightRecord, FighterDetail, LeaderboardData, NormalizedFight, RefreshSource,
};

type NormalizedByFighter = Vec<(String, Vec<NormalizedFight>)>;

fn load_normalized(args: &CleanArgs) -> Result<(NormalizedByFighter, usize), CoreError> {
    let ingested = load_raw_fights(&args.input)?;
    let grouped = group_by_fighter(ingested.rows)
        .into_iter()
        .map(|(name, rows)| {
            let fights: Vec<NormalizedFight> = rows
                .iter()
                .map(|row| normalize_with_warnings(&row.raw))
                .collect();
            (name, fights)
        })
        .collect();
    Ok((grouped, ingested.skipped_rows))
}

fn cached_leaderboard(
    cache: &LeaderboardCache,
    args: &CleanArgs,
    fingerprint: &CacheFingerprint,
    now: DateTime<Utc>,
) -> Option<LeaderboardData> {
    match cache.load() {
        Ok(Some(CachedLeaderboard {
            totals,
            refreshed_at,
            fingerprint: cached_fingerprint,
        })) => {
            if cached_fingerprint != *fingerprint {
                log::info!("cache was built from other input or rules, recomputing");
                None
            } else if args.cache_policy.should_refresh(now, Some(refreshed_at)) {
                log::info!("cache from {refreshed_at} is stale, recomputing");
                None
            } else {
                Some(LeaderboardData {
                    totals,
                    last_refresh: refreshed_at,
                    last_refresh_source: RefreshSource::Cache,
                    warning_count: 0,
                    skipped_rows: 0,
                })
            }
        }
        Ok(None) => None,
        Err(e) => {
            log::warn!("ignoring unreadable cache: {e}");
            None
        }
    }
}

/// Leaderboard for the configured input, served from the CSV cache while the
/// cache policy considers it fresh and it was built from the same input file
/// and scoring rules.
///
/// # Errors
///
/// Will return `Err` if the input cannot be loaded or the cache cannot be written
pub fn get_data_for_leaderboard(args: &CleanArgs, now: DateTime<Utc>) -> Result<LeaderboardData, CoreError> {
    let cache = match &args.cache_dir {
        Some(dir) => {
            let fingerprint = CacheFingerprint::for_input(&args.input, &args.rules)?;
            let cache = LeaderboardCache::new(dir);
            if let Some(data) = cached_leaderboard(&cache, args, &fingerprint, now) {
                return Ok(data);
            }
            Some((cache, fingerprint))
        }
        None => None,
    };

    let (grouped, skipped_rows) = load_normalized(args)?;
    let warning_count: usize = grouped
        .iter()
        .flat_map(|(_, fights)| fights)
        .map(|fight| fight.warnings.len())
        .sum();
    if warning_count > 0 {
        log::warn!("{warning_count} fields defaulted during normalization");
    }

    let fighters: Vec<(String, Vec<FightRecord>)> = grouped
        .into_iter()
        .map(|(name, fights)| (name, fights.into_iter().map(|f| f.record).collect()))
        .collect();
    let totals = leaderboard(&fighters, &args.rules);

    if let Some((cache, fingerprint)) = &cache {
        cache.store(&totals, now, fingerprint)?;
    }

    Ok(LeaderboardData {
        totals,
        last_refresh: now,
        last_refresh_source: RefreshSource::Input,
        warning_count,
        skipped_rows,
    })
}

/// Per-fight breakdown for one fighter. Names match case-insensitively.
///
/// # Errors
///
/// Will return `Err` if the input cannot be loaded or the fighter does not appear in it
pub fn get_fighter_detail(args: &CleanArgs, name: &str) -> Result<FighterDetail, CoreError> {
    let (grouped, _) = load_normalized(args)?;
    let wanted = name.trim().to_lowercase();
    let (fighter, fights) = grouped
        .into_iter()
        .find(|(fighter, _)| fighter.to_lowercase() == wanted)
        .ok_or_else(|| CoreError::NotFound(format!("fighter '{}'", name.trim())))?;

    let records: Vec<FightRecord> = fights.iter().map(|f| f.record).collect();
    let total = fighter_total(&fighter, &records, &args.rules);
    let fights = fights
        .into_iter()
        .map(|fight| FightDetail {
            breakdown: score_breakdown(&fight.record, &args.rules),
            record: fight.record,
            warnings: fight.warnings.iter().map(ToString::to_string).collect(),
        })
        .collect();

    Ok(FighterDetail { total, fights })
}
