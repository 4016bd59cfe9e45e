use chrono::{DateTime, Datelike, Days, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::controller::score::{BonusKind, ScoringRules};
use crate::error::CoreError;
use crate::model::FighterTotal;

pub const LEADERBOARD_FILE: &str = "leaderboard.csv";
pub const REFRESHED_AT_FILE: &str = "refreshed_at";
pub const FINGERPRINT_FILE: &str = "fingerprint.json";

/// What a cached leaderboard was computed from. A cache whose fingerprint
/// differs from the current one is stale regardless of its age.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CacheFingerprint {
    pub input: PathBuf,
    pub input_modified: Option<DateTime<Utc>>,
    pub bonuses: Vec<BonusKind>,
}

impl CacheFingerprint {
    /// # Errors
    ///
    /// Will return `Err` if the input file cannot be resolved
    pub fn for_input(input: &Path, rules: &ScoringRules) -> Result<Self, CoreError> {
        let input = fs::canonicalize(input)?;
        let input_modified = fs::metadata(&input)?
            .modified()
            .ok()
            .map(DateTime::<Utc>::from);
        Ok(Self {
            input,
            input_modified,
            bonuses: rules.enabled().collect(),
        })
    }
}

/// Contents of a populated cache directory.
#[derive(Debug, Clone)]
pub struct CachedLeaderboard {
    pub totals: Vec<FighterTotal>,
    pub refreshed_at: DateTime<Utc>,
    pub fingerprint: CacheFingerprint,
}

/// Decides whether cached data is stale. Data is fresh as long as it was
/// written on or after the most recent `refresh_weekday` (00:00 UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub refresh_weekday: Weekday,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            refresh_weekday: Weekday::Tue,
        }
    }
}

impl CachePolicy {
    #[must_use]
    pub fn new(refresh_weekday: Weekday) -> Self {
        Self { refresh_weekday }
    }

    /// Start of the latest refresh weekday at or before `now`.
    #[must_use]
    pub fn last_refresh_boundary(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.weekday().num_days_from_monday();
        let target = self.refresh_weekday.num_days_from_monday();
        let days_back = (today + 7 - target) % 7;
        let date = now.date_naive() - Days::new(u64::from(days_back));
        date.and_time(NaiveTime::default()).and_utc()
    }

    #[must_use]
    pub fn should_refresh(&self, now: DateTime<Utc>, last_refresh: Option<DateTime<Utc>>) -> bool {
        let boundary = self.last_refresh_boundary(now);
        last_refresh.is_none_or(|last| last < boundary)
    }
}

/// Flat CSV copy of the last computed leaderboard.
#[derive(Debug, Clone)]
pub struct LeaderboardCache {
    dir: PathBuf,
}

impl LeaderboardCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// # Errors
    ///
    /// Will return `Err` if the cache directory or files cannot be written
    pub fn store(
        &self,
        totals: &[FighterTotal],
        refreshed_at: DateTime<Utc>,
        fingerprint: &CacheFingerprint,
    ) -> Result<(), CoreError> {
        fs::create_dir_all(&self.dir)?;

        let mut writer = csv::Writer::from_path(self.dir.join(LEADERBOARD_FILE))?;
        for total in totals {
            writer.serialize(total)?;
        }
        writer.flush()?;

        fs::write(self.dir.join(REFRESHED_AT_FILE), refreshed_at.to_rfc3339())?;
        fs::write(
            self.dir.join(FINGERPRINT_FILE),
            serde_json::to_string_pretty(fingerprint)?,
        )?;
        log::info!(
            "cached {} fighters to {}",
            totals.len(),
            self.dir.display()
        );
        Ok(())
    }

    /// Returns `None` when nothing has been cached yet, or the cache predates
    /// fingerprints.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the cache files exist but cannot be read or parsed
    pub fn load(&self) -> Result<Option<CachedLeaderboard>, CoreError> {
        let leaderboard_path = self.dir.join(LEADERBOARD_FILE);
        let stamp_path = self.dir.join(REFRESHED_AT_FILE);
        let fingerprint_path = self.dir.join(FINGERPRINT_FILE);
        if !leaderboard_path.is_file() || !stamp_path.is_file() || !fingerprint_path.is_file() {
            return Ok(None);
        }

        let stamp = fs::read_to_string(stamp_path)?;
        let refreshed_at = DateTime::parse_from_rfc3339(stamp.trim())?.with_timezone(&Utc);
        let fingerprint: CacheFingerprint =
            serde_json::from_str(&fs::read_to_string(fingerprint_path)?)?;

        let mut reader = csv::Reader::from_path(leaderboard_path)?;
        let totals = reader
            .deserialize::<FighterTotal>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(CachedLeaderboard {
            totals,
            refreshed_at,
            fingerprint,
        }))
    }
}
