#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rusty_rax::args::CleanArgs;
use std::path::{Path, PathBuf};

pub const LEADERBOARD_ORDER: [&str; 4] = [
    "Alex Pereira",
    "Jamahal Hill",
    "Sean Strickland",
    "Israel Adesanya",
];
pub const LEADERBOARD_TOTALS: [u64; 4] = [230, 230, 213, 192];

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn args_for(fixture_name: &str, cache_dir: Option<&Path>) -> CleanArgs {
    let mut args = CleanArgs::for_input(fixture(fixture_name));
    args.cache_dir = cache_dir.map(Path::to_path_buf);
    args
}

/// Friday afternoon; the most recent Tuesday is 2026-10-13.
pub fn friday() -> DateTime<Utc> {
    at(2026, 10, 16, 15)
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .expect("valid timestamp")
}
