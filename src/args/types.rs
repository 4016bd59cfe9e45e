use chrono::Weekday;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::controller::cache::CachePolicy;
use crate::controller::score::ScoringRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Fight rows to score, a .json array of objects or a .csv with a header row.
    #[arg(
        short = 'i',
        long,
        value_name = "FIGHTS_FILE",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub input: PathBuf,

    /// Directory for the cached leaderboard. Without it nothing is cached.
    #[arg(short = 'c', long, value_name = "CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Cached data goes stale at 00:00 UTC on this weekday.
    #[arg(
        long,
        value_name = "WEEKDAY",
        default_value = "tue",
        value_parser = crate::args::validation::parse_weekday
    )]
    pub refresh_weekday: Weekday,

    /// Award +25 for fights whose event is a championship bout.
    #[arg(long)]
    pub championship_bonus: bool,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print one fighter's per-fight breakdown instead of the leaderboard.
    #[arg(long, value_name = "NAME", conflicts_with = "serve")]
    pub fighter: Option<String>,

    /// Serve the leaderboard over HTTP on this address, e.g. 127.0.0.1:8081.
    #[arg(short = 's', long, value_name = "ADDR")]
    pub serve: Option<SocketAddr>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub input: PathBuf,
    pub cache_dir: Option<PathBuf>,
    pub cache_policy: CachePolicy,
    pub rules: ScoringRules,
    pub format: OutputFormat,
    pub fighter: Option<String>,
    pub serve: Option<SocketAddr>,
}

impl CleanArgs {
    /// Settings with default rules and policy and no cache, for callers that
    /// only want to score a file.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            cache_dir: None,
            cache_policy: CachePolicy::default(),
            rules: ScoringRules::default(),
            format: OutputFormat::default(),
            fighter: None,
            serve: None,
        }
    }

    #[must_use]
    pub fn new(args: Args) -> Self {
        let rules = if args.championship_bonus {
            ScoringRules::with_championship()
        } else {
            ScoringRules::default()
        };
        Self {
            input: args.input,
            cache_dir: args.cache_dir,
            cache_policy: CachePolicy::new(args.refresh_weekday),
            rules,
            format: args.format,
            fighter: args.fighter.map(|name| name.trim().to_string()),
            serve: args.serve,
        }
    }
}
