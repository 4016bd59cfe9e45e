use std::io::Write;

use crate::args::OutputFormat;
use crate::controller::score::competition_place;
use crate::error::CoreError;
use crate::model::{FighterDetail, LeaderboardData};

/// # Errors
///
/// Will return `Err` if writing or serializing fails
pub fn write_leaderboard<W: Write>(
    out: &mut W,
    data: &LeaderboardData,
    format: OutputFormat,
) -> Result<(), CoreError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, data)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for total in &data.totals {
                writer.serialize(total)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            let width = data
                .totals
                .iter()
                .map(|t| t.name.chars().count())
                .max()
                .unwrap_or(0)
                .max("FIGHTER".len());
            writeln!(out, "{:>5}  {:<width$}  {:>8}  {:>6}", "PLACE", "FIGHTER", "RAX", "FIGHTS")?;
            for total in &data.totals {
                writeln!(
                    out,
                    "{:>5}  {:<width$}  {:>8}  {:>6}",
                    competition_place(&data.totals, total),
                    total.name,
                    total.total_score,
                    total.fight_count
                )?;
            }
        }
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if writing or serializing fails
pub fn write_fighter_detail<W: Write>(
    out: &mut W,
    detail: &FighterDetail,
    format: OutputFormat,
) -> Result<(), CoreError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, detail)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record([
                "fight", "result", "method", "strikes_self", "strikes_opponent", "base",
                "strike_differential", "five_round", "fight_of_the_night", "championship", "rax",
            ])?;
            for (idx, fight) in detail.fights.iter().enumerate() {
                let r = &fight.record;
                let b = &fight.breakdown;
                writer.write_record([
                    (idx + 1).to_string(),
                    r.result().to_string(),
                    r.method().to_string(),
                    r.strikes_landed_self().to_string(),
                    r.strikes_landed_opponent().to_string(),
                    b.base.to_string(),
                    b.strike_differential.to_string(),
                    b.five_round.to_string(),
                    b.fight_of_the_night.to_string(),
                    b.championship.to_string(),
                    b.total().to_string(),
                ])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "{}: {} RAX over {} fights",
                detail.total.name, detail.total.total_score, detail.total.fight_count
            )?;
            for (idx, fight) in detail.fights.iter().enumerate() {
                let r = &fight.record;
                let b = &fight.breakdown;
                write!(
                    out,
                    "{:>3}. {:<10} {:<22} {:>4}-{:<4} base {:>3} diff {:>3} bonus {:>3} = {:>4}",
                    idx + 1,
                    r.result().to_string(),
                    r.method().to_string(),
                    r.strikes_landed_self(),
                    r.strikes_landed_opponent(),
                    b.base,
                    b.strike_differential,
                    b.five_round + b.fight_of_the_night + b.championship,
                    b.total()
                )?;
                if fight.warnings.is_empty() {
                    writeln!(out)?;
                } else {
                    writeln!(out, "  ({})", fight.warnings.join("; "))?;
                }
            }
        }
    }
    Ok(())
}
