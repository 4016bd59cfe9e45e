use serde_json::Value;
use std::fs;
use std::path::Path;

use super::normalize::fighter_name;
use crate::error::CoreError;
use crate::model::{FightRow, RawFight};

#[derive(Debug, Clone, Default)]
pub struct IngestedFights {
    pub rows: Vec<FightRow>,
    pub skipped_rows: usize,
}

fn tag_rows(raw_rows: Vec<RawFight>) -> IngestedFights {
    let mut ingested = IngestedFights::default();
    for (idx, raw) in raw_rows.into_iter().enumerate() {
        match fighter_name(&raw) {
            Some(fighter) => ingested.rows.push(FightRow { fighter, raw }),
            None => {
                log::warn!("row {idx} has no fighter name, skipping");
                ingested.skipped_rows += 1;
            }
        }
    }
    ingested
}

/// # Errors
///
/// Will return `Err` if the text is not a JSON array of objects
pub fn parse_json_rows(text: &str) -> Result<Vec<RawFight>, CoreError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(CoreError::Parse(
            "expected a JSON array of fight rows".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(CoreError::Parse(format!(
                "row {idx} is not an object: {other}"
            ))),
        })
        .collect()
}

/// Every cell becomes a string value. Empty cells are left out so they read
/// as missing.
///
/// # Errors
///
/// Will return `Err` if the CSV is malformed
pub fn parse_csv_rows(text: &str) -> Result<Vec<RawFight>, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let raw: RawFight = headers
            .iter()
            .zip(record.iter())
            .filter(|(_, cell)| !cell.trim().is_empty())
            .map(|(header, cell)| (header.trim().to_string(), Value::from(cell)))
            .collect();
        rows.push(raw);
    }
    Ok(rows)
}

/// Loads fight rows from a `.json` or `.csv` file.
///
/// # Errors
///
/// Will return `Err` if the file is missing, has an unsupported extension, or
/// cannot be parsed
pub fn load_raw_fights(path: &Path) -> Result<IngestedFights, CoreError> {
    if !path.is_file() {
        return Err(CoreError::NotFound(format!(
            "fight data '{}' does not exist",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    let text = fs::read_to_string(path)?;

    let raw_rows = match extension.as_deref() {
        Some("json") => parse_json_rows(&text)?,
        Some("csv") => parse_csv_rows(&text)?,
        _ => {
            return Err(CoreError::Parse(format!(
                "unsupported fight data format '{}', expected .json or .csv",
                path.display()
            )));
        }
    };

    let ingested = tag_rows(raw_rows);
    log::info!(
        "loaded {} fight rows from {} ({} skipped)",
        ingested.rows.len(),
        path.display(),
        ingested.skipped_rows
    );
    Ok(ingested)
}
