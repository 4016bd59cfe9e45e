use chrono::Weekday;
use std::{fs, path::PathBuf};

use super::types::Args;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The fights file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the value is not a weekday name or abbreviation
pub fn parse_weekday(value: &str) -> Result<Weekday, String> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| format!("'{value}' is not a weekday, expected e.g. mon, tue, wednesday."))
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the cache directory exists but is not a directory,
    /// or the fighter name is blank
    pub fn validate(&self) -> Result<(), String> {
        if let Some(dir) = &self.cache_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(format!(
                    "The cache dir '{}' exists and is not a directory.",
                    dir.display()
                ));
            }
        }
        if let Some(name) = &self.fighter {
            if name.trim().is_empty() {
                return Err("The fighter name must not be blank.".to_string());
            }
        }
        Ok(())
    }
}
