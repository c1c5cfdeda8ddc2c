use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{EngineError, Result};
use crate::round::Round;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the value is not a number between 0 and 100
pub fn check_percent(value: &str) -> std::result::Result<f64, String> {
    let pct: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number."))?;
    if !(0.0..=100.0).contains(&pct) {
        return Err(format!("'{value}' must be between 0 and 100."));
    }
    Ok(pct)
}

/// Read and check a round JSON file.
///
/// # Errors
///
/// Will return `Err` if the file can't be read, isn't a round, or fails validation
pub fn load_round(path: &Path) -> Result<Round> {
    let contents = fs::read_to_string(path)
        .map_err(|e| EngineError::Config(format!("read {}: {e}", path.display())))?;
    let round: Round = serde_json::from_str(&contents)
        .map_err(|e| EngineError::Parse(format!("{}: {e}", path.display())))?;
    round.validate()?;
    Ok(round)
}
