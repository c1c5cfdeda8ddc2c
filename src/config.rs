use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::args::{Args, Mode};
use crate::error::{EngineError, Result};

pub const DEFAULT_STORE_DIR: &str = ".golf-handicap";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_ALLOWANCE: f64 = 100.0;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    mode: Option<Mode>,
    round: Option<PathBuf>,
    store_dir: Option<PathBuf>,
    handicap_allowance: Option<f64>,
    course_api_base_url: Option<String>,
    course_api_key: Option<String>,
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseApiConfig {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: Mode,
    pub round: Option<PathBuf>,
    pub course_name: Option<String>,
    pub player_a: Option<String>,
    pub player_b: Option<String>,
    pub player_count: Option<usize>,
    pub store_dir: PathBuf,
    pub handicap_allowance: f64,
    /// Present only when both url and key are configured.
    pub course_api: Option<CourseApiConfig>,
    pub log_level: String,
    pub save_players: bool,
    pub json: bool,
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| EngineError::Config(format!("read config toml {}: {e}", path.display())))?;
    toml::from_str(&contents)
        .map_err(|e| EngineError::Config(format!("parse config toml {}: {e}", path.display())))
}

/// Merge command line arguments over the optional TOML file.
///
/// # Errors
/// Returns `Config` if the file is unreadable or invalid, no mode is given,
/// the allowance is out of range, or only half of the course api settings are present.
pub fn load_config(args: Args) -> Result<AppConfig> {
    let file_config = match args.config_toml.as_deref() {
        Some(path) => read_file_config(path)?,
        None => FileConfig::default(),
    };

    let mode = args
        .mode
        .or(file_config.mode)
        .ok_or_else(|| EngineError::Config("missing --mode".into()))?;

    let handicap_allowance = args
        .allowance
        .or(file_config.handicap_allowance)
        .unwrap_or(DEFAULT_ALLOWANCE);
    if !(0.0..=100.0).contains(&handicap_allowance) {
        return Err(EngineError::Config(format!(
            "handicap allowance {handicap_allowance} must be between 0 and 100"
        )));
    }

    let base_url = args
        .course_api_base_url
        .or(file_config.course_api_base_url)
        .filter(|s| !s.trim().is_empty());
    let api_key = args
        .course_api_key
        .or(file_config.course_api_key)
        .filter(|s| !s.trim().is_empty());
    let course_api = match (base_url, api_key) {
        (Some(base_url), Some(api_key)) => Some(CourseApiConfig { base_url, api_key }),
        (None, None) => None,
        (Some(_), None) => {
            return Err(EngineError::Config(
                "course api url given without a key (--course-api-key or GOLF_COURSE_API_KEY)"
                    .into(),
            ));
        }
        (None, Some(_)) => {
            return Err(EngineError::Config(
                "course api key given without a url (--course-api-base-url)".into(),
            ));
        }
    };

    Ok(AppConfig {
        mode,
        round: args.round.or(file_config.round),
        course_name: args.course_name,
        player_a: args.player_a,
        player_b: args.player_b,
        player_count: args.player_count,
        store_dir: args
            .store_dir
            .or(file_config.store_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR)),
        handicap_allowance,
        course_api,
        log_level: args
            .log_level
            .or(file_config.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        save_players: args.save_players,
        json: args.json,
    })
}
