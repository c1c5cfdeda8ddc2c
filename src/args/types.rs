use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Course handicap and strokes per hole for every player in the round
    Handicaps,
    /// Gross standings
    Leaderboard,
    /// Net standings
    #[value(name = "net_leaderboard")]
    #[serde(rename = "net_leaderboard")]
    NetLeaderboard,
    /// Strokes player A receives from player B
    #[value(name = "match_play")]
    #[serde(rename = "match_play")]
    MatchPlay,
    /// List the game catalog
    Games,
    /// Look up a course by name
    Course,
    /// List saved player profiles
    Players,
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Handicap and scoring engine for golf outings", long_about = None)]
pub struct Args {
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    /// Optional TOML settings file. Command line values win over it.
    #[arg(long, value_name = "CONFIG_TOML", value_parser = crate::args::validation::check_readable_file)]
    pub config_toml: Option<PathBuf>,
    /// Round JSON: game id, tee, players, scores, current hole.
    #[arg(short = 'r', long, value_name = "ROUND_JSON", value_parser = crate::args::validation::check_readable_file)]
    pub round: Option<PathBuf>,
    #[arg(long, value_name = "COURSE_NAME")]
    pub course_name: Option<String>,
    #[arg(long, value_name = "PLAYER_ID")]
    pub player_a: Option<String>,
    #[arg(long, value_name = "PLAYER_ID")]
    pub player_b: Option<String>,
    /// Only list games that fit this many players.
    #[arg(long, value_name = "COUNT")]
    pub player_count: Option<usize>,
    /// Percent of course handicap used as playing handicap, 0-100.
    #[arg(long, value_name = "PERCENT", value_parser = crate::args::validation::check_percent)]
    pub allowance: Option<f64>,
    /// Directory for saved profiles and cached courses.
    #[arg(long, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,
    /// Save the round's players to the profile store.
    #[arg(long)]
    pub save_players: bool,
    #[arg(long, env = "GOLF_COURSE_API_URL", value_name = "URL")]
    pub course_api_base_url: Option<String>,
    #[arg(long, env = "GOLF_COURSE_API_KEY", value_name = "KEY", hide_env_values = true)]
    pub course_api_key: Option<String>,
    /// tracing filter, e.g. "info" or "rusty_golf_handicap=debug"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
