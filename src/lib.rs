pub mod args;
pub mod config;
pub mod course_lookup;
pub mod error;
pub mod handicap;
pub mod model;
pub mod round;
pub mod score;
pub mod storage;

pub use error::{EngineError, Result};
pub use handicap::{allocate_strokes, course_handicap, match_play_strokes, team_handicap};
pub use model::{Course, HoleScore, LeaderboardEntry, Player, Team, Tee};
pub use round::Round;
pub use score::{leaderboard, net_score};
