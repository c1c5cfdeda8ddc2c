pub mod leaderboard;
pub mod net;

pub use leaderboard::*;
pub use net::*;
