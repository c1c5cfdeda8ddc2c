pub mod allocation;
pub mod course_handicap;
pub mod match_play;
pub mod team;

pub use allocation::*;
pub use course_handicap::*;
pub use match_play::*;
pub use team::*;
