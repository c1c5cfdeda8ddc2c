pub mod course;
pub mod game;
pub mod player;
pub mod score;

pub use course::*;
pub use game::*;
pub use player::*;
pub use score::*;
