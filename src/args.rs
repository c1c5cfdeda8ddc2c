pub mod types;
pub mod validation;

pub use types::*;
pub use validation::*;

use clap::Parser;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}
