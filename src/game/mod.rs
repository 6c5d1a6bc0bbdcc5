//! Game orchestration
//!
//! Ties the core kernel to the word services: one `GameSession` per target word.

mod error;
mod session;
mod stats;

pub use error::GameError;
pub use session::{GameSession, GuessReport, Outcome};
pub use stats::Statistics;
