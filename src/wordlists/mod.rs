//! Word lists
//!
//! Provides the embedded word list used for offline play, plus loading of
//! custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
