//! Core domain types for Wordle
//!
//! This module contains the pure game kernel: words, guess evaluation, the
//! turn tracker and the keyboard aggregator. Nothing here performs I/O.

mod board;
mod evaluation;
mod keyboard;
mod status;
mod word;

pub use board::{Board, LockedRow, MAX_ATTEMPTS};
pub use evaluation::{Evaluation, evaluate};
pub use keyboard::{KeyboardState, QWERTY_ROWS};
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError};
