//! Keyboard-wide letter status
//!
//! Accumulates the strongest status ever seen for each letter across all guesses.

use super::{Evaluation, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// On-screen keyboard layout, top row first
pub const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Cumulative status for every letter guessed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one guess into the map
    ///
    /// Each letter keeps the maximum of its stored status and the new one, so
    /// a key never regresses from correct to present or absent.
    pub fn update(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, &status) in guess.letters().iter().zip(evaluation.statuses()) {
            self.statuses
                .entry(letter)
                .and_modify(|current| *current = (*current).max(status))
                .or_insert(status);
        }
    }

    /// Strongest status for `letter`, or `None` if it was never guessed
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.statuses
            .get(&(letter.to_ascii_uppercase() as u8))
            .copied()
    }

    /// Number of distinct letters guessed
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Letters and their statuses in alphabetical order
    #[must_use]
    pub fn entries(&self) -> Vec<(char, LetterStatus)> {
        let mut entries: Vec<(char, LetterStatus)> = self
            .statuses
            .iter()
            .map(|(&letter, &status)| (letter as char, status))
            .collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }
}
