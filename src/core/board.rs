//! Turn tracking for the 6x5 grid
//!
//! The board holds the letters typed into the open row plus every locked row.
//! It knows nothing about the target; the session decides when a row may lock.

use super::word::WORD_LENGTH;
use super::{Evaluation, Word};

/// Maximum number of guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// A submitted, evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedRow {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Grid state: locked rows plus the row being typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: Vec<LockedRow>,
    pending: Vec<u8>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the open row (0-6; 6 means every attempt is used)
    #[inline]
    #[must_use]
    pub fn row(&self) -> usize {
        self.rows.len()
    }

    /// Index of the next column to fill (0-5)
    #[inline]
    #[must_use]
    pub fn column(&self) -> usize {
        self.pending.len()
    }

    /// Check if all six rows are locked
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.rows.len() >= MAX_ATTEMPTS
    }

    /// Locked rows, oldest first
    #[must_use]
    pub fn rows(&self) -> &[LockedRow] {
        &self.rows
    }

    /// Letters typed into the open row so far
    #[must_use]
    pub fn pending(&self) -> &str {
        // Only ASCII uppercase letters are ever pushed
        std::str::from_utf8(&self.pending).unwrap_or_default()
    }

    /// Append a letter to the open row
    ///
    /// Returns `false` without changing anything if the row already has five
    /// letters, the board is full, or `letter` is not A-Z.
    pub fn insert_letter(&mut self, letter: char) -> bool {
        if self.pending.len() >= WORD_LENGTH || self.is_full() || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.pending.push(letter.to_ascii_uppercase() as u8);
        true
    }

    /// Retract the last letter of the open row
    ///
    /// Returns `false` if the row is empty or the board is full.
    pub fn delete_letter(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.pending.pop().is_some()
    }

    /// The typed word, only once all five columns are filled
    #[must_use]
    pub fn current_guess(&self) -> Option<&str> {
        (self.pending.len() == WORD_LENGTH).then(|| self.pending())
    }

    /// Lock the open row with its evaluation and move to the next row
    ///
    /// Does nothing once all six rows are locked.
    pub fn advance_row(&mut self, guess: Word, evaluation: Evaluation) {
        if self.is_full() {
            return;
        }
        self.rows.push(LockedRow { guess, evaluation });
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn type_word(board: &mut Board, word: &str) {
        for ch in word.chars() {
            board.insert_letter(ch);
        }
    }

    fn lock(board: &mut Board, word: &str) {
        let guess = Word::new(word).unwrap();
        let evaluation = evaluate(&guess, &Word::new("apple").unwrap());
        board.advance_row(guess, evaluation);
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.row(), 0);
        assert_eq!(board.column(), 0);
        assert!(board.rows().is_empty());
        assert_eq!(board.current_guess(), None);
    }

    #[test]
    fn insert_advances_column_and_uppercases() {
        let mut board = Board::new();
        assert!(board.insert_letter('c'));
        assert!(board.insert_letter('R'));
        assert_eq!(board.column(), 2);
        assert_eq!(board.pending(), "CR");
    }

    #[test]
    fn insert_ignored_when_row_full() {
        let mut board = Board::new();
        type_word(&mut board, "crane");
        assert!(!board.insert_letter('s'));
        assert_eq!(board.column(), 5);
        assert_eq!(board.pending(), "CRANE");
    }

    #[test]
    fn insert_rejects_non_letters() {
        let mut board = Board::new();
        assert!(!board.insert_letter('3'));
        assert!(!board.insert_letter(' '));
        assert_eq!(board.column(), 0);
    }

    #[test]
    fn delete_retracts_last_letter() {
        let mut board = Board::new();
        type_word(&mut board, "cra");
        assert!(board.delete_letter());
        assert_eq!(board.pending(), "CR");
        assert_eq!(board.column(), 2);
    }

    #[test]
    fn delete_on_empty_row_is_noop() {
        let mut board = Board::new();
        assert!(!board.delete_letter());
        assert_eq!(board.column(), 0);
    }

    #[test]
    fn current_guess_only_when_complete() {
        let mut board = Board::new();
        type_word(&mut board, "cran");
        assert_eq!(board.current_guess(), None);
        board.insert_letter('e');
        assert_eq!(board.current_guess(), Some("CRANE"));
    }

    #[test]
    fn advance_row_locks_and_resets_column() {
        let mut board = Board::new();
        type_word(&mut board, "crane");
        lock(&mut board, "crane");

        assert_eq!(board.row(), 1);
        assert_eq!(board.column(), 0);
        assert_eq!(board.rows()[0].guess.text(), "CRANE");
        assert_eq!(board.pending(), "");
    }

    #[test]
    fn full_board_refuses_input() {
        let mut board = Board::new();
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut board, "crane");
            lock(&mut board, "crane");
        }

        assert!(board.is_full());
        assert_eq!(board.row(), MAX_ATTEMPTS);
        assert!(!board.insert_letter('a'));
        assert!(!board.delete_letter());

        // A seventh lock is ignored
        lock(&mut board, "crane");
        assert_eq!(board.row(), MAX_ATTEMPTS);
    }
}
