//! Errors reported to the player when a submission is refused

use thiserror::Error;

/// A guess submission that did not consume a row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough letters")]
    IncompleteGuess,
    #[error("{0} is not in the word list")]
    InvalidWord(String),
    #[error("The game is over")]
    GameOver,
}
