//! A single game: target word, board, keyboard and outcome

use super::GameError;
use crate::core::{Board, Evaluation, KeyboardState, MAX_ATTEMPTS, Word, evaluate};
use crate::services::{WordSource, WordValidator, choose_target};
use log::{debug, info};

/// Terminal state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Everything the presentation layer needs after an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub guess: Word,
    pub evaluation: Evaluation,
    pub keyboard: KeyboardState,
    pub outcome: Outcome,
    /// Only set on a loss, so the answer can be shown
    pub revealed_target: Option<Word>,
}

/// Session state for one target word
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    board: Board,
    keyboard: KeyboardState,
    outcome: Outcome,
}

impl GameSession {
    #[must_use]
    pub fn new(target: Word) -> Self {
        info!("New game started");
        debug!("Target word: {target}");
        Self {
            target,
            board: Board::new(),
            keyboard: KeyboardState::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Start a game with a target from `source`, or `fallback` if it fails
    pub async fn start(source: &dyn WordSource, fallback: &Word) -> Self {
        Self::new(choose_target(source, fallback).await)
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Number of guesses accepted so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.board.row()
    }

    /// Type a letter into the open row; ignored once the game is over
    pub fn insert_letter(&mut self, letter: char) -> bool {
        !self.outcome.is_over() && self.board.insert_letter(letter)
    }

    /// Remove the last typed letter; ignored once the game is over
    pub fn delete_letter(&mut self) -> bool {
        !self.outcome.is_over() && self.board.delete_letter()
    }

    /// Replace whatever is typed in the open row with `text`
    ///
    /// Letters past the fifth are dropped. Returns the number of letters typed.
    pub fn enter_word(&mut self, text: &str) -> usize {
        while self.delete_letter() {}
        text.chars().filter(|&ch| self.insert_letter(ch)).count()
    }

    /// Submit the open row as a guess
    ///
    /// The validity lookup is awaited before anything changes. Because this
    /// borrows the session mutably, a second submission cannot start while
    /// one is pending.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game already ended
    /// - `IncompleteGuess` if fewer than five letters are typed
    /// - `InvalidWord` if the validator rejects the word or the lookup fails
    ///
    /// None of these consume a row.
    pub async fn submit_guess(
        &mut self,
        validator: &dyn WordValidator,
    ) -> Result<GuessReport, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }

        let guess = self
            .board
            .current_guess()
            .and_then(|text| Word::new(text).ok())
            .ok_or(GameError::IncompleteGuess)?;

        if !validator.is_valid(&guess).await {
            return Err(GameError::InvalidWord(guess.text().to_string()));
        }

        let evaluation = evaluate(&guess, &self.target);
        debug!("Row {}: {guess} {evaluation}", self.board.row() + 1);

        self.keyboard.update(&guess, &evaluation);
        self.board.advance_row(guess.clone(), evaluation);

        if guess == self.target {
            self.outcome = Outcome::Won;
            info!("Won in {} guesses", self.attempts());
        } else if self.board.row() >= MAX_ATTEMPTS {
            self.outcome = Outcome::Lost;
            info!("Lost; the word was {}", self.target);
        }

        Ok(GuessReport {
            guess,
            evaluation,
            keyboard: self.keyboard.clone(),
            outcome: self.outcome,
            revealed_target: (self.outcome == Outcome::Lost).then(|| self.target.clone()),
        })
    }
}
