//! Guess evaluation
//!
//! Compares a guess against the target and produces one `LetterStatus` per position,
//! following Wordle's rules for repeated letters: a letter is never marked
//! correct or present more times than it occurs in the target.

use super::word::WORD_LENGTH;
use super::{LetterStatus, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterStatus; WORD_LENGTH]);

impl Evaluation {
    /// All greens (winning guess)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Wrap raw statuses
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Evaluation;
    ///
    /// let e: Evaluation = "GY-GY".parse().unwrap();
    /// assert_eq!(e.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl FromStr for Evaluation {
    type Err = String;

    /// Parse a pattern like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let statuses: Vec<LetterStatus> = s
            .chars()
            .map(LetterStatus::from_symbol)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid pattern string: {s}"))?;

        let statuses: [LetterStatus; WORD_LENGTH] = statuses
            .try_into()
            .map_err(|_| format!("Pattern must have 5 symbols: {s}"))?;

        Ok(Self(statuses))
    }
}

/// Evaluate `guess` against `target`
///
/// # Algorithm
/// 1. Count every letter of the target
/// 2. First pass: mark exact position matches correct and consume their count
/// 3. Second pass: mark remaining letters present while the count lasts, absent otherwise
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, LetterStatus::*, Word};
///
/// let target = Word::new("apple").unwrap();
/// let guess = Word::new("alert").unwrap();
///
/// let evaluation = evaluate(&guess, &target);
/// assert_eq!(evaluation.statuses(), &[Correct, Present, Present, Absent, Absent]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Evaluation {
    let mut result = [LetterStatus::Absent; WORD_LENGTH];
    let mut available = target.letter_counts();

    let guess_letters = guess.letters();
    let target_letters = target.letters();

    // First pass: exact matches
    for (i, status) in result.iter_mut().enumerate() {
        if guess_letters[i] == target_letters[i] {
            *status = LetterStatus::Correct;
            if let Some(count) = available.get_mut(&guess_letters[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters from whatever is left
    for (i, status) in result.iter_mut().enumerate() {
        if *status == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&guess_letters[i])
            && *count > 0
        {
            *status = LetterStatus::Present;
            *count -= 1;
        }
    }

    Evaluation(result)
}
