//! Formatting utilities for terminal output

use crate::core::{Evaluation, KeyboardState, LetterStatus, LockedRow, MAX_ATTEMPTS, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter tile by status
#[must_use]
pub fn colored_tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a guess as colored tiles
#[must_use]
pub fn colored_row(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .text()
        .chars()
        .zip(evaluation.statuses())
        .map(|(letter, &status)| colored_tile(letter, Some(status)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the keyboard as three colored rows
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    crate::core::QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys = row
                .chars()
                .map(|letter| colored_tile(letter, keyboard.status(letter)).to_string())
                .collect::<String>();
            // Stagger like a physical keyboard
            format!("{}{keys}", " ".repeat(i))
        })
        .collect()
}

/// Share-style summary: a header line then one emoji row per guess
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, Board, Word};
/// use wordle_game::output::formatters::share_grid;
///
/// let target = Word::new("apple").unwrap();
/// let guess = Word::new("apple").unwrap();
/// let mut board = Board::new();
/// board.advance_row(guess.clone(), evaluate(&guess, &target));
///
/// assert_eq!(share_grid(board.rows(), true), "Wordle 1/6\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(rows: &[LockedRow], won: bool) -> String {
    let score = if won {
        rows.len().to_string()
    } else {
        "X".to_string()
    };

    let mut lines = vec![format!("Wordle {score}/{MAX_ATTEMPTS}")];
    lines.extend(rows.iter().map(|row| row.evaluation.to_emoji()));
    lines.join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
