//! Wordle
//!
//! A terminal Wordle game: six attempts to guess a five-letter word, with
//! per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{evaluate, LetterStatus, Word};
//!
//! let target = Word::new("apple").unwrap();
//! let guess = Word::new("alert").unwrap();
//!
//! let evaluation = evaluate(&guess, &target);
//! assert_eq!(evaluation.statuses()[0], LetterStatus::Correct);
//! println!("{evaluation}");
//! ```

// Core domain types
pub mod core;

// Session orchestration
pub mod game;

// Random word and dictionary lookups
pub mod services;

// Word lists
pub mod wordlists;

// Command-line configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
