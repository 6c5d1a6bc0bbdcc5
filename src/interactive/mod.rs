//! Interactive TUI
//!
//! Playable board with an on-screen keyboard, built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{
    Action, App, InputMode, Message, MessageStyle, NOTIFICATION_DURATION, Notification,
    SHAKE_DURATION, run_tui,
};
