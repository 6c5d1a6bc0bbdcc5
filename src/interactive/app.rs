//! TUI application state and logic

use crate::config::{GameConfig, Services};
use crate::game::{GameError, GameSession, GuessReport, Outcome, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::error;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a transient notification stays on screen
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(2000);

/// How long a rejected row is highlighted
pub const SHAKE_DURATION: Duration = Duration::from_millis(600);

/// Event poll interval; bounds how late an expired notification is cleared
const TICK_RATE: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub session: GameSession,
    pub services: Services,
    pub config: GameConfig,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub notification: Option<Notification>,
    /// Open row is highlighted as rejected until this instant
    pub shake_until: Option<Instant>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    /// A validity lookup is in flight; keys wait until it resolves
    Checking,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Auto-clearing message shown above the board
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub expires_at: Instant,
}

/// Work the event loop has to do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Submit,
    NewGame,
}

impl App {
    #[must_use]
    pub fn new(session: GameSession, services: Services, config: GameConfig) -> Self {
        Self {
            session,
            services,
            config,
            input_mode: InputMode::Typing,
            messages: vec![Message {
                text: "Guess the five-letter word in six tries.".to_string(),
                style: MessageStyle::Info,
            }],
            notification: None,
            shake_until: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Translate a key press into a state change or a pending action
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Action::None;
        }

        match self.input_mode {
            InputMode::Checking => Action::None,
            InputMode::GameOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.should_quit = true;
                    Action::None
                }
                KeyCode::Char('n' | 'N') | KeyCode::Enter => Action::NewGame,
                _ => Action::None,
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                    Action::None
                }
                KeyCode::Enter => Action::Submit,
                KeyCode::Backspace => {
                    self.session.delete_letter();
                    Action::None
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    self.session.insert_letter(c);
                    Action::None
                }
                _ => Action::None,
            },
        }
    }

    /// Submit the open row and react to the result
    pub async fn submit(&mut self) {
        self.input_mode = InputMode::Checking;
        let result = self
            .session
            .submit_guess(self.services.validator.as_ref())
            .await;
        self.input_mode = InputMode::Typing;

        match result {
            Ok(report) => self.apply_report(&report),
            Err(GameError::IncompleteGuess) => self.notify("Not enough letters"),
            Err(GameError::InvalidWord(_)) => {
                self.notify("Invalid word");
                self.shake_until = Some(Instant::now() + SHAKE_DURATION);
            }
            Err(GameError::GameOver) => self.input_mode = InputMode::GameOver,
        }
    }

    fn apply_report(&mut self, report: &GuessReport) {
        match report.outcome {
            Outcome::InProgress => {}
            Outcome::Won => {
                let attempts = self.session.attempts();
                self.stats.record(Outcome::Won, attempts);
                self.input_mode = InputMode::GameOver;

                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message("You win!", MessageStyle::Success);
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Lost => {
                self.stats.record(Outcome::Lost, self.session.attempts());
                self.input_mode = InputMode::GameOver;

                let target = report
                    .revealed_target
                    .clone()
                    .unwrap_or_else(|| self.session.target().clone());
                self.add_message(&format!("You lose. Word: {target}"), MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Replace the session with a fresh one
    pub async fn new_game(&mut self) {
        self.session =
            GameSession::start(self.services.source.as_ref(), &self.config.fallback_word).await;
        self.input_mode = InputMode::Typing;
        self.notification = None;
        self.shake_until = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Show a transient notification
    pub fn notify(&mut self, text: &str) {
        self.notification = Some(Notification {
            text: text.to_string(),
            expires_at: Instant::now() + NOTIFICATION_DURATION,
        });
    }

    /// Clear notifications and highlights that have expired by `now`
    pub fn tick(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.expires_at <= now) {
            self.notification = None;
        }
        if self.shake_until.is_some_and(|until| until <= now) {
            self.shake_until = None;
        }
    }

    #[must_use]
    pub fn is_shaking(&self) -> bool {
        self.shake_until.is_some()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("TUI exited with error: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match app.handle_key(key) {
                Action::None => {}
                Action::Submit => {
                    // Draw the pending state, then wait for the lookup before reading more keys
                    app.input_mode = InputMode::Checking;
                    terminal.draw(|f| super::rendering::ui(f, &app))?;
                    app.submit().await;
                }
                Action::NewGame => {
                    app.add_message("Picking a word...", MessageStyle::Info);
                    terminal.draw(|f| super::rendering::ui(f, &app))?;
                    app.new_game().await;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_ATTEMPTS, Word};
    use crate::services::{FixedWordSource, WordListValidator};
    use crate::wordlists::loader::words_from_slice;

    fn app(target: &str) -> App {
        let target = Word::new(target).unwrap();
        let services = Services {
            source: Box::new(FixedWordSource::new(Word::new("crane").unwrap())),
            validator: Box::new(WordListValidator::new(words_from_slice(&[
                "apple", "crane", "slate",
            ]))),
        };
        App::new(GameSession::new(target), services, GameConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_backspace() {
        let mut app = app("apple");
        type_word(&mut app, "cra");
        assert_eq!(app.session.board().pending(), "CRA");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.board().pending(), "CR");

        // Digits and punctuation are ignored
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.session.board().pending(), "CR");
    }

    #[test]
    fn enter_requests_submit() {
        let mut app = app("apple");
        assert_eq!(press(&mut app, KeyCode::Enter), Action::Submit);
    }

    #[test]
    fn keys_ignored_while_checking() {
        let mut app = app("apple");
        app.input_mode = InputMode::Checking;
        assert_eq!(press(&mut app, KeyCode::Enter), Action::None);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.session.board().pending(), "");
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app("apple");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn incomplete_guess_notifies() {
        let mut app = app("apple");
        type_word(&mut app, "cra");
        app.submit().await;

        assert_eq!(
            app.notification.as_ref().map(|n| n.text.as_str()),
            Some("Not enough letters")
        );
        assert!(!app.is_shaking());
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[tokio::test]
    async fn invalid_word_notifies_and_shakes() {
        let mut app = app("apple");
        type_word(&mut app, "xyzzy");
        app.submit().await;

        assert_eq!(
            app.notification.as_ref().map(|n| n.text.as_str()),
            Some("Invalid word")
        );
        assert!(app.is_shaking());
        assert_eq!(app.session.attempts(), 0);
    }

    #[tokio::test]
    async fn notifications_expire() {
        let mut app = app("apple");
        app.notify("Not enough letters");
        app.shake_until = Some(Instant::now() + SHAKE_DURATION);

        app.tick(Instant::now());
        assert!(app.notification.is_some());

        app.tick(Instant::now() + NOTIFICATION_DURATION);
        assert!(app.notification.is_none());
        assert!(!app.is_shaking());
    }

    #[tokio::test]
    async fn win_switches_to_game_over() {
        let mut app = app("apple");
        type_word(&mut app, "apple");
        app.submit().await;

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.messages.iter().any(|m| m.text == "You win!"));

        // Letters no longer land on the board
        assert_eq!(press(&mut app, KeyCode::Char('a')), Action::None);
        assert_eq!(press(&mut app, KeyCode::Char('n')), Action::NewGame);
    }

    #[tokio::test]
    async fn loss_reveals_target() {
        let mut app = app("apple");
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut app, "crane");
            app.submit().await;
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "You lose. Word: APPLE")
        );
    }

    #[tokio::test]
    async fn new_game_resets_session() {
        let mut app = app("apple");
        type_word(&mut app, "apple");
        app.submit().await;

        app.new_game().await;
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.session.attempts(), 0);
        assert_eq!(app.session.target().text(), "CRANE");
        assert_eq!(app.stats.total_games, 1);
    }
}
