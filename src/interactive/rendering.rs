//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterStatus, MAX_ATTEMPTS, QWERTY_ROWS, WORD_LENGTH};
use crate::game::Outcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(1),  // Notification
            Constraint::Min(14),    // Board + side panel
            Constraint::Length(5),  // Keyboard
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_notification(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Messages and stats
        ])
        .split(chunks[2]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Tile colors for a status; `None` is an untouched key or a pending letter
#[must_use]
pub fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_notification(f: &mut Frame, app: &App, area: Rect) {
    let text = match (app.input_mode, &app.notification) {
        (InputMode::Checking, _) => "Checking...",
        (_, Some(notification)) => notification.text.as_str(),
        (_, None) => "",
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(paragraph, area);
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

/// One line per board row: locked rows, the open row, then empty rows
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let board = app.session.board();
    let won = app.session.outcome() == Outcome::Won;
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for (i, row) in board.rows().iter().enumerate() {
        let winning_row = won && i + 1 == board.rows().len();
        let spans: Vec<Span> = row
            .guess
            .text()
            .chars()
            .zip(row.evaluation.statuses())
            .flat_map(|(letter, &status)| {
                let mut style = status_style(Some(status));
                if winning_row {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                tile(letter, style)
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if !board.is_full() && !app.session.outcome().is_over() {
        let pending_style = if app.is_shaking() {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            status_style(None)
        };

        let typed: Vec<char> = board.pending().chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                typed.get(i).map_or_else(
                    || tile('_', Style::default().fg(Color::DarkGray)),
                    |&letter| tile(letter, pending_style),
                )
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    while lines.len() < MAX_ATTEMPTS * 2 {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| tile('_', Style::default().fg(Color::DarkGray)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Guess {}/{MAX_ATTEMPTS} ",
                    (app.session.attempts() + 1).min(MAX_ATTEMPTS)
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Statistics
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![Line::from(format!(
        "Played {} | Win {:.0}% | Streak {} (best {})",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    ))];

    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[guesses];
        let width = count * 16 / most;
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses} ")),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = QWERTY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| tile(letter, status_style(keyboard.status(letter))))
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Typing => "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit",
        InputMode::Checking => "Checking word...",
        InputMode::GameOver => "n/Enter: New Game | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, Services};
    use crate::core::Word;
    use crate::game::GameSession;
    use crate::services::{FixedWordSource, WordListValidator};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let target = Word::new("apple").unwrap();
        let services = Services {
            source: Box::new(FixedWordSource::new(target.clone())),
            validator: Box::new(WordListValidator::embedded()),
        };
        App::new(GameSession::new(target), services, GameConfig::default())
    }

    fn rendered_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn status_styles_differ() {
        assert_eq!(
            status_style(Some(LetterStatus::Correct)).bg,
            Some(Color::Green)
        );
        assert_eq!(
            status_style(Some(LetterStatus::Present)).bg,
            Some(Color::Yellow)
        );
        assert_eq!(status_style(None).bg, None);
    }

    #[test]
    fn board_has_six_rows() {
        let app = app();
        let lines = board_lines(&app);
        assert_eq!(lines.len(), MAX_ATTEMPTS * 2);
    }

    #[test]
    fn renders_typed_letters_and_notification() {
        let mut app = app();
        for c in "CRA".chars() {
            app.session.insert_letter(c);
        }
        app.notify("Not enough letters");

        let text = rendered_text(&app);
        assert!(text.contains("WORDLE"));
        assert!(text.contains(" C   R   A "));
        assert!(text.contains("Not enough letters"));
        assert!(text.contains("Guess 1/6"));
    }

    #[test]
    fn checking_shown_over_notification() {
        let mut app = app();
        app.notify("Invalid word");
        app.input_mode = InputMode::Checking;

        let text = rendered_text(&app);
        assert!(text.contains("Checking..."));
        assert!(!text.contains("Invalid word"));
    }
}
