//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: type a whole guess per line.

use crate::config::{GameConfig, Services};
use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{GameError, GameSession, Outcome, Statistics};
use crate::output::{print_board, print_outcome, print_statistics};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// What the player asked for after a game ended
enum Next {
    Again,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub async fn run_simple(config: &GameConfig, services: &Services) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in six tries.");
    println!("  - {} letter is in the right spot", "green".green().bold());
    println!("  - {} letter is in the word elsewhere", "yellow".yellow().bold());
    println!("  - {} letter is not in the word\n", "gray".bright_black().bold());
    println!("Commands: 'quit' to exit, 'new' for a new game, 'stat' for statistics\n");

    let mut stats = Statistics::default();

    loop {
        let mut session = start_session(config, services).await;

        match play(&mut session, services, &mut stats).await? {
            Next::Again => {}
            Next::Quit => {
                print_statistics(&stats);
                println!("👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

async fn start_session(config: &GameConfig, services: &Services) -> GameSession {
    let pb = spinner("Picking a word...");
    let session = GameSession::start(services.source.as_ref(), &config.fallback_word).await;
    pb.finish_and_clear();
    println!("🔄 New game started!");
    session
}

/// Play one game to completion (or until the player bails out)
async fn play(
    session: &mut GameSession,
    services: &Services,
    stats: &mut Statistics,
) -> Result<Next> {
    loop {
        print_board(session.board(), session.keyboard());

        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", session.attempts() + 1);
        let Some(input) = get_user_input(&prompt)? else {
            return Ok(Next::Quit);
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Next::Quit),
            "new" | "n" => {
                if session.attempts() > 0 {
                    stats.record(Outcome::Lost, session.attempts());
                    println!("The word was {}", session.target().text().bold());
                }
                return Ok(Next::Again);
            }
            "stat" => {
                print_statistics(stats);
                continue;
            }
            _ => {}
        }

        if input.chars().count() > WORD_LENGTH {
            println!("{}", "Too many letters".yellow());
            continue;
        }

        session.enter_word(&input);

        let pb = spinner("Checking word...");
        let result = session.submit_guess(services.validator.as_ref()).await;
        pb.finish_and_clear();

        match result {
            Ok(report) if report.outcome.is_over() => {
                print_board(session.board(), session.keyboard());
                print_outcome(report.outcome, session.board(), session.target());
                stats.record(report.outcome, session.attempts());

                return match get_user_input("Play again? (yes/no)")?
                    .unwrap_or_default()
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => Ok(Next::Again),
                    _ => Ok(Next::Quit),
                };
            }
            Ok(_) => {}
            Err(GameError::InvalidWord(_)) => println!("{}", "Invalid word".yellow()),
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
