//! Wordle - CLI
//!
//! Terminal Wordle with TUI and simple line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wordle_game::{
    commands::{evaluate_words, run_simple},
    config::{DEFAULT_FALLBACK_WORD, GameConfig},
    core::Word,
    game::GameSession,
    output::print_evaluation,
    services::{DEFAULT_DICTIONARY_URL, DEFAULT_RANDOM_WORD_URL},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pick targets and validate guesses from the built-in word list (no network)
    #[arg(long, global = true)]
    offline: bool,

    /// Validate guesses against a word list file (one word per line)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Play with a fixed target word
    #[arg(short, long, global = true)]
    target: Option<Word>,

    /// Target used when the random word service is unavailable
    #[arg(long, global = true, default_value = DEFAULT_FALLBACK_WORD)]
    fallback_word: Word,

    /// Random word service URL
    #[arg(long, global = true, default_value = DEFAULT_RANDOM_WORD_URL)]
    random_word_url: String,

    /// Dictionary service URL prefix (the word is appended)
    #[arg(long, global = true, default_value = DEFAULT_DICTIONARY_URL)]
    dictionary_url: String,

    /// Timeout in seconds for each network request
    #[arg(long, global = true, default_value = "5")]
    timeout_secs: u64,

    /// Write logs to this file (set RUST_LOG to choose the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type a whole guess per line)
    Simple,

    /// Show the feedback for a guess against a target
    Evaluate {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            offline: self.offline,
            dictionary: self.dictionary.clone(),
            target: self.target.clone(),
            fallback_word: self.fallback_word.clone(),
            random_word_url: self.random_word_url.clone(),
            dictionary_url: self.dictionary_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Initialize `env_logger`, optionally writing to a file instead of stderr
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config).await,
        Commands::Simple => run_simple_command(&config).await,
        Commands::Evaluate { guess, target } => run_evaluate_command(&guess, &target),
    }
}

fn run_evaluate_command(guess: &str, target: &str) -> Result<()> {
    let result = evaluate_words(guess, target)?;
    print_evaluation(&result.guess, &result.target, &result.evaluation);
    Ok(())
}

async fn run_simple_command(config: &GameConfig) -> Result<()> {
    let services = config.build_services()?;
    run_simple(config, &services).await
}

async fn run_play_command(config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let services = config.build_services()?;
    info!("Fetching first target word");
    let session = GameSession::start(services.source.as_ref(), &config.fallback_word).await;

    let app = App::new(session, services, config);
    run_tui(app).await
}
