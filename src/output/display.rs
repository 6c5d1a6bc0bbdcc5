//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, keyboard_lines, share_grid};
use crate::core::{Board, Evaluation, KeyboardState, LetterStatus, MAX_ATTEMPTS, Word};
use crate::game::{Outcome, Statistics};
use colored::Colorize;

/// Print the feedback for a single guess against a target
pub fn print_evaluation(guess: &Word, target: &Word, evaluation: &Evaluation) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_yellow().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(guess, evaluation));
    println!("  {}", evaluation.to_emoji());
    println!(
        "\n  {} correct, {} present, {} absent",
        evaluation.count(LetterStatus::Correct).to_string().green(),
        evaluation.count(LetterStatus::Present).to_string().yellow(),
        evaluation.count(LetterStatus::Absent),
    );
}

/// Print the locked rows and the keyboard
pub fn print_board(board: &Board, keyboard: &KeyboardState) {
    println!();
    for (i, row) in board.rows().iter().enumerate() {
        println!(
            "  {} {}",
            (i + 1).to_string().bright_black(),
            colored_row(&row.guess, &row.evaluation)
        );
    }
    for i in board.row()..MAX_ATTEMPTS {
        println!("  {} {}", (i + 1).to_string().bright_black(), " _ ".repeat(5).trim_end());
    }

    println!();
    for line in keyboard_lines(keyboard) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_outcome(outcome: Outcome, board: &Board, target: &Word) {
    match outcome {
        Outcome::InProgress => {}
        Outcome::Won => {
            println!("\n{}", "═".repeat(50).bright_cyan());
            println!(
                "{}",
                format!("    🎉  You win in {}!  🎉", guesses_label(board.row()))
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(50).bright_cyan());
            println!("\n{}\n", share_grid(board.rows(), true));
        }
        Outcome::Lost => {
            println!("\n{}", "═".repeat(50).bright_cyan());
            println!(
                "{}",
                format!("    You lose. Word: {}", target.text()).red().bold()
            );
            println!("{}", "═".repeat(50).bright_cyan());
            println!("\n{}\n", share_grid(board.rows(), false));
        }
    }
}

/// Print win rate, streaks and the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:      {}", stats.total_games);
    println!("   Win rate:    {:.0}%", stats.win_rate());
    println!(
        "   Streak:      {} (best {})",
        stats.current_streak, stats.max_streak
    );

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[guesses];
        let bar = create_progress_bar(count as f64, most as f64, 20);
        println!("   {guesses}: {} {count}", bar.green());
    }
    println!();
}

fn guesses_label(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}
