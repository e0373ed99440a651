//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_row, keyboard_rows};
use crate::core::{Feedback, MAX_ATTEMPTS, Word};
use crate::game::{GameOutcome, KeyboardState};
use chrono::NaiveDate;
use colored::Colorize;

/// Print a scored guess with the attempts gauge
pub fn print_feedback(turn: usize, word: &Word, feedback: &Feedback, remaining: usize) {
    println!(
        "  {}. {}  {}",
        turn.to_string().bright_black(),
        feedback_row(word, feedback),
        format!(
            "[{}] {remaining} left",
            create_progress_bar(MAX_ATTEMPTS - remaining, MAX_ATTEMPTS, MAX_ATTEMPTS)
        )
        .bright_black()
    );
}

/// Print the keyboard colored by what is known about each letter
pub fn print_keyboard(keyboard: &KeyboardState) {
    println!();
    for row in keyboard_rows(keyboard) {
        println!("  {row}");
    }
    println!();
}

/// Print the end-of-game banner and share grid
pub fn print_outcome(outcome: &GameOutcome) {
    println!("\n{}", "═".repeat(60).bright_cyan());

    if outcome.solved {
        let headline = match outcome.attempts {
            1 => "🏆 Genius!",
            2 => "⭐ Magnificent!",
            3 => "💫 Impressive!",
            4 => "✨ Splendid!",
            5 => "👍 Great!",
            _ => "😅 Phew!",
        };
        println!("  {}", headline.bright_yellow().bold());
        println!(
            "  {}",
            format!(
                "Congratulations! You solved it in {} attempts!",
                outcome.attempts
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "  {}",
            format!("Game Over! The word was: {}", outcome.secret)
                .red()
                .bold()
        );
    }

    println!("  Score: {}", outcome.score.to_string().bright_cyan().bold());
    println!();
    for line in outcome.share_grid().lines() {
        println!("  {line}");
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the result of scoring a single guess
pub fn print_check_result(secret: &Word, guess: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.text().bright_yellow().bold(),
        guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", feedback_row(guess, feedback));
    println!("  {}\n", feedback.to_emoji());
    println!(
        "  {} in position, {} elsewhere in the word",
        feedback.count_correct().to_string().green(),
        feedback.count_present().to_string().yellow()
    );
}

/// Print the daily puzzle header
pub fn print_daily(date: NaiveDate, number: i64, secret: Option<&Word>) {
    println!(
        "{} {} ({date})",
        "Puzzle".bright_cyan().bold(),
        format!("#{number}").bright_yellow().bold()
    );
    if let Some(secret) = secret {
        println!("Secret: {}", secret.text().bright_white().bold());
    }
}
