//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::core::{MAX_ATTEMPTS, Word};
use crate::game::{Game, SecretSource};
use crate::output::{print_feedback, print_keyboard, print_outcome};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tracing::info;

/// Run the simple interactive CLI mode
///
/// The first game uses `source`; replays pick a random answer so the player
/// is not handed the daily word again.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// secret can be selected from `answers`.
pub fn run_simple(answers: &[Word], dictionary: &Dictionary, source: &SecretSource) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Text Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter word in {MAX_ATTEMPTS} tries.");
    println!("  - {} letter is in the right spot", " G ".black().on_green());
    println!("  - {} letter is in the word elsewhere", " Y ".black().on_yellow());
    println!("  - {} letter is not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'keys' to show the keyboard, 'quit' to exit\n");

    let mut source = source.clone();
    let mut games_played = 0usize;

    loop {
        let secret = source.select(answers)?;
        let mut game = Game::new(secret, dictionary);
        games_played += 1;
        info!(game = games_played, "text-mode game started");

        while !game.is_over() {
            let turn = game.session().attempt_count() + 1;
            let Some(input) = get_user_input(&format!("Guess {turn}/{MAX_ATTEMPTS}"))? else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "keys" | "k" => print_keyboard(game.keyboard()),
                _ => match game.submit(&input) {
                    Ok(feedback) => {
                        if let Some((word, _)) = game.rows().last() {
                            print_feedback(
                                turn,
                                word,
                                &feedback,
                                game.session().remaining_attempts(),
                            );
                        }
                    }
                    Err(err) => println!("  {}", format!("❌ {err}").red()),
                },
            }
        }

        if let Some(outcome) = game.outcome() {
            print_outcome(&outcome);
        }

        match get_user_input("Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                source = SecretSource::Random;
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
