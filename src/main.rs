//! Wordle - CLI
//!
//! Daily Wordle with TUI and text modes, plus one-shot scoring and puzzle
//! lookup commands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use wordle_game::{
    commands::{check_guess, daily_puzzle, run_simple},
    core::Word,
    game::{SecretSource, local_today},
    logging::{self, LogConfig},
    output::{print_check_result, print_daily},
    wordlists::{ANSWERS, Dictionary, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess dictionary: 'all' (default), 'answers' (answer words only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// How the secret is chosen
    #[arg(short, long, global = true, value_enum, default_value_t = Mode::Daily)]
    mode: Mode,

    /// Play the daily puzzle of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Play against a specific word
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Log game flow at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode without TUI
    Simple,

    /// Score a guess against a secret
    Check {
        /// The word being guessed at
        answer: String,

        /// The guessed word
        guess: String,
    },

    /// Show the daily puzzle number
    Daily {
        /// Also print the secret word
        #[arg(long)]
        reveal: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Same word for everyone on a given date
    Daily,
    /// Uniform random word
    Random,
}

fn secret_source(cli: &Cli) -> Result<SecretSource> {
    if let Some(text) = &cli.secret {
        let word = Word::new(text.as_str()).context("Invalid --secret")?;
        return Ok(SecretSource::Fixed(word));
    }

    Ok(match cli.mode {
        Mode::Daily => SecretSource::Daily(cli.date.unwrap_or_else(local_today)),
        Mode::Random => SecretSource::Random,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    logging::init(&LogConfig {
        verbose: cli.verbose,
        log_file: cli.log_file.as_deref(),
        interactive: matches!(command, Commands::Play),
    })?;

    let answers = words_from_slice(ANSWERS);
    let mut dictionary = Dictionary::from_mode(&cli.wordlist, &answers)
        .with_context(|| format!("Failed to load word list from {}", cli.wordlist))?;
    info!(
        answers = answers.len(),
        dictionary = dictionary.len(),
        "word lists loaded"
    );

    let source = secret_source(&cli)?;
    source.admit_into(&mut dictionary);

    match command {
        Commands::Play => run_play_command(&source, &answers, &dictionary),
        Commands::Simple => run_simple(&answers, &dictionary, &source),
        Commands::Check { answer, guess } => run_check_command(&answer, &guess),
        Commands::Daily { reveal } => {
            run_daily_command(cli.date.unwrap_or_else(local_today), reveal, &answers)
        }
    }
}

fn run_check_command(answer: &str, guess: &str) -> Result<()> {
    let result = check_guess(answer, guess)?;
    print_check_result(&result.secret, &result.guess, &result.feedback);
    Ok(())
}

fn run_daily_command(date: NaiveDate, reveal: bool, answers: &[Word]) -> Result<()> {
    let puzzle = daily_puzzle(answers, date)?;
    print_daily(puzzle.date, puzzle.number, reveal.then_some(&puzzle.secret));
    Ok(())
}

fn run_play_command(
    source: &SecretSource,
    answers: &[Word],
    dictionary: &Dictionary,
) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let secret = source.select(answers)?;
    let app = App::new(secret, answers, dictionary);
    run_tui(app)
}
