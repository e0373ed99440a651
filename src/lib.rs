//! Wordle Game
//!
//! A Wordle clone with exact duplicate-letter scoring, daily puzzles, and
//! both a TUI and a plain text mode.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GameSession, Word};
//!
//! let mut session = GameSession::new(Word::new("alloy").unwrap());
//! let guess = Word::new("llama").unwrap();
//!
//! let feedback = session.evaluate(&guess);
//! session.record_attempt(guess);
//!
//! assert_eq!(feedback.to_emoji(), "🟨🟩🟨⬜⬜");
//! assert_eq!(session.remaining_attempts(), 5);
//! ```

// Core domain types
pub mod core;

// Validation, keyboard, and secret selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;
