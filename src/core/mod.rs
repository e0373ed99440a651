//! Core domain types for Wordle
//!
//! This module contains the scoring routine and the session state that wraps
//! it. Nothing here performs I/O or returns errors beyond word validation:
//! guards on dictionary membership and game-over live in [`crate::game`].

mod feedback;
mod session;
mod word;

pub use feedback::{Feedback, LetterResult, LetterState, score};
pub use session::{GameSession, MAX_ATTEMPTS};
pub use word::{WORD_LENGTH, Word, WordError};
