//! Game glue around the core
//!
//! Input validation, keyboard coloring, and secret selection. These are the
//! pieces an interface needs on top of [`crate::core::GameSession`].

mod keyboard;
mod play;
mod secret;

pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use play::{Game, GameOutcome, GuessError};
pub use secret::{
    SHUFFLE_SEED, SecretSource, WordListError, daily_secret, local_today, puzzle_number,
    random_secret,
};
