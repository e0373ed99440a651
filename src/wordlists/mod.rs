//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, a loader for custom
//! lists, and the [`Dictionary`] used to accept or reject guesses.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
