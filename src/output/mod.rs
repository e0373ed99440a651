//! Terminal output formatting
//!
//! Display utilities for the text-mode game and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_daily, print_feedback, print_keyboard, print_outcome};
