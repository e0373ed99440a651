//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState, Word};
use crate::game::KeyboardState;
use colored::{ColoredString, Colorize};

/// Paint one letter as a tile for its state
#[must_use]
pub fn tile(letter: char, state: Option<LetterState>) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn feedback_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.states())
        .map(|(letter, state)| tile(letter, Some(state)).to_string())
        .collect()
}

/// Render the keyboard, one line per row, indented like a real keyboard
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    keyboard
        .rows()
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .iter()
                .map(|&(letter, state)| tile(letter, state).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
