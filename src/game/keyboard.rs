//! On-screen keyboard state
//!
//! Tracks the best-known state of every letter that has been guessed. Keys
//! only ever upgrade: once a letter is known to be correct somewhere, a later
//! gray or yellow sighting does not repaint it.

use crate::core::{Feedback, LetterState};
use rustc_hash::FxHashMap;

/// QWERTY rows as rendered by the interfaces
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Letter -> display state for every guessed letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<u8, LetterState>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scored guess into the key states
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{LetterState, Word, score};
    /// use wordle_game::game::KeyboardState;
    ///
    /// let secret = Word::new("alloy").unwrap();
    /// let mut keyboard = KeyboardState::new();
    /// keyboard.apply(&score(&secret, &Word::new("llama").unwrap()));
    ///
    /// assert_eq!(keyboard.state_of('L'), Some(LetterState::Correct));
    /// assert_eq!(keyboard.state_of('A'), Some(LetterState::Present));
    /// assert_eq!(keyboard.state_of('M'), Some(LetterState::Absent));
    /// assert_eq!(keyboard.state_of('Q'), None);
    /// ```
    pub fn apply(&mut self, feedback: &Feedback) {
        for result in feedback.results() {
            let Ok(letter) = u8::try_from(result.character) else {
                continue;
            };
            let state = result.state();
            self.keys
                .entry(letter)
                .and_modify(|current| *current = (*current).max(state))
                .or_insert(state);
        }
    }

    /// State of a letter, or `None` if it has not been guessed
    #[must_use]
    pub fn state_of(&self, letter: char) -> Option<LetterState> {
        let letter = u8::try_from(letter.to_ascii_uppercase()).ok()?;
        self.keys.get(&letter).copied()
    }

    /// Rows of `(letter, state)` pairs in keyboard order
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<(char, Option<LetterState>)>> {
        KEYBOARD_ROWS
            .iter()
            .map(|row| row.chars().map(|c| (c, self.state_of(c))).collect())
            .collect()
    }

    /// Forget every key, for a new game
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
