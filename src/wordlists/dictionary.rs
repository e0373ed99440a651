//! Guess dictionary
//!
//! The set of words a player may submit. Lookups are hash-based since every
//! submitted guess is checked against it.

use super::{
    ALLOWED, ANSWERS,
    loader::{load_from_file, words_from_slice},
};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;

/// Set of legal guesses
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Embedded allowed list plus all answers
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.contains(&Word::new("apple").unwrap()));
    /// assert!(!dictionary.contains(&Word::new("qzxjv").unwrap()));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        let mut dictionary = Self::new(words_from_slice(ALLOWED));
        dictionary.extend(words_from_slice(ANSWERS));
        dictionary
    }

    /// Build the guess dictionary selected by a word-list mode
    ///
    /// - `"all"`: the embedded allowed list
    /// - `"answers"`: `answers` only
    /// - anything else: a file path, one word per line
    ///
    /// `answers` are merged into every result so each secret stays guessable.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a word-list file cannot be read.
    pub fn from_mode(mode: &str, answers: &[Word]) -> io::Result<Self> {
        let mut dictionary = match mode {
            "all" => Self::embedded(),
            "answers" => Self::default(),
            path => Self::new(load_from_file(path)?),
        };
        dictionary.extend(answers.iter().cloned());
        Ok(dictionary)
    }

    /// Add more words; duplicates are ignored
    pub fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        self.words.extend(words);
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
