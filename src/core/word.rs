//! Wordle word representation
//!
//! A Word is a validated, uppercase, 5-letter ASCII word. Holding a `Word`
//! means the fixed-length precondition of the scorer is already met.

use std::fmt;
use std::str::FromStr;

/// Number of letters in every secret and guess
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is uppercased before validation, so `"apple"` and `"APPLE"`
    /// produce equal words.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters (checked first)
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("APPLE").unwrap();
        assert_eq!(word.text(), "APPLE");
        assert_eq!(word.chars(), b"APPLE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.text(), "APPLE");

        let word2 = Word::new("aPpLe").unwrap();
        assert_eq!(word2.text(), "APPLE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("appl3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("appl "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("appl!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_non_ascii() {
        assert_eq!(Word::new("café!"), Err(WordError::NonAscii));
    }

    #[test]
    fn length_is_counted_in_characters_before_ascii_check() {
        assert_eq!(Word::new("héllos"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new("héllo"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("alloy").unwrap();
        assert_eq!(word.char_at(0), b'A');
        assert_eq!(word.char_at(1), b'L');
        assert_eq!(word.char_at(2), b'L');
        assert_eq!(word.char_at(3), b'O');
        assert_eq!(word.char_at(4), b'Y');
    }

    #[test]
    fn word_parse() {
        let word: Word = "llama".parse().unwrap();
        assert_eq!(word.text(), "LLAMA");
        assert!("lla".parse::<Word>().is_err());
    }

    #[test]
    fn word_display() {
        let word = Word::new("pears").unwrap();
        assert_eq!(format!("{word}"), "PEARS");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("apple").unwrap();
        let word2 = Word::new("APPLE").unwrap();
        let word3 = Word::new("pears").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
