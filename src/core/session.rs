//! One play-through of a puzzle
//!
//! A session holds the secret and the attempts made so far. Status queries
//! are derived from those two fields on demand.

use super::{Feedback, Word, score};

/// Maximum number of attempts per session
pub const MAX_ATTEMPTS: usize = 6;

/// Secret word plus the ordered, append-only list of attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret: Word,
    attempts: Vec<Word>,
}

impl GameSession {
    /// Start a session for `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GameSession, Word};
    ///
    /// let mut session = GameSession::new(Word::new("apple").unwrap());
    /// assert!(session.can_attempt());
    ///
    /// session.record_attempt(Word::new("pears").unwrap());
    /// assert_eq!(session.remaining_attempts(), 5);
    ///
    /// session.record_attempt(Word::new("apple").unwrap());
    /// assert!(session.is_solved());
    /// assert!(!session.can_attempt());
    /// ```
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Attempts in submission order
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Word] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    /// Append a guess
    ///
    /// No dictionary or game-over checks happen here; callers must consult
    /// [`can_attempt`](Self::can_attempt) first.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the session is already over. Release builds
    /// append the attempt anyway.
    pub fn record_attempt(&mut self, guess: Word) {
        debug_assert!(
            self.can_attempt(),
            "attempt recorded after the session ended"
        );
        self.attempts.push(guess);
    }

    /// Score `guess` against the secret without touching the session
    #[must_use]
    pub fn evaluate(&self, guess: &Word) -> Feedback {
        score(&self.secret, guess)
    }

    /// Feedback for every recorded attempt, in order
    #[must_use]
    pub fn score_all(&self) -> Vec<Feedback> {
        self.attempts.iter().map(|a| self.evaluate(a)).collect()
    }

    /// Last attempt equals the secret
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.attempts.last() == Some(&self.secret)
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    #[must_use]
    pub fn can_attempt(&self) -> bool {
        self.remaining_attempts() > 0 && !self.is_solved()
    }

    /// Solved or out of attempts
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.can_attempt()
    }
}
