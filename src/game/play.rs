//! Validated play on top of a [`GameSession`]
//!
//! The session itself accepts anything; this layer owns the checks a player
//! hits: game already over, wrong length, stray characters, unknown word.
//! A rejected guess never reaches the session.

use super::KeyboardState;
use crate::core::{Feedback, GameSession, MAX_ATTEMPTS, WORD_LENGTH, Word, WordError};
use crate::wordlists::Dictionary;
use std::fmt;
use tracing::{debug, info};

/// Why a submitted guess was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    GameOver,
    WrongLength(usize),
    InvalidCharacters,
    NotInWordList(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "Game is over!"),
            Self::WrongLength(_) => write!(f, "Word must be {WORD_LENGTH} letters!"),
            Self::InvalidCharacters => write!(f, "Only letters A-Z are allowed!"),
            Self::NotInWordList(word) => write!(f, "{word} is not in the word list!"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::WrongLength(len),
            WordError::NonAscii | WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub secret: Word,
    pub attempts: usize,
    /// Attempts used when solved, 0 when failed
    pub score: usize,
    pub solved: bool,
    pub rows: Vec<Feedback>,
}

impl GameOutcome {
    /// Emoji share text, e.g. "Wordle 3/6" followed by one row per attempt
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::Game;
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// let mut game = Game::new(Word::new("apple").unwrap(), &dictionary);
    /// game.submit("pears").unwrap();
    /// game.submit("apple").unwrap();
    ///
    /// let outcome = game.outcome().unwrap();
    /// assert_eq!(outcome.share_grid(), "Wordle 2/6\n🟨🟨🟨⬜⬜\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_grid(&self) -> String {
        let tally = if self.solved {
            self.attempts.to_string()
        } else {
            "X".to_string()
        };

        let mut lines = vec![format!("Wordle {tally}/{MAX_ATTEMPTS}")];
        lines.extend(self.rows.iter().map(Feedback::to_emoji));
        lines.join("\n")
    }
}

/// A session plus the dictionary and keyboard that surround it
#[derive(Debug, Clone)]
pub struct Game<'a> {
    session: GameSession,
    dictionary: &'a Dictionary,
    keyboard: KeyboardState,
    rows: Vec<(Word, Feedback)>,
}

impl<'a> Game<'a> {
    #[must_use]
    pub fn new(secret: Word, dictionary: &'a Dictionary) -> Self {
        debug!(secret = %secret, "new game");
        Self {
            session: GameSession::new(secret),
            dictionary,
            keyboard: KeyboardState::new(),
            rows: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    /// Validate, record, and score a guess
    ///
    /// Input is trimmed and uppercased first.
    ///
    /// # Errors
    ///
    /// Returns a `GuessError` without changing any state if the game is over
    /// or the guess is not a 5-letter word from the dictionary.
    pub fn submit(&mut self, raw: &str) -> Result<Feedback, GuessError> {
        if !self.session.can_attempt() {
            return Err(GuessError::GameOver);
        }

        let word = Word::new(raw.trim()).inspect_err(|err| {
            debug!(input = raw, error = %err, "guess rejected");
        })?;

        if !self.dictionary.contains(&word) {
            debug!(guess = %word, "guess not in word list");
            return Err(GuessError::NotInWordList(word.text().to_string()));
        }

        let feedback = self.session.evaluate(&word);
        self.session.record_attempt(word.clone());
        self.keyboard.apply(&feedback);
        debug!(
            guess = %word,
            pattern = %feedback.to_emoji(),
            remaining = self.session.remaining_attempts(),
            "guess recorded"
        );
        self.rows.push((word, feedback));

        if self.session.is_over() {
            info!(
                solved = self.session.is_solved(),
                attempts = self.session.attempt_count(),
                "game finished"
            );
        }

        Ok(feedback)
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn rows(&self) -> &[(Word, Feedback)] {
        &self.rows
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// Final summary, once the game has ended
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.session.is_over() {
            return None;
        }

        let solved = self.session.is_solved();
        let attempts = self.session.attempt_count();
        Some(GameOutcome {
            secret: self.session.secret().clone(),
            attempts,
            score: if solved { attempts } else { 0 },
            solved,
            rows: self.rows.iter().map(|(_, feedback)| *feedback).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use pretty_assertions::assert_eq;

    fn dictionary() -> Dictionary {
        Dictionary::embedded()
    }

    fn game<'a>(secret: &str, dictionary: &'a Dictionary) -> Game<'a> {
        Game::new(Word::new(secret).unwrap(), dictionary)
    }

    #[test]
    fn accepted_guess_is_recorded_and_scored() {
        let dictionary = dictionary();
        let mut game = game("alloy", &dictionary);

        let feedback = game.submit("llama").unwrap();

        assert_eq!(feedback.to_emoji(), "🟨🟩🟨⬜⬜");
        assert_eq!(game.session().attempt_count(), 1);
        assert_eq!(game.rows()[0].0.text(), "LLAMA");
        assert_eq!(game.keyboard().state_of('L'), Some(LetterState::Correct));
    }

    #[test]
    fn input_is_trimmed_and_uppercased() {
        let dictionary = dictionary();
        let mut game = game("apple", &dictionary);

        game.submit("  pears\n").unwrap();
        assert_eq!(game.session().attempts()[0].text(), "PEARS");
    }

    #[test]
    fn wrong_length_is_rejected_without_recording() {
        let dictionary = dictionary();
        let mut game = game("apple", &dictionary);

        assert_eq!(game.submit("app"), Err(GuessError::WrongLength(3)));
        assert_eq!(game.submit("apples"), Err(GuessError::WrongLength(6)));
        assert_eq!(game.submit("héllos"), Err(GuessError::WrongLength(6)));
        assert!(game.session().attempts().is_empty());
        assert_eq!(
            GuessError::WrongLength(3).to_string(),
            "Word must be 5 letters!"
        );
    }

    #[test]
    fn non_letters_are_rejected() {
        let dictionary = dictionary();
        let mut game = game("apple", &dictionary);

        assert_eq!(game.submit("ap9le"), Err(GuessError::InvalidCharacters));
        assert_eq!(game.submit("applé"), Err(GuessError::InvalidCharacters));
        assert!(game.rows().is_empty());
    }

    #[test]
    fn unknown_words_are_rejected() {
        let dictionary = dictionary();
        let mut game = game("apple", &dictionary);

        assert_eq!(
            game.submit("qzxjv"),
            Err(GuessError::NotInWordList("QZXJV".to_string()))
        );
        assert_eq!(game.session().remaining_attempts(), MAX_ATTEMPTS);
        assert_eq!(game.keyboard().state_of('Q'), None);
    }

    #[test]
    fn solved_game_refuses_more_guesses() {
        let dictionary = dictionary();
        let mut game = game("apple", &dictionary);

        assert!(game.submit("apple").unwrap().is_perfect());
        assert!(game.is_over());
        assert_eq!(game.submit("pears"), Err(GuessError::GameOver));
        assert_eq!(game.session().attempt_count(), 1);
    }

    #[test]
    fn outcome_absent_while_playing() {
        let dictionary = dictionary();
        let mut game = game("apple", &dictionary);
        assert!(game.outcome().is_none());

        game.submit("pears").unwrap();
        assert!(game.outcome().is_none());
    }

    #[test]
    fn outcome_scores_attempts_when_solved() {
        let dictionary = dictionary();
        let mut game = game("apple", &dictionary);
        game.submit("lemon").unwrap();
        game.submit("pears").unwrap();
        game.submit("apple").unwrap();

        let outcome = game.outcome().unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(outcome.score, 3);
        assert_eq!(outcome.secret.text(), "APPLE");
        assert_eq!(outcome.rows.len(), 3);
    }

    #[test]
    fn outcome_scores_zero_when_failed() {
        let dictionary = dictionary();
        let mut game = game("apple", &dictionary);
        for _ in 0..MAX_ATTEMPTS {
            game.submit("pears").unwrap();
        }

        let outcome = game.outcome().unwrap();
        assert!(!outcome.solved);
        assert_eq!(outcome.attempts, MAX_ATTEMPTS);
        assert_eq!(outcome.score, 0);
        assert!(outcome.share_grid().starts_with("Wordle X/6\n"));
        assert_eq!(game.submit("apple"), Err(GuessError::GameOver));
    }
}
