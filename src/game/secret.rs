//! Secret word selection
//!
//! Daily puzzles walk a fixed shuffle of the answer list, one word per day,
//! so every player sees the same word on the same date and no word repeats
//! until the list is exhausted. Random mode picks uniformly instead.

use crate::core::Word;
use crate::wordlists::Dictionary;
use chrono::{Datelike, Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fmt;

/// Seed for the daily shuffle; changing it reorders every future puzzle
pub const SHUFFLE_SEED: u64 = 0x5EED_0F_D1C7;

/// Days from 0001-01-01 (day 1) to 2025-01-01, the date of puzzle 0
const EPOCH_DAYS_FROM_CE: i32 = 739_252;

/// Error type for word list problems
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Answer list contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {}

/// Where the secret for a new game comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Puzzle of the given day
    Daily(NaiveDate),
    /// Uniform pick from the answers
    Random,
    /// Caller-supplied word
    Fixed(Word),
}

impl SecretSource {
    /// Daily puzzle for the local date
    #[must_use]
    pub fn today() -> Self {
        Self::Daily(local_today())
    }

    /// Make sure the secret this source yields can be guessed
    ///
    /// Daily and random secrets come from the answer list, which every
    /// dictionary already holds. A fixed secret may not be a listed word, so it
    /// is added.
    pub fn admit_into(&self, dictionary: &mut Dictionary) {
        if let Self::Fixed(word) = self
            && !dictionary.contains(word)
        {
            dictionary.extend([word.clone()]);
        }
    }

    /// Resolve to a concrete secret
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if a daily or random pick is requested
    /// from an empty answer list.
    pub fn select(&self, answers: &[Word]) -> Result<Word, WordListError> {
        match self {
            Self::Daily(date) => daily_secret(answers, *date).cloned(),
            Self::Random => random_secret(answers).cloned(),
            Self::Fixed(word) => Ok(word.clone()),
        }
    }
}

/// Current date in the local time zone
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Puzzle number for `date`; negative before the epoch
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_game::game::puzzle_number;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 11).unwrap();
/// assert_eq!(puzzle_number(date), 10);
/// ```
#[must_use]
pub fn puzzle_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(EPOCH_DAYS_FROM_CE)
}

/// Secret for `date`
///
/// # Errors
///
/// Returns `WordListError::Empty` if `answers` is empty.
pub fn daily_secret(answers: &[Word], date: NaiveDate) -> Result<&Word, WordListError> {
    if answers.is_empty() {
        return Err(WordListError::Empty);
    }

    let mut order: Vec<&Word> = answers.iter().collect();
    order.shuffle(&mut StdRng::seed_from_u64(SHUFFLE_SEED));

    let len = i64::try_from(order.len()).map_err(|_| WordListError::Empty)?;
    let index = puzzle_number(date).rem_euclid(len) as usize;
    Ok(order[index])
}

/// Uniformly random secret
///
/// # Errors
///
/// Returns `WordListError::Empty` if `answers` is empty.
pub fn random_secret(answers: &[Word]) -> Result<&Word, WordListError> {
    answers.choose(&mut rand::rng()).ok_or(WordListError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ANSWERS, loader::words_from_slice};
    use pretty_assertions::assert_eq;
    use rustc_hash::FxHashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today_is_daily_for_local_date() {
        assert_eq!(SecretSource::today(), SecretSource::Daily(local_today()));
    }

    #[test]
    fn fixed_secret_outside_dictionary_becomes_solvable() {
        use crate::game::Game;

        let mut dictionary = Dictionary::embedded();
        let secret = Word::new("qzxjv").unwrap();
        assert!(!dictionary.contains(&secret));

        let source = SecretSource::Fixed(secret.clone());
        source.admit_into(&mut dictionary);
        assert!(dictionary.contains(&secret));

        let mut game = Game::new(source.select(&[]).unwrap(), &dictionary);
        assert!(game.submit("qzxjv").unwrap().is_perfect());
        assert!(game.outcome().unwrap().solved);
    }

    #[test]
    fn daily_and_random_sources_leave_dictionary_alone() {
        let mut dictionary = Dictionary::embedded();
        let before = dictionary.len();

        SecretSource::Daily(date(2025, 3, 1)).admit_into(&mut dictionary);
        SecretSource::Random.admit_into(&mut dictionary);

        assert_eq!(dictionary.len(), before);
    }

    #[test]
    fn puzzle_numbers_count_days_from_epoch() {
        assert_eq!(puzzle_number(date(2025, 1, 1)), 0);
        assert_eq!(puzzle_number(date(2025, 1, 2)), 1);
        assert_eq!(puzzle_number(date(2024, 12, 31)), -1);
        assert_eq!(puzzle_number(date(2026, 1, 1)), 365);
    }

    #[test]
    fn daily_secret_is_stable_for_a_date() {
        let answers = words_from_slice(ANSWERS);
        let day = date(2026, 10, 16);

        let first = daily_secret(&answers, day).unwrap();
        let second = daily_secret(&answers, day).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn consecutive_days_cover_every_answer_once() {
        let answers = words_from_slice(ANSWERS);
        let start = date(2025, 1, 1);

        let seen: FxHashSet<&Word> = (0..answers.len())
            .map(|offset| {
                let day = start + chrono::Days::new(offset as u64);
                daily_secret(&answers, day).unwrap()
            })
            .collect();

        assert_eq!(seen.len(), answers.len());
    }

    #[test]
    fn cycle_repeats_after_list_length() {
        let answers = words_from_slice(ANSWERS);
        let start = date(2025, 3, 7);
        let later = start + chrono::Days::new(answers.len() as u64);

        assert_eq!(
            daily_secret(&answers, start).unwrap(),
            daily_secret(&answers, later).unwrap()
        );
    }

    #[test]
    fn dates_before_epoch_still_resolve() {
        let answers = words_from_slice(ANSWERS);
        assert!(daily_secret(&answers, date(1999, 12, 31)).is_ok());
    }

    #[test]
    fn empty_list_is_an_error() {
        assert_eq!(daily_secret(&[], date(2025, 1, 1)), Err(WordListError::Empty));
        assert_eq!(random_secret(&[]), Err(WordListError::Empty));
        assert_eq!(SecretSource::Random.select(&[]), Err(WordListError::Empty));
    }

    #[test]
    fn random_secret_comes_from_the_list() {
        let answers = words_from_slice(ANSWERS);
        for _ in 0..20 {
            let secret = random_secret(&answers).unwrap();
            assert!(answers.contains(secret));
        }
    }

    #[test]
    fn fixed_source_ignores_the_list() {
        let word = Word::new("zebra").unwrap();
        let source = SecretSource::Fixed(word.clone());
        assert_eq!(source.select(&[]), Ok(word));
    }

    #[test]
    fn daily_source_matches_daily_secret() {
        let answers = words_from_slice(ANSWERS);
        let day = date(2025, 6, 1);
        let selected = SecretSource::Daily(day).select(&answers).unwrap();
        assert_eq!(&selected, daily_secret(&answers, day).unwrap());
    }
}
