//! Daily puzzle lookup

use crate::core::Word;
use crate::game::{WordListError, daily_secret, puzzle_number};
use chrono::NaiveDate;

/// The puzzle scheduled for a date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    pub date: NaiveDate,
    pub number: i64,
    pub secret: Word,
}

/// Look up the puzzle for `date`
///
/// # Errors
///
/// Returns `WordListError::Empty` if `answers` is empty.
pub fn daily_puzzle(answers: &[Word], date: NaiveDate) -> Result<DailyPuzzle, WordListError> {
    Ok(DailyPuzzle {
        date,
        number: puzzle_number(date),
        secret: daily_secret(answers, date)?.clone(),
    })
}
