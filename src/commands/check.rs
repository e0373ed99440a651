//! Score a single guess against a given secret

use crate::core::{Feedback, Word, WordError, score};

/// Result of a one-off scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// No dictionary check is applied; any two 5-letter words can be compared.
///
/// # Errors
///
/// Returns a `WordError` if either input is not a 5-letter word.
///
/// # Examples
/// ```
/// use wordle_game::commands::check_guess;
///
/// let result = check_guess("alloy", "llama").unwrap();
/// assert_eq!(result.feedback.to_emoji(), "🟨🟩🟨⬜⬜");
/// ```
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = score(&secret, &guess);

    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}
