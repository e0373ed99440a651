//! Guess scoring
//!
//! Each letter of a guess is classified against the secret as:
//! - in position (green): same letter at the same index
//! - in word (yellow): letter occurs elsewhere in the secret
//! - absent (gray): neither
//!
//! Duplicate letters are accounted for with a pool of the secret's letters.
//! A letter of the secret can satisfy at most one letter of the guess.

use super::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    /// The guessed letter (uppercase)
    pub character: char,
    /// Letter occurs elsewhere in the secret and was not already claimed
    pub in_word: bool,
    /// Letter matches the secret at this index
    pub in_position: bool,
}

impl LetterResult {
    /// An absent letter; scoring flips the flags that apply
    #[must_use]
    pub const fn new(character: char) -> Self {
        Self {
            character,
            in_word: false,
            in_position: false,
        }
    }

    /// Collapse the two flags into a display state
    #[must_use]
    pub const fn state(self) -> LetterState {
        if self.in_position {
            LetterState::Correct
        } else if self.in_word {
            LetterState::Present
        } else {
            LetterState::Absent
        }
    }
}

/// Display state of a tile or keyboard key
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Scored guess: one result per letter, in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// Per-letter results
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Per-letter display states
    #[must_use]
    pub fn states(&self) -> [LetterState; WORD_LENGTH] {
        self.0.map(LetterResult::state)
    }

    /// Every letter is in position
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|r| r.in_position)
    }

    /// Number of green letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|r| r.in_position).count()
    }

    /// Number of yellow letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|r| r.in_word).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, score};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("pears").unwrap();
    /// assert_eq!(score(&secret, &guess).to_emoji(), "🟨🟨🟨⬜⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.state().emoji()).collect()
    }
}

/// Score `guess` against `secret`
///
/// # Algorithm
/// 1. Copy the secret's letters into a pool
/// 2. First pass: mark exact matches and void their pool slots
/// 3. Second pass: for each remaining letter, claim the leftmost matching
///    pool slot, if any
///
/// The first pass must finish before the second starts so that a correctly
/// placed duplicate keeps its slot. When the guess has more copies of a
/// letter than the secret, the leftmost unplaced copies get credit.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, score};
///
/// let secret = Word::new("alloy").unwrap();
/// let guess = Word::new("llama").unwrap();
/// let feedback = score(&secret, &guess);
///
/// // L(yellow) L(green) A(yellow) M(gray) A(gray)
/// assert_eq!(feedback.to_emoji(), "🟨🟩🟨⬜⬜");
/// ```
#[must_use]
pub fn score(secret: &Word, guess: &Word) -> Feedback {
    let guess_chars = *guess.chars();
    let mut results = guess_chars.map(|ch| LetterResult::new(char::from(ch)));
    let mut pool: [Option<u8>; WORD_LENGTH] = (*secret.chars()).map(Some);

    // First pass: exact matches
    for ((result, slot), &letter) in results.iter_mut().zip(pool.iter_mut()).zip(&guess_chars) {
        if *slot == Some(letter) {
            result.in_position = true;
            *slot = None;
        }
    }

    // Second pass: leftmost unclaimed occurrence elsewhere
    for (result, &letter) in results.iter_mut().zip(&guess_chars) {
        if result.in_position {
            continue;
        }
        if let Some(slot) = pool.iter_mut().find(|slot| **slot == Some(letter)) {
            *slot = None;
            result.in_word = true;
        }
    }

    Feedback(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scored(secret: &str, guess: &str) -> Feedback {
        score(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    fn states(secret: &str, guess: &str) -> Vec<LetterState> {
        scored(secret, guess).states().to_vec()
    }

    use super::LetterState::{Absent, Correct, Present};

    #[test]
    fn exact_match_is_all_in_position() {
        let feedback = scored("APPLE", "APPLE");

        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_correct(), 5);
        assert_eq!(feedback.count_present(), 0);
        for result in feedback.results() {
            assert!(result.in_position);
            assert!(!result.in_word);
        }
    }

    #[test]
    fn characters_follow_the_guess() {
        let feedback = scored("APPLE", "pears");
        let letters: String = feedback.results().iter().map(|r| r.character).collect();
        assert_eq!(letters, "PEARS");
    }

    #[test]
    fn apple_pears_two_pass_accounting() {
        let feedback = scored("APPLE", "PEARS");

        // P is in APPLE but not at index 0
        assert_eq!(
            feedback.results()[0],
            LetterResult {
                character: 'P',
                in_word: true,
                in_position: false,
            }
        );
        assert_eq!(
            states("APPLE", "PEARS"),
            vec![Present, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn alloy_llama_credits_only_two_ls() {
        let feedback = scored("ALLOY", "LLAMA");

        let credited_ls = feedback
            .results()
            .iter()
            .filter(|r| r.character == 'L' && (r.in_word || r.in_position))
            .count();
        assert_eq!(credited_ls, 2);

        // Second A has nothing left to claim
        assert_eq!(
            states("ALLOY", "LLAMA"),
            vec![Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn green_reserves_slot_before_yellow_scan() {
        // The E at index 4 is exact; the E at index 0 must not steal its slot
        assert_eq!(
            states("APPLE", "EERIE"),
            vec![Absent, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn leftmost_duplicate_gets_credit() {
        // One O in the secret, guessed three times out of position
        assert_eq!(
            states("FROND", "OOZOO"),
            vec![Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn duplicate_letters_green_and_yellow() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(
            states("FLOOR", "ROBOT"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn duplicate_letters_both_yellow() {
        // SPEED vs ERASE: both Es present, S present
        assert_eq!(
            states("ERASE", "SPEED"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn no_shared_letters_all_absent() {
        let feedback = scored("ABCDE", "FGHIJ");
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
        assert_eq!(feedback.to_emoji(), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn in_position_never_also_in_word() {
        for (secret, guess) in [("ALLOY", "LLAMA"), ("APPLE", "APPLE"), ("FLOOR", "ROBOT")] {
            for result in scored(secret, guess).results() {
                assert!(!(result.in_position && result.in_word));
            }
        }
    }

    #[test]
    fn credited_letters_never_exceed_secret_multiplicity() {
        for (secret, guess) in [
            ("ALLOY", "LLAMA"),
            ("APPLE", "PAPPY"),
            ("SPEED", "EERIE"),
            ("FROND", "OOZOO"),
        ] {
            let feedback = scored(secret, guess);
            for letter in guess.chars() {
                let credited = feedback
                    .results()
                    .iter()
                    .filter(|r| r.character == letter && (r.in_word || r.in_position))
                    .count();
                let available = secret.chars().filter(|&c| c == letter).count();
                assert!(
                    credited <= available,
                    "{guess} vs {secret}: {letter} credited {credited} of {available}"
                );
            }
        }
    }

    #[test]
    fn letter_state_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }

    #[test]
    fn emoji_of_mixed_row() {
        assert_eq!(scored("FLOOR", "ROBOT").to_emoji(), "🟨🟨⬜🟩⬜");
    }
}
