//! Per-letter guess feedback
//!
//! Scoring is two passes over the guess: exact position matches first, then
//! present-elsewhere marks drawn from whatever letters the first pass left
//! unconsumed. Exact matches always claim their letter before any
//! present-elsewhere credit is handed out, so duplicate letters in the guess
//! are never credited beyond their multiplicity in the secret word.

use super::Word;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    /// Letter matches the secret word at this position
    Correct,
    /// Letter exists elsewhere in the secret word, in a position not yet
    /// consumed by an exact or earlier present match
    Present,
    /// Letter does not appear in any unconsumed position
    Absent,
}

/// The ordered per-letter feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdicts(Vec<LetterVerdict>);

impl Verdicts {
    /// Score `guess` against `secret`
    ///
    /// Pure and total for equal-length inputs; calling it twice with the
    /// same words yields the same verdicts.
    ///
    /// # Panics
    /// Panics if the two words differ in length. Equal length is the
    /// caller's contract; the validator enforces it before a guess ever
    /// reaches scoring.
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::{LetterVerdict, Verdicts, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("ample").unwrap();
    /// let verdicts = Verdicts::score(&guess, &secret);
    ///
    /// assert_eq!(verdicts.as_slice()[0], LetterVerdict::Correct);
    /// assert!(!verdicts.is_win());
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        assert_eq!(
            guess.len(),
            secret.len(),
            "scored words must have equal length"
        );

        let mut result = vec![LetterVerdict::Absent; secret.len()];
        let mut remaining = secret.letter_counts();

        // First pass: exact matches, consuming their letter from the pool
        for (i, slot) in result.iter_mut().enumerate() {
            if guess.letter_at(i) == secret.letter_at(i) {
                *slot = LetterVerdict::Correct;
                if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: left-to-right, mark present while unconsumed copies remain
        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == LetterVerdict::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                *slot = LetterVerdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// True if every position is `Correct` (the guess equals the secret)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&v| v == LetterVerdict::Correct)
    }

    /// Number of positions (equals the scored word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no positions (never the case for scored words)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The verdicts as a slice, in position order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[LetterVerdict] {
        &self.0
    }

    /// Count positions carrying a given verdict
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }
}

impl<'a> IntoIterator for &'a Verdicts {
    type Item = &'a LetterVerdict;
    type IntoIter = std::slice::Iter<'a, LetterVerdict>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
