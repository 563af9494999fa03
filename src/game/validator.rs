//! Guess admissibility checks
//!
//! Raw input is untrusted text; the validator turns it into a
//! `ValidatedGuess` or a `RejectReason`. Checks run in a fixed order and
//! the first failure wins: length, then duplicate, then dictionary
//! membership. Debug rounds are exempt from the membership check only.

use super::state::GameState;
use crate::core::Word;
use crate::dict::Dictionary;
use std::fmt;

/// Why a candidate guess was rejected
///
/// All rejections are recoverable: the caller shows the message and
/// re-prompts, leaving the round untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Candidate length differs from the secret word length
    WrongLength { expected: usize, actual: usize },
    /// Candidate already appears in this round's history
    Duplicate,
    /// Candidate is not an admissible dictionary word for this length
    NotInDictionary,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, .. } => {
                write!(f, "Word must be {expected} letters!")
            }
            Self::Duplicate => write!(f, "Word already entered!"),
            Self::NotInDictionary => write!(f, "Not a valid word!"),
        }
    }
}

impl std::error::Error for RejectReason {}

/// Proof that a candidate passed admissibility checks
///
/// Only the validator can mint one; `GameState::apply_guess` consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedGuess(Word);

impl ValidatedGuess {
    /// The normalized guess word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.0
    }

    pub(super) fn into_word(self) -> Word {
        self.0
    }
}

/// Admissibility checker for one dictionary
pub struct GuessValidator<'a> {
    dict: &'a Dictionary,
}

impl<'a> GuessValidator<'a> {
    /// Create a validator backed by `dict`
    #[must_use]
    pub const fn new(dict: &'a Dictionary) -> Self {
        Self { dict }
    }

    /// Check a raw candidate against the round's rules
    ///
    /// Input is trimmed and lowercased before any check. Check order, first
    /// failure wins:
    /// 1. `WrongLength` - character count differs from the secret length
    /// 2. `Duplicate` - exact match against the round's history
    /// 3. `NotInDictionary` - unknown word for this length; skipped when
    ///    the round's debug flag is set. Input that cannot form a `Word` at
    ///    all (digits, punctuation, non-ASCII) also lands here, debug or
    ///    not: debug relaxes membership, not well-formedness.
    ///
    /// # Errors
    /// Returns the first failing `RejectReason`; the round is unchanged.
    pub fn validate(
        &self,
        candidate: &str,
        state: &GameState,
    ) -> Result<ValidatedGuess, RejectReason> {
        let candidate = candidate.trim().to_lowercase();

        let expected = state.secret().len();
        let actual = candidate.chars().count();
        if actual != expected {
            return Err(RejectReason::WrongLength { expected, actual });
        }

        if state.has_guessed(&candidate) {
            return Err(RejectReason::Duplicate);
        }

        let Ok(word) = Word::new(candidate.as_str()) else {
            return Err(RejectReason::NotInDictionary);
        };

        if !state.debug() && !self.dict.contains(word.text()) {
            return Err(RejectReason::NotInDictionary);
        }

        Ok(ValidatedGuess(word))
    }
}
