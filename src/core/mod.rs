//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod difficulty;
mod verdict;
mod word;

pub use difficulty::Difficulty;
pub use verdict::{LetterVerdict, Verdicts};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
