//! Wordplay
//!
//! A terminal word-guessing game: pick a difficulty and a word length (3-9),
//! then guess the hidden word with per-letter feedback after every try.
//!
//! # Quick Start
//!
//! ```rust
//! use wordplay::core::{LetterVerdict, Verdicts, Word};
//!
//! // Score a guess against a secret word
//! let secret = Word::new("apple").unwrap();
//! let guess = Word::new("allee").unwrap();
//!
//! let verdicts = Verdicts::score(&guess, &secret);
//! assert_eq!(verdicts.as_slice()[0], LetterVerdict::Correct);
//! assert!(!verdicts.is_win());
//! ```

// Core domain types
pub mod core;

// Word lists and lookup
pub mod dict;

// Round state machine and validation
pub mod game;

// Terminal rendering and themes
pub mod output;

// Round sequencing and input
pub mod session;
