//! Round state machine and guess validation

mod state;
mod validator;

pub use state::{GameState, Outcome, ScoredGuess, StateError};
pub use validator::{GuessValidator, RejectReason, ValidatedGuess};
