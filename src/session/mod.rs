//! Session orchestration
//!
//! Sequences rounds: theme and difficulty selection, round creation, the
//! guess loop, and the replay decision. Blocking input is a seam so tests
//! can script a whole session.

mod controller;
mod input;

pub use controller::{RoundConfig, Session, SessionConfig};
pub use input::{InputSource, StdinInput};
