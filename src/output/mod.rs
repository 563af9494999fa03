//! Terminal output formatting
//!
//! The `Renderer` seam the session draws through, its terminal
//! implementation, and the title themes.

mod display;
mod theme;

pub use display::{Renderer, TerminalRenderer, verdict_line};
pub use theme::Theme;
