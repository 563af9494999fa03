//! Blocking input seam
//!
//! All player input arrives through `InputSource` as untrusted text; the
//! session validates every line it reads.

use std::io::{self, Write};

/// Synchronous line-oriented input
pub trait InputSource {
    /// Print `prompt`, block for one line, and return it trimmed
    ///
    /// # Errors
    /// Returns an I/O error if reading fails or input is exhausted.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Stdin-backed input
pub struct StdinInput;

impl InputSource for StdinInput {
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            // EOF would spin every re-prompt loop forever
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }

        Ok(line.trim().to_string())
    }
}
