//! Word list loading utilities
//!
//! Loads a custom word list from a plain text file, one word per line,
//! lengths mixed freely. File words are treated as secret-eligible, so a
//! custom list replaces both tiers.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a word list file
///
/// Lines are trimmed; empty lines and lines starting with `#` are skipped,
/// as are entries that do not form a valid word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordplay::dict::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// assert!(dict.ensure_complete().is_ok());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;

    let mut dict = Dictionary::new();
    dict.add_common(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    );

    Ok(dict)
}
