//! Wordlist loading utilities
//!
//! Provides functions to load wordlists from files or use the embedded list.

use super::Wordlist;
use std::fs;
use std::io;
use std::path::Path;

/// Load a wordlist from a file, one word per line
///
/// Blank lines and entries that are not plain letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use qrs::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Wordlist> {
    let content = fs::read_to_string(path)?;
    Ok(Wordlist::new(content.lines()))
}

/// Convert an embedded string slice to a wordlist
///
/// # Examples
/// ```
/// use qrs::wordlists::loader::words_from_slice;
/// use qrs::wordlists::WORDLIST;
///
/// let words = words_from_slice(WORDLIST);
/// assert!(words.contains("cat"));
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Wordlist {
    Wordlist::new(slice.iter().copied())
}
