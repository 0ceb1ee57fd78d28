//! Formatting utilities for terminal output
//!
//! Everything here returns plain strings; colour is applied in
//! [`super::display`].

use crate::solver::{LengthInfo, SolvedQuery};

pub const ANAGRAM_NOT_FOUND: &str = "warning: anagram not found";
pub const NO_WORDS_FOUND: &str = "no words found";

/// `--- query: act (3 letters + repeats) ---`
///
/// `letters` is the length of the query as typed, before normalisation.
#[must_use]
pub fn query_header(solved: &SolvedQuery, letters: usize, repeats: bool) -> String {
    let repeats = if repeats { " + repeats" } else { "" };
    format!("--- query: {} ({letters} letters{repeats}) ---", solved.query)
}

/// `3 letters - 4 points`, or just `3 letters` when scoring is off
#[must_use]
pub fn length_heading(info: &LengthInfo, noscores: bool) -> String {
    if noscores {
        format!("{} letters", info.length)
    } else {
        let unit = if info.score == 1 { "point" } else { "points" };
        format!("{} letters - {} {unit}", info.length, info.score)
    }
}

/// Sorted words, uppercase unless `lower` is set
#[must_use]
pub fn cased_words(info: &LengthInfo, lower: bool) -> Vec<String> {
    info.words
        .iter()
        .map(|word| if lower { word.clone() } else { word.to_uppercase() })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    let filled = (((value / max) * width as f64) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
