//! Rack normalisation and letter accounting
//!
//! A rack is the set of letters a player can form words from. Its canonical
//! form, the query, is lowercase and sorted.

use rustc_hash::FxHashMap;
use std::fmt;

/// Normalise a raw rack string into a query
///
/// Lowercases, drops whitespace and sorts. With `keep_duplicates` off, each
/// letter appears at most once.
///
/// # Examples
/// ```
/// use qrs::core::build_query;
///
/// assert_eq!(build_query("Tac", true), "act");
/// assert_eq!(build_query("banana", true), "aaabnn");
/// assert_eq!(build_query("banana", false), "abn");
/// ```
#[must_use]
pub fn build_query(raw: &str, keep_duplicates: bool) -> String {
    let mut letters: Vec<char> = raw
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    letters.sort_unstable();
    if !keep_duplicates {
        letters.dedup();
    }
    letters.into_iter().collect()
}

/// A normalised query with per-letter counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    letters: String,
    counts: FxHashMap<char, usize>,
}

/// Outcome of consuming a word's letters from a rack, one for one
///
/// Every character of the word is marked used; a rack letter is used only
/// while copies of it remain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Consumption {
    /// Rack letters taken by the word
    pub rack_used: usize,
    /// Word characters marked consumed
    pub word_used: usize,
}

impl Consumption {
    /// True when the rack supplied every character of a non-empty word
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.rack_used != 0 && self.rack_used == self.word_used
    }
}

impl Rack {
    /// Build a rack from raw input
    ///
    /// When `repeats` is allowed, rack letters are reusable and duplicates are
    /// collapsed; otherwise every copy is kept for one-for-one consumption.
    #[must_use]
    pub fn new(raw: &str, repeats: bool) -> Self {
        let letters = build_query(raw, !repeats);

        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in letters.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }

        Self { letters, counts }
    }

    /// The normalised query string
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Number of letters in the normalised query
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.counts.contains_key(&ch)
    }

    /// How many copies of a letter the rack holds
    #[inline]
    #[must_use]
    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// True if every character of `word` occurs somewhere in the rack
    ///
    /// Multiplicity is ignored.
    #[must_use]
    pub fn covers_letters(&self, word: &str) -> bool {
        word.chars().all(|ch| self.contains(ch))
    }

    /// Consume `word` against a working copy of the rack
    ///
    /// # Examples
    /// ```
    /// use qrs::core::Rack;
    ///
    /// let rack = Rack::new("tac", false);
    /// assert!(rack.consume("cat").is_exact());
    /// assert!(!rack.consume("tact").is_exact());
    /// ```
    #[must_use]
    pub fn consume(&self, word: &str) -> Consumption {
        let mut taken: FxHashMap<char, usize> = FxHashMap::default();
        let mut consumption = Consumption::default();

        for ch in word.chars() {
            consumption.word_used += 1;
            let used = taken.entry(ch).or_insert(0);
            if *used < self.count(ch) {
                *used += 1;
                consumption.rack_used += 1;
            }
        }

        consumption
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}
