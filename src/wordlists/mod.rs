//! Wordlists
//!
//! A [`Wordlist`] is an unordered set of lowercase words. Edits never happen
//! in place: every adjustment returns a new list, so one source list can back
//! any number of rulesets.

mod embedded;
pub mod loader;

pub use embedded::{WORDLIST, WORDLIST_COUNT, WORDLIST_LONGEST};

use rustc_hash::FxHashSet;

/// Normalise a raw wordlist entry
///
/// Returns the trimmed, lowercased word, or `None` if it is empty or contains
/// anything other than ASCII letters.
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_ascii_lowercase();
    if !word.is_empty() && word.chars().all(|ch| ch.is_ascii_lowercase()) {
        Some(word)
    } else {
        None
    }
}

/// A set of valid words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    words: FxHashSet<String>,
}

impl Wordlist {
    /// Build a wordlist from raw entries, normalising and skipping invalid ones
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| normalize_word(word.as_ref()))
            .collect();
        Self { words }
    }

    /// The wordlist compiled into the binary
    ///
    /// A short list of common words; real games load a full dictionary with
    /// [`loader::load_from_file`].
    #[must_use]
    pub fn builtin() -> Self {
        loader::words_from_slice(WORDLIST)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Length of the longest word, or 0 for an empty list
    #[must_use]
    pub fn longest(&self) -> usize {
        self.words.iter().map(String::len).max().unwrap_or(0)
    }

    /// Copy of this list with `exclude` removed, then `include` added
    ///
    /// A word in both lists ends up included.
    ///
    /// # Examples
    /// ```
    /// use qrs::wordlists::Wordlist;
    ///
    /// let base = Wordlist::new(["cat", "dog"]);
    /// let edited = base.with_edits(&["Emu"], &["dog"]);
    ///
    /// assert!(edited.contains("emu"));
    /// assert!(!edited.contains("dog"));
    /// assert!(base.contains("dog"));
    /// ```
    #[must_use]
    pub fn with_edits<I, E>(&self, include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let mut words = self.words.clone();
        for word in exclude {
            if let Some(word) = normalize_word(word.as_ref()) {
                words.remove(&word);
            }
        }
        words.extend(
            include
                .into_iter()
                .filter_map(|word| normalize_word(word.as_ref())),
        );
        Self { words }
    }

    /// Copy of this list keeping only words with `min <= len <= max`
    #[must_use]
    pub fn within_lengths(&self, min: usize, max: usize) -> Self {
        let words = self
            .words
            .iter()
            .filter(|word| (min..=max).contains(&word.len()))
            .cloned()
            .collect();
        Self { words }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Wordlist {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}
