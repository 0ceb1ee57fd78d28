//! Solved query representation

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Words found for one word length
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthInfo {
    pub length: usize,
    /// Score shared by the words, or 0 when scoring is off
    pub score: u32,
    pub words: BTreeSet<String>,
}

/// Result of solving a query against a ruleset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolvedQuery {
    /// The normalised query
    pub query: String,
    /// True if some word uses the whole query
    pub anagram_found: bool,
    /// Surviving word groups keyed by length
    pub lengths: BTreeMap<usize, LengthInfo>,
}

impl SolvedQuery {
    /// True when no words survived
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lengths.values().all(|info| info.words.is_empty())
    }

    /// Groups from the longest word length to the shortest
    pub fn longest_first(&self) -> impl Iterator<Item = &LengthInfo> {
        self.lengths.values().rev()
    }

    #[must_use]
    pub fn get(&self, length: usize) -> Option<&LengthInfo> {
        self.lengths.get(&length)
    }

    /// Every reported word across all lengths
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.lengths
            .values()
            .flat_map(|info| info.words.iter().map(String::as_str))
    }

    /// Total number of reported words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.lengths.values().map(|info| info.words.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(length: usize, score: u32, words: &[&str]) -> LengthInfo {
        LengthInfo {
            length,
            score,
            words: words.iter().map(ToString::to_string).collect(),
        }
    }

    fn sample() -> SolvedQuery {
        let mut lengths = BTreeMap::new();
        lengths.insert(2, info(2, 7, &["qi"]));
        lengths.insert(4, info(4, 5, &["cats", "scat"]));
        SolvedQuery {
            query: "acqist".to_string(),
            anagram_found: false,
            lengths,
        }
    }

    #[test]
    fn empty_result() {
        let result = SolvedQuery {
            query: "xyz".to_string(),
            anagram_found: false,
            lengths: BTreeMap::new(),
        };
        assert!(result.is_empty());
        assert!(!result.anagram_found);
        assert_eq!(result.word_count(), 0);
    }

    #[test]
    fn longest_first_order() {
        let result = sample();
        let lengths: Vec<usize> = result.longest_first().map(|info| info.length).collect();
        assert_eq!(lengths, [4, 2]);
    }

    #[test]
    fn words_and_counts() {
        let result = sample();
        assert_eq!(result.word_count(), 3);
        let words: Vec<&str> = result.words().collect();
        assert_eq!(words, ["qi", "cats", "scat"]);
        assert_eq!(result.get(4).map(|info| info.score), Some(5));
        assert!(result.get(3).is_none());
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["query"], "acqist");
        assert_eq!(json["anagram_found"], false);
        assert_eq!(json["lengths"]["4"]["words"][1], "scat");
        assert_eq!(json["lengths"]["2"]["score"], 7);
    }
}
