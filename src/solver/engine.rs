//! Query solving
//!
//! For every word length from the upper bound down to two, collect the
//! best-scoring words that can be formed from the rack, then prune groups that
//! are empty, repeated or outscored by longer words.

use super::filter::{self, FilterRules};
use super::result::{LengthInfo, SolvedQuery};
use super::ruleset::{Ruleset, ScoredWord};
use crate::core::Rack;
use crate::settings::MIN_WORD_LENGTH;
use tracing::{debug, trace};

/// Words collected for one word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bucket<'a> {
    pub length: usize,
    pub score: u32,
    pub words: Vec<&'a ScoredWord>,
}

impl<'a> Bucket<'a> {
    const fn new(length: usize) -> Self {
        Self {
            length,
            score: 0,
            words: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|entry| entry.word == word)
    }

    /// Add a fitting word
    ///
    /// With scoring, a higher score replaces the current words and an equal
    /// score joins them. Lower scores never reach here.
    fn admit(&mut self, entry: &'a ScoredWord, scoring: bool) {
        if scoring && entry.score > self.score {
            self.words.clear();
            self.score = entry.score;
        }
        self.words.push(entry);
    }

    pub fn shares_word_with(&self, other: &Self) -> bool {
        self.words.iter().any(|entry| other.contains(&entry.word))
    }

    /// True if any word here scores no more than any word in `longer`
    pub fn is_dominated_by(&self, longer: &Self) -> bool {
        self.words
            .iter()
            .any(|entry| longer.words.iter().any(|other| entry.score <= other.score))
    }

    fn word_list(&self) -> Vec<&str> {
        self.words.iter().map(|entry| entry.word.as_str()).collect()
    }

    fn to_length_info(&self) -> LengthInfo {
        LengthInfo {
            length: self.length,
            score: self.score,
            words: self.words.iter().map(|entry| entry.word.clone()).collect(),
        }
    }
}

impl Ruleset {
    /// Find the words that can be formed from `query`
    ///
    /// Allocates only per-call state, so one ruleset can serve many threads.
    ///
    /// # Examples
    /// ```
    /// use qrs::settings::Settings;
    /// use qrs::solver::Ruleset;
    /// use qrs::wordlists::Wordlist;
    ///
    /// let words = Wordlist::new(["cat", "act", "at", "cats"]);
    /// let ruleset = Ruleset::new(Settings::default(), &words);
    ///
    /// let solved = ruleset.solve_query("tac");
    /// assert_eq!(solved.query, "act");
    /// assert!(solved.anagram_found);
    ///
    /// let three = solved.get(3).unwrap();
    /// assert!(three.words.contains("cat") && three.words.contains("act"));
    /// assert!(solved.get(2).is_none());
    /// ```
    #[must_use]
    pub fn solve_query(&self, query: &str) -> SolvedQuery {
        let settings = self.settings();
        let rack = Rack::new(query, settings.repeats);
        let query_len = rack.len();

        let upper = if settings.repeats {
            self.max_length()
        } else {
            query_len
        };

        // Iteration always reaches the shortest playable length; `min` has
        // already been applied to the wordlist.
        let buckets: Vec<Bucket<'_>> = (MIN_WORD_LENGTH..=upper)
            .rev()
            .map(|length| self.fill_bucket(&rack, length))
            .collect();

        let anagram_found = query_len > 0
            && buckets.iter().any(|bucket| {
                bucket.length == query_len
                    && bucket.words.iter().any(|entry| entry.len() == query_len)
            });

        let rules = FilterRules {
            drop_duplicates: !settings.noscores,
            drop_dominated: !settings.doubles,
        };
        let lengths = filter::surviving(&buckets, rules)
            .into_iter()
            .map(|bucket| (bucket.length, bucket.to_length_info()))
            .collect();

        SolvedQuery {
            query: rack.letters().to_string(),
            anagram_found,
            lengths,
        }
    }

    /// Collect the best words of one length
    fn fill_bucket<'a>(&'a self, rack: &Rack, length: usize) -> Bucket<'a> {
        let noscores = self.settings().noscores;
        let mut bucket = Bucket::new(length);

        for entry in self.ranked() {
            let length_fits = if noscores {
                entry.len() == length
            } else {
                entry.len() <= length
            };
            if !length_fits || !rack.covers_letters(&entry.word) {
                continue;
            }

            if !noscores && entry.score < bucket.score {
                continue;
            }

            if self.word_fits(rack, entry, length) {
                trace!(word = %entry.word, length, "fits");
                bucket.admit(entry, !noscores);
            }
        }

        debug!(length, words = ?bucket.word_list(), score = bucket.score, "output for length");
        bucket
    }

    fn word_fits(&self, rack: &Rack, entry: &ScoredWord, length: usize) -> bool {
        if self.settings().repeats {
            return entry.word.chars().all(|ch| rack.contains(ch));
        }

        if entry.len() != length {
            return false;
        }

        let consumption = rack.consume(&entry.word);
        trace!(word = %entry.word, ?consumption, "checking");
        consumption.is_exact()
    }
}
