//! Benchmark command
//!
//! Builds random racks from the ruleset's own words and solves them in
//! parallel.

use crate::solver::{Ruleset, SolvedQuery};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// How racks are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub count: usize,
    /// Fixed seed for reproducible racks
    pub seed: Option<u64>,
    /// Up to this many random letters are added to each rack
    pub extra_letters: usize,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            extra_letters: 2,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_racks: usize,
    pub anagrams_found: usize,
    pub empty_results: usize,
    pub total_words: usize,
    /// Racks grouped by the longest word length found for them
    pub longest_found: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub racks_per_second: f64,
}

/// Generate racks by shuffling ruleset words, padded with random letters
///
/// Returns no racks when the ruleset has no words.
#[must_use]
pub fn generate_racks(ruleset: &Ruleset, config: &BenchmarkConfig) -> Vec<String> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let mut racks = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let Some(source) = ruleset.ranked().choose(&mut rng) else {
            break;
        };

        let mut letters: Vec<char> = source.word.chars().collect();
        let extra = rng.random_range(0..=config.extra_letters);
        letters.extend((0..extra).map(|_| char::from(rng.random_range(b'a'..=b'z'))));
        letters.shuffle(&mut rng);

        racks.push(letters.into_iter().collect());
    }

    debug!(racks = racks.len(), seed = ?config.seed, "generated racks");
    racks
}

/// Solve every rack and summarise the outcome
pub fn run_benchmark<S: AsRef<str> + Sync>(
    ruleset: &Ruleset,
    racks: &[S],
    show_progress: bool,
) -> BenchmarkResult {
    let progress = if show_progress {
        ProgressBar::new(racks.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let solved: Vec<SolvedQuery> = racks
        .par_iter()
        .map(|rack| {
            let result = ruleset.solve_query(rack.as_ref());
            progress.inc(1);
            result
        })
        .collect();
    let duration = start.elapsed();
    progress.finish_and_clear();

    let mut longest_found: BTreeMap<usize, usize> = BTreeMap::new();
    for result in &solved {
        if let Some(longest) = result.longest_first().next() {
            *longest_found.entry(longest.length).or_insert(0) += 1;
        }
    }

    let total_racks = solved.len();
    let seconds = duration.as_secs_f64();

    let racks_per_second = if seconds > 0.0 {
        total_racks as f64 / seconds
    } else {
        0.0
    };

    BenchmarkResult {
        total_racks,
        anagrams_found: solved.iter().filter(|result| result.anagram_found).count(),
        empty_results: solved.iter().filter(|result| result.is_empty()).count(),
        total_words: solved.iter().map(SolvedQuery::word_count).sum(),
        longest_found,
        duration,
        racks_per_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::wordlists::Wordlist;

    fn ruleset() -> Ruleset {
        Ruleset::new(
            Settings::default(),
            &Wordlist::new(["cat", "act", "at", "cats", "taste", "stare"]),
        )
    }

    fn seeded(count: usize, extra_letters: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            seed: Some(7),
            extra_letters,
        }
    }

    #[test]
    fn seeded_racks_are_reproducible() {
        let rules = ruleset();
        let config = seeded(20, 2);
        assert_eq!(generate_racks(&rules, &config), generate_racks(&rules, &config));
    }

    #[test]
    fn racks_hold_a_shuffled_word() {
        let rules = ruleset();
        for rack in generate_racks(&rules, &seeded(30, 0)) {
            let mut letters: Vec<char> = rack.chars().collect();
            letters.sort_unstable();
            let found = rules.ranked().iter().any(|entry| {
                let mut word: Vec<char> = entry.word.chars().collect();
                word.sort_unstable();
                word == letters
            });
            assert!(found, "{rack} is not an anagram of any word");
        }
    }

    #[test]
    fn extra_letters_are_bounded() {
        let rules = ruleset();
        for rack in generate_racks(&rules, &seeded(30, 3)) {
            assert!(rack.len() <= 5 + 3);
            assert!(rack.chars().all(|ch| ch.is_ascii_lowercase()));
        }
    }

    #[test]
    fn empty_wordlist_gives_no_racks() {
        let rules = Ruleset::new(Settings::default(), &Wordlist::default());
        assert!(generate_racks(&rules, &seeded(10, 2)).is_empty());
    }

    #[test]
    fn every_unpadded_rack_is_an_anagram() {
        let rules = ruleset();
        let racks = generate_racks(&rules, &seeded(25, 0));
        let result = run_benchmark(&rules, &racks, false);

        assert_eq!(result.total_racks, 25);
        assert_eq!(result.anagrams_found, 25);
        assert_eq!(result.empty_results, 0);
        assert!(result.total_words >= 25);
    }

    #[test]
    fn longest_found_counts_every_non_empty_result() {
        let rules = ruleset();
        let racks = generate_racks(&rules, &seeded(40, 2));
        let result = run_benchmark(&rules, &racks, false);

        let counted: usize = result.longest_found.values().sum();
        assert_eq!(counted + result.empty_results, result.total_racks);
    }

    #[test]
    fn benchmark_empty_rack_list() {
        let racks: Vec<String> = Vec::new();
        let result = run_benchmark(&ruleset(), &racks, false);

        assert_eq!(result.total_racks, 0);
        assert_eq!(result.total_words, 0);
        assert!(result.longest_found.is_empty());
    }
}
