//! Post-filtering of per-length buckets
//!
//! Survivors are decided against an immutable snapshot of all buckets; the
//! result is built afterwards from the survivors alone.

use super::engine::Bucket;
use tracing::debug;

/// Which pruning rules are active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FilterRules {
    /// Drop a bucket sharing a word with the next-shorter bucket
    pub drop_duplicates: bool,
    /// Drop a bucket whose words do not outscore every longer kept bucket
    pub drop_dominated: bool,
}

/// Select the buckets worth reporting
///
/// `buckets` must be ordered from the longest length to the shortest. A
/// bucket holding a word it shares with the next-shorter bucket only repeats
/// that bucket, so every survivor holds a word of its own length.
pub(crate) fn surviving<'b, 'a>(buckets: &'b [Bucket<'a>], rules: FilterRules) -> Vec<&'b Bucket<'a>> {
    let mut kept: Vec<&Bucket<'a>> = Vec::new();

    for bucket in buckets {
        if bucket.is_empty() {
            continue;
        }

        if rules.drop_duplicates
            && let Some(shorter) = buckets.iter().find(|b| b.length + 1 == bucket.length)
            && bucket.shares_word_with(shorter)
        {
            debug!(length = bucket.length, "removed for duplicate/s");
            continue;
        }

        if rules.drop_dominated && kept.iter().any(|longer| bucket.is_dominated_by(longer)) {
            debug!(length = bucket.length, "removed for doubles");
            continue;
        }

        debug!(length = bucket.length, "kept");
        kept.push(bucket);
    }

    kept
}
