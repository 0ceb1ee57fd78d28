//! Query solving command
//!
//! Validates raw input against a ruleset's length limits before solving it.

use crate::solver::{Ruleset, SolvedQuery};
use serde::Serialize;
use thiserror::Error;

/// Why a query was rejected before solving
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("'{0}' must contain only the letters a-z")]
    NotLetters(String),

    #[error("'{query}' is shorter than {min} letters")]
    TooShort { query: String, min: usize },

    #[error("'{query}' is longer than {max} letters")]
    TooLong { query: String, max: usize },
}

/// A solved query alongside the input it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub input: String,
    #[serde(flatten)]
    pub solved: SolvedQuery,
}

impl SolveReport {
    /// Letters in the query as typed
    #[must_use]
    pub fn letters(&self) -> usize {
        self.input.len()
    }
}

/// Check that `raw` is a playable query for `ruleset`
///
/// The query must be ASCII letters only, with a length within the ruleset's
/// `[min, max]`. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns a [`QueryError`] describing the first rule the query breaks.
///
/// # Examples
/// ```
/// use qrs::commands::validate_query;
/// use qrs::settings::Settings;
/// use qrs::solver::Ruleset;
/// use qrs::wordlists::Wordlist;
///
/// let ruleset = Ruleset::new(Settings::default(), &Wordlist::new(["cat", "cats"]));
/// assert_eq!(validate_query(" Tac ", &ruleset).unwrap(), "Tac");
/// assert!(validate_query("t4c", &ruleset).is_err());
/// assert!(validate_query("catsss", &ruleset).is_err());
/// ```
pub fn validate_query<'q>(raw: &'q str, ruleset: &Ruleset) -> Result<&'q str, QueryError> {
    let query = raw.trim();

    if !query.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(QueryError::NotLetters(query.to_string()));
    }

    if query.len() < ruleset.min_length() {
        return Err(QueryError::TooShort {
            query: query.to_string(),
            min: ruleset.min_length(),
        });
    }

    if query.len() > ruleset.max_length() {
        return Err(QueryError::TooLong {
            query: query.to_string(),
            max: ruleset.max_length(),
        });
    }

    Ok(query)
}

/// Validate and solve a single query
///
/// # Errors
///
/// Returns a [`QueryError`] if the query is not playable.
pub fn solve_input(raw: &str, ruleset: &Ruleset) -> Result<SolveReport, QueryError> {
    let input = validate_query(raw, ruleset)?;
    Ok(SolveReport {
        input: input.to_string(),
        solved: ruleset.solve_query(input),
    })
}

/// Solve several queries, keeping each outcome
pub fn solve_all<S: AsRef<str>>(
    queries: &[S],
    ruleset: &Ruleset,
) -> Vec<Result<SolveReport, QueryError>> {
    queries
        .iter()
        .map(|query| solve_input(query.as_ref(), ruleset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::wordlists::Wordlist;

    fn ruleset() -> Ruleset {
        Ruleset::new(
            Settings::default(),
            &Wordlist::new(["cat", "act", "at", "cats"]),
        )
    }

    #[test]
    fn accepts_letters_within_limits() {
        let rules = ruleset();
        assert_eq!(validate_query("at", &rules), Ok("at"));
        assert_eq!(validate_query("CATS\n", &rules), Ok("CATS"));
    }

    #[test]
    fn rejects_non_letters() {
        let rules = ruleset();
        assert_eq!(
            validate_query("c a t", &rules),
            Err(QueryError::NotLetters("c a t".to_string()))
        );
        assert!(matches!(
            validate_query("café", &rules),
            Err(QueryError::NotLetters(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        let rules = ruleset();
        assert_eq!(
            validate_query("a", &rules),
            Err(QueryError::TooShort {
                query: "a".to_string(),
                min: 2
            })
        );
        assert_eq!(
            validate_query("catsup", &rules),
            Err(QueryError::TooLong {
                query: "catsup".to_string(),
                max: 4
            })
        );
        assert!(matches!(
            validate_query("", &rules),
            Err(QueryError::TooShort { .. })
        ));
    }

    #[test]
    fn solve_reports_input_and_result() {
        let report = solve_input("Tac", &ruleset()).unwrap();

        assert_eq!(report.input, "Tac");
        assert_eq!(report.letters(), 3);
        assert_eq!(report.solved.query, "act");
        assert!(report.solved.anagram_found);
    }

    #[test]
    fn solve_all_keeps_order_and_errors() {
        let results = solve_all(&["tac", "x1", "cats"], &ruleset());

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(QueryError::NotLetters(_))));
        assert_eq!(results[2].as_ref().unwrap().solved.query, "acst");
    }

    #[test]
    fn report_serializes_flat() {
        let report = solve_input("tac", &ruleset()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["input"], "tac");
        assert_eq!(json["query"], "act");
        assert_eq!(json["anagram_found"], true);
        assert_eq!(json["lengths"]["3"]["words"][0], "act");
    }
}
