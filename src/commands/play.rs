//! Interactive query loop
//!
//! Reads racks line by line and prints their solutions. Lines starting with
//! `:` are commands that inspect or change settings; a change rebuilds the
//! ruleset from the unresolved settings.

use super::solve::{SolveReport, solve_input};
use crate::core::ScoreTables;
use crate::output::{write_settings, write_solve_report};
use crate::settings::{SettingValue, Settings, SettingsError};
use crate::solver::Ruleset;
use crate::wordlists::Wordlist;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "qrs: ";

const HELP: &str = "\
commands:
  :get NAME          show a setting
  :set NAME VALUE    change a setting
  :settings          show every setting
  :help              show this message
  :quit              exit";

/// What a line of input produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Solved(SolveReport),
    Value { name: String, value: SettingValue },
    Updated { name: String, value: SettingValue },
    Settings,
    Help,
    Rejected(String),
    Empty,
    Quit,
}

/// State of an interactive session
pub struct Session<'w> {
    wordlist: &'w Wordlist,
    tables: &'w ScoreTables,
    settings: Settings,
    ruleset: Ruleset,
}

impl<'w> Session<'w> {
    /// Start a session from unresolved settings
    #[must_use]
    pub fn new(settings: Settings, wordlist: &'w Wordlist, tables: &'w ScoreTables) -> Self {
        let ruleset = Ruleset::with_score_tables(settings.clone(), wordlist, tables);
        Self {
            wordlist,
            tables,
            settings,
            ruleset,
        }
    }

    #[must_use]
    pub const fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// Change one setting and rebuild the ruleset
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names or unparsable values; the session is
    /// left unchanged.
    pub fn apply_setting(&mut self, name: &str, raw: &str) -> Result<SettingValue, SettingsError> {
        let mut candidate = self.settings.clone();
        candidate.set_from_str(name, raw)?;

        self.ruleset = Ruleset::with_score_tables(candidate.clone(), self.wordlist, self.tables);
        self.settings = candidate;
        debug!(setting = name, ruleset = %self.ruleset, "ruleset rebuilt");

        self.ruleset.get(name)
    }

    /// Handle one line of input
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        if line.is_empty() {
            return Reply::Empty;
        }

        let Some(command) = line.strip_prefix(':') else {
            return match solve_input(line, &self.ruleset) {
                Ok(report) => Reply::Solved(report),
                Err(err) => Reply::Rejected(err.to_string()),
            };
        };

        let mut parts = command.trim().splitn(2, char::is_whitespace);
        let verb = parts.next().unwrap_or_default();
        let rest = parts.next().unwrap_or_default().trim();

        match verb {
            "get" => match self.ruleset.get(rest) {
                Ok(value) => Reply::Value {
                    name: rest.to_string(),
                    value,
                },
                Err(err) => Reply::Rejected(err.to_string()),
            },
            "set" => {
                let (name, raw) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                match self.apply_setting(name, raw) {
                    Ok(value) => Reply::Updated {
                        name: name.to_string(),
                        value,
                    },
                    Err(err) => Reply::Rejected(err.to_string()),
                }
            }
            "settings" => Reply::Settings,
            "help" | "h" | "?" => Reply::Help,
            "quit" | "q" | "exit" => Reply::Quit,
            _ => Reply::Rejected(format!("unknown command ':{verb}' (try :help)")),
        }
    }

    fn write_reply<W: Write>(&self, out: &mut W, reply: &Reply) -> io::Result<()> {
        match reply {
            Reply::Solved(report) => write_solve_report(out, report, self.ruleset.settings()),
            Reply::Value { name, value } => writeln!(out, "  {name} = {}", value.to_string().bright_yellow()),
            Reply::Updated { name, value } => {
                writeln!(out, "  {} {name} = {}", "✓".green(), value.to_string().bright_yellow())
            }
            Reply::Settings => write_settings(out, &self.ruleset),
            Reply::Help => writeln!(out, "{HELP}"),
            Reply::Rejected(message) => writeln!(out, "  {}", message.red()),
            Reply::Empty | Reply::Quit => Ok(()),
        }
    }
}

/// Run the interactive loop until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(session: &mut Session<'_>, input: R, mut out: W) -> io::Result<()> {
    writeln!(out, "\n  {}  ({})\n", "ready".bright_green().bold(), session.ruleset())?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let reply = session.handle_line(&line);
        if reply == Reply::Quit {
            break;
        }
        session.write_reply(&mut out, &reply)?;
    }

    writeln!(out, "\n\n  exiting..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wordlist() -> Wordlist {
        Wordlist::new(["cat", "act", "at", "cats", "castle"])
    }

    #[test]
    fn solves_plain_input() {
        let words = wordlist();
        let tables = ScoreTables::builtin();
        let mut session = Session::new(Settings::default(), &words, &tables);

        let Reply::Solved(report) = session.handle_line("tac") else {
            panic!("expected a solved query");
        };
        assert_eq!(report.solved.query, "act");
        assert!(report.solved.anagram_found);
    }

    #[test]
    fn rejects_invalid_input() {
        let words = wordlist();
        let tables = ScoreTables::builtin();
        let mut session = Session::new(Settings::default(), &words, &tables);

        assert!(matches!(session.handle_line("c4t"), Reply::Rejected(_)));
        assert!(matches!(session.handle_line("a"), Reply::Rejected(_)));
        assert_eq!(session.handle_line("   "), Reply::Empty);
    }

    #[test]
    fn get_reads_resolved_settings() {
        let words = wordlist();
        let tables = ScoreTables::builtin();
        let mut session = Session::new(Settings::default(), &words, &tables);

        assert_eq!(
            session.handle_line(":get max"),
            Reply::Value {
                name: "max".to_string(),
                value: SettingValue::Number(6)
            }
        );
        assert_eq!(
            session.handle_line(":get colour"),
            Reply::Rejected("invalid setting: colour".to_string())
        );
    }

    #[test]
    fn set_rebuilds_the_ruleset() {
        let words = wordlist();
        let tables = ScoreTables::builtin();
        let mut session = Session::new(Settings::default(), &words, &tables);

        assert_eq!(
            session.handle_line(":set exclude castle"),
            Reply::Updated {
                name: "exclude".to_string(),
                value: SettingValue::Words(vec!["castle".to_string()])
            }
        );
        // max was never set explicitly, so it follows the edited wordlist
        assert_eq!(session.ruleset().max_length(), 4);

        session.handle_line(":set repeats on");
        assert!(session.ruleset().settings().repeats);
    }

    #[test]
    fn failed_set_leaves_session_unchanged() {
        let words = wordlist();
        let tables = ScoreTables::builtin();
        let mut session = Session::new(Settings::default(), &words, &tables);

        assert!(matches!(session.handle_line(":set min lots"), Reply::Rejected(_)));
        assert!(matches!(session.handle_line(":set colour red"), Reply::Rejected(_)));
        assert_eq!(session.ruleset().min_length(), 2);
    }

    #[test]
    fn commands_are_recognised() {
        let words = wordlist();
        let tables = ScoreTables::builtin();
        let mut session = Session::new(Settings::default(), &words, &tables);

        assert_eq!(session.handle_line(":settings"), Reply::Settings);
        assert_eq!(session.handle_line(":help"), Reply::Help);
        assert_eq!(session.handle_line(":quit"), Reply::Quit);
        assert!(matches!(session.handle_line(":dance"), Reply::Rejected(_)));
    }

    #[test]
    fn loop_runs_until_quit() {
        let words = wordlist();
        let tables = ScoreTables::builtin();
        let mut session = Session::new(Settings::default(), &words, &tables);

        let input = Cursor::new("tac\n:set lower true\ntac\n:quit\nxyz\n");
        let mut out = Vec::new();
        run_play(&mut session, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("ACT, CAT"));
        assert!(text.contains("act, cat"));
        assert!(!text.contains("--- query: xyz"));
        assert!(text.contains("exiting.."));
    }

    #[test]
    fn loop_stops_at_end_of_input() {
        let words = wordlist();
        let tables = ScoreTables::builtin();
        let mut session = Session::new(Settings::default(), &words, &tables);

        let mut out = Vec::new();
        run_play(&mut session, Cursor::new("cats"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("--- query: acst (4 letters) ---"));
        assert_eq!(text.matches(PROMPT).count(), 2);
    }
}
