//! qrs - CLI
//!
//! Word game solver with an interactive prompt, one-shot solving and a
//! benchmark over random racks.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use qrs::{
    commands::{BenchmarkConfig, Session, generate_racks, run_benchmark, run_play, solve_all},
    core::ScoreTables,
    output::{print_benchmark_result, print_settings, print_solve_report},
    settings::{
        SettingValue, Settings,
        file::{DEFAULT_SETTINGS_FILE, read_settings, report_load_error, save_settings},
    },
    solver::Ruleset,
    wordlists::{Wordlist, loader::load_from_file},
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "qrs",
    about = "Find the best-scoring words that can be made from a rack of letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    overrides: Overrides,

    /// Settings file, read at start and rewritten with the resolved settings
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Do not write the settings file
    #[arg(long, global = true)]
    no_save: bool,

    /// Wordlist file, one word per line (default: small built-in list;
    /// pass a full dictionary for real games)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// JSON file of extra scoring systems: {"name": {"a": 1, ...}}
    #[arg(long, global = true)]
    scores: Option<PathBuf>,
}

/// Command-line values that take precedence over the settings file
#[derive(Args)]
struct Overrides {
    /// Minimum length of words
    #[arg(short = 'n', long, global = true)]
    min: Option<usize>,

    /// Maximum length of words
    #[arg(short = 'm', long, global = true)]
    max: Option<usize>,

    /// Whether letters can repeat
    #[arg(short = 'r', long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    repeats: Option<bool>,

    /// Whether to ignore scores
    #[arg(short = 's', long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    noscores: Option<bool>,

    /// Whether to show longer, tied words
    #[arg(short = 'b', long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    doubles: Option<bool>,

    /// Whether output should be lowercase
    #[arg(short = 'l', long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    lower: Option<bool>,

    /// Whether to display debug information
    #[arg(short = 'd', long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    debug: Option<bool>,

    /// Scoring system to use: quarrel (default), scrabble, wwf
    #[arg(short = 'g', long, global = true)]
    game: Option<String>,

    /// Words to include, comma separated
    #[arg(short = 'i', long, global = true, value_delimiter = ',')]
    include: Option<Vec<String>>,

    /// Words to exclude, comma separated
    #[arg(short = 'e', long, global = true, value_delimiter = ',')]
    exclude: Option<Vec<String>>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt (default)
    Play,

    /// Solve the given racks and exit
    Solve {
        /// Racks to solve
        #[arg(required = true)]
        queries: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every setting and its effective value
    Settings,

    /// Solve random racks built from the wordlist
    Benchmark {
        /// Number of racks to solve
        #[arg(short = 'c', long, default_value = "1000")]
        count: usize,

        /// Seed for reproducible racks
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Overrides {
    fn apply(self, settings: &mut Settings) -> Result<()> {
        let values = [
            ("min", self.min.map(SettingValue::Number)),
            ("max", self.max.map(SettingValue::Number)),
            ("repeats", self.repeats.map(SettingValue::Flag)),
            ("noscores", self.noscores.map(SettingValue::Flag)),
            ("doubles", self.doubles.map(SettingValue::Flag)),
            ("lower", self.lower.map(SettingValue::Flag)),
            ("debug", self.debug.map(SettingValue::Flag)),
            ("game", self.game.map(SettingValue::Text)),
            ("include", self.include.map(SettingValue::Words)),
            ("exclude", self.exclude.map(SettingValue::Words)),
        ];

        for (name, value) in values {
            if let Some(value) = value {
                settings.set(name, value)?;
            }
        }

        Ok(())
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "qrs=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_wordlist(path: Option<&Path>) -> Result<Wordlist> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read wordlist '{}'", path.display())),
        None => Ok(Wordlist::builtin()),
    }
}

fn load_score_tables(path: Option<&Path>) -> Result<ScoreTables> {
    let tables = ScoreTables::builtin();
    match path {
        Some(path) => {
            let custom = ScoreTables::load(path)
                .with_context(|| format!("failed to read scores '{}'", path.display()))?;
            Ok(tables.merge(custom))
        }
        None => Ok(tables),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Settings file first, then command-line overrides
    let loaded = read_settings(&cli.config);
    let mut settings = loaded.as_ref().map_or_else(|_| Settings::default(), Clone::clone);
    cli.overrides.apply(&mut settings)?;

    init_tracing(settings.debug);
    if let Err(err) = &loaded {
        report_load_error(&cli.config, err);
    }

    let wordlist = load_wordlist(cli.wordlist.as_deref())?;
    let tables = load_score_tables(cli.scores.as_deref())?;
    debug!(words = wordlist.len(), games = ?tables.names().collect::<Vec<_>>(), "loaded");

    let mut session = Session::new(settings, &wordlist, &tables);

    if !cli.no_save
        && let Err(err) = save_settings(&cli.config, session.ruleset().settings())
    {
        warn!(
            "failed to save '{}' ({err}); continuing without saving",
            cli.config.display()
        );
    }

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&mut session, io::stdin().lock(), io::stdout().lock())?,
        Commands::Solve { queries, json } => run_solve_command(session.ruleset(), &queries, json)?,
        Commands::Settings => print_settings(session.ruleset())?,
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(session.ruleset(), count, seed);
        }
    }

    Ok(())
}

fn run_solve_command(ruleset: &Ruleset, queries: &[String], json: bool) -> Result<()> {
    let mut reports = Vec::new();
    let mut rejected = 0;

    for result in solve_all(queries, ruleset) {
        match result {
            Ok(report) => reports.push(report),
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                rejected += 1;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_solve_report(report, ruleset.settings())?;
        }
    }

    if rejected > 0 {
        bail!("{rejected} of {} queries rejected", queries.len());
    }
    Ok(())
}

fn run_benchmark_command(ruleset: &Ruleset, count: usize, seed: Option<u64>) {
    let config = BenchmarkConfig {
        seed,
        ..BenchmarkConfig::new(count)
    };

    println!("Running benchmark on {count} random racks...");
    let racks = generate_racks(ruleset, &config);
    let result = run_benchmark(ruleset, &racks, true);
    print_benchmark_result(&result);
}
