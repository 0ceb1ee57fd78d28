//! Display functions for command results

use super::formatters::{
    ANAGRAM_NOT_FOUND, NO_WORDS_FOUND, cased_words, create_progress_bar, length_heading,
    query_header,
};
use crate::commands::{BenchmarkResult, SolveReport};
use crate::settings::Settings;
use crate::solver::Ruleset;
use colored::Colorize;
use std::io::{self, Write};

/// Write the report for one solved query
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_solve_report<W: Write>(
    out: &mut W,
    report: &SolveReport,
    settings: &Settings,
) -> io::Result<()> {
    let solved = &report.solved;

    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        query_header(solved, report.letters(), settings.repeats)
            .bright_cyan()
            .bold()
    )?;
    writeln!(out)?;

    if solved.is_empty() {
        writeln!(out, "   {}", NO_WORDS_FOUND.bright_black())?;
        return Ok(());
    }

    if !solved.anagram_found {
        writeln!(out, "   {}", ANAGRAM_NOT_FOUND.yellow())?;
        writeln!(out)?;
    }

    for info in solved.longest_first() {
        writeln!(out, "  {}", length_heading(info, settings.noscores).bold())?;
        writeln!(
            out,
            "   {}",
            cased_words(info, settings.lower).join(", ").bright_white()
        )?;
        writeln!(out)?;
    }

    Ok(())
}

/// Print the report for one solved query
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_solve_report(report: &SolveReport, settings: &Settings) -> io::Result<()> {
    write_solve_report(&mut io::stdout().lock(), report, settings)
}

/// Write every setting with its effective value
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_settings<W: Write>(out: &mut W, ruleset: &Ruleset) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "SETTINGS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    // Resolved settings always carry `max`, so every setting is listed
    for (spec, value) in ruleset.settings().entries() {
        writeln!(
            out,
            "  -{} --{:<9} {:<16} {}",
            spec.short,
            spec.name,
            value.to_string().bright_yellow(),
            spec.help.bright_black()
        )?;
    }

    writeln!(
        out,
        "\n  {} words between {} and {} letters",
        ruleset.wordlist().len(),
        ruleset.min_length(),
        ruleset.max_length()
    )
}

/// Print every setting with its effective value
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_settings(ruleset: &Ruleset) -> io::Result<()> {
    write_settings(&mut io::stdout().lock(), ruleset)
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks solved:     {}", result.total_racks);
    println!(
        "   Anagrams found:   {}",
        result.anagrams_found.to_string().green()
    );
    println!(
        "   No words found:   {}",
        result.empty_results.to_string().yellow()
    );
    println!("   Words reported:   {}", result.total_words);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Racks/second:     {}",
        format!("{:.1}", result.racks_per_second)
            .bright_yellow()
            .bold()
    );

    if result.longest_found.is_empty() {
        return;
    }

    println!("\n📈 {}", "Longest word found:".bright_cyan().bold());
    let total = result.total_racks.max(1) as f64;
    for (length, &count) in result.longest_found.iter().rev() {
        let pct = count as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
