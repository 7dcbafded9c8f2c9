use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use colored::*;

use crate::core::log_scanner::LogScanner;

/// How many matching lines the report prints
const MATCH_PREVIEW_LIMIT: usize = 5;

/// Execute the log command: scan a log file for error patterns and print
/// the aggregated analysis.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let log_path = matches.get_one::<String>("log-path").unwrap();
    let pattern = matches.get_one::<String>("pattern").map(String::as_str);

    let scanner = LogScanner::new(pattern)?;
    let analysis = scanner.scan(Path::new(log_path), None)?;

    println!("Log Analysis for: {}", analysis.source.cyan().bold());
    println!("Total lines: {}", analysis.total_lines);
    println!("Error lines: {}", analysis.error_lines);
    println!("Error rate: {:.2}%", analysis.error_rate());

    if !analysis.pattern_counts.is_empty() {
        println!();
        println!("{}", "Error patterns found:".white().bold());
        for (pattern, count) in &analysis.pattern_counts {
            println!("  {}: {} occurrences", pattern.yellow(), count);
        }
    }

    if !analysis.matches.is_empty() {
        println!();
        println!("{}", "First few errors:".white().bold());
        for matched in analysis.matches.iter().take(MATCH_PREVIEW_LIMIT) {
            println!("  Line {}: {}", matched.line_number, matched.line.dimmed());
        }
    }

    Ok(())
}
