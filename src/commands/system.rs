use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::*;

use crate::core::persistence::save_snapshots;
use crate::core::probe::MetricsProbe;
use crate::core::sampler::{CancelToken, Sampler};

/// Execute the system command: sample resource usage for a period and
/// optionally persist the snapshots.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let duration = matches.get_one::<u64>("duration").copied().unwrap_or(60);
    let interval = matches.get_one::<u64>("interval").copied().unwrap_or(5);
    let output = matches.get_one::<String>("output");

    println!(
        "Starting system monitoring for {} seconds (interval: {}s)...",
        duration.to_string().cyan().bold(),
        interval
    );

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("Failed to install ctrl-c handler")?;

    let mut sampler = Sampler::new(MetricsProbe::new());
    let snapshots = sampler.run(
        Duration::from_secs(duration),
        Duration::from_secs(interval),
        Some(&cancel),
        |snapshot| {
            println!(
                "Recorded snapshot at {} (cpu {:.1}%, mem {:.1}%, disk {:.1}%)",
                snapshot.timestamp.format("%H:%M:%S"),
                snapshot.cpu_percent,
                snapshot.memory.usage_percent,
                snapshot.disk.usage_percent
            );
        },
    )?;

    println!();
    if cancel.is_cancelled() {
        println!("{}", "Monitoring interrupted.".yellow());
    }
    println!(
        "{} {}",
        "Captured:".green().bold(),
        format!("{} snapshot(s)", snapshots.len()).yellow().bold()
    );

    if let Some(output) = output {
        save_snapshots(Path::new(output), &snapshots)
            .with_context(|| format!("Failed to save monitoring data to {output}"))?;
        println!("Monitoring data saved to {}", output.cyan().bold());
    }

    Ok(())
}
