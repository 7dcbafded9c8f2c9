use anyhow::Result;
use clap::ArgMatches;
use colored::*;

use crate::core::processes::ProcessEnumerator;
use crate::core::ranking::top_processes;
use crate::ui::truncate_name;

const NAME_WIDTH: usize = 24;

/// Execute the processes command: show the top processes by CPU or memory.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let count = matches.get_one::<usize>("count").copied().unwrap_or(10);
    let resource = matches
        .get_one::<String>("resource")
        .map(String::as_str)
        .unwrap_or("cpu");

    let mut enumerator = ProcessEnumerator::new();
    let top = top_processes(&mut enumerator, count, resource)?;

    println!(
        "Top {} processes by {} usage:",
        count.to_string().yellow().bold(),
        resource.to_uppercase().cyan().bold()
    );
    println!("{}", "-".repeat(80));
    println!(
        "{:<8} {:<25} {:<15} {:<8} {}",
        "PID".white().bold(),
        "Name".white().bold(),
        "User".white().bold(),
        resource.to_uppercase().white().bold(),
        "Mem%".white().bold()
    );
    println!("{}", "-".repeat(80));

    for record in &top {
        let shown = match resource {
            "memory" => record.memory_percent,
            _ => record.cpu_percent,
        };
        println!(
            "{:<8} {:<25} {:<15} {:<8.1} {:<5.1}",
            record.pid,
            truncate_name(&record.name, NAME_WIDTH),
            record.username.as_deref().unwrap_or("N/A"),
            shown,
            record.memory_percent
        );
    }

    Ok(())
}
