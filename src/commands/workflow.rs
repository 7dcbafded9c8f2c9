use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use colored::*;

use crate::workflow;

const FILE_TYPES_SHOWN: usize = 10;
const LARGEST_SHOWN: usize = 5;

/// Execute the workflow command: print the version-control and file-tree
/// summary for a project directory.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let project_path = matches
        .get_one::<String>("project-path")
        .map(String::as_str)
        .unwrap_or(".");

    let report = workflow::inspect(Path::new(project_path))?;

    println!("Workflow monitoring for: {}", project_path.cyan().bold());
    println!("{}", "=".repeat(50));

    match &report.git {
        Some(git) => {
            println!("Git branch: {}", git.branch.green().bold());
            println!("Has uncommitted changes: {}", git.has_changes);
            println!("Last commit: {}", git.last_commit);
        }
        None => println!("{}", "Not a Git repository".yellow()),
    }

    let project = &report.project;
    println!();
    println!("{}", "Project stats:".white().bold());
    println!("  Total files: {}", project.total_files);
    println!("  Total lines: {}", project.total_lines);

    println!();
    println!("{}", "File types:".white().bold());
    for (extension, count) in project.file_types.iter().take(FILE_TYPES_SHOWN) {
        let label = if extension.is_empty() {
            "no extension"
        } else {
            extension
        };
        println!("  {}: {}", label, count);
    }

    println!();
    println!("{}", "Largest files:".white().bold());
    for file in project.largest_files.iter().take(LARGEST_SHOWN) {
        println!("  {}: {} lines", file.path, file.lines);
    }

    Ok(())
}
