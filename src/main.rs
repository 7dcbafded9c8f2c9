use anyhow::Result;
use clap::{value_parser, Arg, Command};

use sysmon::commands;

fn main() -> Result<()> {
    sysmon::init_logging();

    let matches = Command::new("sysmon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("System resource and development workflow monitoring")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("system")
                .about("Sample system resource usage over a period")
                .arg(
                    Arg::new("duration")
                        .long("duration")
                        .value_name("SECONDS")
                        .help("Duration for system monitoring in seconds")
                        .value_parser(value_parser!(u64))
                        .default_value("60"),
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .value_name("SECONDS")
                        .help("Interval between measurements in seconds")
                        .value_parser(value_parser!(u64))
                        .default_value("5"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .value_name("FILE")
                        .help("Save monitoring data to a .json or .csv file"),
                ),
        )
        .subcommand(
            Command::new("processes")
                .about("Show top processes by resource usage")
                .arg(
                    Arg::new("count")
                        .long("count")
                        .value_name("N")
                        .help("Number of top processes to show")
                        .value_parser(value_parser!(usize))
                        .default_value("10"),
                )
                .arg(
                    Arg::new("resource")
                        .long("resource")
                        .value_name("RESOURCE")
                        .help("Resource to sort processes by")
                        .value_parser(["cpu", "memory"])
                        .default_value("cpu"),
                ),
        )
        .subcommand(
            Command::new("log")
                .about("Analyze a log file for error patterns")
                .arg(
                    Arg::new("log-path")
                        .long("log-path")
                        .value_name("FILE")
                        .help("Path to the log file to analyze")
                        .required(true),
                )
                .arg(
                    Arg::new("pattern")
                        .long("pattern")
                        .value_name("REGEX")
                        .help("Additional pattern to search for (case-insensitive regex)"),
                ),
        )
        .subcommand(
            Command::new("workflow")
                .about("Summarize a project's version control and file tree")
                .arg(
                    Arg::new("project-path")
                        .long("project-path")
                        .value_name("DIR")
                        .help("Path to the project directory")
                        .default_value("."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("system", sub_matches)) => commands::system::execute(sub_matches),
        Some(("processes", sub_matches)) => commands::processes::execute(sub_matches),
        Some(("log", sub_matches)) => commands::log::execute(sub_matches),
        Some(("workflow", sub_matches)) => commands::workflow::execute(sub_matches),
        _ => unreachable!("subcommand is required"),
    }
}
