use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::{MonitorError, Result};

use super::metrics::{DiskUsage, MemoryUsage, NetworkCounters, SystemSnapshot};

/// Flat column order for the tabular format. Nested groups expand into
/// prefixed scalar fields.
const CSV_COLUMNS: [&str; 13] = [
    "timestamp",
    "cpu_percent",
    "cpu_count",
    "memory_total",
    "memory_available",
    "memory_percent",
    "memory_used",
    "disk_total",
    "disk_used",
    "disk_free",
    "disk_percent",
    "network_bytes_sent",
    "network_bytes_recv",
];

/// Persist a snapshot sequence, dispatching on the file extension:
/// `.json` for the structured format, `.csv` for the flat tabular one.
pub fn save_snapshots(path: &Path, snapshots: &[SystemSnapshot]) -> Result<()> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => {
            let file = File::create(path)?;
            serde_json::to_writer_pretty(BufWriter::new(file), snapshots)?;
            Ok(())
        }
        "csv" => write_csv(path, snapshots),
        other => Err(MonitorError::persistence(format!(
            "unsupported output format '.{other}' (expected .json or .csv)"
        ))),
    }
}

fn write_csv(path: &Path, snapshots: &[SystemSnapshot]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CSV_COLUMNS.join(","))?;
    for snapshot in snapshots {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{},{},{}",
            snapshot.timestamp.to_rfc3339(),
            snapshot.cpu_percent,
            snapshot.cpu_count,
            snapshot.memory.total_bytes,
            snapshot.memory.available_bytes,
            snapshot.memory.usage_percent,
            snapshot.memory.used_bytes,
            snapshot.disk.total_bytes,
            snapshot.disk.used_bytes,
            snapshot.disk.free_bytes,
            snapshot.disk.usage_percent,
            snapshot.network.bytes_sent,
            snapshot.network.bytes_recv,
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Re-parse a flat tabular file written by `save_snapshots`. All scalar
/// fields round-trip exactly; timestamps travel as RFC 3339.
pub fn load_snapshots_csv(path: &Path) -> Result<Vec<SystemSnapshot>> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| MonitorError::persistence("empty file, expected a header row"))?;
    if header != CSV_COLUMNS.join(",") {
        return Err(MonitorError::persistence(format!(
            "unexpected header row: {header}"
        )));
    }

    let mut snapshots = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        snapshots.push(parse_row(&line).map_err(|err| {
            MonitorError::persistence(format!("row {}: {err}", index + 2))
        })?);
    }
    Ok(snapshots)
}

fn parse_row(line: &str) -> std::result::Result<SystemSnapshot, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != CSV_COLUMNS.len() {
        return Err(format!(
            "expected {} fields, found {}",
            CSV_COLUMNS.len(),
            fields.len()
        ));
    }

    let timestamp = DateTime::parse_from_rfc3339(fields[0])
        .map_err(|err| format!("bad timestamp: {err}"))?
        .with_timezone(&Local);

    Ok(SystemSnapshot {
        timestamp,
        cpu_percent: parse_field(fields[1], "cpu_percent")?,
        cpu_count: parse_field(fields[2], "cpu_count")?,
        memory: MemoryUsage {
            total_bytes: parse_field(fields[3], "memory_total")?,
            available_bytes: parse_field(fields[4], "memory_available")?,
            usage_percent: parse_field(fields[5], "memory_percent")?,
            used_bytes: parse_field(fields[6], "memory_used")?,
        },
        disk: DiskUsage {
            total_bytes: parse_field(fields[7], "disk_total")?,
            used_bytes: parse_field(fields[8], "disk_used")?,
            free_bytes: parse_field(fields[9], "disk_free")?,
            usage_percent: parse_field(fields[10], "disk_percent")?,
        },
        network: NetworkCounters {
            bytes_sent: parse_field(fields[11], "network_bytes_sent")?,
            bytes_recv: parse_field(fields[12], "network_bytes_recv")?,
        },
    })
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str) -> std::result::Result<T, String> {
    raw.parse()
        .map_err(|_| format!("bad value '{raw}' for {name}"))
}
