use chrono::{DateTime, Local};
use regex::RegexBuilder;
use serde::Serialize;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind, Users};

use crate::error::Result;

/// Usage data for a single live process.
///
/// Records carry no identity across enumeration calls; a pid recycled by the
/// OS between calls is simply a new record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    /// None when the owning user cannot be resolved (access denied or
    /// unknown uid); the record itself is kept.
    pub username: Option<String>,
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub create_time: DateTime<Local>,
}

/// Lists live processes with per-process resource usage.
///
/// Enumeration is a best-effort snapshot of an externally mutating process
/// table: an entry that exits mid-refresh drops out of the table and is never
/// surfaced as an error. An entry whose required fields cannot be read at all
/// is skipped entirely.
pub struct ProcessEnumerator {
    system: System,
    users: Users,
}

impl ProcessEnumerator {
    /// Build refreshed process and user tables.
    ///
    /// Per-process CPU usage is a delta between refreshes, so construction
    /// primes the table and sleeps one `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`;
    /// the first `list()` then reports meaningful figures.
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_memory();
        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            Self::refresh_kind(),
        );
        let users = Users::new_with_refreshed_list();

        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

        Self { system, users }
    }

    fn refresh_kind() -> ProcessRefreshKind {
        ProcessRefreshKind::nothing()
            .with_cpu()
            .with_memory()
            .with_user(UpdateKind::OnlyIfNotSet)
    }

    /// Enumerate all visible processes, optionally filtered by name.
    ///
    /// `name_filter` is a case-insensitive regex matched as a substring
    /// against the process name. No ordering guarantee on the result.
    pub fn list(&mut self, name_filter: Option<&str>) -> Result<Vec<ProcessRecord>> {
        // Compile before touching the process table so a bad pattern fails fast.
        let filter = name_filter
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
            })
            .transpose()?;

        self.system.refresh_memory();
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            Self::refresh_kind(),
        );

        let total_memory = self.system.total_memory();
        let mut records = Vec::with_capacity(self.system.processes().len());

        for (pid, process) in self.system.processes() {
            let name = process.name().to_string_lossy().to_string();
            // A nameless entry is one that vanished before its fields could
            // be read; skip the whole record.
            if name.is_empty() {
                continue;
            }

            if let Some(ref regex) = filter {
                if !regex.is_match(&name) {
                    continue;
                }
            }

            let username = process
                .user_id()
                .and_then(|uid| self.users.get_user_by_id(uid))
                .map(|user| user.name().to_string());

            let memory = process.memory();
            records.push(ProcessRecord {
                pid: pid.as_u32(),
                name,
                username,
                cpu_percent: process.cpu_usage(),
                memory_percent: if total_memory > 0 {
                    (memory as f32 / total_memory as f32) * 100.0
                } else {
                    0.0
                },
                create_time: DateTime::from_timestamp(process.start_time() as i64, 0)
                    .unwrap_or(DateTime::UNIX_EPOCH)
                    .with_timezone(&Local),
            });
        }

        log::debug!("enumerated {} processes", records.len());
        Ok(records)
    }
}

impl Default for ProcessEnumerator {
    fn default() -> Self {
        Self::new()
    }
}
