use chrono::Local;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use crate::error::{MonitorError, Result};

use super::metrics::{DiskUsage, MemoryUsage, NetworkCounters, SystemSnapshot};

/// Source of point-in-time system snapshots.
///
/// The seam that lets the sampler run against a fake in tests.
pub trait Probe {
    fn capture(&mut self) -> Result<SystemSnapshot>;
}

/// Reads instantaneous OS counters (CPU, memory, disk, network) via sysinfo.
///
/// CPU usage is computed from the delta between two refreshes, so `new()`
/// performs a warm-up refresh and sleeps for `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`.
/// Construction blocks briefly; the first `capture()` after that returns a
/// meaningful baseline rather than zero.
pub struct MetricsProbe {
    system: System,
    disks: Disks,
    networks: Networks,
}

impl MetricsProbe {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());

        let system = System::new_with_specifics(refresh_kind);
        let disks = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();

        // Warm-up window so the first capture has a usable CPU delta.
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

        Self {
            system,
            disks,
            networks,
        }
    }

    fn disk_usage(&self) -> Result<DiskUsage> {
        // The probed mount is the filesystem root where one exists, otherwise
        // the first disk the OS reports.
        let root = self
            .disks
            .iter()
            .find(|disk| disk.mount_point() == std::path::Path::new("/"))
            .or_else(|| self.disks.iter().next())
            .ok_or_else(|| {
                MonitorError::probe_unavailable("no disk visible for usage query")
            })?;

        let total = root.total_space();
        let free = root.available_space();
        let used = total.saturating_sub(free);

        Ok(DiskUsage {
            total_bytes: total,
            used_bytes: used,
            free_bytes: free,
            usage_percent: percent_of(used, total),
        })
    }

    fn memory_usage(&self) -> MemoryUsage {
        let total = self.system.total_memory();
        let used = self.system.used_memory();

        MemoryUsage {
            total_bytes: total,
            available_bytes: self.system.available_memory(),
            used_bytes: used,
            usage_percent: percent_of(used, total),
        }
    }

    fn network_counters(&self) -> NetworkCounters {
        let mut counters = NetworkCounters::default();
        for data in self.networks.values() {
            counters.bytes_recv += data.total_received();
            counters.bytes_sent += data.total_transmitted();
        }
        counters
    }
}

impl Default for MetricsProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl Probe for MetricsProbe {
    fn capture(&mut self) -> Result<SystemSnapshot> {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();
        self.disks.refresh(true);
        self.networks.refresh(true);

        let cpu_count = self.system.cpus().len();
        if cpu_count == 0 {
            return Err(MonitorError::probe_unavailable("no CPUs reported"));
        }

        Ok(SystemSnapshot {
            timestamp: Local::now(),
            cpu_percent: self.system.global_cpu_usage(),
            cpu_count,
            memory: self.memory_usage(),
            disk: self.disk_usage()?,
            network: self.network_counters(),
        })
    }
}

fn percent_of(part: u64, whole: u64) -> f32 {
    if whole > 0 {
        (part as f32 / whole as f32) * 100.0
    } else {
        0.0
    }
}
