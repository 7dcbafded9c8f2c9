use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Point-in-time capture of host resource metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub timestamp: DateTime<Local>,
    pub cpu_percent: f32,
    pub cpu_count: usize,
    pub memory: MemoryUsage,
    pub disk: DiskUsage,
    pub network: NetworkCounters,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub usage_percent: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub usage_percent: f32,
}

/// Cumulative transfer counters summed across all interfaces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkCounters {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}
