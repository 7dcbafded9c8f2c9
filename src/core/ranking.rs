use std::str::FromStr;

use crate::error::{MonitorError, Result};

use super::processes::{ProcessEnumerator, ProcessRecord};

/// Resource dimension used for ranking processes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMetric {
    Cpu,
    Memory,
}

impl RankMetric {
    pub fn label(self) -> &'static str {
        match self {
            RankMetric::Cpu => "cpu",
            RankMetric::Memory => "memory",
        }
    }

    fn value_of(self, record: &ProcessRecord) -> f32 {
        match self {
            RankMetric::Cpu => record.cpu_percent,
            RankMetric::Memory => record.memory_percent,
        }
    }
}

impl FromStr for RankMetric {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cpu" => Ok(RankMetric::Cpu),
            "memory" => Ok(RankMetric::Memory),
            other => Err(MonitorError::InvalidMetric(other.to_string())),
        }
    }
}

/// Order records descending by `metric` and keep the first `count`.
///
/// The sort is stable, so ties keep their enumeration order. A `count` of 0
/// yields an empty sequence; a `count` past the table yields everything.
pub fn rank_top(mut records: Vec<ProcessRecord>, count: usize, metric: RankMetric) -> Vec<ProcessRecord> {
    records.sort_by(|a, b| {
        metric
            .value_of(b)
            .partial_cmp(&metric.value_of(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    records.truncate(count);
    records
}

/// Top `count` processes by the resource named in `resource`.
///
/// Fails with `InvalidMetric` before enumerating when `resource` is not
/// `cpu` or `memory`.
pub fn top_processes(
    enumerator: &mut ProcessEnumerator,
    count: usize,
    resource: &str,
) -> Result<Vec<ProcessRecord>> {
    let metric = resource.parse::<RankMetric>()?;
    let records = enumerator.list(None)?;
    Ok(rank_top(records, count, metric))
}
