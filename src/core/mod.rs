// Core monitoring engine

pub mod log_scanner;
pub mod metrics;
pub mod persistence;
pub mod probe;
pub mod processes;
pub mod ranking;
pub mod sampler;

// Re-export commonly used items
pub use log_scanner::{LogAnalysis, LogMatch, LogScanner, BUILTIN_PATTERNS};
pub use metrics::{DiskUsage, MemoryUsage, NetworkCounters, SystemSnapshot};
pub use probe::{MetricsProbe, Probe};
pub use processes::{ProcessEnumerator, ProcessRecord};
pub use ranking::{rank_top, top_processes, RankMetric};
pub use sampler::{CancelToken, Sampler};
