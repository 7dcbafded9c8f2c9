// sysmon Library - Public API

// Re-export error types
pub mod error;
pub use error::{MonitorError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;
pub mod workflow;

// Re-export commonly used types
pub use core::log_scanner::{LogAnalysis, LogScanner};
pub use core::metrics::SystemSnapshot;
pub use core::processes::{ProcessEnumerator, ProcessRecord};
pub use core::sampler::{CancelToken, Sampler};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
