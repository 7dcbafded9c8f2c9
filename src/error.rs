use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the sysmon application
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("System metrics unavailable: {0}")]
    ProbeUnavailable(String),

    #[error("Invalid metric '{0}': expected 'cpu' or 'memory'")]
    InvalidMetric(String),

    #[error("Log file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for the sysmon application
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Create a probe-unavailable error
    pub fn probe_unavailable<S: Into<String>>(msg: S) -> Self {
        MonitorError::ProbeUnavailable(msg.into())
    }

    /// Create a persistence error
    pub fn persistence<S: Into<String>>(msg: S) -> Self {
        MonitorError::Persistence(msg.into())
    }
}
