// Development workflow inspection: version control + project composition

pub mod git;
pub mod project;

use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::Result;

pub use git::RepoStatus;
pub use project::{FileLines, ProjectStats};

/// Combined version-control and file-tree summary for a project directory
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowReport {
    pub timestamp: DateTime<Local>,
    /// None when the directory is not inside a Git repository
    pub git: Option<RepoStatus>,
    pub project: ProjectStats,
}

/// Compose a workflow report for the project rooted at `path`.
pub fn inspect(path: &Path) -> Result<WorkflowReport> {
    let git = git::repo_status(path)?;
    let project = project::project_stats(path)?;

    Ok(WorkflowReport {
        timestamp: Local::now(),
        git,
        project,
    })
}
