use std::path::Path;

use git2::{ErrorCode, Repository, StatusOptions};
use serde::Serialize;

use crate::error::Result;

/// Version-control summary for a project directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepoStatus {
    pub branch: String,
    /// True when the working tree or index differs from HEAD (untracked
    /// files included, ignored files not)
    pub has_changes: bool,
    /// "<short id> - <author>, <age> : <summary>"
    pub last_commit: String,
}

/// Inspect the repository containing `path`. `None` when no repository is
/// discovered at or above it.
pub fn repo_status(path: &Path) -> Result<Option<RepoStatus>> {
    let repo = match Repository::discover(path) {
        Ok(repo) => repo,
        Err(err) if err.code() == ErrorCode::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    Ok(Some(RepoStatus {
        branch: branch_name(&repo),
        has_changes: has_changes(&repo)?,
        last_commit: last_commit_line(&repo),
    }))
}

fn branch_name(repo: &Repository) -> String {
    match repo.head() {
        Ok(head) if head.is_branch() => head.shorthand().unwrap_or("unknown").to_string(),
        Ok(_) => "(detached)".to_string(),
        // Unborn HEAD: a freshly initialized repository without commits.
        Err(_) => "unknown".to_string(),
    }
}

fn has_changes(repo: &Repository) -> Result<bool> {
    if repo.is_bare() {
        return Ok(false);
    }

    let mut options = StatusOptions::new();
    options.include_untracked(true).include_ignored(false);
    let statuses = repo.statuses(Some(&mut options))?;
    Ok(!statuses.is_empty())
}

fn last_commit_line(repo: &Repository) -> String {
    let commit = match repo.head().and_then(|head| head.peel_to_commit()) {
        Ok(commit) => commit,
        Err(_) => return "unknown".to_string(),
    };

    let short_id = commit
        .as_object()
        .short_id()
        .ok()
        .and_then(|buf| buf.as_str().map(str::to_string))
        .unwrap_or_else(|| commit.id().to_string());
    let author = commit.author().name().unwrap_or("unknown").to_string();
    let age = format_age(chrono::Utc::now().timestamp() - commit.time().seconds());
    let summary = commit.summary().unwrap_or("").to_string();

    format!("{short_id} - {author}, {age} : {summary}")
}

/// Coarse relative age, newest unit only
fn format_age(seconds: i64) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    if seconds < MINUTE {
        "just now".to_string()
    } else if seconds < HOUR {
        let minutes = seconds / MINUTE;
        format!("{minutes} minute{} ago", plural(minutes))
    } else if seconds < DAY {
        let hours = seconds / HOUR;
        format!("{hours} hour{} ago", plural(hours))
    } else {
        let days = seconds / DAY;
        format!("{days} day{} ago", plural(days))
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
