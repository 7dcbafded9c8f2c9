use std::fs::File;
use std::io::Read;
use std::path::Path;

use ignore::WalkBuilder;
use serde::Serialize;

use crate::error::Result;

/// How many of the largest files the stats keep
const LARGEST_FILES_KEPT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileLines {
    /// Path relative to the project root
    pub path: String,
    pub lines: usize,
}

/// Composition summary of a project tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStats {
    pub total_files: usize,
    pub total_lines: usize,
    /// Lowercased extension (with leading dot, empty for none) -> file count,
    /// descending by count
    pub file_types: Vec<(String, usize)>,
    /// The largest files by line count, descending
    pub largest_files: Vec<FileLines>,
}

/// Walk the tree under `root`, skipping hidden path components, and gather
/// file counts, line totals, per-extension tallies, and the largest files.
///
/// Hidden-name filtering is the only filter applied; VCS ignore rules are
/// deliberately not honored, so build artifacts are counted like anything
/// else. Files that cannot be read are tallied but contribute no lines.
pub fn project_stats(root: &Path) -> Result<ProjectStats> {
    let mut total_files = 0;
    let mut total_lines = 0;
    let mut file_types: Vec<(String, usize)> = Vec::new();
    let mut largest_files: Vec<FileLines> = Vec::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|kind| kind.is_file()) {
            continue;
        }

        total_files += 1;
        bump_extension(&mut file_types, entry.path());

        let Ok(lines) = count_lines(entry.path()) else {
            continue;
        };
        total_lines += lines;

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .to_string();
        largest_files.push(FileLines {
            path: relative,
            lines,
        });
    }

    file_types.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    largest_files.sort_by(|a, b| b.lines.cmp(&a.lines));
    largest_files.truncate(LARGEST_FILES_KEPT);

    Ok(ProjectStats {
        total_files,
        total_lines,
        file_types,
        largest_files,
    })
}

fn bump_extension(file_types: &mut Vec<(String, usize)>, path: &Path) {
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default();

    match file_types.iter_mut().find(|(known, _)| *known == extension) {
        Some((_, count)) => *count += 1,
        None => file_types.push((extension, 1)),
    }
}

/// Count lines the way a text editor would: one per newline, plus a final
/// unterminated line if the file does not end with one.
fn count_lines(path: &Path) -> std::io::Result<usize> {
    let mut file = File::open(path)?;
    let mut buf = [0u8; 8192];
    let mut lines = 0;
    let mut last_byte = None;

    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        lines += buf[..read].iter().filter(|&&byte| byte == b'\n').count();
        last_byte = Some(buf[read - 1]);
    }

    if last_byte.is_some_and(|byte| byte != b'\n') {
        lines += 1;
    }
    Ok(lines)
}
