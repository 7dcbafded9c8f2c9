use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::{MonitorError, Result};

use super::sampler::CancelToken;

/// Error signatures every scan looks for, in evaluation order.
pub const BUILTIN_PATTERNS: [&str; 6] =
    ["error", "exception", "fail", "traceback", "critical", "fatal"];

/// One line that matched one pattern
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogMatch {
    /// 1-based line number in the source
    pub line_number: usize,
    /// Line text with the trailing newline trimmed
    pub line: String,
    pub pattern: String,
}

/// Aggregated result of a single scan pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogAnalysis {
    pub source: String,
    pub total_lines: usize,
    /// Lines matching at least one pattern, each counted once
    pub error_lines: usize,
    /// Per-pattern match counts in first-seen order
    pub pattern_counts: Vec<(String, usize)>,
    /// Every match, unbounded; display truncation is the caller's business
    pub matches: Vec<LogMatch>,
}

impl LogAnalysis {
    fn new(source: String) -> Self {
        Self {
            source,
            total_lines: 0,
            error_lines: 0,
            pattern_counts: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Share of lines matching any pattern, as a percentage. An empty source
    /// reports 0 rather than dividing by zero.
    pub fn error_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            self.error_lines as f64 / self.total_lines as f64 * 100.0
        }
    }
}

/// Streams a text file line by line, matching each line against a fixed set
/// of case-insensitive patterns.
pub struct LogScanner {
    patterns: Vec<(String, Regex)>,
}

impl LogScanner {
    /// Compile the built-in patterns plus an optional user pattern.
    ///
    /// The user pattern is treated as a regex, evaluated after the built-ins
    /// with the same case-insensitivity; escaping literal text is the
    /// caller's responsibility.
    pub fn new(extra_pattern: Option<&str>) -> Result<Self> {
        let mut patterns = Vec::with_capacity(BUILTIN_PATTERNS.len() + 1);
        for pattern in BUILTIN_PATTERNS {
            patterns.push((pattern.to_string(), compile(pattern)?));
        }
        if let Some(extra) = extra_pattern {
            patterns.push((extra.to_string(), compile(extra)?));
        }
        Ok(Self { patterns })
    }

    /// Scan `path`, aggregating per-pattern counts and all matching lines.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than aborting the
    /// scan. A line matching several patterns counts once toward
    /// `error_lines` but once per pattern in `pattern_counts` and `matches`.
    /// `cancel`, when raised, stops the scan and returns what was
    /// accumulated so far.
    pub fn scan(&self, path: &Path, cancel: Option<&CancelToken>) -> Result<LogAnalysis> {
        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => MonitorError::SourceNotFound(path.to_path_buf()),
            _ => MonitorError::Io(err),
        })?;
        let mut reader = BufReader::new(file);

        let mut analysis = LogAnalysis::new(path.display().to_string());
        let mut buf = Vec::new();

        loop {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                log::info!("log scan cancelled at line {}", analysis.total_lines);
                break;
            }

            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            analysis.total_lines += 1;

            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.trim_end_matches(['\n', '\r']);

            let mut matched_any = false;
            for (name, regex) in &self.patterns {
                if !regex.is_match(line) {
                    continue;
                }
                matched_any = true;
                analysis.matches.push(LogMatch {
                    line_number: analysis.total_lines,
                    line: line.to_string(),
                    pattern: name.clone(),
                });
                bump_count(&mut analysis.pattern_counts, name);
            }
            if matched_any {
                analysis.error_lines += 1;
            }
        }

        Ok(analysis)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

fn bump_count(counts: &mut Vec<(String, usize)>, name: &str) {
    match counts.iter_mut().find(|(known, _)| known == name) {
        Some((_, count)) => *count += 1,
        None => counts.push((name.to_string(), 1)),
    }
}
