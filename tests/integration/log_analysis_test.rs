use std::io::Write;

use sysmon::core::log_scanner::{LogScanner, BUILTIN_PATTERNS};
use tempfile::NamedTempFile;

fn write_log(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

#[test]
fn builtin_pattern_set_matches_the_documented_signatures() {
    assert_eq!(
        BUILTIN_PATTERNS,
        ["error", "exception", "fail", "traceback", "critical", "fatal"]
    );
}

#[test]
fn mixed_log_reports_per_pattern_and_overall_counts() {
    let file = write_log(&["ok", "ERROR: disk full", "normal", "Exception in thread"]);
    let analysis = LogScanner::new(None).unwrap().scan(file.path(), None).unwrap();

    assert_eq!(analysis.total_lines, 4);
    assert_eq!(analysis.error_lines, 2);
    assert_eq!(
        analysis.pattern_counts,
        vec![("error".to_string(), 1), ("exception".to_string(), 1)]
    );
}

#[test]
fn user_pattern_extends_the_builtin_set() {
    let file = write_log(&[
        "connection reset by peer",
        "CRITICAL: out of memory",
        "connection reset by peer",
    ]);
    let analysis = LogScanner::new(Some("connection reset"))
        .unwrap()
        .scan(file.path(), None)
        .unwrap();

    assert_eq!(analysis.error_lines, 3);
    assert_eq!(
        analysis.pattern_counts,
        vec![
            ("connection reset".to_string(), 2),
            ("critical".to_string(), 1),
        ]
    );
}

#[test]
fn error_rate_is_percentage_of_matching_lines() {
    let file = write_log(&["fail", "ok", "ok", "ok"]);
    let analysis = LogScanner::new(None).unwrap().scan(file.path(), None).unwrap();

    assert!((analysis.error_rate() - 25.0).abs() < f64::EPSILON);
}

#[test]
fn full_match_list_is_kept_even_past_the_display_preview() {
    // The display layer shows 5 matches; the scanner must keep them all so
    // the per-pattern totals stay correct.
    let lines: Vec<String> = (0..20).map(|i| format!("error number {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let file = write_log(&refs);

    let analysis = LogScanner::new(None).unwrap().scan(file.path(), None).unwrap();
    assert_eq!(analysis.matches.len(), 20);
    assert_eq!(analysis.pattern_counts, vec![("error".to_string(), 20)]);
}
