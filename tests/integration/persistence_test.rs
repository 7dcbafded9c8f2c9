use std::time::Duration;

use sysmon::core::persistence::{load_snapshots_csv, save_snapshots};
use sysmon::core::probe::MetricsProbe;
use sysmon::core::sampler::Sampler;
use sysmon::core::metrics::SystemSnapshot;
use tempfile::tempdir;

fn capture_some_snapshots() -> Vec<SystemSnapshot> {
    let mut sampler = Sampler::new(MetricsProbe::new());
    sampler
        .run(Duration::from_millis(200), Duration::from_millis(100), None, |_| {})
        .unwrap()
}

#[test]
fn live_snapshots_round_trip_through_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.csv");
    let snapshots = capture_some_snapshots();

    save_snapshots(&path, &snapshots).unwrap();
    let restored = load_snapshots_csv(&path).unwrap();
    assert_eq!(restored, snapshots);
}

#[test]
fn live_snapshots_round_trip_through_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.json");
    let snapshots = capture_some_snapshots();

    save_snapshots(&path, &snapshots).unwrap();
    let data = std::fs::read_to_string(&path).unwrap();
    let restored: Vec<SystemSnapshot> = serde_json::from_str(&data).unwrap();
    assert_eq!(restored, snapshots);
}

#[test]
fn csv_rows_match_snapshot_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rows.csv");
    let snapshots = capture_some_snapshots();

    save_snapshots(&path, &snapshots).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    // Header plus one row per snapshot.
    assert_eq!(contents.lines().count(), snapshots.len() + 1);
}
