use std::time::Duration;

use sysmon::core::probe::MetricsProbe;
use sysmon::core::sampler::{CancelToken, Sampler};

#[test]
fn zero_duration_run_captures_exactly_one_snapshot() {
    let mut sampler = Sampler::new(MetricsProbe::new());
    let snapshots = sampler
        .run(Duration::ZERO, Duration::from_secs(5), None, |_| {})
        .unwrap();

    assert_eq!(snapshots.len(), 1);
    assert!(snapshots[0].cpu_count >= 1);
    assert!(snapshots[0].memory.total_bytes > 0);
}

#[test]
fn short_run_is_ordered_by_capture_time() {
    let mut sampler = Sampler::new(MetricsProbe::new());
    let snapshots = sampler
        .run(
            Duration::from_millis(600),
            Duration::from_millis(300),
            None,
            |_| {},
        )
        .unwrap();

    assert_eq!(snapshots.len(), 3);
    assert!(snapshots
        .windows(2)
        .all(|pair| pair[0].timestamp <= pair[1].timestamp));
}

#[test]
fn pre_cancelled_run_stops_after_the_first_capture() {
    let token = CancelToken::new();
    token.cancel();

    let mut sampler = Sampler::new(MetricsProbe::new());
    let snapshots = sampler
        .run(
            Duration::from_secs(120),
            Duration::from_secs(30),
            Some(&token),
            |_| {},
        )
        .unwrap();

    assert_eq!(snapshots.len(), 1);
}
