use sysmon::core::processes::ProcessEnumerator;
use sysmon::core::ranking::top_processes;
use sysmon::error::MonitorError;

#[test]
fn top_processes_are_bounded_and_ordered() {
    let mut enumerator = ProcessEnumerator::new();
    let top = top_processes(&mut enumerator, 5, "cpu").unwrap();

    assert!(top.len() <= 5);
    assert!(top
        .windows(2)
        .all(|pair| pair[0].cpu_percent >= pair[1].cpu_percent));
}

#[test]
fn memory_ranking_orders_by_memory_share() {
    let mut enumerator = ProcessEnumerator::new();
    let top = top_processes(&mut enumerator, 10, "memory").unwrap();

    assert!(top
        .windows(2)
        .all(|pair| pair[0].memory_percent >= pair[1].memory_percent));
}

#[test]
fn zero_count_returns_an_empty_ranking() {
    let mut enumerator = ProcessEnumerator::new();
    let top = top_processes(&mut enumerator, 0, "cpu").unwrap();
    assert!(top.is_empty());
}

#[test]
fn unknown_resource_fails_before_enumerating() {
    let mut enumerator = ProcessEnumerator::new();
    let result = top_processes(&mut enumerator, 5, "disk");
    assert!(matches!(result, Err(MonitorError::InvalidMetric(_))));
}
