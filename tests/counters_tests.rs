// Sysfs counter source and rate derivation tests

mod common;

use common::counters;
use netmon::counters::{CounterError, CounterSource, SysfsCounterSource};
use std::fs;
use std::path::Path;

const NAMES: [&str; 6] = [
    "rx_packets",
    "tx_packets",
    "rx_bytes",
    "tx_bytes",
    "rx_dropped",
    "tx_dropped",
];

fn write_statistics(base: &Path, interface: &str, values: [&str; 6]) {
    let dir = base.join(interface).join("statistics");
    fs::create_dir_all(&dir).unwrap();
    for (name, value) in NAMES.iter().zip(values) {
        fs::write(dir.join(name), value).unwrap();
    }
}

#[test]
fn test_sysfs_source_reads_all_six_counters() {
    let dir = tempfile::TempDir::new().unwrap();
    write_statistics(dir.path(), "eth0", ["1", "2", "300", "400", "5", "6"]);

    let source = SysfsCounterSource::with_base(dir.path());
    let snapshot = source.read("eth0").unwrap();
    assert_eq!(snapshot, counters(1, 2, 300, 400, 5, 6));
}

#[test]
fn test_sysfs_source_trims_trailing_newline() {
    let dir = tempfile::TempDir::new().unwrap();
    write_statistics(dir.path(), "eth0", ["7\n", "8\n", "9\n", "10\n", "0\n", "0\n"]);

    let source = SysfsCounterSource::with_base(dir.path());
    let snapshot = source.read("eth0").unwrap();
    assert_eq!(snapshot.rx_packets, 7);
    assert_eq!(snapshot.tx_bytes, 10);
}

#[test]
fn test_missing_counter_file_is_a_read_error_naming_the_path() {
    let dir = tempfile::TempDir::new().unwrap();
    write_statistics(dir.path(), "eth0", ["1", "2", "3", "4", "5", "6"]);
    fs::remove_file(dir.path().join("eth0/statistics/tx_bytes")).unwrap();

    let source = SysfsCounterSource::with_base(dir.path());
    match source.read("eth0").unwrap_err() {
        CounterError::Read { path, .. } => assert!(path.ends_with("tx_bytes")),
        other => panic!("expected read error, got {other}"),
    }
}

#[test]
fn test_unknown_interface_is_a_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = SysfsCounterSource::with_base(dir.path());
    assert!(matches!(
        source.read("missing0").unwrap_err(),
        CounterError::Read { .. }
    ));
}

#[test]
fn test_non_numeric_counter_is_a_parse_error_naming_the_path() {
    let dir = tempfile::TempDir::new().unwrap();
    write_statistics(dir.path(), "eth0", ["1", "2", "bogus", "4", "5", "6"]);

    let source = SysfsCounterSource::with_base(dir.path());
    match source.read("eth0").unwrap_err() {
        CounterError::Parse { path, .. } => assert!(path.ends_with("rx_bytes")),
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn test_negative_counter_is_a_parse_error() {
    let dir = tempfile::TempDir::new().unwrap();
    write_statistics(dir.path(), "eth0", ["-1", "2", "3", "4", "5", "6"]);

    let source = SysfsCounterSource::with_base(dir.path());
    assert!(matches!(
        source.read("eth0").unwrap_err(),
        CounterError::Parse { .. }
    ));
}

#[test]
fn test_rates_are_exact_for_monotonic_counters() {
    let old = counters(100, 200, 1_000, 2_000, 0, 10);
    let new = counters(600, 700, 6_000, 12_000, 5, 10);
    let rates = new.rates_since(&old, 5);
    assert_eq!(rates.rx_packets, 100.0);
    assert_eq!(rates.tx_packets, 100.0);
    assert_eq!(rates.rx_bytes, 1_000.0);
    assert_eq!(rates.tx_bytes, 2_000.0);
    assert_eq!(rates.rx_dropped, 1.0);
    assert_eq!(rates.tx_dropped, 0.0);
}

#[test]
fn test_decreased_counter_clamps_to_zero_rate() {
    // Interface reset: every counter restarts below its predecessor.
    let old = counters(1_000, 1_000, 1_000, 1_000, 1_000, 1_000);
    let new = counters(10, 0, 500, 999, 3, 7);
    let rates = new.rates_since(&old, 5);
    assert_eq!(rates.rx_packets, 0.0);
    assert_eq!(rates.tx_packets, 0.0);
    assert_eq!(rates.rx_bytes, 0.0);
    assert_eq!(rates.tx_bytes, 0.0);
    assert_eq!(rates.rx_dropped, 0.0);
    assert_eq!(rates.tx_dropped, 0.0);
}

#[test]
fn test_mixed_decrease_only_clamps_affected_fields() {
    let old = counters(100, 100, 100, 100, 0, 0);
    let new = counters(50, 150, 100, 600, 0, 0);
    let rates = new.rates_since(&old, 5);
    assert_eq!(rates.rx_packets, 0.0);
    assert_eq!(rates.tx_packets, 10.0);
    assert_eq!(rates.rx_bytes, 0.0);
    assert_eq!(rates.tx_bytes, 100.0);
}
