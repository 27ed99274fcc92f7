// Shared test helpers
#![allow(dead_code)]

use netmon::config::{Categories, Direction, MonitorConfig};
use netmon::counters::{CounterError, CounterSnapshot, CounterSource, RateSnapshot};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

/// Counter source that replays a scripted sequence of reads, then fails.
pub struct FakeCounterSource {
    reads: Mutex<VecDeque<Result<CounterSnapshot, CounterError>>>,
}

impl FakeCounterSource {
    pub fn new(reads: Vec<Result<CounterSnapshot, CounterError>>) -> Self {
        Self {
            reads: Mutex::new(reads.into()),
        }
    }
}

impl CounterSource for FakeCounterSource {
    fn read(&self, _interface: &str) -> Result<CounterSnapshot, CounterError> {
        self.reads
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(read_error("exhausted")))
    }
}

pub fn read_error(path: &str) -> CounterError {
    CounterError::Read {
        path: PathBuf::from(path),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    }
}

pub fn counters(
    rx_packets: u64,
    tx_packets: u64,
    rx_bytes: u64,
    tx_bytes: u64,
    rx_dropped: u64,
    tx_dropped: u64,
) -> CounterSnapshot {
    CounterSnapshot {
        rx_packets,
        tx_packets,
        rx_bytes,
        tx_bytes,
        rx_dropped,
        tx_dropped,
    }
}

pub fn rates(
    rx_packets: f64,
    tx_packets: f64,
    rx_bytes: f64,
    tx_bytes: f64,
    rx_dropped: f64,
    tx_dropped: f64,
) -> RateSnapshot {
    RateSnapshot {
        rx_packets,
        tx_packets,
        rx_bytes,
        tx_bytes,
        rx_dropped,
        tx_dropped,
    }
}

pub fn text_config(categories: Categories, direction: Direction) -> MonitorConfig {
    MonitorConfig {
        interface: "eth0".to_string(),
        categories,
        direction,
        chart: false,
        interval_secs: 5,
        show_interface: true,
    }
}
