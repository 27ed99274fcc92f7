// Per-interface counters from /sys/class/net/<iface>/statistics.
// The source is swappable behind the CounterSource trait; the core only
// depends on the six-field contract and the read/parse failure modes.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing counter {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Instantaneous absolute reading of the six tracked counters.
/// Replaced wholesale on each tick; the sampler owns the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub rx_packets: u64,
    pub tx_packets: u64,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub rx_dropped: u64,
    pub tx_dropped: u64,
}

/// Per-second rates derived from two consecutive CounterSnapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateSnapshot {
    pub rx_packets: f64,
    pub tx_packets: f64,
    pub rx_bytes: f64,
    pub tx_bytes: f64,
    pub rx_dropped: f64,
    pub tx_dropped: f64,
}

impl CounterSnapshot {
    /// Per-second rates since `previous`, averaged over `interval_secs`.
    /// A counter that moved backwards (interface reset, counter wrap) clamps
    /// its diff to zero instead of wrapping.
    pub fn rates_since(&self, previous: &CounterSnapshot, interval_secs: u64) -> RateSnapshot {
        let secs = interval_secs as f64;
        let rate = |new: u64, old: u64| new.saturating_sub(old) as f64 / secs;
        RateSnapshot {
            rx_packets: rate(self.rx_packets, previous.rx_packets),
            tx_packets: rate(self.tx_packets, previous.tx_packets),
            rx_bytes: rate(self.rx_bytes, previous.rx_bytes),
            tx_bytes: rate(self.tx_bytes, previous.tx_bytes),
            rx_dropped: rate(self.rx_dropped, previous.rx_dropped),
            tx_dropped: rate(self.tx_dropped, previous.tx_dropped),
        }
    }
}

pub trait CounterSource: Send + Sync {
    fn read(&self, interface: &str) -> Result<CounterSnapshot, CounterError>;
}

/// Reads the six counters from the kernel's per-interface statistics files.
pub struct SysfsCounterSource {
    base: PathBuf,
}

impl SysfsCounterSource {
    pub fn new() -> Self {
        Self::with_base("/sys/class/net")
    }

    /// Source rooted at an alternate directory (tests point this at a tempdir).
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn read_counter(&self, interface: &str, name: &str) -> Result<u64, CounterError> {
        let path = self.base.join(interface).join("statistics").join(name);
        let raw = std::fs::read_to_string(&path).map_err(|source| CounterError::Read {
            path: path.clone(),
            source,
        })?;
        raw.trim()
            .parse()
            .map_err(|source| CounterError::Parse { path, source })
    }
}

impl Default for SysfsCounterSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterSource for SysfsCounterSource {
    fn read(&self, interface: &str) -> Result<CounterSnapshot, CounterError> {
        Ok(CounterSnapshot {
            rx_packets: self.read_counter(interface, "rx_packets")?,
            tx_packets: self.read_counter(interface, "tx_packets")?,
            rx_bytes: self.read_counter(interface, "rx_bytes")?,
            tx_bytes: self.read_counter(interface, "tx_bytes")?,
            rx_dropped: self.read_counter(interface, "rx_dropped")?,
            tx_dropped: self.read_counter(interface, "tx_dropped")?,
        })
    }
}
