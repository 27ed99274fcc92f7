use crate::counters::RateSnapshot;

/// Which traffic direction(s) to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Both,
    ReceiveOnly,
    TransmitOnly,
}

/// One statistic family: packet count, byte transfer, or drop count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Count,
    Transfer,
    Dropped,
}

/// Selected statistic families, rendered in the order count, transfer, dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Categories {
    pub count: bool,
    pub transfer: bool,
    pub dropped: bool,
}

impl Categories {
    pub fn all() -> Self {
        Self {
            count: true,
            transfer: true,
            dropped: true,
        }
    }

    /// Selected categories in render order.
    pub fn selected(&self) -> Vec<Category> {
        let mut out = Vec::with_capacity(3);
        if self.count {
            out.push(Category::Count);
        }
        if self.transfer {
            out.push(Category::Transfer);
        }
        if self.dropped {
            out.push(Category::Dropped);
        }
        out
    }
}

/// The single per-second scalar a chart run tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMetric {
    PacketsRx,
    PacketsTx,
    BytesRx,
    BytesTx,
    DropsRx,
    DropsTx,
}

impl ChartMetric {
    pub fn extract(&self, rates: &RateSnapshot) -> f64 {
        match self {
            ChartMetric::PacketsRx => rates.rx_packets,
            ChartMetric::PacketsTx => rates.tx_packets,
            ChartMetric::BytesRx => rates.rx_bytes,
            ChartMetric::BytesTx => rates.tx_bytes,
            ChartMetric::DropsRx => rates.rx_dropped,
            ChartMetric::DropsTx => rates.tx_dropped,
        }
    }
}

/// Resolved once at startup, immutable afterwards.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub interface: String,
    pub categories: Categories,
    pub direction: Direction,
    pub chart: bool,
    pub interval_secs: u64,
    pub show_interface: bool,
}

impl MonitorConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.interface.is_empty(),
            "interface name must be non-empty"
        );
        anyhow::ensure!(
            self.interval_secs > 0,
            "interval must be >= 1 second, got {}",
            self.interval_secs
        );
        if self.chart {
            anyhow::ensure!(
                self.chart_metric().is_some(),
                "plotting only allows one statistic (RX or TX) and one metric (count/transfer/drops)"
            );
        }
        Ok(())
    }

    /// The single scalar a chart run tracks. None unless exactly one category
    /// and a single direction are selected.
    pub fn chart_metric(&self) -> Option<ChartMetric> {
        let category = match self.categories.selected().as_slice() {
            [one] => *one,
            _ => return None,
        };
        match (self.direction, category) {
            (Direction::ReceiveOnly, Category::Count) => Some(ChartMetric::PacketsRx),
            (Direction::ReceiveOnly, Category::Transfer) => Some(ChartMetric::BytesRx),
            (Direction::ReceiveOnly, Category::Dropped) => Some(ChartMetric::DropsRx),
            (Direction::TransmitOnly, Category::Count) => Some(ChartMetric::PacketsTx),
            (Direction::TransmitOnly, Category::Transfer) => Some(ChartMetric::BytesTx),
            (Direction::TransmitOnly, Category::Dropped) => Some(ChartMetric::DropsTx),
            (Direction::Both, _) => None,
        }
    }
}
