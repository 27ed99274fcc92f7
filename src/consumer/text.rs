// Plain-text rendering: one formatted line per tick on stdout.

use crate::config::{Category, Direction, MonitorConfig};
use crate::consumer::Consumer;
use crate::counters::RateSnapshot;
use crate::units::scale;
use std::fmt::Write as _;
use std::io::Write as _;

pub struct TextConsumer {
    config: MonitorConfig,
}

impl TextConsumer {
    pub fn new(config: MonitorConfig) -> Self {
        Self { config }
    }

    /// Format one snapshot as a single line (no trailing newline).
    /// Categories render in the order count, transfer, dropped, separated by
    /// commas with no leading or trailing comma.
    pub fn format_line(&self, rates: &RateSnapshot) -> String {
        let mut line = String::new();
        if self.config.show_interface {
            let _ = write!(line, "{}: ", self.config.interface);
        }
        let mut first = true;
        for category in self.config.categories.selected() {
            if !first {
                line.push(',');
            }
            first = false;
            self.write_category(&mut line, category, rates);
        }
        line
    }

    fn write_category(&self, out: &mut String, category: Category, rates: &RateSnapshot) {
        let (label, unit, rx, tx) = match category {
            Category::Count => ("Packets", "p/s", rates.rx_packets, rates.tx_packets),
            Category::Transfer => ("Data", "b/s", rates.rx_bytes, rates.tx_bytes),
            Category::Dropped => ("Drops", "d/s", rates.rx_dropped, rates.tx_dropped),
        };
        match self.config.direction {
            Direction::ReceiveOnly => {
                let (value, unit) = scale(rx, unit);
                let _ = write!(out, "{label} {value:.1} {unit}");
            }
            Direction::TransmitOnly => {
                let (value, unit) = scale(tx, unit);
                let _ = write!(out, "{label} {value:.1} {unit}");
            }
            Direction::Both => {
                let (rx_value, rx_unit) = scale(rx, unit);
                let (tx_value, tx_unit) = scale(tx, unit);
                let _ = write!(
                    out,
                    "{label} RX:{rx_value:.1} {rx_unit} TX:{tx_value:.1} {tx_unit}"
                );
            }
        }
    }
}

impl Consumer for TextConsumer {
    fn consume(&mut self, rates: &RateSnapshot) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", self.format_line(rates));
        let _ = stdout.flush();
    }
}
