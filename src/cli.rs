// Flag surface, resolved into an immutable MonitorConfig before anything runs.

use crate::config::{Categories, Direction, MonitorConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "netmon",
    version,
    about = "Monitor per-second network interface statistics"
)]
pub struct Cli {
    /// Network interface to monitor (e.g. eth0)
    pub interface: String,

    /// Show statistics about packet count
    #[arg(long)]
    pub count: bool,

    /// Show statistics about total bytes transferred
    #[arg(long)]
    pub transfer: bool,

    /// Show statistics about dropped packets
    #[arg(long)]
    pub dropped: bool,

    /// Show only received packets statistics
    #[arg(long = "only-rx")]
    pub only_rx: bool,

    /// Show only sent packets statistics
    #[arg(long = "only-tx")]
    pub only_tx: bool,

    /// Plot one statistic (RX or TX) and one metric (count/transfer/drops) as a live chart
    #[arg(long)]
    pub plot: bool,

    /// Don't print the network interface name
    #[arg(long = "hide-interface")]
    pub hide_interface: bool,

    /// Output interval in seconds (rates are averaged over the interval)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}

impl Cli {
    /// Any explicit category flag disables the all-categories default.
    /// If both direction filters are given, receive wins.
    pub fn into_config(self) -> MonitorConfig {
        let categories = if self.count || self.transfer || self.dropped {
            Categories {
                count: self.count,
                transfer: self.transfer,
                dropped: self.dropped,
            }
        } else {
            Categories::all()
        };
        let direction = if self.only_rx {
            Direction::ReceiveOnly
        } else if self.only_tx {
            Direction::TransmitOnly
        } else {
            Direction::Both
        };
        MonitorConfig {
            interface: self.interface,
            categories,
            direction,
            chart: self.plot,
            interval_secs: self.interval,
            show_interface: !self.hide_interface,
        }
    }
}
