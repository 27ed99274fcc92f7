// Live chart rendering: a bounded window of one scalar, replotted each tick.

use crate::config::ChartMetric;
use crate::consumer::Consumer;
use crate::counters::RateSnapshot;
use crate::term::ChartSurface;
use std::collections::VecDeque;

/// Samples retained in the sliding window.
pub const WINDOW_CAPACITY: usize = 60;

/// Columns reserved for axis labels and padding.
const WIDTH_MARGIN: u16 = 10;
/// Rows reserved so the frame fits without scrolling.
const HEIGHT_MARGIN: u16 = 4;

pub struct ChartConsumer<T: ChartSurface> {
    surface: T,
    metric: ChartMetric,
    window: VecDeque<f64>,
}

impl<T: ChartSurface> ChartConsumer<T> {
    pub fn new(surface: T, metric: ChartMetric) -> Self {
        Self {
            surface,
            metric,
            window: VecDeque::with_capacity(WINDOW_CAPACITY),
        }
    }

    /// Append to the window, evicting the oldest sample at capacity.
    fn push(&mut self, value: f64) {
        if self.window.len() >= WINDOW_CAPACITY {
            self.window.pop_front();
        }
        self.window.push_back(value);
    }
}

impl<T: ChartSurface> Consumer for ChartConsumer<T> {
    fn consume(&mut self, rates: &RateSnapshot) {
        self.push(self.metric.extract(rates));
        let (columns, rows) = match self.surface.size() {
            Ok(size) => size,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    operation = "terminal_size",
                    "terminal geometry unavailable; skipping frame"
                );
                return;
            }
        };
        let width = columns.saturating_sub(WIDTH_MARGIN);
        let height = rows.saturating_sub(HEIGHT_MARGIN);
        let series: Vec<f64> = self.window.iter().copied().collect();
        self.surface.draw(&series, width, height);
    }
}
