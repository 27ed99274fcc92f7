// Consumer side of the handoff: one receive loop driving the renderer
// selected at startup. Exactly one consumer is active per process.

pub mod chart;
pub mod text;

use crate::counters::RateSnapshot;
use tokio::sync::mpsc;

/// Render contract shared by the text and chart consumers.
pub trait Consumer: Send {
    fn consume(&mut self, rates: &RateSnapshot);
}

/// Receives rate snapshots until the sampler drops its sender, rendering each
/// one. The capacity-1 channel means an unfinished render backpressures the
/// sampler's next emission.
pub fn spawn(
    mut rx: mpsc::Receiver<RateSnapshot>,
    mut consumer: Box<dyn Consumer>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(rates) = rx.recv().await {
            consumer.consume(&rates);
        }
        tracing::debug!("Consumer shutting down");
    })
}
