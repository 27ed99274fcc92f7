// Sampling worker: reads counters on a fixed cadence, derives per-second
// rates, and hands each snapshot to the active consumer over the channel.

use crate::counters::{CounterSnapshot, CounterSource, RateSnapshot};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Duration, Instant, MissedTickBehavior, interval_at};

/// Owns the previous absolute snapshot between ticks.
pub struct Sampler<S: CounterSource> {
    source: Arc<S>,
    interface: String,
    previous: CounterSnapshot,
}

impl<S: CounterSource> Sampler<S> {
    /// Seed the baseline with one synchronous read. A failed seed read is
    /// logged and leaves the baseline zeroed; the first tick recovers.
    pub fn new(source: Arc<S>, interface: &str) -> Self {
        let previous = match source.read(interface) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    interface,
                    operation = "seed_counters",
                    "initial counter read failed; starting from zero"
                );
                CounterSnapshot::default()
            }
        };
        Self {
            source,
            interface: interface.to_string(),
            previous,
        }
    }

    /// One sampling step: read a current snapshot, diff it against the
    /// baseline, and advance the baseline. Returns None when the read fails;
    /// the baseline is retained for the next tick.
    pub fn tick(&mut self, interval_secs: u64) -> Option<RateSnapshot> {
        let current = match self.source.read(&self.interface) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    interface = %self.interface,
                    operation = "read_counters",
                    "counter read failed; skipping tick"
                );
                return None;
            }
        };
        let rates = current.rates_since(&self.previous, interval_secs);
        self.previous = current;
        Some(rates)
    }
}

/// Spawns the tick loop. The first tick fires one full period after startup;
/// an overrunning tick delays the next one (no overlap, no catch-up burst).
/// Stops on the shutdown signal or when the consumer side closes the channel.
pub fn spawn<S: CounterSource + 'static>(
    mut sampler: Sampler<S>,
    interval_secs: u64,
    tx: mpsc::Sender<RateSnapshot>,
    mut shutdown_rx: oneshot::Receiver<()>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let period = Duration::from_secs(interval_secs);
        let mut tick = interval_at(Instant::now() + period, period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    if let Some(rates) = sampler.tick(interval_secs) {
                        if tx.send(rates).await.is_err() {
                            tracing::debug!("Consumer channel closed");
                            break;
                        }
                    }
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Sampler shutting down");
                    break;
                }
            }
        }
    })
}
