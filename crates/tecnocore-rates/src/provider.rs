//! # Rate Provider
//!
//! Background task that keeps the current exchange rate snapshot fresh.
//!
//! ## Provider Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      RateProvider Loop                                  │
//! │                                                                         │
//! │   interval tick ──► spawn poll #seq ──┐                                 │
//! │   refresh() ──────► inline poll #seq ─┼──► apply(seq, snapshot)         │
//! │   shutdown() ─────► break             │      │                          │
//! │                                       │      ▼                          │
//! │                                       │   seq >= last applied?          │
//! │                                       │      ├── yes: overwrite         │
//! │                                       │      └── no:  discard           │
//! │                                       ▼                                 │
//! │                              RateProviderHandle::current_rate()         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Polls are not guaranteed to complete in issue order (a manual refresh can
//! overtake an in-flight scheduled poll). Every poll therefore carries a
//! monotonic sequence number and a completion older than the last applied
//! one is discarded instead of overwriting newer data.
//!
//! The loop ends on [`RateProviderHandle::shutdown`] or when the last handle
//! is dropped; either way no timer outlives its owner.

use std::sync::{Arc, RwLock};

use futures::future::join_all;
use tecnocore_core::{ExchangeRateSnapshot, RateFeed};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::aggregate::{aggregate, fallback_quotes};
use crate::config::RatesConfig;
use crate::error::{RatesError, RatesResult};
use crate::source::{HttpJsonSource, RateSource};

// =============================================================================
// Shared Snapshot
// =============================================================================

/// Latest applied snapshot together with the sequence that produced it.
#[derive(Debug)]
struct SharedSnapshot {
    inner: RwLock<(u64, ExchangeRateSnapshot)>,
}

impl SharedSnapshot {
    fn new(initial: ExchangeRateSnapshot) -> Self {
        SharedSnapshot {
            inner: RwLock::new((0, initial)),
        }
    }

    /// Applies a poll result unless a newer one already landed.
    fn apply(&self, seq: u64, snapshot: ExchangeRateSnapshot) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if seq < guard.0 {
            debug!(seq, applied = guard.0, "discarding out-of-order rate poll");
            return;
        }
        *guard = (seq, snapshot);
    }

    fn current(&self) -> ExchangeRateSnapshot {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .1
            .clone()
    }
}

// =============================================================================
// Provider Handle
// =============================================================================

enum ProviderCommand {
    Refresh(oneshot::Sender<()>),
    Shutdown,
}

/// Handle for reading rates and controlling the provider task.
///
/// Cloneable; the background loop stops once every handle is gone.
#[derive(Clone)]
pub struct RateProviderHandle {
    shared: Arc<SharedSnapshot>,
    cmd_tx: mpsc::Sender<ProviderCommand>,
}

impl RateProviderHandle {
    /// Returns the latest snapshot.
    ///
    /// Before the first poll completes this is the fallback snapshot with
    /// `is_stale` set; it is never an error.
    pub fn current_rate(&self) -> ExchangeRateSnapshot {
        self.shared.current()
    }

    /// Forces an immediate re-poll and waits for its result to be applied
    /// (or discarded in favor of a newer one).
    pub async fn refresh(&self) -> RatesResult<()> {
        let (done_tx, done_rx) = oneshot::channel();
        self.cmd_tx
            .send(ProviderCommand::Refresh(done_tx))
            .await
            .map_err(|_| RatesError::ProviderStopped)?;
        done_rx.await.map_err(|_| RatesError::ProviderStopped)
    }

    /// Signals the provider loop to stop.
    pub async fn shutdown(&self) {
        let _ = self.cmd_tx.send(ProviderCommand::Shutdown).await;
    }
}

impl RateFeed for RateProviderHandle {
    fn current_rate(&self) -> ExchangeRateSnapshot {
        RateProviderHandle::current_rate(self)
    }
}

// =============================================================================
// Rate Provider
// =============================================================================

/// The exchange rate provider task.
pub struct RateProvider {
    config: RatesConfig,
    sources: Arc<Vec<Arc<dyn RateSource>>>,
    shared: Arc<SharedSnapshot>,
    cmd_rx: mpsc::Receiver<ProviderCommand>,
    next_seq: u64,
}

impl RateProvider {
    /// Spawns a provider using HTTP sources built from the configuration.
    pub fn spawn(config: RatesConfig) -> RatesResult<RateProviderHandle> {
        config.validate()?;

        let client = HttpJsonSource::build_client(config.request_timeout())?;
        let sources: Vec<Arc<dyn RateSource>> = config
            .sources
            .iter()
            .map(|source| Arc::new(HttpJsonSource::new(source, client.clone())) as Arc<dyn RateSource>)
            .collect();

        Ok(Self::spawn_with_sources(config, sources))
    }

    /// Spawns a provider over caller-supplied sources (tests, exotic feeds).
    pub fn spawn_with_sources(
        config: RatesConfig,
        sources: Vec<Arc<dyn RateSource>>,
    ) -> RateProviderHandle {
        // Until the first poll lands, serve fallback data flagged as stale.
        let mut initial = aggregate(fallback_quotes(config.fallback_base_price), config.fallback_base_price);
        initial.is_stale = true;
        initial.degraded = true;

        let shared = Arc::new(SharedSnapshot::new(initial));
        let (cmd_tx, cmd_rx) = mpsc::channel(8);

        let provider = RateProvider {
            config,
            sources: Arc::new(sources),
            shared: shared.clone(),
            cmd_rx,
            next_seq: 0,
        };
        tokio::spawn(provider.run());

        RateProviderHandle { shared, cmd_tx }
    }

    /// Runs the provider loop. Ends on shutdown or when all handles drop.
    async fn run(mut self) {
        info!(
            sources = self.sources.len(),
            interval_secs = self.config.poll_interval_secs,
            "rate provider starting"
        );

        let mut interval = tokio::time::interval(self.config.poll_interval());
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Scheduled poll; spawned so a slow poll never delays a
                // refresh command or the next tick.
                _ = interval.tick() => {
                    let seq = self.bump_seq();
                    let sources = self.sources.clone();
                    let shared = self.shared.clone();
                    let base = self.config.fallback_base_price;
                    tokio::spawn(async move {
                        let snapshot = poll_once(&sources, base).await;
                        shared.apply(seq, snapshot);
                    });
                }

                cmd = self.cmd_rx.recv() => match cmd {
                    Some(ProviderCommand::Refresh(done)) => {
                        let seq = self.bump_seq();
                        let snapshot = poll_once(&self.sources, self.config.fallback_base_price).await;
                        self.shared.apply(seq, snapshot);
                        let _ = done.send(());
                    }
                    Some(ProviderCommand::Shutdown) | None => break,
                },
            }
        }

        info!("rate provider stopped");
    }

    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

// =============================================================================
// Polling
// =============================================================================

/// Queries every source concurrently and aggregates the successes.
///
/// Individual failures are logged and excluded; an all-failure poll yields
/// the fallback snapshot. This function has no error path.
async fn poll_once(
    sources: &[Arc<dyn RateSource>],
    fallback_base: i64,
) -> ExchangeRateSnapshot {
    let results = join_all(sources.iter().map(|source| source.fetch())).await;

    let mut quotes = Vec::with_capacity(results.len());
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(quote) => quotes.push(quote),
            Err(error) => {
                warn!(source = source.name(), %error, "rate source failed");
            }
        }
    }

    aggregate(quotes, fallback_base)
}

// =============================================================================
// Unit Tests
// =============================================================================
