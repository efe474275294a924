//! Per-tick strategy context.
//!
//! Owns the append-only price history, the latest tick scalars, the host's
//! position and account snapshots, and at most one `IndicatorService`.
//!
//! Cache contract: build on read, invalidate on write. `update` drops the
//! current service; the next `indicators()` call builds a new one over the
//! grown history, and later calls within the same tick return that instance.

use std::cell::OnceCell;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::domain::{AccountStatus, PositionInfo, Tick};
use crate::indicators::IndicatorService;

#[derive(Debug, Default)]
pub struct Context {
    /// Shared with the live service. Appends go through `Arc::make_mut`, so a
    /// service handle that outlives its tick keeps its own snapshot.
    history: Arc<Vec<f64>>,
    indicators: OnceCell<IndicatorService>,
    price: f64,
    volume: f64,
    timestamp: i64,
    position: PositionInfo,
    account: AccountStatus,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose history can hold `capacity` prices without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: Arc::new(Vec::with_capacity(capacity)),
            ..Self::default()
        }
    }

    /// Ingest one tick. Called by the host once per tick, before `on_tick`.
    ///
    /// No validation happens here; ordering and price sanity belong to the
    /// upstream ingestion pipeline.
    pub fn update(&mut self, price: f64, volume: f64, timestamp: i64) {
        self.indicators.take();
        Arc::make_mut(&mut self.history).push(price);
        self.price = price;
        self.volume = volume;
        self.timestamp = timestamp;
    }

    /// Same as [`Context::update`] for a `Tick` record.
    pub fn apply(&mut self, tick: &Tick) {
        self.update(tick.price, tick.volume, tick.timestamp);
    }

    /// Indicator service over the history as of the latest update.
    pub fn indicators(&self) -> &IndicatorService {
        self.indicators.get_or_init(|| {
            trace!(history = self.history.len(), "building indicator service");
            IndicatorService::new(Arc::clone(&self.history))
        })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Latest tick timestamp in nanoseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.timestamp)
    }

    /// Latest tick as a record.
    pub fn tick(&self) -> Tick {
        Tick::new(self.timestamp, self.price, self.volume)
    }

    /// All ingested prices, oldest first.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Number of ticks ingested.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn position(&self) -> &PositionInfo {
        &self.position
    }

    pub fn account(&self) -> &AccountStatus {
        &self.account
    }

    /// Host-side: replace the position snapshot between ticks.
    pub fn set_position(&mut self, position: PositionInfo) {
        self.position = position;
    }

    /// Host-side: replace the account snapshot between ticks.
    pub fn set_account(&mut self, account: AccountStatus) {
        self.account = account;
    }
}
