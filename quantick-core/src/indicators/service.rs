//! Indicator service — memoized indicator queries over one frozen history.
//!
//! A service is built over a shared, immutable snapshot of the price history.
//! Results are memoized per `(indicator, parameters)` for the lifetime of the
//! instance; the memo is dropped with it. `Context` builds a fresh service
//! after every update instead of mutating a live one.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use tracing::trace;

use super::{
    atr::DEFAULT_ATR_PERIOD,
    bollinger::{DEFAULT_BOLLINGER_PERIOD, DEFAULT_STD_DEV},
    macd::{DEFAULT_FAST_PERIOD, DEFAULT_SIGNAL_PERIOD, DEFAULT_SLOW_PERIOD},
    rsi::DEFAULT_RSI_PERIOD,
    stochastic::{DEFAULT_D_PERIOD, DEFAULT_K_PERIOD},
    Atr, Bollinger, BollingerReading, Ema, Indicator, Macd, MacdReading, Rsi, Sma, Stochastic,
    StochasticReading,
};

/// Key for indicators that read out a single number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ScalarKey {
    Sma(usize),
    Ema(usize),
    Rsi(usize),
    Atr(usize),
}

/// One table per reading type, so a key can only ever map to the reading its
/// indicator produces.
#[derive(Debug, Default)]
struct Memo {
    scalars: HashMap<ScalarKey, Option<f64>>,
    /// `(fast, slow, signal)`
    macd: HashMap<(usize, usize, usize), Option<MacdReading>>,
    /// `(period, std_dev bits)`; the multiplier is keyed by its bit pattern.
    bands: HashMap<(usize, u64), Option<BollingerReading>>,
    /// `(k_period, d_period)`
    stochastic: HashMap<(usize, usize), Option<StochasticReading>>,
}

impl Memo {
    fn scalars(&mut self) -> &mut HashMap<ScalarKey, Option<f64>> {
        &mut self.scalars
    }

    fn macd(&mut self) -> &mut HashMap<(usize, usize, usize), Option<MacdReading>> {
        &mut self.macd
    }

    fn bands(&mut self) -> &mut HashMap<(usize, u64), Option<BollingerReading>> {
        &mut self.bands
    }

    fn stochastic(&mut self) -> &mut HashMap<(usize, usize), Option<StochasticReading>> {
        &mut self.stochastic
    }

    fn len(&self) -> usize {
        self.scalars.len() + self.macd.len() + self.bands.len() + self.stochastic.len()
    }
}

/// Indicator queries over a fixed price history.
///
/// Every query returns `None` when the history is too short for the requested
/// parameters; strategies treat that as "hold".
#[derive(Debug)]
pub struct IndicatorService {
    prices: Arc<Vec<f64>>,
    memo: RefCell<Memo>,
}

impl IndicatorService {
    /// Build a service over a shared history snapshot.
    pub fn new(prices: Arc<Vec<f64>>) -> Self {
        Self {
            prices,
            memo: RefCell::new(Memo::default()),
        }
    }

    /// Build a service over a copy of `prices`.
    pub fn from_prices(prices: &[f64]) -> Self {
        Self::new(Arc::new(prices.to_vec()))
    }

    /// The history this service computes over, oldest first.
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Number of memoized readings held by this instance.
    pub fn memo_len(&self) -> usize {
        self.memo.borrow().len()
    }

    fn lookup<K, I>(
        &self,
        table: fn(&mut Memo) -> &mut HashMap<K, Option<I::Output>>,
        key: K,
        indicator: I,
    ) -> Option<I::Output>
    where
        K: Eq + Hash,
        I: Indicator,
        I::Output: Copy,
    {
        let cached = table(&mut self.memo.borrow_mut()).get(&key).copied();
        if let Some(hit) = cached {
            return hit;
        }

        let reading = indicator.compute(&self.prices);
        trace!(
            indicator = indicator.name(),
            history = self.prices.len(),
            "indicator computed"
        );
        table(&mut self.memo.borrow_mut()).insert(key, reading);
        reading
    }

    pub fn sma(&self, period: usize) -> Option<f64> {
        self.lookup(Memo::scalars, ScalarKey::Sma(period), Sma::new(period))
    }

    pub fn ema(&self, period: usize) -> Option<f64> {
        self.lookup(Memo::scalars, ScalarKey::Ema(period), Ema::new(period))
    }

    pub fn rsi(&self, period: usize) -> Option<f64> {
        self.lookup(Memo::scalars, ScalarKey::Rsi(period), Rsi::new(period))
    }

    /// RSI(14).
    pub fn rsi_default(&self) -> Option<f64> {
        self.rsi(DEFAULT_RSI_PERIOD)
    }

    /// MACD line, approximated signal line and histogram.
    /// See [`crate::indicators::macd`] for the signal-line approximation.
    pub fn macd(
        &self,
        fast_period: usize,
        slow_period: usize,
        signal_period: usize,
    ) -> Option<MacdReading> {
        self.lookup(
            Memo::macd,
            (fast_period, slow_period, signal_period),
            Macd::new(fast_period, slow_period, signal_period),
        )
    }

    /// MACD(12, 26, 9).
    pub fn macd_default(&self) -> Option<MacdReading> {
        self.macd(DEFAULT_FAST_PERIOD, DEFAULT_SLOW_PERIOD, DEFAULT_SIGNAL_PERIOD)
    }

    pub fn bollinger_bands(&self, period: usize, std_dev: f64) -> Option<BollingerReading> {
        self.lookup(
            Memo::bands,
            (period, std_dev.to_bits()),
            Bollinger::new(period, std_dev),
        )
    }

    /// Bollinger(20, 2.0).
    pub fn bollinger_default(&self) -> Option<BollingerReading> {
        self.bollinger_bands(DEFAULT_BOLLINGER_PERIOD, DEFAULT_STD_DEV)
    }

    pub fn atr(&self, period: usize) -> Option<f64> {
        self.lookup(Memo::scalars, ScalarKey::Atr(period), Atr::new(period))
    }

    /// ATR(14).
    pub fn atr_default(&self) -> Option<f64> {
        self.atr(DEFAULT_ATR_PERIOD)
    }

    pub fn stochastic(&self, k_period: usize, d_period: usize) -> Option<StochasticReading> {
        self.lookup(
            Memo::stochastic,
            (k_period, d_period),
            Stochastic::new(k_period, d_period),
        )
    }

    /// Stochastic(14, 3).
    pub fn stochastic_default(&self) -> Option<StochasticReading> {
        self.stochastic(DEFAULT_K_PERIOD, DEFAULT_D_PERIOD)
    }
}
