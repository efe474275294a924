//! Technical indicators over a close-price history.
//!
//! Every indicator is a small parameter struct implementing [`Indicator`].
//! `compute` takes the full history (oldest first) and returns the reading for
//! the most recent price, or `None` when the history is shorter than
//! `min_history()`. A period of zero is always reported as insufficient data,
//! so no indicator ever yields NaN for a finite history. Minimum histories
//! saturate at `usize::MAX`, which no slice can reach.
//!
//! Strategies normally reach these through [`IndicatorService`], which adds
//! per-tick memoization on top.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod service;
pub mod sma;
pub mod stochastic;

pub use atr::Atr;
pub use bollinger::{Bollinger, BollingerReading};
pub use ema::Ema;
pub use macd::{Macd, MacdReading};
pub use rsi::Rsi;
pub use service::IndicatorService;
pub use sma::Sma;
pub use stochastic::{Stochastic, StochasticReading};

/// Trait for indicators.
///
/// Implementations are pure: the same history and parameters always produce
/// the same reading, and the history is never modified.
pub trait Indicator {
    type Output;

    /// Human-readable name (e.g., "sma_20", "macd_12_26_9").
    fn name(&self) -> &str;

    /// Minimum number of prices needed before `compute` returns a value.
    fn min_history(&self) -> usize;

    /// Compute the reading at the last price of `prices`.
    fn compute(&self, prices: &[f64]) -> Option<Self::Output>;
}

/// Arithmetic mean. Callers guarantee a non-empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// The trailing `n` values of `prices`.
pub(crate) fn tail(prices: &[f64], n: usize) -> &[f64] {
    &prices[prices.len() - n..]
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
