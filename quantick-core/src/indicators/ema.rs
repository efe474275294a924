//! Exponential Moving Average (EMA).
//!
//! Seed: SMA of the *first* `period` prices.
//! Recurrence over every later price, oldest first:
//! `ema = (price - ema) * 2 / (period + 1) + ema`.
//! Minimum history: period.
//!
//! The whole history is folded on every call; nothing is carried between
//! ticks.

use super::{mean, Indicator};

#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    name: String,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            name: format!("ema_{period}"),
        }
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn name(&self) -> &str {
        &self.name
    }

    fn min_history(&self) -> usize {
        self.period
    }

    fn compute(&self, prices: &[f64]) -> Option<f64> {
        ema_of_series(prices, self.period)
    }
}

/// Final EMA value of an arbitrary series.
/// Shared with MACD, which needs two EMAs of the same history.
pub fn ema_of_series(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let seed = mean(&values[..period]);

    Some(
        values[period..]
            .iter()
            .fold(seed, |ema, &price| (price - ema) * multiplier + ema),
    )
}
