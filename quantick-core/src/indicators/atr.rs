//! Average True Range (ATR), close-only variant.
//!
//! True range is approximated by |close[t] - close[t-1]|; no high/low data
//! reaches the context. ATR is the plain mean of the last `period` such
//! differences.
//! Minimum history: period + 1.

use super::{mean, tail, Indicator};

pub const DEFAULT_ATR_PERIOD: usize = 14;

#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
    name: String,
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            name: format!("atr_{period}"),
        }
    }
}

impl Default for Atr {
    fn default() -> Self {
        Self::new(DEFAULT_ATR_PERIOD)
    }
}

impl Indicator for Atr {
    type Output = f64;

    fn name(&self) -> &str {
        &self.name
    }

    fn min_history(&self) -> usize {
        self.period.saturating_add(1)
    }

    fn compute(&self, prices: &[f64]) -> Option<f64> {
        if self.period == 0 || prices.len() < self.min_history() {
            return None;
        }

        let ranges: Vec<f64> = tail(prices, self.period + 1)
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).abs())
            .collect();
        Some(mean(&ranges))
    }
}
