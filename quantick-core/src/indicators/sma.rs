//! Simple Moving Average (SMA).
//!
//! Mean of the last `period` prices.
//! Minimum history: period.

use super::{mean, tail, Indicator};

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            name: format!("sma_{period}"),
        }
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn name(&self) -> &str {
        &self.name
    }

    fn min_history(&self) -> usize {
        self.period
    }

    fn compute(&self, prices: &[f64]) -> Option<f64> {
        if self.period == 0 || prices.len() < self.period {
            return None;
        }
        Some(mean(tail(prices, self.period)))
    }
}
