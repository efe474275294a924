//! Stochastic Oscillator.
//!
//! %K at index i = 100 * (price_i - min) / (max - min) over the `k_period`
//! window ending at i, or 50 when the window is flat.
//! %D = mean of the last `d_period` %K values.
//! Minimum history: k_period + d_period - 1.

use serde::{Deserialize, Serialize};

use super::Indicator;

pub const DEFAULT_K_PERIOD: usize = 14;
pub const DEFAULT_D_PERIOD: usize = 3;

/// %K reported when the window has no range.
const FLAT_WINDOW_K: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticReading {
    pub k: f64,
    pub d: f64,
}

#[derive(Debug, Clone)]
pub struct Stochastic {
    k_period: usize,
    d_period: usize,
    name: String,
}

impl Stochastic {
    pub fn new(k_period: usize, d_period: usize) -> Self {
        Self {
            k_period,
            d_period,
            name: format!("stochastic_{k_period}_{d_period}"),
        }
    }

    /// %K for the window ending at `end` (inclusive).
    fn percent_k(&self, prices: &[f64], end: usize) -> f64 {
        let window = &prices[end + 1 - self.k_period..=end];
        let (lowest, highest) = window
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| {
                (lo.min(p), hi.max(p))
            });

        let range = highest - lowest;
        if range > 0.0 {
            100.0 * (prices[end] - lowest) / range
        } else {
            FLAT_WINDOW_K
        }
    }
}

impl Default for Stochastic {
    fn default() -> Self {
        Self::new(DEFAULT_K_PERIOD, DEFAULT_D_PERIOD)
    }
}

impl Indicator for Stochastic {
    type Output = StochasticReading;

    fn name(&self) -> &str {
        &self.name
    }

    fn min_history(&self) -> usize {
        self.k_period.saturating_add(self.d_period).saturating_sub(1)
    }

    fn compute(&self, prices: &[f64]) -> Option<StochasticReading> {
        if self.k_period == 0 || self.d_period == 0 || prices.len() < self.min_history() {
            return None;
        }

        // Only the trailing d_period %K values feed the reading.
        let last = prices.len() - 1;
        let k_values: Vec<f64> = (last + 1 - self.d_period..=last)
            .map(|end| self.percent_k(prices, end))
            .collect();

        let k = k_values[k_values.len() - 1];
        let d = k_values.iter().sum::<f64>() / self.d_period as f64;
        Some(StochasticReading { k, d })
    }
}
