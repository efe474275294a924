//! Relative Strength Index (RSI).
//!
//! Average gain and average loss over the most recent `period` price changes
//! (a flat change adds zero to both).
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! Minimum history: period + 1.
//! Edge case: avg_loss == 0 → RSI = 100, including a perfectly flat window.

use super::{tail, Indicator};

pub const DEFAULT_RSI_PERIOD: usize = 14;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(DEFAULT_RSI_PERIOD)
    }
}

impl Indicator for Rsi {
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

        let (gains, losses) = tail(prices, self.period + 1).windows(2).fold(
            (0.0, 0.0),
            |(gains, losses), pair| {
                let change = pair[1] - pair[0];
                if change > 0.0 {
                    (gains + change, losses)
                } else {
                    (gains, losses - change)
                }
            },
        );

        let avg_gain = gains / self.period as f64;
        let avg_loss = losses / self.period as f64;

        if avg_loss == 0.0 {
            return Some(100.0);
        }

        let rs = avg_gain / avg_loss;
        Some(100.0 - 100.0 / (1.0 + rs))
    }
}
