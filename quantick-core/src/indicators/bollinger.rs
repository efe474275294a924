//! Bollinger Bands — moving average +/- standard deviation multiplier.
//!
//! - Middle: SMA(period)
//! - Upper: middle + std_dev * sigma
//! - Lower: middle - std_dev * sigma
//!
//! Uses population stddev (divide by N) over the same window.
//! Minimum history: period.

use serde::{Deserialize, Serialize};

use super::{mean, tail, Indicator};

pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;
pub const DEFAULT_STD_DEV: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerReading {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerReading {
    /// Distance between the upper and lower band.
    pub fn bandwidth(&self) -> f64 {
        self.upper - self.lower
    }
}

#[derive(Debug, Clone)]
pub struct Bollinger {
    period: usize,
    std_dev: f64,
    name: String,
}

impl Bollinger {
    pub fn new(period: usize, std_dev: f64) -> Self {
        Self {
            period,
            std_dev,
            name: format!("bollinger_{period}_{std_dev}"),
        }
    }
}

impl Default for Bollinger {
    fn default() -> Self {
        Self::new(DEFAULT_BOLLINGER_PERIOD, DEFAULT_STD_DEV)
    }
}

impl Indicator for Bollinger {
    type Output = BollingerReading;

    fn name(&self) -> &str {
        &self.name
    }

    fn min_history(&self) -> usize {
        self.period
    }

    fn compute(&self, prices: &[f64]) -> Option<BollingerReading> {
        if self.period == 0 || prices.len() < self.period {
            return None;
        }

        let window = tail(prices, self.period);
        let middle = mean(window);
        let variance = window
            .iter()
            .map(|p| {
                let diff = p - middle;
                diff * diff
            })
            .sum::<f64>()
            / self.period as f64;
        let width = self.std_dev * variance.sqrt();

        Some(BollingerReading {
            upper: middle + width,
            middle,
            lower: middle - width,
        })
    }
}
