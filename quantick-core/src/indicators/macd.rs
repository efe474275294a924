//! Moving Average Convergence Divergence (MACD).
//!
//! MACD line = EMA(fast) - EMA(slow), both folded over the entire history.
//! Minimum history: slow + signal.
//!
//! The signal line is NOT an EMA of a maintained MACD history. It is
//! approximated as `0.9 * macd` with histogram `0.1 * macd`, which keeps
//! readings identical to strategies already tuned against that behavior.
//! Consequence: `macd > signal` holds exactly when `macd > 0`, so a
//! "MACD crosses signal" rule is a zero-line cross of the MACD line.

use serde::{Deserialize, Serialize};

use super::ema::ema_of_series;
use super::Indicator;

pub const DEFAULT_FAST_PERIOD: usize = 12;
pub const DEFAULT_SLOW_PERIOD: usize = 26;
pub const DEFAULT_SIGNAL_PERIOD: usize = 9;

const SIGNAL_RATIO: f64 = 0.9;
const HISTOGRAM_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdReading {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    name: String,
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
            name: format!("macd_{fast_period}_{slow_period}_{signal_period}"),
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new(DEFAULT_FAST_PERIOD, DEFAULT_SLOW_PERIOD, DEFAULT_SIGNAL_PERIOD)
    }
}

impl Indicator for Macd {
    type Output = MacdReading;

    fn name(&self) -> &str {
        &self.name
    }

    fn min_history(&self) -> usize {
        self.slow_period.saturating_add(self.signal_period)
    }

    fn compute(&self, prices: &[f64]) -> Option<MacdReading> {
        if prices.len() < self.min_history() {
            return None;
        }

        let fast = ema_of_series(prices, self.fast_period)?;
        let slow = ema_of_series(prices, self.slow_period)?;
        let macd = fast - slow;

        Some(MacdReading {
            macd,
            signal: macd * SIGNAL_RATIO,
            histogram: macd * HISTOGRAM_RATIO,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + i as f64).collect()
    }

    #[test]
    fn macd_needs_slow_plus_signal() {
        let macd = Macd::new(3, 6, 4);
        assert!(macd.compute(&ramp(9)).is_none());
        assert!(macd.compute(&ramp(10)).is_some());
    }

    #[test]
    fn macd_line_is_ema_difference() {
        let prices = ramp(40);
        let reading = Macd::new(5, 10, 3).compute(&prices).unwrap();
        let fast = ema_of_series(&prices, 5).unwrap();
        let slow = ema_of_series(&prices, 10).unwrap();
        assert_approx(reading.macd, fast - slow, DEFAULT_EPSILON);
        // Rising series: the fast EMA leads the slow one.
        assert!(reading.macd > 0.0);
    }

    #[test]
    fn macd_signal_and_histogram_are_fixed_ratios() {
        let reading = Macd::new(5, 10, 3).compute(&ramp(40)).unwrap();
        assert_approx(reading.signal, reading.macd * 0.9, DEFAULT_EPSILON);
        assert_approx(reading.histogram, reading.macd * 0.1, DEFAULT_EPSILON);
    }

    #[test]
    fn macd_flat_series_is_zero() {
        let reading = Macd::default().compute(&vec![50.0; 40]).unwrap();
        assert_eq!(reading.macd, 0.0);
        assert_eq!(reading.signal, 0.0);
        assert_eq!(reading.histogram, 0.0);
    }

    #[test]
    fn macd_zero_fast_period_is_insufficient() {
        assert!(Macd::new(0, 10, 3).compute(&ramp(40)).is_none());
    }

    #[test]
    fn macd_default_params() {
        let macd = Macd::default();
        assert_eq!(macd.name(), "macd_12_26_9");
        assert_eq!(macd.min_history(), 35);
    }

    #[test]
    fn macd_huge_periods_are_insufficient() {
        assert!(Macd::new(12, usize::MAX, 9).compute(&ramp(40)).is_none());
        assert!(Macd::new(12, 26, usize::MAX).compute(&ramp(40)).is_none());
    }
}
