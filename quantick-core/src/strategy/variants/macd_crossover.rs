//! MACD line / signal line crossover.
//!
//! BUY when the MACD line crosses above its signal line, SELL when it crosses
//! below. With the service's approximated signal line (0.9 x MACD) this fires
//! on MACD zero-line crosses.

use crate::context::Context;
use crate::domain::Signal;
use crate::indicators::{Indicator, Macd};
use crate::strategy::{Cross, CrossoverTracker, Strategy, StrategyParams};

use super::effective_params;

const KEYS: &[&str] = &["fast_period", "slow_period", "signal_period"];

#[derive(Debug, Clone)]
pub struct MacdCrossover {
    params: StrategyParams,
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    crossover: CrossoverTracker,
}

impl MacdCrossover {
    pub const NAME: &'static str = "MACD Strategy";

    pub fn new() -> Self {
        Self::from_params(&StrategyParams::new())
    }

    pub fn default_params() -> StrategyParams {
        StrategyParams::new()
            .with("fast_period", 12)
            .with("slow_period", 26)
            .with("signal_period", 9)
    }

    pub fn from_params(supplied: &StrategyParams) -> Self {
        let params = effective_params(Self::NAME, supplied, Self::default_params(), KEYS);
        Self {
            fast_period: params.get_usize("fast_period", 12),
            slow_period: params.get_usize("slow_period", 26),
            signal_period: params.get_usize("signal_period", 9),
            crossover: CrossoverTracker::new(),
            params,
        }
    }
}

impl Default for MacdCrossover {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MacdCrossover {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "MACD crossover strategy"
    }

    fn params(&self) -> &StrategyParams {
        &self.params
    }

    fn warmup_ticks(&self) -> usize {
        Macd::new(self.fast_period, self.slow_period, self.signal_period).min_history()
    }

    fn on_tick(&mut self, ctx: &Context) -> Signal {
        let Some(reading) =
            ctx.indicators()
                .macd(self.fast_period, self.slow_period, self.signal_period)
        else {
            return Signal::None;
        };

        match self.crossover.observe(reading.macd, reading.signal) {
            Some(Cross::Above) => Signal::Buy,
            Some(Cross::Below) => Signal::Sell,
            None => Signal::None,
        }
    }

    fn on_reset(&mut self) {
        self.crossover.reset();
    }

    fn validate(&self) -> bool {
        KEYS.iter().all(|k| self.params.is_usize_or_absent(k))
            && self.fast_period >= 1
            && self.signal_period >= 1
            && self.fast_period < self.slow_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(strat: &mut MacdCrossover, prices: &[f64]) -> Vec<Signal> {
        let mut ctx = Context::new();
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                ctx.update(p, 1.0, i as i64);
                strat.on_tick(&ctx)
            })
            .collect()
    }

    fn small() -> MacdCrossover {
        MacdCrossover::from_params(
            &StrategyParams::new()
                .with("fast_period", 2)
                .with("slow_period", 4)
                .with("signal_period", 2),
        )
    }

    #[test]
    fn warmup_is_slow_plus_signal() {
        assert_eq!(MacdCrossover::new().warmup_ticks(), 35);
        assert_eq!(small().warmup_ticks(), 6);
    }

    #[test]
    fn buy_on_turn_up_sell_on_turn_down() {
        let mut strat = small();
        // Falls for a while (MACD < 0), then rallies hard (MACD > 0), then collapses.
        let mut prices: Vec<f64> = (0..10).map(|i| 100.0 - i as f64).collect();
        prices.extend((1..=10).map(|i| 91.0 + 3.0 * i as f64));
        prices.extend((1..=10).map(|i| 121.0 - 5.0 * i as f64));

        let signals = run(&mut strat, &prices);
        let buys = signals.iter().filter(|s| **s == Signal::Buy).count();
        let sells = signals.iter().filter(|s| **s == Signal::Sell).count();
        assert_eq!(buys, 1);
        assert_eq!(sells, 1);

        let first_buy = signals.iter().position(|s| *s == Signal::Buy).unwrap();
        let first_sell = signals.iter().position(|s| *s == Signal::Sell).unwrap();
        assert!(first_buy >= 10 && first_buy < first_sell);
        assert!(signals[..strat.warmup_ticks()].iter().all(|s| *s == Signal::None));
    }

    #[test]
    fn reset_allows_identical_replay() {
        let mut strat = small();
        let mut prices: Vec<f64> = (0..10).map(|i| 100.0 - i as f64).collect();
        prices.extend((1..=10).map(|i| 91.0 + 3.0 * i as f64));

        let first = run(&mut strat, &prices);
        strat.on_reset();
        let second = run(&mut strat, &prices);
        assert_eq!(first, second);
    }

    #[test]
    fn validate_requires_fast_below_slow() {
        let strat = MacdCrossover::from_params(
            &StrategyParams::new()
                .with("fast_period", 26)
                .with("slow_period", 12),
        );
        assert!(!strat.validate());
        assert!(MacdCrossover::new().validate());
    }
}
