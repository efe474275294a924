//! Moving average crossover confirmed by RSI.
//!
//! BUY on a golden cross of SMA(ma_short) over SMA(ma_long) while RSI is
//! below `rsi_oversold`. SELL on a death cross while RSI is above
//! `rsi_overbought`. Crosses without confirmation are consumed silently.

use crate::context::Context;
use crate::domain::Signal;
use crate::indicators::{Indicator, Rsi, Sma};
use crate::strategy::{Cross, CrossoverTracker, Strategy, StrategyParams};

use super::effective_params;

const KEYS: &[&str] = &[
    "rsi_period",
    "ma_short",
    "ma_long",
    "rsi_oversold",
    "rsi_overbought",
];

#[derive(Debug, Clone)]
pub struct MaRsiCrossover {
    params: StrategyParams,
    rsi_period: usize,
    ma_short: usize,
    ma_long: usize,
    rsi_oversold: f64,
    rsi_overbought: f64,
    crossover: CrossoverTracker,
}

impl MaRsiCrossover {
    pub const NAME: &'static str = "MA + RSI Crossover";

    pub fn new() -> Self {
        Self::from_params(&StrategyParams::new())
    }

    pub fn default_params() -> StrategyParams {
        StrategyParams::new()
            .with("rsi_period", 14)
            .with("ma_short", 5)
            .with("ma_long", 20)
            .with("rsi_oversold", 30)
            .with("rsi_overbought", 70)
    }

    pub fn from_params(supplied: &StrategyParams) -> Self {
        let params = effective_params(Self::NAME, supplied, Self::default_params(), KEYS);
        Self {
            rsi_period: params.get_usize("rsi_period", 14),
            ma_short: params.get_usize("ma_short", 5),
            ma_long: params.get_usize("ma_long", 20),
            rsi_oversold: params.get_f64("rsi_oversold", 30.0),
            rsi_overbought: params.get_f64("rsi_overbought", 70.0),
            crossover: CrossoverTracker::new(),
            params,
        }
    }
}

impl Default for MaRsiCrossover {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MaRsiCrossover {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "SMA golden/death cross confirmed by RSI oversold/overbought"
    }

    fn params(&self) -> &StrategyParams {
        &self.params
    }

    fn warmup_ticks(&self) -> usize {
        Sma::new(self.ma_long)
            .min_history()
            .max(Sma::new(self.ma_short).min_history())
            .max(Rsi::new(self.rsi_period).min_history())
    }

    fn on_tick(&mut self, ctx: &Context) -> Signal {
        let ind = ctx.indicators();
        let (Some(rsi), Some(short_ma), Some(long_ma)) = (
            ind.rsi(self.rsi_period),
            ind.sma(self.ma_short),
            ind.sma(self.ma_long),
        ) else {
            return Signal::None;
        };

        match self.crossover.observe(short_ma, long_ma) {
            Some(Cross::Above) if rsi < self.rsi_oversold => Signal::Buy,
            Some(Cross::Below) if rsi > self.rsi_overbought => Signal::Sell,
            _ => Signal::None,
        }
    }

    fn on_reset(&mut self) {
        self.crossover.reset();
    }

    fn validate(&self) -> bool {
        KEYS[..3].iter().all(|k| self.params.is_usize_or_absent(k))
            && KEYS[3..].iter().all(|k| self.params.is_number_or_absent(k))
            && self.rsi_period >= 1
            && self.ma_short >= 1
            && self.ma_short < self.ma_long
            && (0.0..=100.0).contains(&self.rsi_oversold)
            && (0.0..=100.0).contains(&self.rsi_overbought)
            && self.rsi_oversold < self.rsi_overbought
    }
}
