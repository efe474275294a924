//! RSI overbought/oversold reversal.
//!
//! BUY when RSI climbs back above `oversold` while flat. SELL when RSI drops
//! back below `overbought` while long. The long/flat flag is the strategy's
//! own view of its entries, independent of the host's fills.

use crate::context::Context;
use crate::domain::Signal;
use crate::indicators::{Indicator, Rsi};
use crate::strategy::{Strategy, StrategyParams};

use super::effective_params;

const KEYS: &[&str] = &["rsi_period", "oversold", "overbought"];

#[derive(Debug, Clone)]
pub struct RsiReversal {
    params: StrategyParams,
    rsi_period: usize,
    oversold: f64,
    overbought: f64,
    prev_rsi: Option<f64>,
    in_position: bool,
}

impl RsiReversal {
    pub const NAME: &'static str = "RSI Reversal";

    pub fn new() -> Self {
        Self::from_params(&StrategyParams::new())
    }

    pub fn default_params() -> StrategyParams {
        StrategyParams::new()
            .with("rsi_period", 14)
            .with("oversold", 30)
            .with("overbought", 70)
    }

    pub fn from_params(supplied: &StrategyParams) -> Self {
        let params = effective_params(Self::NAME, supplied, Self::default_params(), KEYS);
        Self {
            rsi_period: params.get_usize("rsi_period", 14),
            oversold: params.get_f64("oversold", 30.0),
            overbought: params.get_f64("overbought", 70.0),
            prev_rsi: None,
            in_position: false,
            params,
        }
    }

    pub fn in_position(&self) -> bool {
        self.in_position
    }
}

impl Default for RsiReversal {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RsiReversal {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Buys RSI recoveries from oversold, sells RSI pullbacks from overbought"
    }

    fn params(&self) -> &StrategyParams {
        &self.params
    }

    fn warmup_ticks(&self) -> usize {
        Rsi::new(self.rsi_period).min_history()
    }

    fn on_tick(&mut self, ctx: &Context) -> Signal {
        let Some(rsi) = ctx.indicators().rsi(self.rsi_period) else {
            return Signal::None;
        };
        let Some(prev) = self.prev_rsi.replace(rsi) else {
            return Signal::None;
        };

        if prev <= self.oversold && rsi > self.oversold && !self.in_position {
            self.in_position = true;
            Signal::Buy
        } else if prev >= self.overbought && rsi < self.overbought && self.in_position {
            self.in_position = false;
            Signal::Sell
        } else {
            Signal::None
        }
    }

    fn on_reset(&mut self) {
        self.prev_rsi = None;
        self.in_position = false;
    }

    fn validate(&self) -> bool {
        self.params.is_usize_or_absent("rsi_period")
            && self.params.is_number_or_absent("oversold")
            && self.params.is_number_or_absent("overbought")
            && self.rsi_period >= 1
            && (0.0..=100.0).contains(&self.oversold)
            && (0.0..=100.0).contains(&self.overbought)
            && self.oversold < self.overbought
    }
}
