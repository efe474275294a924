//! Strategy contract.
//!
//! A strategy is invoked once per tick with a read-only `Context` and answers
//! with a `Signal`. It may keep private state between ticks (previous
//! indicator readings, an internal position flag) and must restore that state
//! in `on_reset` without being reconstructed.
//!
//! Concrete variants live in [`variants`] and are selected by name through
//! [`factory::create_strategy`].

pub mod config;
pub mod crossover;
pub mod error;
pub mod factory;
pub mod params;
pub mod variants;

pub use config::StrategyConfig;
pub use crossover::{Cross, CrossoverState, CrossoverTracker};
pub use error::StrategyError;
pub use factory::{available_strategies, create_strategy};
pub use params::{ParamValue, StrategyParams};
pub use variants::{MacdCrossover, MaRsiCrossover, RsiReversal};

use crate::context::Context;
use crate::domain::Signal;

/// Trait for trading strategies.
///
/// # Contract
/// `on_tick` must not mutate the context (it only receives `&Context`) and
/// must be a function of the context plus the strategy's own state.
/// An insufficient-data reading from any indicator means "hold": return
/// `Signal::None` and leave private state untouched.
pub trait Strategy: Send + Sync {
    /// Display name (e.g., "MACD Strategy").
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Effective parameters: variant defaults overlaid with the supplied ones.
    fn params(&self) -> &StrategyParams;

    /// Ticks needed before every indicator this strategy reads is available.
    fn warmup_ticks(&self) -> usize {
        0
    }

    /// Decide on the current tick.
    fn on_tick(&mut self, ctx: &Context) -> Signal;

    /// Return private state to its post-construction values.
    /// Called by the host between independent runs reusing one instance.
    fn on_reset(&mut self) {}

    /// Self-consistency check on the parameters, called once before the
    /// first tick.
    fn validate(&self) -> bool {
        true
    }
}
