//! Factory — converts a `StrategyConfig` into a runtime strategy object.

use tracing::{debug, warn};

use super::variants::{MaRsiCrossover, MacdCrossover, RsiReversal};
use super::{Strategy, StrategyConfig, StrategyError};

const STRATEGIES: &[&str] = &["ma_rsi_crossover", "macd_crossover", "rsi_reversal"];

/// Names accepted by [`create_strategy`].
pub fn available_strategies() -> &'static [&'static str] {
    STRATEGIES
}

/// Build the strategy named by `config` and run its `validate()` hook once,
/// as the host does before the first tick.
pub fn create_strategy(config: &StrategyConfig) -> Result<Box<dyn Strategy>, StrategyError> {
    let strategy: Box<dyn Strategy> = match config.strategy.as_str() {
        "ma_rsi_crossover" => Box::new(MaRsiCrossover::from_params(&config.params)),
        "macd_crossover" => Box::new(MacdCrossover::from_params(&config.params)),
        "rsi_reversal" => Box::new(RsiReversal::from_params(&config.params)),
        other => return Err(StrategyError::UnknownStrategy(other.to_string())),
    };

    if !strategy.validate() {
        warn!(strategy = %config.strategy, "strategy rejected its parameters");
        return Err(StrategyError::InvalidConfig {
            strategy: config.strategy.clone(),
            reason: "validate() rejected the parameter set".to_string(),
        });
    }

    debug!(
        strategy = %config.strategy,
        name = strategy.name(),
        warmup = strategy.warmup_ticks(),
        "strategy created"
    );
    Ok(strategy)
}
