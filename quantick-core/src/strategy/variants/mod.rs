//! Concrete strategies shipped with the SDK.

pub mod ma_rsi_crossover;
pub mod macd_crossover;
pub mod rsi_reversal;

pub use ma_rsi_crossover::MaRsiCrossover;
pub use macd_crossover::MacdCrossover;
pub use rsi_reversal::RsiReversal;

use tracing::debug;

use super::StrategyParams;

/// Overlay `supplied` on `defaults`, noting keys the variant will ignore.
pub(crate) fn effective_params(
    strategy: &str,
    supplied: &StrategyParams,
    defaults: StrategyParams,
    known: &[&str],
) -> StrategyParams {
    for key in supplied.unknown_keys(known) {
        debug!(strategy, key, "ignoring unrecognized parameter");
    }
    supplied.merged_over(defaults)
}
