use serde::{Deserialize, Serialize};

pub const DEFAULT_STARTING_CAPITAL: f64 = 100_000.0;

/// Account snapshot, written by the host between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountStatus {
    pub equity: f64,
    pub cash: f64,
    /// Net signed position size.
    pub position: f64,
    pub realized_pnl: f64,
    pub unrealized_pnl: f64,
    pub total_trades: u64,
}

impl AccountStatus {
    /// Fresh account holding `capital` in cash and no position.
    pub fn with_capital(capital: f64) -> Self {
        Self {
            equity: capital,
            cash: capital,
            ..Self::default()
        }
    }
}

impl Default for AccountStatus {
    fn default() -> Self {
        Self {
            equity: DEFAULT_STARTING_CAPITAL,
            cash: DEFAULT_STARTING_CAPITAL,
            position: 0.0,
            realized_pnl: 0.0,
            unrealized_pnl: 0.0,
            total_trades: 0,
        }
    }
}
