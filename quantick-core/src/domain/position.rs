use serde::{Deserialize, Serialize};

/// Absolute quantity below which a position is treated as flat.
pub const FLAT_EPSILON: f64 = 0.0001;

/// Snapshot of the current position, written by the host between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionInfo {
    /// Signed quantity: positive long, negative short.
    pub quantity: f64,
    pub average_price: f64,
    pub unrealized_pnl: f64,
}

impl PositionInfo {
    pub fn new(quantity: f64, average_price: f64, unrealized_pnl: f64) -> Self {
        Self {
            quantity,
            average_price,
            unrealized_pnl,
        }
    }

    pub fn has_position(&self) -> bool {
        self.quantity.abs() > FLAT_EPSILON
    }

    pub fn is_long(&self) -> bool {
        self.quantity > FLAT_EPSILON
    }

    pub fn is_short(&self) -> bool {
        self.quantity < -FLAT_EPSILON
    }

    pub fn is_flat(&self) -> bool {
        !self.has_position()
    }
}
