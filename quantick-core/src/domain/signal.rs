//! Strategy decision output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete decision emitted by a strategy for one tick.
///
/// Only identity comparison is meaningful. The variants carry no ordering and
/// no arithmetic semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    #[default]
    None,
    Buy,
    Sell,
}

impl Signal {
    /// True for `Buy` and `Sell`.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "NONE",
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        };
        f.write_str(label)
    }
}
