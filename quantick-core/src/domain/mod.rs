//! Value types shared between the host engine and strategies.

pub mod account;
pub mod position;
pub mod signal;
pub mod tick;

pub use account::AccountStatus;
pub use position::{PositionInfo, FLAT_EPSILON};
pub use signal::Signal;
pub use tick::Tick;
