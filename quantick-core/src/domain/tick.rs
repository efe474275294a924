use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped market observation fed into a `Context`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Nanoseconds since the Unix epoch.
    pub timestamp: i64,
    pub price: f64,
    pub volume: f64,
}

impl Tick {
    pub fn new(timestamp: i64, price: f64, volume: f64) -> Self {
        Self {
            timestamp,
            price,
            volume,
        }
    }

    /// Timestamp as a UTC datetime.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.timestamp)
    }
}
