use std::path::PathBuf;

/// Errors raised while loading configuration or building strategies.
///
/// Indicator queries never produce these: insufficient data is `None`.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("invalid parameters for strategy '{strategy}': {reason}")]
    InvalidConfig { strategy: String, reason: String },

    #[error("failed to read strategy config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse strategy config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to encode strategy config: {0}")]
    Encode(#[from] serde_json::Error),
}
