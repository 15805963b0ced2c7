use thiserror::Error;

/// Unified error type for sem-ver operations
#[derive(Error, Debug)]
pub enum SemVerError {
    #[error("Invalid version: '{0}' is not a valid SemVer 2.0.0 string")]
    InvalidVersion(String),

    #[error("Request validation failed: {0}")]
    Schema(String),

    #[error("Version overflow: {0}")]
    Overflow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in sem-ver
pub type Result<T> = std::result::Result<T, SemVerError>;

impl SemVerError {
    /// Create an invalid version error carrying the offending input
    pub fn invalid_version(raw: impl Into<String>) -> Self {
        SemVerError::InvalidVersion(raw.into())
    }

    /// Create a request schema error with context
    pub fn schema(msg: impl Into<String>) -> Self {
        SemVerError::Schema(msg.into())
    }

    /// Create an overflow error with context
    pub fn overflow(msg: impl Into<String>) -> Self {
        SemVerError::Overflow(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemVerError::Config(msg.into())
    }
}
