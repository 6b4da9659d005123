//! Error types for Cadence

use thiserror::Error;

/// The main error type for Cadence operations
#[derive(Debug, Error)]
pub enum CadenceError {
    #[error("Fixed delta time must be positive, got {0}")]
    InvalidFixedDelta(f64),

    #[error("Fixed rate must be positive, got {0} Hz")]
    InvalidFixedRate(f64),

    #[error("Time scale must be finite and non-negative, got {0}")]
    InvalidTimeScale(f64),

    #[error("Max delta time must be positive, got {0}")]
    InvalidMaxDelta(f64),

    #[error("Frame delta must be finite and non-negative, got {0}")]
    InvalidDelta(f64),

    #[error("Index out of range: {index} (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Cadence operations
pub type Result<T> = std::result::Result<T, CadenceError>;

impl From<toml::de::Error> for CadenceError {
    fn from(err: toml::de::Error) -> Self {
        CadenceError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for CadenceError {
    fn from(err: toml::ser::Error) -> Self {
        CadenceError::TomlSerError(err.to_string())
    }
}
