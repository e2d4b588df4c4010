//! Error types for the cycle_forecast crate

use cycle_math::MathError;
use thiserror::Error;

/// Custom error types for the cycle_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Too few historical start dates for the requested window
    #[error("Insufficient history: need at least {needed} start dates, have {available}")]
    InsufficientHistory { needed: usize, available: usize },

    /// Prediction settings outside their allowed ranges
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// A date field that is not in DD.MM.YYYY form
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A line rejected by strict import validation
    #[error("Invalid format on line {line}: {content:?}")]
    InvalidFormat { line: usize, content: String },

    /// Error reading or validating a settings file
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the CSV record layer
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from interval math
    #[error("Math error: {0}")]
    MathError(#[from] MathError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::CsvError(err.to_string())
    }
}

impl From<toml::de::Error> for ForecastError {
    fn from(err: toml::de::Error) -> Self {
        ForecastError::ConfigError(err.to_string())
    }
}
