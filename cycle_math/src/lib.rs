//! # Cycle Math
//!
//! Numeric building blocks for cycle forecasting.
//! This crate works on plain day counts and knows nothing about calendars;
//! callers convert dates to intervals and back.

use thiserror::Error;

pub mod forecasting;
pub mod moving_averages;

/// Errors that can occur in interval calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: need {needed} values, have {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for interval math operations
pub type Result<T> = std::result::Result<T, MathError>;

pub use forecasting::{day_intervals, forecast_intervals};
pub use moving_averages::SimpleMovingAverage;
