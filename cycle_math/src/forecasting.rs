//! Recursive moving-average forecasting of intervals
//!
//! Each forecast step averages the trailing window of intervals, truncates
//! the mean toward zero, and appends that truncated value to the series, so
//! later steps in the same batch average over earlier forecasts too.

use crate::moving_averages::SimpleMovingAverage;
use crate::{MathError, Result};

/// Differences between consecutive points of an ordered series of day numbers
///
/// Returns one interval fewer than there are points; empty for fewer than two.
pub fn day_intervals(day_numbers: &[i64]) -> Vec<f64> {
    day_numbers
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f64)
        .collect()
}

/// Forecast `window` future intervals from a historical interval series
///
/// # Arguments
/// * `intervals` - Historical intervals in chronological order
/// * `window` - Trailing window size, also the number of intervals forecast
///
/// # Returns
/// * `window` whole-day intervals, each the truncated mean of the trailing
///   `window` entries of the history extended by the previous forecasts
pub fn forecast_intervals(intervals: &[f64], window: usize) -> Result<Vec<i64>> {
    if window == 0 {
        return Err(MathError::InvalidInput(
            "Window size must be greater than zero".to_string(),
        ));
    }

    if intervals.len() < window {
        return Err(MathError::InsufficientData {
            needed: window,
            available: intervals.len(),
        });
    }

    let mut sma = SimpleMovingAverage::new(window)?;
    sma.extend(&intervals[intervals.len() - window..]);

    let mut forecast = Vec::with_capacity(window);
    for _ in 0..window {
        let step = sma.value()?.trunc() as i64;
        forecast.push(step);
        sma.update(step as f64);
    }

    Ok(forecast)
}
