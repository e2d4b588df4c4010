//! Forecasting future start dates from historical start dates

use crate::error::{ForecastError, Result};
use crate::settings::PredictionSettings;
use chrono::{Datelike, Duration, NaiveDate};
use cycle_math::{day_intervals, forecast_intervals, MathError};

/// Predicts the next start dates with a recursive moving average
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalPredictor {
    window_size: usize,
}

impl IntervalPredictor {
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    pub fn from_settings(settings: &PredictionSettings) -> Self {
        Self::new(settings.window_size)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Predict `window_size` start dates following `sorted_start_dates`
    pub fn predict(&self, sorted_start_dates: &[NaiveDate]) -> Result<Vec<NaiveDate>> {
        predict_next_starts(sorted_start_dates, self.window_size)
    }
}

/// Predict `window_size` future start dates from ascending start dates
///
/// Each step averages the last `window_size` intervals, truncates the mean
/// to whole days, and appends the predicted interval before the next step.
///
/// # Errors
/// * `InsufficientHistory` when fewer than `window_size + 1` dates are given
pub fn predict_next_starts(
    sorted_start_dates: &[NaiveDate],
    window_size: usize,
) -> Result<Vec<NaiveDate>> {
    let needed = window_size.saturating_add(1);
    if sorted_start_dates.len() < needed {
        return Err(ForecastError::InsufficientHistory {
            needed,
            available: sorted_start_dates.len(),
        });
    }

    let day_numbers: Vec<i64> = sorted_start_dates
        .iter()
        .map(|date| i64::from(date.num_days_from_ce()))
        .collect();
    let steps = forecast_intervals(&day_intervals(&day_numbers), window_size)?;

    let mut predictions = Vec::with_capacity(steps.len());
    // Non-empty: checked against `needed` above
    let mut last_date = sorted_start_dates[sorted_start_dates.len() - 1];
    for step in steps {
        last_date = Duration::try_days(step)
            .and_then(|delta| last_date.checked_add_signed(delta))
            .ok_or_else(|| {
                MathError::InvalidInput(format!("{} + {} days is out of range", last_date, step))
            })?;
        predictions.push(last_date);
    }

    Ok(predictions)
}
