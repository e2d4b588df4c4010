//! Turning predicted start dates into ranges

use crate::error::Result;
use crate::range::DateRange;
use chrono::{Duration, NaiveDate};
use cycle_math::MathError;

/// One range per start date, ending `period_duration` days after it
///
/// A negative duration is accepted and yields `end < start`.
///
/// # Errors
/// * `MathError` when an end date falls outside the representable calendar
pub fn synthesize(start_dates: &[NaiveDate], period_duration: i64) -> Result<Vec<DateRange>> {
    let duration = Duration::try_days(period_duration).ok_or_else(|| {
        MathError::InvalidInput(format!("{} days is out of range", period_duration))
    })?;

    let mut ranges = Vec::with_capacity(start_dates.len());
    for &start in start_dates {
        let end = start.checked_add_signed(duration).ok_or_else(|| {
            MathError::InvalidInput(format!("{} + {} days is out of range", start, period_duration))
        })?;
        ranges.push(DateRange::new(start, end));
    }
    Ok(ranges)
}
