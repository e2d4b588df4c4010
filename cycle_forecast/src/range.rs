//! Date ranges and their text form

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used for every stored and displayed date
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// One historical or predicted occurrence, both ends inclusive
///
/// `start <= end` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse both ends from `DD.MM.YYYY` strings
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Days from start to end; negative for an inverted range
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether the range starts after `today`
    pub fn is_future(&self, today: NaiveDate) -> bool {
        self.start > today
    }

    /// Calendar month of the start date
    pub fn start_month(&self) -> MonthKey {
        MonthKey::of(self.start)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => write!(f, "{}", first.format("%B %Y")),
            None => write!(f, "{:04}-{:02}", self.year, self.month),
        }
    }
}

/// Parse a single `DD.MM.YYYY` date, ignoring surrounding whitespace
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| ForecastError::ParseError(format!("{:?}: {}", text, e)))
}

/// Format a date as `DD.MM.YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Day of the current cycle, counting the latest start before `today` as day 1
///
/// Ranges starting on or after `today` are ignored; 0 when none remain.
pub fn cycle_day(ranges: &[DateRange], today: NaiveDate) -> i64 {
    ranges
        .iter()
        .map(|range| range.start)
        .filter(|&start| start < today)
        .max()
        .map(|latest| (today - latest).num_days() + 1)
        .unwrap_or(0)
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
