//! Exact-match editing of ranges held by the caller

use crate::range::DateRange;
use chrono::NaiveDate;

/// Replace every range equal to `(old_start, old_end)` with `(new_start, new_end)`
///
/// Other ranges pass through unchanged. Nothing is persisted.
pub fn replace(
    ranges: &[DateRange],
    old_start: NaiveDate,
    old_end: NaiveDate,
    new_start: NaiveDate,
    new_end: NaiveDate,
) -> Vec<DateRange> {
    replace_range(
        ranges,
        DateRange::new(old_start, old_end),
        DateRange::new(new_start, new_end),
    )
}

/// Range-valued form of [`replace`]
pub fn replace_range(ranges: &[DateRange], old: DateRange, new: DateRange) -> Vec<DateRange> {
    ranges
        .iter()
        .map(|&range| if range == old { new } else { range })
        .collect()
}
