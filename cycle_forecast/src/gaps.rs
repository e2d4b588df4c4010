//! Gap annotation and month grouping for display

use crate::range::{DateRange, MonthKey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// A range with the days since the previous range's start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapAnnotation {
    pub range: DateRange,
    /// Zero for the earliest range
    pub gap_days: i64,
}

/// Annotated ranges whose start falls in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub month: MonthKey,
    pub entries: Vec<GapAnnotation>,
}

/// Sort ranges by start ascending and attach the gap to the previous start
///
/// Ranges sharing a start keep their input order.
pub fn annotate(ranges: &[DateRange]) -> Vec<GapAnnotation> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|range| range.start);

    let mut previous_start: Option<NaiveDate> = None;
    sorted
        .into_iter()
        .map(|range| {
            let gap_days = previous_start
                .map(|prev| (range.start - prev).num_days())
                .unwrap_or(0);
            previous_start = Some(range.start);
            GapAnnotation { range, gap_days }
        })
        .collect()
}

/// Group annotated ranges by start month, most recent month first
///
/// Entries keep their input order inside each bucket, so an ascending input
/// gives ascending entries under descending months.
pub fn group_by_month_descending(annotated: &[GapAnnotation]) -> Vec<MonthBucket> {
    let mut groups: BTreeMap<Reverse<MonthKey>, Vec<GapAnnotation>> = BTreeMap::new();
    for entry in annotated {
        groups
            .entry(Reverse(entry.range.start_month()))
            .or_default()
            .push(*entry);
    }

    groups
        .into_iter()
        .map(|(Reverse(month), entries)| MonthBucket { month, entries })
        .collect()
}

/// Ranges of every bucket, in bucket order
pub fn flatten(buckets: &[MonthBucket]) -> Vec<DateRange> {
    buckets
        .iter()
        .flat_map(|bucket| bucket.entries.iter().map(|entry| entry.range))
        .collect()
}
