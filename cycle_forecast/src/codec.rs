//! Text record format for stored ranges
//!
//! One range per line as `DD.MM.YYYY,DD.MM.YYYY`. Fields are trimmed, so a
//! space after the comma is accepted on read; writes never emit one.

use crate::error::{ForecastError, Result};
use crate::range::{format_date, DateRange};
use regex::Regex;
use std::sync::LazyLock;

static STRICT_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4},\d{2}\.\d{2}\.\d{4}$").ok());

/// Parse stored text, silently dropping lines that are not two fields
///
/// # Errors
/// * `ParseError` when a two-field line holds an unreadable date
pub fn parse_ranges(text: &str) -> Result<Vec<DateRange>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut ranges = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record?;
        if record.len() != 2 {
            dropped += 1;
            continue;
        }
        ranges.push(DateRange::parse(&record[0], &record[1])?);
    }

    if dropped > 0 {
        tracing::debug!(dropped, kept = ranges.len(), "dropped malformed range lines");
    }
    Ok(ranges)
}

/// Render ranges one per line, each line terminated by `\n`
pub fn render_ranges(ranges: &[DateRange]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for range in ranges {
        writer.write_record([format_date(range.start), format_date(range.end)])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ForecastError::CsvError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ForecastError::CsvError(e.to_string()))
}

/// Parse hand-edited text, rejecting it whole on the first bad line
///
/// Blank lines are skipped; every other line, trimmed, must be exactly
/// `DD.MM.YYYY,DD.MM.YYYY` with no spaces around the comma.
pub fn parse_strict(text: &str) -> Result<Vec<DateRange>> {
    let mut ranges = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let matches = STRICT_LINE
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(line));
        let parts = line.split_once(',').filter(|_| matches);
        let Some((start, end)) = parts else {
            return Err(ForecastError::InvalidFormat {
                line: index + 1,
                content: line.to_string(),
            });
        };
        ranges.push(DateRange::parse(start, end)?);
    }
    Ok(ranges)
}
