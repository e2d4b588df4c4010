//! # Cycle Owl
//!
//! `cycle_owl_workspace` bundles the cycle crates behind one dependency.
//!
//! ## Example
//!
//! ```
//! use cycle_owl_workspace::{predict_next_starts, synthesize};
//! use chrono::NaiveDate;
//!
//! let starts = [
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 29).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 2, 26).unwrap(),
//! ];
//! let next = predict_next_starts(&starts, 2).unwrap();
//! let ranges = synthesize(&next, 4).unwrap();
//! assert_eq!(ranges[0].end, NaiveDate::from_ymd_opt(2024, 3, 29).unwrap());
//! ```

pub use cycle_forecast::synthesizer::synthesize;
pub use cycle_forecast::*;
pub use cycle_math;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_facade_exports() {
        let mut store = MemoryRangeStore::new("01.01.2024,05.01.2024\n29.01.2024,02.02.2024\n");
        let settings = PredictionSettings::new(1, 4).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();

        let merged = MergeEngine::update_as_of(&mut store, &settings, today).unwrap();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[2].start, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        assert_eq!(cycle_math::day_intervals(&[0, 28]), vec![28.0]);
    }
}
