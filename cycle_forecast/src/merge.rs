//! The load, predict, merge and persist cycle

use crate::error::Result;
use crate::predictor::predict_next_starts;
use crate::range::DateRange;
use crate::settings::PredictionSettings;
use crate::store::RangeStore;
use crate::synthesizer::synthesize;
use chrono::NaiveDate;

/// Runs merge cycles against a [`RangeStore`]
#[derive(Debug)]
pub struct MergeEngine;

impl MergeEngine {
    /// Run one merge cycle on the history the store reports for the current date
    pub fn update<S: RangeStore + ?Sized>(
        store: &mut S,
        settings: &PredictionSettings,
    ) -> Result<Vec<DateRange>> {
        settings.validate()?;
        let history = store.load_history_only()?;
        Self::merge_into(store, history, settings)
    }

    /// Run one merge cycle treating `today` as the current date
    ///
    /// Stored ranges after `today` are discarded, a fresh prediction is made
    /// from the rest, and the store is overwritten with history followed by
    /// the prediction. The store is untouched when prediction fails.
    pub fn update_as_of<S: RangeStore + ?Sized>(
        store: &mut S,
        settings: &PredictionSettings,
        today: NaiveDate,
    ) -> Result<Vec<DateRange>> {
        settings.validate()?;
        let history = store.load_history_as_of(today)?;
        Self::merge_into(store, history, settings)
    }

    fn merge_into<S: RangeStore + ?Sized>(
        store: &mut S,
        history: Vec<DateRange>,
        settings: &PredictionSettings,
    ) -> Result<Vec<DateRange>> {
        let prediction = Self::predict_ranges(&history, settings)?;
        tracing::info!(
            history = history.len(),
            predicted = prediction.len(),
            window_size = settings.window_size,
            "merge cycle"
        );

        let mut merged = history;
        merged.extend(prediction);
        store.save(&merged)?;
        Ok(merged)
    }

    /// Predicted ranges following `history`, which may be in any order
    pub fn predict_ranges(
        history: &[DateRange],
        settings: &PredictionSettings,
    ) -> Result<Vec<DateRange>> {
        let mut starts: Vec<NaiveDate> = history.iter().map(|range| range.start).collect();
        starts.sort();

        let predicted_starts = predict_next_starts(&starts, settings.window_size)?;
        synthesize(&predicted_starts, settings.period_duration)
    }
}
