//! # Cycle Forecast
//!
//! Forecasting and bookkeeping for recurring personal date ranges.
//!
//! ## Features
//!
//! - Date ranges stored as `DD.MM.YYYY,DD.MM.YYYY` text records
//! - Start date prediction with a recursive moving average
//! - Merge cycles that replace the predicted tail of a store
//! - Gap annotation and month grouping for display
//! - Exact-match range editing
//!
//! ## Quick Start
//!
//! ```rust
//! use cycle_forecast::{MemoryRangeStore, MergeEngine, PredictionSettings};
//! use chrono::NaiveDate;
//!
//! let mut store = MemoryRangeStore::new(
//!     "01.01.2024,05.01.2024\n29.01.2024,02.02.2024\n26.02.2024,01.03.2024\n",
//! );
//! let settings = PredictionSettings::new(2, 4)?;
//! let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//!
//! let merged = MergeEngine::update_as_of(&mut store, &settings, today)?;
//! assert_eq!(merged.len(), 5);
//! assert_eq!(merged[3].start, NaiveDate::from_ymd_opt(2024, 3, 25).unwrap());
//! # Ok::<(), cycle_forecast::ForecastError>(())
//! ```

pub mod codec;
pub mod editor;
pub mod error;
pub mod gaps;
pub mod logging;
pub mod merge;
pub mod predictor;
pub mod range;
pub mod settings;
pub mod store;
pub mod synthesizer;

// Re-export commonly used types
pub use crate::error::{ForecastError, Result};
pub use crate::gaps::{annotate, group_by_month_descending, GapAnnotation, MonthBucket};
pub use crate::merge::MergeEngine;
pub use crate::predictor::{predict_next_starts, IntervalPredictor};
pub use crate::range::{cycle_day, DateRange, MonthKey};
pub use crate::settings::PredictionSettings;
pub use crate::store::{FileRangeStore, MemoryRangeStore, RangeStore, TemplateSeededStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
