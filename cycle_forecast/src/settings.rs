//! Prediction settings with TOML and environment layering
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`CYCLE_OWL_WINDOW_SIZE`, `CYCLE_OWL_PERIOD_DURATION`)
//! 2. Settings file
//! 3. Compiled defaults

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

/// Allowed trailing window sizes
pub const WINDOW_SIZE_RANGE: RangeInclusive<usize> = 1..=5;
/// Allowed period durations, in days
pub const PERIOD_DURATION_RANGE: RangeInclusive<i64> = 3..=6;

const ENV_WINDOW_SIZE: &str = "CYCLE_OWL_WINDOW_SIZE";
const ENV_PERIOD_DURATION: &str = "CYCLE_OWL_PERIOD_DURATION";

/// Parameters of one merge cycle, passed explicitly by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionSettings {
    /// Trailing intervals averaged per step, and number of ranges predicted
    pub window_size: usize,
    /// Days from a predicted start to its end
    pub period_duration: i64,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            window_size: 3,
            period_duration: 4,
        }
    }
}

impl PredictionSettings {
    /// Create validated settings
    pub fn new(window_size: usize, period_duration: i64) -> Result<Self> {
        let settings = Self {
            window_size,
            period_duration,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a TOML string; missing keys take defaults
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let settings: Self = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file, then apply environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ForecastError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let mut settings: Self = toml::from_str(&text)?;
        settings.apply_env_overrides();
        settings.validate()?;
        tracing::debug!(
            path = %path.display(),
            window_size = settings.window_size,
            period_duration = settings.period_duration,
            "loaded prediction settings"
        );
        Ok(settings)
    }

    /// Override fields from `CYCLE_OWL_*` environment variables
    pub fn apply_env_overrides(&mut self) {
        if let Some(value) = env_value(ENV_WINDOW_SIZE) {
            self.window_size = value;
        }
        if let Some(value) = env_value(ENV_PERIOD_DURATION) {
            self.period_duration = value;
        }
    }

    /// Check both fields against their allowed ranges
    pub fn validate(&self) -> Result<()> {
        if !WINDOW_SIZE_RANGE.contains(&self.window_size) {
            return Err(ForecastError::InvalidSettings(format!(
                "window_size must be between {} and {}, got {}",
                WINDOW_SIZE_RANGE.start(),
                WINDOW_SIZE_RANGE.end(),
                self.window_size
            )));
        }
        if !PERIOD_DURATION_RANGE.contains(&self.period_duration) {
            return Err(ForecastError::InvalidSettings(format!(
                "period_duration must be between {} and {}, got {}",
                PERIOD_DURATION_RANGE.start(),
                PERIOD_DURATION_RANGE.end(),
                self.period_duration
            )));
        }
        Ok(())
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}
