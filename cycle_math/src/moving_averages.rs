//! Trailing-window arithmetic mean over a stream of values

use crate::{MathError, Result};
use std::collections::VecDeque;

/// Simple Moving Average (SMA) over the last `period` values
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    period: usize,
    values: VecDeque<f64>,
    sum: f64,
}

impl SimpleMovingAverage {
    /// Create a new Simple Moving Average with the specified period
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(MathError::InvalidInput(
                "Period must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            values: VecDeque::with_capacity(period),
            sum: 0.0,
        })
    }

    /// Push a new value, evicting the oldest once the window is full
    pub fn update(&mut self, value: f64) {
        self.values.push_back(value);
        self.sum += value;

        if self.values.len() > self.period {
            if let Some(old_value) = self.values.pop_front() {
                self.sum -= old_value;
            }
        }
    }

    /// Feed every value of a slice in order
    pub fn extend(&mut self, values: &[f64]) {
        for &value in values {
            self.update(value);
        }
    }

    /// Get the current SMA value
    ///
    /// Fails until a full window of values has been seen.
    pub fn value(&self) -> Result<f64> {
        if self.values.len() < self.period {
            return Err(MathError::InsufficientData {
                needed: self.period,
                available: self.values.len(),
            });
        }

        Ok(self.sum / self.period as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_requires_full_window() {
        let mut sma = SimpleMovingAverage::new(3).unwrap();
        sma.update(28.0);
        sma.update(30.0);

        assert_eq!(
            sma.value().unwrap_err(),
            MathError::InsufficientData {
                needed: 3,
                available: 2
            }
        );

        sma.update(26.0);
        assert!((sma.value().unwrap() - 28.0).abs() < 0.001);
    }

    #[test]
    fn test_sma_slides_window() {
        let mut sma = SimpleMovingAverage::new(2).unwrap();
        sma.extend(&[10.0, 20.0, 30.0, 40.0]);

        assert!((sma.value().unwrap() - 35.0).abs() < 0.001);
    }

    #[test]
    fn test_sma_zero_period() {
        assert!(matches!(
            SimpleMovingAverage::new(0),
            Err(MathError::InvalidInput(_))
        ));
    }
}
