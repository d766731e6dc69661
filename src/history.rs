// src/history.rs
//! Time-indexed close series handed over by a market-data provider.
//!
//! Fetching is not this crate's business; whatever supplies the data, the
//! series lands here as parallel timestamp/close vectors and can be sliced to
//! an earnings window before estimation.

use crate::earnings::EarningsWindow;
use crate::error::{SimError, SimResult};
use chrono::{DateTime, Utc};

/// Close prices indexed by strictly increasing timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    timestamps: Vec<DateTime<Utc>>,
    closes: Vec<f64>,
}

impl PriceHistory {
    /// Build a history from parallel vectors.
    ///
    /// # Errors
    ///
    /// The vectors must have equal length and the timestamps must be strictly
    /// increasing (oldest first, the opposite of the earnings-date order).
    pub fn new(timestamps: Vec<DateTime<Utc>>, closes: Vec<f64>) -> SimResult<Self> {
        if timestamps.len() != closes.len() {
            return Err(SimError::InvalidConfiguration {
                field: "closes".to_string(),
                reason: format!(
                    "{} timestamps but {} closes",
                    timestamps.len(),
                    closes.len()
                ),
            });
        }
        if timestamps.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(SimError::InvalidConfiguration {
                field: "timestamps".to_string(),
                reason: "must be strictly increasing".to_string(),
            });
        }
        Ok(PriceHistory { timestamps, closes })
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// The sub-series inside `window`, bounds inclusive.
    pub fn window(&self, window: &EarningsWindow) -> PriceHistory {
        let (timestamps, closes) = self
            .timestamps
            .iter()
            .zip(&self.closes)
            .filter(|(t, _)| window.start <= **t && **t <= window.end)
            .map(|(t, c)| (*t, *c))
            .unzip();
        // A subsequence of a strictly increasing series stays strictly
        // increasing, so no re-validation.
        PriceHistory { timestamps, closes }
    }
}
