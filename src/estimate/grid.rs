//! Candidate Rt grid.
//!
//! All posterior columns are probability vectors over this grid; membership
//! is by index into the precomputed array, never by value lookup. The grid is
//! built once per run from configuration and shared immutably.

use crate::domain::EstimatorConfig;
use crate::error::AppError;

/// A fixed, ordered grid of candidate Rt values spanning `[0, r_max]` at a
/// constant step (defaults: 12.0 / 0.01 → 1201 points).
#[derive(Debug, Clone, PartialEq)]
pub struct RtGrid {
    values: Vec<f64>,
}

impl RtGrid {
    /// Build the grid from a validated configuration.
    pub fn from_config(config: &EstimatorConfig) -> Result<Self, AppError> {
        config.validate()?;
        let steps = (config.r_max / config.grid_step).round() as usize;
        let values = (0..=steps).map(|i| i as f64 * config.grid_step).collect();
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
