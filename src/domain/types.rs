//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during estimation
//! - exported to JSON/CSV
//! - reloaded later for comparisons across runs

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A validated daily case series.
///
/// Invariants (enforced by [`DailyCases::new`]):
/// - non-empty
/// - dates strictly increasing with no calendar gaps
/// - counts are unsigned, so non-negativity holds by construction
///
/// The series is immutable once built; the pipeline never re-sorts or fills
/// gaps on the caller's behalf.
#[derive(Debug, Clone)]
pub struct DailyCases {
    dates: Vec<NaiveDate>,
    counts: Vec<u32>,
}

impl DailyCases {
    pub fn new(dates: Vec<NaiveDate>, counts: Vec<u32>) -> Result<Self, AppError> {
        if dates.is_empty() {
            return Err(AppError::invalid_input("Case series is empty."));
        }
        if dates.len() != counts.len() {
            return Err(AppError::invalid_input(format!(
                "Date/count length mismatch: {} dates vs {} counts.",
                dates.len(),
                counts.len()
            )));
        }
        for pair in dates.windows(2) {
            let expected = pair[0] + Duration::days(1);
            if pair[1] != expected {
                return Err(AppError::invalid_input(format!(
                    "Dates must be contiguous and ascending: {} is followed by {} (expected {expected}).",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(Self { dates, counts })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Smoother output: the retained date range with the original counts aligned
/// index-for-index to the smoothed counts.
///
/// Smoothed values are whole numbers stored as `f64` (they feed directly into
/// the Poisson likelihood as both observed and expected counts).
#[derive(Debug, Clone)]
pub struct PreparedCases {
    pub dates: Vec<NaiveDate>,
    pub original: Vec<u32>,
    pub smoothed: Vec<f64>,
}

impl PreparedCases {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// One day's Rt estimate: the maximum-a-posteriori grid value plus the
/// highest-density credible interval bounds (both grid values).
///
/// `low <= high` always holds; `ml` is not guaranteed to lie inside
/// `[low, high]` for pathological posteriors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RtEstimate {
    pub date: NaiveDate,
    pub ml: f64,
    pub low: f64,
    pub high: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// Every knob is injected rather than hard-coded so the estimator can be
/// calibrated per disease/region by the caller. Defaults follow the common
/// COVID-19 parameterization (serial interval 4 days, 7-day windows).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Upper end of the candidate Rt grid (grid spans `[0, r_max]`).
    pub r_max: f64,
    /// Constant grid step.
    pub grid_step: f64,
    /// Reciprocal of the assumed serial interval (days⁻¹).
    pub gamma: f64,
    /// Trailing window (days) for the rolling log-likelihood sum.
    pub window: usize,
    /// Minimum number of columns that must be present in a rolling window.
    pub min_periods: usize,
    /// Shape of the Gamma(shape, scale=1) prior anchoring the first day.
    pub prior_shape: f64,
    /// Smoothing window length (days).
    pub smooth_window: usize,
    /// Gaussian kernel standard deviation for smoothing.
    pub smooth_std: f64,
    /// Target credible-interval coverage.
    pub hdi_mass: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            r_max: 12.0,
            grid_step: 0.01,
            gamma: 0.25,
            window: 7,
            min_periods: 1,
            prior_shape: 3.0,
            smooth_window: 7,
            smooth_std: 2.0,
            hdi_mass: 0.95,
        }
    }
}

impl EstimatorConfig {
    /// Validate the configuration before any computation happens.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.grid_step.is_finite() && self.grid_step > 0.0) {
            return Err(AppError::config(format!(
                "Grid step must be finite and > 0 (got {}).",
                self.grid_step
            )));
        }
        if !(self.r_max.is_finite() && self.r_max >= self.grid_step) {
            return Err(AppError::config(format!(
                "Rmax must be finite and >= the grid step (got {}).",
                self.r_max
            )));
        }
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(AppError::config(format!(
                "Gamma (1/serial interval) must be finite and > 0 (got {}).",
                self.gamma
            )));
        }
        if self.window == 0 {
            return Err(AppError::config("Rolling window must be > 0 days."));
        }
        if self.min_periods == 0 || self.min_periods > self.window {
            return Err(AppError::config(format!(
                "min_periods must be in 1..={} (got {}).",
                self.window, self.min_periods
            )));
        }
        if !(self.prior_shape.is_finite() && self.prior_shape >= 1.0) {
            return Err(AppError::config(format!(
                "Gamma prior shape must be finite and >= 1 (got {}).",
                self.prior_shape
            )));
        }
        if self.smooth_window == 0 {
            return Err(AppError::config("Smoothing window must be > 0 days."));
        }
        if !(self.smooth_std.is_finite() && self.smooth_std > 0.0) {
            return Err(AppError::config(format!(
                "Smoothing std must be finite and > 0 (got {}).",
                self.smooth_std
            )));
        }
        if !(self.hdi_mass.is_finite() && self.hdi_mass > 0.0 && self.hdi_mass < 1.0) {
            return Err(AppError::config(format!(
                "Credible-interval mass must lie strictly inside (0, 1) (got {}).",
                self.hdi_mass
            )));
        }
        Ok(())
    }
}

/// A saved run file (JSON): configuration plus the full estimate series, the
/// portable artifact for later comparison across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFile {
    pub tool: String,
    pub config: EstimatorConfig,
    pub estimates: Vec<RtEstimate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn daily_cases_rejects_empty() {
        assert!(DailyCases::new(vec![], vec![]).is_err());
    }

    #[test]
    fn daily_cases_rejects_gapped_dates() {
        let dates = vec![d(2020, 3, 1), d(2020, 3, 3)];
        let err = DailyCases::new(dates, vec![1, 2]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn daily_cases_rejects_descending_dates() {
        let dates = vec![d(2020, 3, 2), d(2020, 3, 1)];
        assert!(DailyCases::new(dates, vec![1, 2]).is_err());
    }

    #[test]
    fn daily_cases_accepts_contiguous_range() {
        let dates = vec![d(2020, 3, 1), d(2020, 3, 2), d(2020, 3, 3)];
        let cases = DailyCases::new(dates, vec![0, 1, 2]).unwrap();
        assert_eq!(cases.len(), 3);
    }

    #[test]
    fn default_config_is_valid() {
        EstimatorConfig::default().validate().unwrap();
    }

    #[test]
    fn config_rejects_non_positive_step() {
        let config = EstimatorConfig {
            grid_step: 0.0,
            ..EstimatorConfig::default()
        };
        assert_eq!(config.validate().unwrap_err().exit_code(), 2);
    }

    #[test]
    fn config_rejects_zero_window() {
        let config = EstimatorConfig {
            window: 0,
            ..EstimatorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_min_periods_above_window() {
        let config = EstimatorConfig {
            min_periods: 8,
            ..EstimatorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
