//! Per-day posterior distributions over the Rt grid.
//!
//! For each consecutive day pair (count `c` on day t−1, count `c'` on day t)
//! the renewal model expects `λ(r) = c · exp(γ(r − 1))` new cases, and the
//! evidence for each grid value `r` is the Poisson log-pmf of `c'` at `λ(r)`.
//! The first day has no predecessor and is anchored by a Gamma prior instead.
//!
//! Summing log-likelihood columns over a trailing window and exponentiating
//! multiplies the per-day likelihoods, i.e. sequential Bayesian updating
//! restricted to the most recent `W` days. Bounding the window deliberately
//! limits the influence of old evidence so the estimate can track a
//! non-stationary Rt instead of converging on one fixed value.

use chrono::NaiveDate;
use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::domain::{EstimatorConfig, PreparedCases};
use crate::error::AppError;
use crate::estimate::grid::RtGrid;
use crate::math::{gamma_ln_pdf_floored, poisson_ln_pmf};

/// Additive floor applied to the prior density before taking the log.
const PRIOR_FLOOR: f64 = 1e-14;

/// Per-day posterior distributions: one column per retained date, each a
/// probability vector over the grid (column sums are 1 up to rounding).
/// Built once, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Posterior {
    dates: Vec<NaiveDate>,
    /// `grid.len() × dates.len()`, column-stochastic.
    columns: DMatrix<f64>,
}

impl Posterior {
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn n_days(&self) -> usize {
        self.dates.len()
    }

    /// One day's distribution over the grid.
    pub fn column(&self, day: usize) -> Vec<f64> {
        self.columns.column(day).iter().copied().collect()
    }
}

/// Build the posterior table for a smoothed series.
///
/// The smoothed counts must be strictly positive (guaranteed by the smoother's
/// prefix trimming); a zero count would make `λ = 0` for the following day
/// and the likelihood degenerate.
pub fn build_posteriors(
    prepared: &PreparedCases,
    grid: &RtGrid,
    config: &EstimatorConfig,
) -> Result<Posterior, AppError> {
    config.validate()?;
    if prepared.is_empty() {
        return Err(AppError::invalid_input(
            "Smoothed series is empty; nothing to estimate.",
        ));
    }
    if let Some(idx) = prepared
        .smoothed
        .iter()
        .position(|&v| !(v.is_finite() && v > 0.0))
    {
        return Err(AppError::invalid_input(format!(
            "Smoothed count on {} is not a positive finite number; was the leading prefix trimmed?",
            prepared.dates[idx]
        )));
    }

    let n_grid = grid.len();
    let n_days = prepared.len();

    // Per-grid-point growth factor exp(γ(r − 1)), shared by every day pair.
    let growth: Vec<f64> = grid
        .values()
        .iter()
        .map(|&r| (config.gamma * (r - 1.0)).exp())
        .collect();

    // One log-evidence column per day. Day 0 is the Gamma prior; day t > 0 is
    // the Poisson log-likelihood of the pair (t-1, t). Columns are independent
    // and the result does not depend on evaluation order.
    let log_columns: Vec<Vec<f64>> = (0..n_days)
        .into_par_iter()
        .map(|t| {
            if t == 0 {
                grid.values()
                    .iter()
                    .map(|&r| gamma_ln_pdf_floored(r, config.prior_shape, PRIOR_FLOOR))
                    .collect()
            } else {
                let prev = prepared.smoothed[t - 1];
                let observed = prepared.smoothed[t];
                growth
                    .iter()
                    .map(|&g| poisson_ln_pmf(observed, prev * g))
                    .collect()
            }
        })
        .collect();

    // Trailing-window sum of log columns: add the incoming day, subtract the
    // day leaving the window. All entries are finite here (positive counts,
    // floored prior), so the subtraction is exact in the cancellation sense.
    let mut acc = vec![0.0f64; n_grid];
    let mut data = Vec::with_capacity(n_grid * n_days);
    for t in 0..n_days {
        for (a, &v) in acc.iter_mut().zip(&log_columns[t]) {
            *a += v;
        }
        if t >= config.window {
            for (a, &v) in acc.iter_mut().zip(&log_columns[t - config.window]) {
                *a -= v;
            }
        }

        let in_window = (t + 1).min(config.window);
        if in_window < config.min_periods {
            return Err(AppError::degenerate(format!(
                "Rolling window for {} holds {in_window} day(s), fewer than min_periods = {}.",
                prepared.dates[t], config.min_periods
            )));
        }

        // Out of log space, then normalize the column to a proper
        // distribution. A zero sum means the window's evidence underflowed
        // everywhere; surface it instead of dividing into NaN.
        let start = data.len();
        let mut sum = 0.0;
        for &a in &acc {
            let p = a.exp();
            sum += p;
            data.push(p);
        }
        if !(sum.is_finite() && sum > 0.0) {
            return Err(AppError::degenerate(format!(
                "Posterior column for {} sums to {sum}; the likelihood is degenerate.",
                prepared.dates[t]
            )));
        }
        for p in &mut data[start..] {
            *p /= sum;
        }
    }

    Ok(Posterior {
        dates: prepared.dates.clone(),
        columns: DMatrix::from_vec(n_grid, n_days, data),
    })
}
