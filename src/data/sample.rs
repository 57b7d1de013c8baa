//! Synthetic outbreak generation from a known Rt trajectory.
//!
//! The simulator runs the same renewal model the estimator assumes: each
//! day's count is a Poisson draw with mean `λ = c_prev · exp(γ(Rt − 1))`.
//! Because the true trajectory is known, the generated series doubles as an
//! end-to-end sanity check: the estimated Rt should track the trajectory
//! once the rolling window fills.

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Poisson;

use crate::domain::DailyCases;
use crate::error::AppError;

/// Specification of a synthetic outbreak.
#[derive(Debug, Clone)]
pub struct OutbreakSpec {
    /// Seed for the deterministic RNG.
    pub seed: u64,
    /// Date of the first (seeded) day.
    pub start: NaiveDate,
    /// Case count on the first day.
    pub initial_cases: u32,
    /// `(days, rt)` segments of the true trajectory, applied in order.
    pub segments: Vec<(usize, f64)>,
}

impl OutbreakSpec {
    /// A declining epidemic: growth at Rt 2.2, mitigation to 1.3, then
    /// suppression below 1. Used by the `sample` subcommand default.
    pub fn demo(seed: u64, start: NaiveDate) -> Self {
        Self {
            seed,
            start,
            initial_cases: 20,
            segments: vec![(12, 2.2), (14, 1.3), (21, 0.8)],
        }
    }
}

/// A generated series plus the trajectory that produced it (aligned to the
/// series dates; the seeded first day carries its segment's upcoming value).
#[derive(Debug, Clone)]
pub struct SampleData {
    pub cases: DailyCases,
    pub true_rt: Vec<f64>,
}

/// Simulate a renewal-process outbreak.
///
/// `gamma` is the reciprocal serial interval, matching the estimator's
/// configuration so simulation and inference share one model.
pub fn generate_outbreak(spec: &OutbreakSpec, gamma: f64) -> Result<SampleData, AppError> {
    if spec.initial_cases == 0 {
        return Err(AppError::config("Initial case count must be > 0."));
    }
    if spec.segments.is_empty() {
        return Err(AppError::config("Outbreak trajectory has no segments."));
    }
    for &(days, rt) in &spec.segments {
        if days == 0 {
            return Err(AppError::config("Trajectory segments must span >= 1 day."));
        }
        if !(rt.is_finite() && rt >= 0.0) {
            return Err(AppError::config(format!(
                "Trajectory Rt values must be finite and >= 0 (got {rt})."
            )));
        }
    }
    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(AppError::config(format!(
            "Gamma (1/serial interval) must be finite and > 0 (got {gamma})."
        )));
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);

    let total_days = 1 + spec.segments.iter().map(|&(d, _)| d).sum::<usize>();
    let mut dates = Vec::with_capacity(total_days);
    let mut counts = Vec::with_capacity(total_days);
    let mut true_rt = Vec::with_capacity(total_days);

    dates.push(spec.start);
    counts.push(spec.initial_cases);
    true_rt.push(spec.segments[0].1);

    let mut prev = spec.initial_cases as f64;
    let mut day = 1i64;
    for &(days, rt) in &spec.segments {
        for _ in 0..days {
            let lambda = prev * (gamma * (rt - 1.0)).exp();
            // Once the epidemic dies out the renewal mean is zero and every
            // later count is zero; rand_distr rejects λ = 0, so short-circuit.
            let count = if lambda > 0.0 {
                let poisson = Poisson::new(lambda).map_err(|e| {
                    AppError::degenerate(format!("Poisson sampling failed at λ = {lambda}: {e}"))
                })?;
                poisson.sample(&mut rng) as u32
            } else {
                0
            };

            dates.push(spec.start + Duration::days(day));
            counts.push(count);
            true_rt.push(rt);
            prev = count as f64;
            day += 1;
        }
    }

    let cases = DailyCases::new(dates, counts)?;
    Ok(SampleData { cases, true_rt })
}
