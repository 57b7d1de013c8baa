//! Shared estimation pipeline used by every front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! smooth -> posteriors -> credible intervals -> assembled series
//!
//! The subcommands then focus on where the input comes from (CSV file vs
//! synthetic outbreak) and on presentation.

use crate::domain::{DailyCases, EstimatorConfig, PreparedCases, RtEstimate};
use crate::error::AppError;
use crate::estimate::{Posterior, RtGrid, assemble_estimates, build_posteriors};
use crate::smooth::prepare_cases;

/// All computed outputs of a single estimation run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub prepared: PreparedCases,
    pub posterior: Posterior,
    pub estimates: Vec<RtEstimate>,
}

/// Execute the full pipeline on a validated case series.
pub fn run_estimate(cases: &DailyCases, config: &EstimatorConfig) -> Result<RunOutput, AppError> {
    config.validate()?;
    let grid = RtGrid::from_config(config)?;

    let prepared = prepare_cases(cases, config)?;
    let posterior = build_posteriors(&prepared, &grid, config)?;
    let estimates = assemble_estimates(&posterior, &grid, config.hdi_mass)?;

    Ok(RunOutput {
        prepared,
        posterior,
        estimates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cases(counts: &[u32]) -> DailyCases {
        let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let dates = (0..counts.len() as i64)
            .map(|i| start + chrono::Duration::days(i))
            .collect();
        DailyCases::new(dates, counts.to_vec()).unwrap()
    }

    #[test]
    fn pipeline_emits_one_estimate_per_retained_day() {
        let run = run_estimate(&cases(&[10; 8]), &EstimatorConfig::default()).unwrap();
        assert_eq!(run.estimates.len(), run.prepared.len());
        assert_eq!(run.posterior.n_days(), run.prepared.len());
    }

    #[test]
    fn invalid_config_aborts_before_any_computation() {
        let config = EstimatorConfig {
            hdi_mass: 1.5,
            ..EstimatorConfig::default()
        };
        let err = run_estimate(&cases(&[10; 8]), &config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
