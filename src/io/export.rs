//! Export estimates and prepared cases to local files.
//!
//! These are the collaborator seams for persistence: a `date,ml,low,high`
//! CSV of the estimate series, a `date,original,smoothed` CSV of the
//! smoother output, and a JSON run file (config + estimates) for later
//! comparison. Where the files end up (object storage, dashboards) is the
//! caller's business.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{EstimatorConfig, PreparedCases, RtEstimate, RunFile};
use crate::error::AppError;

/// Write the estimate series to CSV. Values are grid-resolution, so two
/// decimal places at the default 0.01 step.
pub fn write_estimates_csv(path: &Path, estimates: &[RtEstimate]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "date,ml,low,high")
        .map_err(|e| AppError::config(format!("Failed to write CSV header: {e}")))?;
    for est in estimates {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2}",
            est.date, est.ml, est.low, est.high
        )
        .map_err(|e| AppError::config(format!("Failed to write CSV row: {e}")))?;
    }
    Ok(())
}

/// Write the retained original and smoothed counts to CSV.
pub fn write_cases_csv(path: &Path, prepared: &PreparedCases) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "date,original,smoothed")
        .map_err(|e| AppError::config(format!("Failed to write CSV header: {e}")))?;
    for i in 0..prepared.len() {
        writeln!(
            file,
            "{},{},{:.0}",
            prepared.dates[i], prepared.original[i], prepared.smoothed[i]
        )
        .map_err(|e| AppError::config(format!("Failed to write CSV row: {e}")))?;
    }
    Ok(())
}

/// Write the JSON run file.
pub fn write_run_json(
    path: &Path,
    config: &EstimatorConfig,
    estimates: &[RtEstimate],
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create run JSON '{}': {e}", path.display()))
    })?;

    let run = RunFile {
        tool: "rt".to_string(),
        config: config.clone(),
        estimates: estimates.to_vec(),
    };
    serde_json::to_writer_pretty(file, &run)
        .map_err(|e| AppError::config(format!("Failed to write run JSON: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("rt-export-{tag}-{}.out", std::process::id()));
        path
    }

    #[test]
    fn estimates_csv_rounds_to_grid_resolution() {
        let estimates = vec![RtEstimate {
            date: NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
            ml: 1.0,
            low: 0.55,
            high: 1.45,
        }];
        let path = temp_path("estimates");
        write_estimates_csv(&path, &estimates).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "date,ml,low,high\n2020-04-01,1.00,0.55,1.45\n");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn run_json_round_trips() {
        let config = EstimatorConfig::default();
        let estimates = vec![RtEstimate {
            date: NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
            ml: 1.1,
            low: 0.9,
            high: 1.3,
        }];
        let path = temp_path("run");
        write_run_json(&path, &config, &estimates).unwrap();

        let parsed: RunFile =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(parsed.tool, "rt");
        assert_eq!(parsed.estimates, estimates);
        std::fs::remove_file(path).ok();
    }
}
