//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the inference code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::RunOutput;
use crate::domain::EstimatorConfig;

/// Format the run summary: configuration echo, series stats, latest estimate.
pub fn format_run_summary(
    input_days: usize,
    run: &RunOutput,
    config: &EstimatorConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== rt - effective reproduction number ===\n");
    out.push_str(&format!(
        "Grid: [0, {:.2}] step {:.2} | gamma: {:.3}/day (serial interval {:.1}d)\n",
        config.r_max,
        config.grid_step,
        config.gamma,
        1.0 / config.gamma,
    ));
    out.push_str(&format!(
        "Windows: likelihood {}d (min {}), smoothing {}d (std {:.1}) | interval: {:.0}%\n",
        config.window,
        config.min_periods,
        config.smooth_window,
        config.smooth_std,
        config.hdi_mass * 100.0,
    ));

    let trimmed = input_days - run.prepared.len();
    out.push_str(&format!(
        "Days: {} read, {} estimated ({} trimmed at onset) | {} .. {}\n",
        input_days,
        run.prepared.len(),
        trimmed,
        run.prepared.dates.first().map(|d| d.to_string()).unwrap_or_default(),
        run.prepared.dates.last().map(|d| d.to_string()).unwrap_or_default(),
    ));

    if let Some(latest) = run.estimates.last() {
        out.push_str(&format!(
            "\nLatest ({}): Rt = {:.2} [{:.2}, {:.2}]\n",
            latest.date, latest.ml, latest.low, latest.high
        ));
    }

    out
}

/// Format the per-day estimate table.
pub fn format_estimate_table(run: &RunOutput) -> String {
    let mut out = String::new();
    out.push_str("date        cases  smoothed    Rt   [low, high]\n");
    for (i, est) in run.estimates.iter().enumerate() {
        out.push_str(&format!(
            "{}  {:>5}  {:>8.0}  {:>4.2}  [{:.2}, {:.2}]\n",
            est.date, run.prepared.original[i], run.prepared.smoothed[i], est.ml, est.low, est.high
        ));
    }
    out
}
