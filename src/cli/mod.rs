//! Command-line parsing for the Rt estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the inference code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rt", version, about = "Effective reproduction number (Rt) estimator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate Rt from a `date,count` CSV of daily case counts.
    Estimate(EstimateArgs),
    /// Generate a synthetic outbreak with a known Rt trajectory and estimate it.
    Sample(SampleArgs),
}

/// Estimator knobs shared by all subcommands. Defaults follow the common
/// COVID-19 calibration; override per disease/region as needed.
#[derive(Debug, Args, Clone)]
pub struct EstimatorArgs {
    /// Upper end of the candidate Rt grid.
    #[arg(long, default_value_t = 12.0)]
    pub r_max: f64,

    /// Grid step (estimates are reported at this resolution).
    #[arg(long, default_value_t = 0.01)]
    pub grid_step: f64,

    /// Reciprocal of the assumed serial interval (days⁻¹).
    #[arg(long, default_value_t = 0.25)]
    pub gamma: f64,

    /// Trailing likelihood window (days).
    #[arg(long, default_value_t = 7)]
    pub window: usize,

    /// Minimum columns required in a rolling window.
    #[arg(long, default_value_t = 1)]
    pub min_periods: usize,

    /// Shape of the Gamma prior on the first day.
    #[arg(long, default_value_t = 3.0)]
    pub prior_shape: f64,

    /// Smoothing window (days).
    #[arg(long, default_value_t = 7)]
    pub smooth_window: usize,

    /// Gaussian std of the smoothing kernel.
    #[arg(long, default_value_t = 2.0)]
    pub smooth_std: f64,

    /// Target credible-interval coverage.
    #[arg(long, default_value_t = 0.95)]
    pub hdi_mass: f64,

    /// Export the estimate series to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the retained original/smoothed counts to CSV.
    #[arg(long = "export-cases", value_name = "CSV")]
    pub export_cases: Option<PathBuf>,

    /// Export the run (config + estimates) to JSON.
    #[arg(long = "export-run", value_name = "JSON")]
    pub export_run: Option<PathBuf>,

    /// Skip the per-day table (summary only).
    #[arg(long)]
    pub no_table: bool,
}

/// Options for estimating from a CSV file.
#[derive(Debug, Parser)]
pub struct EstimateArgs {
    /// Input CSV with `date` (YYYY-MM-DD) and `count` columns.
    #[arg(short = 'i', long, value_name = "CSV")]
    pub input: PathBuf,

    #[command(flatten)]
    pub estimator: EstimatorArgs,
}

/// Options for the synthetic-outbreak demo.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Random seed for the outbreak simulation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// First date of the simulated series.
    #[arg(long, default_value = "2020-03-01")]
    pub start: NaiveDate,

    #[command(flatten)]
    pub estimator: EstimatorArgs,
}
