//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads or generates the case series
//! - runs smoothing + posterior estimation + interval extraction
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, EstimateArgs, EstimatorArgs, SampleArgs};
use crate::data::{OutbreakSpec, generate_outbreak};
use crate::domain::{DailyCases, EstimatorConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `rt` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Estimate(args) => handle_estimate(args),
        Command::Sample(args) => handle_sample(args),
    }
}

fn handle_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = config_from_args(&args.estimator);
    let cases = crate::io::ingest::load_daily_cases(&args.input)?;
    run_and_report(&cases, &config, &args.estimator)
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = config_from_args(&args.estimator);
    let spec = OutbreakSpec::demo(args.seed, args.start);

    let sample = generate_outbreak(&spec, config.gamma)?;
    println!(
        "Simulated outbreak: seed {}, {} days, trajectory {:?}",
        args.seed,
        sample.cases.len(),
        spec.segments
    );

    run_and_report(&sample.cases, &config, &args.estimator)
}

fn run_and_report(
    cases: &DailyCases,
    config: &EstimatorConfig,
    args: &EstimatorArgs,
) -> Result<(), AppError> {
    let run = pipeline::run_estimate(cases, config)?;

    println!(
        "{}",
        crate::report::format_run_summary(cases.len(), &run, config)
    );
    if !args.no_table {
        println!("{}", crate::report::format_estimate_table(&run));
    }

    if let Some(path) = &args.export {
        crate::io::export::write_estimates_csv(path, &run.estimates)?;
    }
    if let Some(path) = &args.export_cases {
        crate::io::export::write_cases_csv(path, &run.prepared)?;
    }
    if let Some(path) = &args.export_run {
        crate::io::export::write_run_json(path, config, &run.estimates)?;
    }

    Ok(())
}

pub fn config_from_args(args: &EstimatorArgs) -> EstimatorConfig {
    EstimatorConfig {
        r_max: args.r_max,
        grid_step: args.grid_step,
        gamma: args.gamma,
        window: args.window,
        min_periods: args.min_periods,
        prior_shape: args.prior_shape,
        smooth_window: args.smooth_window,
        smooth_std: args.smooth_std,
        hdi_mass: args.hdi_mass,
    }
}
