//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the validated input series (`DailyCases`)
//! - the smoother output (`PreparedCases`)
//! - per-day estimates (`RtEstimate`)
//! - the run configuration (`EstimatorConfig`)

pub mod types;

pub use types::*;
