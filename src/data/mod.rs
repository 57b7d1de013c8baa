//! Input data sources: synthetic outbreak generation.
//!
//! Acquiring real case counts from an upstream source is a collaborator's
//! job; the pipeline only consumes a validated [`crate::domain::DailyCases`].

pub mod sample;

pub use sample::{OutbreakSpec, SampleData, generate_outbreak};
