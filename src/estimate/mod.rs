//! Sequential Bayesian estimation of the effective reproduction number.
//!
//! - [`grid`]: the immutable candidate Rt grid
//! - [`posterior`]: per-day posterior distributions over the grid
//! - [`hdi`]: highest-density credible interval per posterior column
//! - [`assemble`]: final per-day estimate records

pub mod assemble;
pub mod grid;
pub mod hdi;
pub mod posterior;

pub use assemble::assemble_estimates;
pub use grid::RtGrid;
pub use hdi::highest_density_interval;
pub use posterior::{Posterior, build_posteriors};
