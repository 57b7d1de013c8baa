//! Final per-day estimate records.
//!
//! For each date: the maximum-a-posteriori grid value (first occurrence on
//! ties, i.e. the lowest grid value — the argmax is explicit, not a library
//! default) plus the HDI bounds. Days are independent once the posterior
//! table exists, so extraction runs in parallel with no shared mutable state;
//! the indexed collect keeps the output in date order.

use rayon::prelude::*;

use crate::domain::RtEstimate;
use crate::error::AppError;
use crate::estimate::grid::RtGrid;
use crate::estimate::hdi::highest_density_interval;
use crate::estimate::posterior::Posterior;

/// Deterministic first-occurrence argmax.
fn argmax(column: &[f64]) -> usize {
    let mut best = 0;
    for (i, &p) in column.iter().enumerate().skip(1) {
        if p > column[best] {
            best = i;
        }
    }
    best
}

/// Combine per-day argmax and credible interval into the output sequence.
pub fn assemble_estimates(
    posterior: &Posterior,
    grid: &RtGrid,
    mass: f64,
) -> Result<Vec<RtEstimate>, AppError> {
    (0..posterior.n_days())
        .into_par_iter()
        .map(|day| {
            let date = posterior.dates()[day];
            let column = posterior.column(day);
            let ml = grid.value(argmax(&column));
            let (low_idx, high_idx) = highest_density_interval(&column, mass, date)?;
            Ok(RtEstimate {
                date,
                ml,
                low: grid.value(low_idx),
                high: grid.value(high_idx),
            })
        })
        .collect()
}
