//! Highest-density credible interval per posterior column.
//!
//! The HDI of a discrete distribution on an ordered grid is the narrowest
//! contiguous index span `[i, j]` whose enclosed mass strictly exceeds the
//! target coverage. Because the prefix sums of a non-negative column are
//! monotone, the minimal `j` for each `i` is non-decreasing in `i`, so a
//! two-pointer sweep finds the global optimum in O(n) per column. Ties on
//! width resolve to the smallest start index.
//!
//! Enclosed mass is computed over inclusive spans via exclusive prefix sums
//! (`prefix[j + 1] − prefix[i]`), so a column with all mass on one grid point
//! yields a zero-width interval on that point.

use chrono::NaiveDate;

use crate::error::AppError;

/// Find the narrowest `[low, high]` index span of `column` enclosing more
/// than `mass` probability. `date` only labels the error diagnostics.
///
/// Fails with a degeneracy error when no span qualifies, which can only
/// happen for a malformed or under-weighted column (total mass <= target);
/// a properly normalized column always has the full span as a fallback.
pub fn highest_density_interval(
    column: &[f64],
    mass: f64,
    date: NaiveDate,
) -> Result<(usize, usize), AppError> {
    if !(mass.is_finite() && mass > 0.0 && mass < 1.0) {
        return Err(AppError::config(format!(
            "Credible-interval mass must lie strictly inside (0, 1) (got {mass})."
        )));
    }
    if column.is_empty() {
        return Err(AppError::degenerate(format!(
            "Posterior column for {date} is empty."
        )));
    }
    if let Some(&bad) = column.iter().find(|v| !(v.is_finite() && **v >= 0.0)) {
        return Err(AppError::degenerate(format!(
            "Posterior column for {date} contains an invalid probability ({bad})."
        )));
    }

    let n = column.len();
    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0.0);
    for (idx, &p) in column.iter().enumerate() {
        prefix.push(prefix[idx] + p);
    }

    let mut best: Option<(usize, usize)> = None;
    let mut j = 0usize;
    for i in 0..n {
        if j < i {
            j = i;
        }
        while j < n && prefix[j + 1] - prefix[i] <= mass {
            j += 1;
        }
        if j == n {
            // Moving the start right only removes mass; no further span can
            // reach the target.
            break;
        }
        if best.map_or(true, |(bi, bj)| j - i < bj - bi) {
            best = Some((i, j));
        }
    }

    best.ok_or_else(|| {
        AppError::degenerate(format!(
            "No contiguous span of the posterior for {date} encloses more than {mass} \
             probability (column total {:.6}).",
            prefix[n]
        ))
    })
}
