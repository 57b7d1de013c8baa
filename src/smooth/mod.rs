//! Case smoothing and leading-prefix removal.
//!
//! Raw daily case counts are noisy (weekday effects, reporting batches), so
//! the estimator runs on a Gaussian-weighted moving average rounded back to
//! whole counts. The window is trailing with the kernel peak sitting
//! `(window - 1) / 2` days back, so the filter behaves like a centered
//! smoother delayed by the reporting lag that Rt estimates carry anyway.
//!
//! After smoothing, any prefix up to and including the *last* day whose
//! smoothed value is exactly zero is dropped: near-zero counts at epidemic
//! onset make the Poisson likelihood degenerate (λ ≈ 0), and a single late
//! zero means everything before it is equally unreliable.

use crate::domain::{DailyCases, EstimatorConfig, PreparedCases};
use crate::error::AppError;

/// Gaussian kernel for a window of `len` points with standard deviation `std`.
///
/// `w(n) = exp(-n² / (2σ²))` for offsets `n` centered on `(len - 1) / 2`.
fn gaussian_kernel(len: usize, std: f64) -> Vec<f64> {
    let center = (len as f64 - 1.0) / 2.0;
    (0..len)
        .map(|k| {
            let n = k as f64 - center;
            (-(n * n) / (2.0 * std * std)).exp()
        })
        .collect()
}

/// Smooth a validated case series and drop the unusable leading prefix.
///
/// Returns the retained dates with the original counts aligned
/// index-for-index to the smoothed counts. Partial windows at the start of
/// the series are averaged over however many points are available (the
/// weighted mean renormalizes over the weights of present points).
pub fn prepare_cases(
    cases: &DailyCases,
    config: &EstimatorConfig,
) -> Result<PreparedCases, AppError> {
    config.validate()?;

    let counts = cases.counts();
    let n = counts.len();
    let window = config.smooth_window;
    let kernel = gaussian_kernel(window, config.smooth_std);

    let mut smoothed = Vec::with_capacity(n);
    for i in 0..n {
        // Trailing window over counts[i-window+1 ..= i]; count t aligns with
        // kernel position t - i + window - 1, so the newest day carries the
        // kernel tail and the peak sits (window-1)/2 days back.
        let start = i.saturating_sub(window - 1);
        let mut num = 0.0;
        let mut den = 0.0;
        for t in start..=i {
            let w = kernel[t + window - 1 - i];
            num += w * counts[t] as f64;
            den += w;
        }
        smoothed.push((num / den).round());
    }

    // Everything up to and including the last smoothed zero is unreliable.
    let retain_from = smoothed
        .iter()
        .rposition(|&v| v == 0.0)
        .map(|idx| idx + 1)
        .unwrap_or(0);

    if retain_from == n {
        return Err(AppError::invalid_input(
            "Case series is zero everywhere after smoothing; nothing to estimate.",
        ));
    }

    Ok(PreparedCases {
        dates: cases.dates()[retain_from..].to_vec(),
        original: cases.counts()[retain_from..].to_vec(),
        smoothed: smoothed[retain_from..].to_vec(),
    })
}
