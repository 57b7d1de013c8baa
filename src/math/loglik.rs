//! Closed-form log-densities used by the posterior estimator.
//!
//! We evaluate the Poisson log-pmf and the Gamma prior density explicitly
//! instead of going through distribution objects:
//!
//! - the estimator calls these in a tight loop over 1201 grid points per day
//!   pair, so the hot path should be a handful of flops
//! - `ln_gamma` gives a numerically stable log-factorial for large counts,
//!   where `ln(k!)` computed naively would overflow long before `k` does

use statrs::function::gamma::ln_gamma;

/// Poisson log-probability-mass at `lambda`, observed count `k`.
///
/// `k` is a whole number carried as `f64` (smoothed counts are rounded
/// integers). `lambda = 0` is handled as a limiting case: the pmf puts all
/// mass on zero, so the log-pmf is 0 for `k = 0` and −∞ otherwise.
pub fn poisson_ln_pmf(k: f64, lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return if k == 0.0 { 0.0 } else { f64::NEG_INFINITY };
    }
    k * lambda.ln() - lambda - ln_gamma(k + 1.0)
}

/// Log of the Gamma(shape, scale = 1) density at `x`, floored by `floor`
/// before taking the log so exact zeros never produce −∞.
///
/// The caller guarantees `shape >= 1`, which keeps the density finite at
/// `x = 0` (0 for shape > 1, 1 for shape = 1).
pub fn gamma_ln_pdf_floored(x: f64, shape: f64, floor: f64) -> f64 {
    let density = if x > 0.0 {
        ((shape - 1.0) * x.ln() - x - ln_gamma(shape)).exp()
    } else if shape > 1.0 {
        0.0
    } else {
        1.0
    };
    (density + floor).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn poisson_matches_closed_form() {
        // P(3; 2) = 2^3 e^-2 / 3!
        let expected = (8.0_f64 * (-2.0_f64).exp() / 6.0).ln();
        assert!((poisson_ln_pmf(3.0, 2.0) - expected).abs() < TOL);
    }

    #[test]
    fn poisson_zero_rate_limit() {
        assert_eq!(poisson_ln_pmf(0.0, 0.0), 0.0);
        assert_eq!(poisson_ln_pmf(5.0, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn poisson_large_count_stays_finite() {
        let ll = poisson_ln_pmf(1_000_000.0, 1_000_000.0);
        assert!(ll.is_finite());
        // Stirling: ln P(k; k) ≈ -0.5 ln(2πk)
        let approx = -0.5 * (2.0 * std::f64::consts::PI * 1_000_000.0).ln();
        assert!((ll - approx).abs() < 1e-6);
    }

    #[test]
    fn gamma_density_matches_closed_form() {
        // pdf(2; shape=3, scale=1) = 2^2 e^-2 / Γ(3) = 2 e^-2
        let expected = (2.0 * (-2.0_f64).exp()).ln();
        assert!((gamma_ln_pdf_floored(2.0, 3.0, 0.0) - expected).abs() < TOL);
    }

    #[test]
    fn gamma_floor_prevents_neg_infinity_at_zero() {
        let v = gamma_ln_pdf_floored(0.0, 3.0, 1e-14);
        assert!((v - 1e-14_f64.ln()).abs() < TOL);
    }

    #[test]
    fn gamma_shape_one_is_exponential() {
        // shape=1 is Exp(1): pdf(0) = 1.
        assert!(gamma_ln_pdf_floored(0.0, 1.0, 0.0).abs() < TOL);
    }
}
