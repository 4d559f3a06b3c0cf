//! Chi-squared tail probabilities.
//!
//! The goodness-of-fit verdict needs the upper-tail probability of the
//! chi-squared distribution. It is computed through the regularized
//! incomplete gamma function: `F(x; k) = P(k/2, x/2)` and the survival
//! function is `Q(k/2, x/2) = 1 - P(k/2, x/2)`. The series expansion is
//! used below the `a + 1` crossover and the Lentz continued fraction
//! above it, so the tail that matters is always computed directly rather
//! than as a cancellation-prone complement.
//!
//! Invalid parameters yield NaN. The analyzer treats any non-finite
//! probability as a fatal computation error rather than folding it into
//! a verdict.

const MAX_ITER: usize = 200;
const EPS: f64 = 1e-14;
const TINY: f64 = 1e-30;

/// Natural log of the gamma function by the Lanczos approximation
/// (g = 7, 9 coefficients). Relative error stays below 1e-10 over the
/// arguments the chi-squared test produces.
pub fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;
    let pi = std::f64::consts::PI;

    if x < 0.5 {
        // Reflection formula for the left half-line.
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = COEFFS[0];
    for (i, &c) in COEFFS[1..].iter().enumerate() {
        sum += c / (x + i as f64 + 1.0);
    }
    let t = x + G + 0.5;
    0.5 * (2.0 * pi).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Regularized lower incomplete gamma P(a, x) by series expansion.
/// Converges quickly for x < a + 1.
fn lower_gamma_series(a: f64, x: f64) -> f64 {
    let mut denom = a;
    let mut term = 1.0 / a;
    let mut sum = term;
    for _ in 0..MAX_ITER {
        denom += 1.0;
        term *= x / denom;
        sum += term;
        if term.abs() < sum.abs() * EPS {
            break;
        }
    }
    sum * (a * x.ln() - x - ln_gamma(a)).exp()
}

/// Regularized upper incomplete gamma Q(a, x) by Lentz's continued
/// fraction. Converges quickly for x >= a + 1.
fn upper_gamma_fraction(a: f64, x: f64) -> f64 {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..=MAX_ITER {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < TINY {
            d = TINY;
        }
        c = b + an / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < EPS {
            break;
        }
    }
    h * (a * x.ln() - x - ln_gamma(a)).exp()
}

/// CDF of the chi-squared distribution with `df` degrees of freedom.
pub fn chi_squared_cdf(x: f64, df: f64) -> f64 {
    if x.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    let a = df / 2.0;
    let half = x / 2.0;
    if half < a + 1.0 {
        lower_gamma_series(a, half)
    } else {
        1.0 - upper_gamma_fraction(a, half)
    }
}

/// Upper-tail probability P(X > x) of the chi-squared distribution,
/// i.e. the p-value of a goodness-of-fit statistic.
pub fn chi_squared_sf(x: f64, df: f64) -> f64 {
    if x.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 1.0;
    }
    let a = df / 2.0;
    let half = x / 2.0;
    if half < a + 1.0 {
        1.0 - lower_gamma_series(a, half)
    } else {
        upper_gamma_fraction(a, half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_ln_gamma_of_integers_matches_factorials() {
        // Gamma(n) = (n-1)!
        assert_close(ln_gamma(1.0), 0.0, 1e-10);
        assert_close(ln_gamma(2.0), 0.0, 1e-10);
        assert_close(ln_gamma(5.0), 24f64.ln(), 1e-10);
        assert_close(ln_gamma(11.0), 3_628_800f64.ln(), 1e-9);
    }

    #[test]
    fn test_ln_gamma_of_half() {
        // Gamma(1/2) = sqrt(pi)
        assert_close(ln_gamma(0.5), std::f64::consts::PI.sqrt().ln(), 1e-10);
    }

    #[test]
    fn test_cdf_at_known_critical_values() {
        // Standard chi-squared table entries.
        assert_close(chi_squared_cdf(3.841, 1.0), 0.95, 1e-3);
        assert_close(chi_squared_cdf(5.991, 2.0), 0.95, 1e-3);
        assert_close(chi_squared_cdf(15.507, 8.0), 0.95, 1e-3);
        assert_close(chi_squared_cdf(20.090, 8.0), 0.99, 1e-3);
    }

    #[test]
    fn test_sf_at_known_critical_values() {
        assert_close(chi_squared_sf(15.507, 8.0), 0.05, 1e-3);
        assert_close(chi_squared_sf(20.090, 8.0), 0.01, 1e-3);
        assert_close(chi_squared_sf(2.733, 8.0), 0.95, 1e-3);
    }

    #[test]
    fn test_sf_with_two_degrees_matches_closed_form() {
        // With df = 2 the survival function is exactly exp(-x/2).
        for x in [0.1, 1.0, 2.0, 5.0, 10.0, 40.0] {
            assert_close(chi_squared_sf(x, 2.0), (-x / 2.0).exp(), 1e-10);
        }
    }

    #[test]
    fn test_extreme_statistic_underflows_to_zero() {
        let p = chi_squared_sf(3000.0, 8.0);
        assert!(p >= 0.0);
        assert!(p < 1e-300);
    }

    #[test]
    fn test_nonpositive_statistic() {
        assert_eq!(chi_squared_cdf(0.0, 8.0), 0.0);
        assert_eq!(chi_squared_sf(0.0, 8.0), 1.0);
        assert_eq!(chi_squared_sf(-4.0, 8.0), 1.0);
    }

    #[test]
    fn test_invalid_parameters_yield_nan() {
        assert!(chi_squared_cdf(f64::NAN, 8.0).is_nan());
        assert!(chi_squared_cdf(1.0, 0.0).is_nan());
        assert!(chi_squared_sf(1.0, -2.0).is_nan());
        assert!(chi_squared_sf(f64::NAN, 8.0).is_nan());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_cdf_stays_in_unit_interval(x in 0.0..500.0f64, df in 1.0..50.0f64) {
            let p = chi_squared_cdf(x, df);
            prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn prop_cdf_and_sf_are_complements(x in 0.0..200.0f64, df in 1.0..30.0f64) {
            let total = chi_squared_cdf(x, df) + chi_squared_sf(x, df);
            prop_assert!((total - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_cdf_is_monotone_in_x(x in 0.0..200.0f64, step in 0.01..50.0f64, df in 1.0..30.0f64) {
            prop_assert!(chi_squared_cdf(x + step, df) >= chi_squared_cdf(x, df) - 1e-12);
        }
    }
}
