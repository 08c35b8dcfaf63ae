//! Positive real root isolation and minimizer selection.
//!
//! Roots are bracketed recursively: the critical points of a polynomial
//! (roots of its derivative) split the search interval into monotone
//! pieces, and each sign change inside a piece is refined by bisection.
//! A Descartes'-rule sign-variation count gives a cheap necessary
//! condition to skip the search entirely.

use crate::polynomial::Polynomial;

const MAX_BISECTION_STEPS: usize = 128;

/// Number of sign variations in the coefficient sequence, ignoring zeros.
/// By Descartes' rule of signs this bounds the count of positive real
/// roots; zero variations means no positive root can exist.
pub fn sign_variations(coefficients: &[f64]) -> usize {
    let mut variations = 0;
    let mut previous = 0.0f64;
    for &c in coefficients {
        if c == 0.0 {
            continue;
        }
        if previous != 0.0 && c.signum() != previous.signum() {
            variations += 1;
        }
        previous = c;
    }
    variations
}

/// Cheap necessary-condition test for the existence of strictly positive
/// roots.
pub fn has_positive_roots(p: &Polynomial) -> bool {
    sign_variations(p.coefficients()) > 0
}

/// Find all strictly positive real roots of `p`, deduplicated to the given
/// tolerance. A candidate is a root when the polynomial's value there is
/// within `tolerance` of zero, or when a bracketed sign change refines to
/// an interval narrower than `tolerance`. An empty result is a normal
/// outcome.
pub fn find_positive_roots(p: &Polynomial, tolerance: f64) -> Vec<f64> {
    // Strip exact-zero leading (high-order) coefficients, then factor out
    // any power of x: roots at zero are excluded by definition.
    let mut coeffs = p.coefficients().to_vec();
    while coeffs.last() == Some(&0.0) {
        coeffs.pop();
    }
    let low_zeros = coeffs.iter().take_while(|c| **c == 0.0).count();
    coeffs.drain(..low_zeros);
    if coeffs.len() <= 1 {
        return Vec::new();
    }

    let trimmed = Polynomial::new(coeffs);
    let upper = cauchy_root_bound(&trimmed);
    let mut found = roots_between(&trimmed, 0.0, upper, tolerance);

    found.retain(|r| *r > tolerance);
    found.sort_by(|a, b| a.total_cmp(b));
    found.dedup_by(|a, b| (*a - *b).abs() <= tolerance);
    found
}

/// Cauchy's bound: every root has magnitude below
/// `1 + max_i |a_i| / |a_n|`.
fn cauchy_root_bound(p: &Polynomial) -> f64 {
    let coeffs = p.coefficients();
    let leading = coeffs[coeffs.len() - 1].abs();
    let largest = coeffs[..coeffs.len() - 1]
        .iter()
        .fold(0.0f64, |acc, c| acc.max(c.abs()));
    1.0 + largest / leading
}

/// All roots of `p` in `(lo, hi]`, in ascending order.
fn roots_between(p: &Polynomial, lo: f64, hi: f64, tolerance: f64) -> Vec<f64> {
    let coeffs = p.coefficients();
    if coeffs.len() < 2 {
        return Vec::new();
    }
    if coeffs.len() == 2 {
        let root = -coeffs[0] / coeffs[1];
        if root.is_finite() && root > lo && root <= hi {
            return vec![root];
        }
        return Vec::new();
    }

    // The polynomial is monotone between consecutive critical points, so
    // the critical points plus the interval's upper end delimit every
    // possible bracketing interval.
    let mut brackets = roots_between(&p.derivative(), lo, hi, tolerance);
    brackets.push(hi);

    let mut roots = Vec::new();
    let mut last = lo;
    let mut last_value = p.evaluate_at(last);
    for x in brackets {
        if x <= last || x > hi {
            continue;
        }
        let value = p.evaluate_at(x);
        if value.abs() <= tolerance {
            // Covers exact zeros and tangency roots, where the bracketing
            // critical point evaluates within tolerance of zero without a
            // sign change on either side.
            roots.push(x);
        } else if last_value.abs() > tolerance && value.signum() != last_value.signum() {
            roots.push(bisect(p, last, x, tolerance));
        }
        last = x;
        last_value = value;
    }
    roots
}

/// Bisection refinement on a bracketing interval with a sign change.
fn bisect(p: &Polynomial, mut lo: f64, mut hi: f64, tolerance: f64) -> f64 {
    let mut lo_value = p.evaluate_at(lo);
    for _ in 0..MAX_BISECTION_STEPS {
        if hi - lo <= tolerance {
            break;
        }
        let mid = 0.5 * (lo + hi);
        let mid_value = p.evaluate_at(mid);
        if mid_value == 0.0 {
            return mid;
        }
        if mid_value.signum() == lo_value.signum() {
            lo = mid;
            lo_value = mid_value;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Evaluate `objective` at every candidate and return the argument of the
/// smallest value, or `None` when no candidate produces a comparable
/// (non-NaN-beating) result.
pub fn select_minimizer(objective: impl Fn(f64) -> f64, candidates: &[f64]) -> Option<f64> {
    let mut best: Option<f64> = None;
    let mut best_value = f64::INFINITY;
    for &candidate in candidates {
        let value = objective(candidate);
        if value < best_value {
            best = Some(candidate);
            best_value = value;
        }
    }
    best
}
