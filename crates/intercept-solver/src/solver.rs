//! Intercept orchestration: ties the series algebra, convolution, Laurent
//! normalization and root search together into one solve call.

use glam::DVec3;

use crate::error::SolveError;
use crate::laurent::LaurentPolynomial;
use crate::polynomial::squared_magnitude;
use crate::roots::{find_positive_roots, has_positive_roots, select_minimizer};
use crate::series::ScaledSeries;

/// Acceptance and deduplication tolerance for critical-time roots.
pub const ROOT_TOLERANCE: f64 = 1e-6;

/// Output of one solve call: the initial value of the requested derivative
/// order of the projectile's own motion, and the intercept time it was
/// evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterceptSolution {
    pub derivative: DVec3,
    pub intercept_time: f64,
    /// True when the clamped fallback time was used instead of a critical
    /// time from the root search.
    pub used_fallback: bool,
}

/// Solve for the initial `order`-th derivative of a projectile launched
/// from `origin` so that it meets `target` at a strictly positive time,
/// minimizing the squared magnitude of that derivative over the choice of
/// time.
///
/// `target_elapsed` is how long the target has already been flying on its
/// own clock when the projectile launches; the target series is Taylor-
/// recentered by that amount so both trajectories share the projectile's
/// clock. When no admissible critical time exists the clamped
/// `fallback_time` is used, and any chosen time at or beyond
/// `expiry_lifetime` is likewise replaced by the fallback.
///
/// Pure and stateless: every intermediate is freshly allocated, so calls
/// may run concurrently without coordination.
pub fn solve_intercept_derivative(
    target: &ScaledSeries,
    origin: &ScaledSeries,
    target_elapsed: f64,
    order: u32,
    fallback_time: f64,
    expiry_lifetime: f64,
) -> Result<InterceptSolution, SolveError> {
    if order == 0 {
        return Err(SolveError::InvalidArgument("order must be at least 1"));
    }
    if !(fallback_time > 0.0) {
        return Err(SolveError::InvalidArgument(
            "fallback time must be strictly positive",
        ));
    }
    if !(expiry_lifetime > 0.0) {
        return Err(SolveError::InvalidArgument(
            "expiry lifetime must be strictly positive",
        ));
    }
    if !(target_elapsed >= 0.0) {
        return Err(SolveError::InvalidArgument(
            "target elapsed lifetime must be non-negative",
        ));
    }

    // Bring the target onto the projectile's clock, then form the relative
    // series (target minus origin): its value at t is the gap the
    // projectile must close.
    let shifted_target = target.time_shifted(target_elapsed);
    let relative = ScaledSeries::displacement(origin, &shifted_target);

    // |gap(t)|² expands into a plain polynomial; dividing by t^(2*order)
    // turns it into the squared magnitude of the derivative being solved
    // for, as a function of the assumed intercept time.
    let expanded = squared_magnitude(&relative);
    let objective = |t: f64| expanded.evaluate_at(t) / t.powi(2 * order as i32);

    let derivative_numerator = LaurentPolynomial::from_polynomial(&expanded)
        .mul_x_power(-2 * order as i32)
        .derivative()
        .numerator();

    let fallback = clamped_fallback(fallback_time, expiry_lifetime);

    let critical_times = if has_positive_roots(&derivative_numerator) {
        find_positive_roots(&derivative_numerator, ROOT_TOLERANCE)
    } else {
        Vec::new()
    };

    let (intercept_time, used_fallback) = match select_minimizer(objective, &critical_times) {
        Some(best) if best < expiry_lifetime => (best, false),
        _ => (fallback, true),
    };

    let derivative = relative.evaluate_at(intercept_time) / intercept_time.powi(order as i32);

    Ok(InterceptSolution {
        derivative,
        intercept_time,
        used_fallback,
    })
}

/// Clamp the fallback time below the projectile's expiry: a fallback past
/// `expiry_lifetime` becomes `expiry_lifetime - 1`, floored at 1.
fn clamped_fallback(fallback_time: f64, expiry_lifetime: f64) -> f64 {
    if fallback_time > expiry_lifetime {
        (expiry_lifetime - 1.0).max(1.0)
    } else {
        fallback_time
    }
}
