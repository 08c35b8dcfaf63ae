//! Scaled-derivative series: truncated Taylor coefficients of a trajectory.

use glam::DVec3;

/// A motion series: index `i` holds the `i`-th derivative of position
/// divided by `i!`, i.e. the coefficient of `t^i` in the trajectory's
/// Taylor expansion around the entity's own spawn instant.
///
/// Index 0 (current position) is always present. Series are immutable
/// after construction; every operation returns a new series.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledSeries(Vec<DVec3>);

impl ScaledSeries {
    /// Build a series from coefficients that are already factorial-scaled.
    pub fn from_scaled(coefficients: Vec<DVec3>) -> Self {
        if coefficients.is_empty() {
            return Self(vec![DVec3::ZERO]);
        }
        Self(coefficients)
    }

    /// Build a series from raw (unscaled) position derivatives by dividing
    /// derivative `i` by `i!` (0! = 1).
    pub fn from_derivatives(raw: &[DVec3]) -> Self {
        let mut factorial = 1.0;
        let scaled = raw
            .iter()
            .enumerate()
            .map(|(i, v)| {
                if i > 0 {
                    factorial *= i as f64;
                }
                *v / factorial
            })
            .collect();
        Self::from_scaled(scaled)
    }

    /// Number of coefficients (series length, not polynomial degree).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn coefficients(&self) -> &[DVec3] {
        &self.0
    }

    /// Elementwise difference `tip - tail` over the zero-padded union
    /// length. The result describes the motion of `tip` relative to
    /// `tail`; swapping the arguments negates it.
    pub fn displacement(tail: &ScaledSeries, tip: &ScaledSeries) -> ScaledSeries {
        let len = tail.len().max(tip.len());
        let coeffs = (0..len)
            .map(|i| {
                let a = tip.0.get(i).copied().unwrap_or(DVec3::ZERO);
                let b = tail.0.get(i).copied().unwrap_or(DVec3::ZERO);
                a - b
            })
            .collect();
        ScaledSeries(coeffs)
    }

    /// Evaluate the trajectory at time `t` by Horner's method.
    pub fn evaluate_at(&self, t: f64) -> DVec3 {
        horner(&self.0, t)
    }

    /// Re-center the series so that its clock starts `shift` seconds later:
    /// `shifted.evaluate_at(t) == self.evaluate_at(t + shift)` for all `t`.
    ///
    /// Binomial expansion of `(t + shift)^i` distributes each coefficient
    /// over the lower-order slots: `out[j] += self[i] * C(i, j) *
    /// shift^(i-j)`.
    pub fn time_shifted(&self, shift: f64) -> ScaledSeries {
        let mut out = vec![DVec3::ZERO; self.0.len()];
        for (i, coeff) in self.0.iter().enumerate() {
            let mut shift_pow = 1.0;
            // j descending so shift_pow accumulates shift^(i-j)
            for j in (0..=i).rev() {
                out[j] += *coeff * binomial(i, j) * shift_pow;
                shift_pow *= shift;
            }
        }
        ScaledSeries(out)
    }
}

/// Horner evaluation of a scaled-coefficient slice at time `t`. This is
/// the same evaluation the simulation uses for per-frame position updates,
/// exposed so callers holding raw coefficient storage need not rebuild a
/// series.
pub fn horner(coefficients: &[DVec3], t: f64) -> DVec3 {
    let mut acc = DVec3::ZERO;
    for coeff in coefficients.iter().rev() {
        acc = acc * t + *coeff;
    }
    acc
}

/// Binomial coefficient C(n, k) as f64. Multiplicative form stays exact
/// for the small orders used here.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}
