//! Scalar polynomials and the squared-magnitude convolution.

use crate::series::ScaledSeries;

/// A real polynomial with ascending coefficients: `coeffs[i]` multiplies
/// `x^i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial(Vec<f64>);

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self(coefficients)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.0
    }

    /// Degree by coefficient count; does not inspect values.
    pub fn degree(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Horner evaluation.
    pub fn evaluate_at(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        for coeff in self.0.iter().rev() {
            acc = acc * x + coeff;
        }
        acc
    }

    /// Termwise calculus derivative.
    pub fn derivative(&self) -> Polynomial {
        let coeffs = self
            .0
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c * i as f64)
            .collect();
        Polynomial(coeffs)
    }
}

/// Expand `series(t) · series(t)` into a scalar polynomial of length
/// `2n - 1`.
///
/// Coefficient `k` is the convolution sum `Σ_{i+j=k} series[i]·series[j]`.
/// The dot products are symmetric in `i` and `j`, so only the pairs below
/// the midpoint are computed and doubled, with the middle square added once
/// when `k` is even.
pub fn squared_magnitude(series: &ScaledSeries) -> Polynomial {
    let coeffs = series.coefficients();
    let n = coeffs.len();
    let out_len = 2 * n - 1;
    let mut out = vec![0.0; out_len];

    for (k, slot) in out.iter_mut().enumerate() {
        let mid = k / 2;
        let mut sum = 0.0;
        if k % 2 == 0 {
            for j in k.saturating_sub(n - 1)..mid {
                sum += coeffs[j].dot(coeffs[k - j]);
            }
            sum *= 2.0;
            sum += coeffs[mid].dot(coeffs[mid]);
        } else {
            for j in k.saturating_sub(n - 1)..=mid {
                sum += coeffs[j].dot(coeffs[k - j]);
            }
            sum *= 2.0;
        }
        *slot = sum;
    }

    Polynomial(out)
}
