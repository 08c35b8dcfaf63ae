//! Laurent polynomials: rational functions of the form `P(x) / x^k`.
//!
//! The squared-magnitude polynomial divided by `t^(2 * order)` is exactly
//! this shape. Representing it with separate positive- and negative-power
//! coefficient lists makes differentiation a uniform termwise operation,
//! with no quotient-rule bookkeeping.

use crate::polynomial::Polynomial;

/// `positive[i]` multiplies `x^i`; `negative[i]` multiplies `x^-(i+1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LaurentPolynomial {
    positive: Vec<f64>,
    negative: Vec<f64>,
}

impl LaurentPolynomial {
    pub fn new(positive: Vec<f64>, negative: Vec<f64>) -> Self {
        Self { positive, negative }
    }

    pub fn from_polynomial(p: &Polynomial) -> Self {
        Self {
            positive: p.coefficients().to_vec(),
            negative: Vec::new(),
        }
    }

    pub fn positive_coefficients(&self) -> &[f64] {
        &self.positive
    }

    pub fn negative_coefficients(&self) -> &[f64] {
        &self.negative
    }

    /// Evaluate at `x`. The negative-power part requires `x != 0`; callers
    /// in the solve pipeline only ever pass strictly positive times, and a
    /// zero `x` with negative powers present is a contract violation.
    pub fn evaluate_at(&self, x: f64) -> f64 {
        debug_assert!(
            x != 0.0 || self.negative.is_empty(),
            "Laurent evaluation at 0 with negative powers"
        );

        let mut pos = 0.0;
        for coeff in self.positive.iter().rev() {
            pos = pos * x + coeff;
        }

        // Horner in 1/x: each step adds one more division by x, so
        // negative[i] ends up multiplied by x^-(i+1).
        let mut neg = 0.0;
        if x != 0.0 {
            for coeff in self.negative.iter().rev() {
                neg = (neg + coeff) / x;
            }
        }

        pos + neg
    }

    /// Scale every coefficient by `k`.
    pub fn scaled_by(&self, k: f64) -> LaurentPolynomial {
        LaurentPolynomial {
            positive: self.positive.iter().map(|c| c * k).collect(),
            negative: self.negative.iter().map(|c| c * k).collect(),
        }
    }

    /// Multiply by `x^shift` for any integer `shift`, reindexing
    /// coefficients across the zero boundary as needed.
    pub fn mul_x_power(&self, shift: i32) -> LaurentPolynomial {
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        let mut place = |exponent: i32, coeff: f64| {
            if exponent >= 0 {
                let i = exponent as usize;
                if positive.len() <= i {
                    positive.resize(i + 1, 0.0);
                }
                positive[i] += coeff;
            } else {
                let i = (-exponent - 1) as usize;
                if negative.len() <= i {
                    negative.resize(i + 1, 0.0);
                }
                negative[i] += coeff;
            }
        };

        for (i, &coeff) in self.positive.iter().enumerate() {
            place(i as i32 + shift, coeff);
        }
        for (i, &coeff) in self.negative.iter().enumerate() {
            place(-(i as i32 + 1) + shift, coeff);
        }

        LaurentPolynomial { positive, negative }
    }

    /// Termwise calculus derivative: `d/dx x^i = i x^(i-1)` and
    /// `d/dx x^-(i+1) = -(i+1) x^-(i+2)`.
    pub fn derivative(&self) -> LaurentPolynomial {
        let positive = self
            .positive
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c * i as f64)
            .collect();

        // Every negative-power term drops one exponent deeper, so the
        // x^-1 slot of the result is always empty.
        let mut negative = Vec::with_capacity(self.negative.len() + 1);
        if !self.negative.is_empty() {
            negative.push(0.0);
            for (i, c) in self.negative.iter().enumerate() {
                negative.push(-c * (i + 1) as f64);
            }
        }

        LaurentPolynomial { positive, negative }
    }

    /// The numerator once cleared of denominators: multiply through by the
    /// deepest negative power present. Its roots coincide with this Laurent
    /// polynomial's roots wherever `x != 0`.
    pub fn numerator(&self) -> Polynomial {
        let depth = self.negative.len();
        let mut coeffs = vec![0.0; depth + self.positive.len()];
        // negative[i] has exponent -(i+1); times x^depth it lands at
        // depth - 1 - i.
        for (i, &c) in self.negative.iter().enumerate() {
            coeffs[depth - 1 - i] = c;
        }
        for (i, &c) in self.positive.iter().enumerate() {
            coeffs[depth + i] = c;
        }
        Polynomial::new(coeffs)
    }
}
