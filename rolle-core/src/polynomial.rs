//! Dense single-variable polynomials: coefficient `i` multiplies `x^i`.
//!
//! Free functions take plain slices so callers can pass `&[f64]` literals; [`Polynomial`]
//! dereferences to `[f64]` and mirrors them as methods.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use derive_more::{Deref, From};
use serde::{Deserialize, Serialize};

use crate::{config::Config, error::Result, zeros::Solver};

#[derive(Clone, Debug, Default, Deref, From, PartialEq, Serialize, Deserialize)]
pub struct Polynomial(pub Vec<f64>);

/// Coefficient of `x^i`; zero past the end of `p`.
pub fn coefficient(p: &[f64], i: usize) -> f64 {
    p.get(i).cloned().unwrap_or(0.)
}

/// Highest power with a nonzero coefficient. Every position is scanned, so trailing zeros are
/// ignored; empty and all-zero polynomials have degree 0.
pub fn degree(p: &[f64]) -> usize {
    let mut degree = 0;
    for (n, c) in p.iter().enumerate() {
        if *c != 0. {
            degree = n;
        }
    }
    degree
}

/// `p(x)`, summing terms up to the effective degree only.
pub fn evaluate_polynomial(p: &[f64], x: f64) -> f64 {
    let mut value = 0.;
    for n in 0..=degree(p) {
        value += coefficient(p, n) * x.powi(n as i32);
    }
    value
}

/// `d[i] = p[i+1] * (i+1)`: one element shorter than `p` (empty for empty or constant `p`).
pub fn derivative(p: &[f64]) -> Polynomial {
    Polynomial(
        p.iter()
            .enumerate()
            .skip(1)
            .map(|(n, c)| c * n as f64)
            .collect()
    )
}

/// Whether `|p(x)| <= tolerance`. All "is this a root" decisions go through here.
pub fn is_near_zero(p: &[f64], x: f64, tolerance: f64) -> bool {
    evaluate_polynomial(p, x).abs() <= tolerance
}

impl Polynomial {
    pub fn new(coeffs: impl IntoIterator<Item = f64>) -> Self {
        Polynomial(coeffs.into_iter().collect())
    }

    /// Monic polynomial `(x - r0)(x - r1)...`.
    pub fn from_roots(roots: &[f64]) -> Self {
        let mut coeffs = vec![1.];
        for r in roots {
            let mut next = vec![0.; coeffs.len() + 1];
            for (i, c) in coeffs.iter().enumerate() {
                next[i + 1] += c;
                next[i] -= r * c;
            }
            coeffs = next;
        }
        Polynomial(coeffs)
    }

    pub fn coeff(&self, i: usize) -> f64 {
        coefficient(self, i)
    }

    pub fn degree(&self) -> usize {
        degree(self)
    }

    pub fn eval(&self, x: f64) -> f64 {
        evaluate_polynomial(self, x)
    }

    pub fn derivative(&self) -> Polynomial {
        derivative(self)
    }

    pub fn is_near_zero(&self, x: f64, tolerance: f64) -> bool {
        is_near_zero(self, x, tolerance)
    }

    pub fn zeros(&self) -> Result<Vec<f64>> {
        self.zeros_with(Config::default())
    }

    pub fn zeros_with(&self, config: Config) -> Result<Vec<f64>> {
        Solver::new(config).zeros(self)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coeffs: &[f64]) -> Self {
        Polynomial(coeffs.to_vec())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<(usize, f64)> = (0..=self.degree())
            .rev()
            .map(|n| (n, self.coeff(n)))
            .filter(|(_, c)| *c != 0.)
            .collect();
        if terms.is_empty() {
            return write!(f, "0");
        }
        for (idx, (n, c)) in terms.into_iter().enumerate() {
            if idx == 0 {
                if c < 0. {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {} ", if c < 0. { '-' } else { '+' })?;
            }
            let abs = c.abs();
            if abs != 1. || n == 0 {
                write!(f, "{}", abs)?;
            }
            match n {
                0 => {}
                1 => write!(f, "x")?,
                n => write!(f, "x^{}", n)?,
            }
        }
        Ok(())
    }
}

// Trailing zeros don't affect approximate equality: `[1, 2]` ≈ `[1, 2, 0]`.
impl AbsDiffEq for Polynomial {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let n = self.len().max(other.len());
        (0..n).all(|i| self.coeff(i).abs_diff_eq(&other.coeff(i), epsilon))
    }
}

impl RelativeEq for Polynomial {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        let n = self.len().max(other.len());
        (0..n).all(|i| self.coeff(i).relative_eq(&other.coeff(i), epsilon, max_relative))
    }
}
