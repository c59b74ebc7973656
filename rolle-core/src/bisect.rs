use log::trace;

use crate::{
    config::Config,
    error::{Result, SolveError::{BisectionDiverged, NoSignChange}},
    polynomial::{evaluate_polynomial, is_near_zero},
};

/// Find a root of `p` strictly inside a bracket whose endpoints have opposite signs.
///
/// `left` needn't be less than `right`. Each step evaluates the midpoint, returns it once it's
/// near zero, and otherwise keeps whichever half still changes sign (the left half wins ties).
/// The bracket is re-checked on every halving; a bracket without a strict sign change (including
/// one with a NaN endpoint) is a [`NoSignChange`] error rather than a bogus root.
pub fn find_zero_between(p: &[f64], left: f64, right: f64, config: &Config) -> Result<f64> {
    let mut left = left;
    let mut right = right;
    for iter in 0..config.max_bisections {
        let f_left = evaluate_polynomial(p, left);
        let f_right = evaluate_polynomial(p, right);
        if !(f_left * f_right < 0.) {
            return Err(NoSignChange { left, right, f_left, f_right });
        }
        let middle = (left + right) / 2.;
        if is_near_zero(p, middle, config.tolerance) {
            trace!("find_zero_between: {} after {} halvings", middle, iter + 1);
            return Ok(middle);
        }
        if f_left * evaluate_polynomial(p, middle) < 0. {
            right = middle;
        } else {
            left = middle;
        }
    }
    Err(BisectionDiverged { left, right, iters: config.max_bisections })
}
