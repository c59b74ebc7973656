//! Roots beyond the outermost critical point.
//!
//! Past the last root of `p'`, `p` is monotonic, so at most one root lies in each unbounded
//! direction. [`has_end_zero`] decides whether to look; [`find_sign_change`] gallops outward
//! until the sign flips; [`find_zero_between`] then bisects.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    bisect::find_zero_between,
    config::Config,
    error::{Result, SolveError::NoEndSignChange},
    polynomial::evaluate_polynomial,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.,
            Direction::Right => 1.,
        }
    }
}

/// Trend filter: does stepping one unit outward from `x` move `p` toward (and past) zero?
///
/// Compares `p(x ± 1) - p(x)` against the sign of `p(x)`. This is a heuristic, not a
/// monotonicity proof: a root within one unit but past a nearby turn can be missed, and a
/// flattening tail can be admitted.
pub fn has_end_zero(p: &[f64], x: f64, direction: Direction) -> bool {
    let px = evaluate_polynomial(p, x);
    let change = evaluate_polynomial(p, x + direction.sign()) - px;
    change * px < 0.
}

/// First point `x + step` (`step = ±1, ±2, ±4, ...`) where `p` has the opposite sign to `p(x)`.
pub fn find_sign_change(p: &[f64], x: f64, direction: Direction, config: &Config) -> Result<f64> {
    let px = evaluate_polynomial(p, x);
    let mut step = direction.sign();
    for steps in 0..config.max_doublings {
        let other = x + step;
        if px * evaluate_polynomial(p, other) < 0. {
            trace!("find_sign_change({}, {:?}): {} after {} doublings", x, direction, other, steps);
            return Ok(other);
        }
        step *= 2.;
    }
    Err(NoEndSignChange { x, direction, steps: config.max_doublings })
}

/// The root of `p` beyond `x` in `direction`.
pub fn find_end_zero(p: &[f64], x: f64, direction: Direction, config: &Config) -> Result<f64> {
    let other = find_sign_change(p, x, direction, config)?;
    find_zero_between(p, x, other, config)
}
