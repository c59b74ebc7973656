//! Recursive root solver.
//!
//! The roots of `p'` (critical points) split the real line into intervals on which `p` is
//! monotonic, so each holds at most one root of `p`. Finding them recurses down the derivative
//! chain until the linear case, which is solved directly.

use log::debug;
use ordered_float::OrderedFloat;

use crate::{
    bisect::find_zero_between,
    config::Config,
    end_zero::{find_end_zero, has_end_zero, Direction},
    error::Result,
    polynomial::{coefficient, degree, derivative, evaluate_polynomial, is_near_zero},
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Solver {
    pub config: Config,
}

/// All real roots of `p`, ascending, using the default [`Config`].
///
/// Constant polynomials (including the zero polynomial) have no roots.
pub fn zeros(p: &[f64]) -> Result<Vec<f64>> {
    Solver::default().zeros(p)
}

impl Solver {
    pub fn new(config: Config) -> Self {
        Solver { config }
    }

    pub fn zeros(&self, p: &[f64]) -> Result<Vec<f64>> {
        match degree(p) {
            0 => Ok(vec![]),
            1 => {
                // 0 = ax + b
                let b = coefficient(p, 0);
                let a = coefficient(p, 1);
                Ok(vec![ -b / a ])
            }
            n => {
                let critical_points = self.zeros(&derivative(p))?;
                debug!("degree {}: critical points {:?}", n, critical_points);
                let mut zeros = self.between_zeros(p, &critical_points)?;
                zeros.extend(self.end_zeros(p, &critical_points)?);
                zeros.sort_by_key(|z| OrderedFloat(*z));
                debug!("degree {}: zeros {:?}", n, zeros);
                Ok(zeros)
            }
        }
    }

    /// Roots on, or between adjacent, critical points.
    ///
    /// A critical point that is itself a root is recorded once: when it closes one pair, the
    /// pair it opens is skipped.
    pub fn between_zeros(&self, p: &[f64], critical_points: &[f64]) -> Result<Vec<f64>> {
        let tolerance = self.config.tolerance;
        let mut zeros = vec![];
        let mut i = 0;
        while i + 1 < critical_points.len() {
            let left = critical_points[i];
            let right = critical_points[i + 1];
            let left_is_zero = is_near_zero(p, left, tolerance);
            let right_is_zero = is_near_zero(p, right, tolerance);
            if left_is_zero {
                zeros.push(left);
            }
            if right_is_zero {
                zeros.push(right);
                i += 1;
            }
            if !left_is_zero && !right_is_zero && evaluate_polynomial(p, left) * evaluate_polynomial(p, right) < 0. {
                zeros.push(find_zero_between(p, left, right, &self.config)?);
            }
            i += 1;
        }
        Ok(zeros)
    }

    /// Roots left of the smallest critical point and right of the largest.
    pub fn end_zeros(&self, p: &[f64], critical_points: &[f64]) -> Result<Vec<f64>> {
        let mut zeros = vec![];
        let ends = match (critical_points.first(), critical_points.last()) {
            (Some(first), Some(last)) => [ (*first, Direction::Left), (*last, Direction::Right) ],
            _ => return Ok(zeros),
        };
        for (x, direction) in ends {
            if has_end_zero(p, x, direction) {
                zeros.push(find_end_zero(p, x, direction, &self.config)?);
            }
        }
        Ok(zeros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::SolveError, polynomial::Polynomial};
    use test_log::test;

    fn check(p: &[f64], expected: &[f64], epsilon: f64) {
        let actual = zeros(p).unwrap();
        debug!("{}: {:?}", Polynomial::from(p), actual);
        assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
        for (a, e) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(*a, *e, epsilon = epsilon);
        }
        for r in &actual {
            assert!(is_near_zero(p, *r, Config::default().tolerance), "p({}) = {}", r, evaluate_polynomial(p, *r));
        }
    }

    #[test]
    fn constants() {
        assert_eq!(zeros(&[]).unwrap(), Vec::<f64>::new());
        assert_eq!(zeros(&[ 0., 0., 0. ]).unwrap(), Vec::<f64>::new());
        assert_eq!(zeros(&[ 3. ]).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn linear() {
        assert_eq!(zeros(&[ 1., 2. ]).unwrap(), vec![ -0.5 ]);
        assert_eq!(zeros(&[ 1., 2., 0., 0. ]).unwrap(), vec![ -0.5 ]);
    }

    #[test]
    fn linear_negative_zero() {
        let roots = zeros(&[ 0., 2. ]).unwrap();
        assert_eq!(roots, vec![ 0. ]);
        assert!(roots[0].is_sign_negative());
    }

    #[test]
    fn quadratic() {
        assert_eq!(zeros(&[ -1., 0., 1. ]).unwrap(), vec![ -1., 1. ]);
        assert_eq!(zeros(&[ 6., -5., 1. ]).unwrap(), vec![ 2., 3. ]);
        check(&[ -2., 0., 1. ], &[ -2f64.sqrt(), 2f64.sqrt() ], 1e-3);
        check(&[ 1., 0., 1. ], &[], 0.);
    }

    #[test]
    fn cubic() {
        check(&[ -6., 11., -6., 1. ], &[ 1., 2., 3. ], 1e-3);
        check(&[ 0., -1., 0., 1. ], &[ -1., 0., 1. ], 1e-3);
    }

    #[test]
    fn quartic() {
        check(&[ 24., -50., 35., -10., 1. ], &[ 1., 2., 3., 4. ], 1e-3);
    }

    #[test]
    fn quintic() {
        check(&[ 120., -274., 225., -85., 15., -1. ], &[ 1., 2., 3., 4., 5. ], 1e-3);
    }

    #[test]
    fn sextic() {
        check(&[ 0.557, 0., 0., 0.5, -2., -1., 1. ], &[ -0.917, 0.777, 1.894 ], 5e-3);
    }

    #[test]
    fn tolerance_tightens_roots() {
        let solver = Solver::new(Config::with_tolerance(1e-10));
        let roots = solver.zeros(&[ 120., -274., 225., -85., 15., -1. ]).unwrap();
        assert_eq!(roots.len(), 5);
        for (r, e) in roots.iter().zip([ 1., 2., 3., 4., 5. ]) {
            assert_abs_diff_eq!(*r, e, epsilon = 1e-8);
        }
    }

    // Known gaps of the critical-point passes
    #[test]
    fn double_root_on_lone_critical_point() {
        // x^2: the only critical point is the root itself, and no pair or end search reaches it
        check(&[ 0., 0., 1. ], &[], 0.);
    }

    #[test]
    fn no_located_critical_points() {
        // x^3 - 8: p' = 3x^2 has no located roots, so there's nothing to bracket from
        check(&[ -8., 0., 0., 1. ], &[], 0.);
    }

    #[test]
    fn between_pass_skips_shared_root() {
        let solver = Solver::default();
        // x^3 - x: 0 closes the first pair, so the pair it opens is skipped rather than emitting 0 again
        let p = [ 0., -1., 0., 1. ];
        assert_eq!(solver.between_zeros(&p, &[ -0.5, 0., 0.5 ]).unwrap(), vec![ 0. ]);
        // Both ends of a pair on roots
        assert_eq!(solver.between_zeros(&p, &[ -1., 0., 0.5 ]).unwrap(), vec![ -1., 0. ]);
        assert_eq!(solver.between_zeros(&p, &[ 0. ]).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn end_pass_needs_critical_points() {
        let solver = Solver::default();
        assert_eq!(solver.end_zeros(&[ -1., 0., 1. ], &[]).unwrap(), Vec::<f64>::new());
        assert_eq!(solver.end_zeros(&[ -1., 0., 1. ], &[ 0. ]).unwrap(), vec![ -1., 1. ]);
    }

    #[test]
    fn errors_abort_whole_solve() {
        // x^2 - 100: the end search from 0 needs 16 steps out, more than 3 doublings reach
        let solver = Solver::new(Config { max_doublings: 3, ..Config::default() });
        let err = solver.zeros(&[ -100., 0., 1. ]).unwrap_err();
        assert_eq!(err, SolveError::NoEndSignChange { x: 0., direction: Direction::Left, steps: 3 });

        // Fails while refining p'' roots, two levels below the quartic
        let solver = Solver::new(Config { max_bisections: 1, ..Config::default() });
        let res = solver.zeros(&[ 24., -50., 35., -10., 1. ]);
        assert!(matches!(res, Err(SolveError::BisectionDiverged { iters: 1, .. })), "{:?}", res);
    }

    #[test]
    fn polynomial_method() {
        let p = Polynomial::from_roots(&[ -2., 0.5, 3. ]);
        let roots = p.zeros().unwrap();
        assert_eq!(roots.len(), 3);
        assert_abs_diff_eq!(roots[0], -2., epsilon = 1e-3);
        assert_abs_diff_eq!(roots[1], 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(roots[2], 3., epsilon = 1e-3);
    }
}
