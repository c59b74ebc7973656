//! Real roots of single-variable polynomials.
//!
//! Roots of `p` are isolated between consecutive roots of `p'` (Rolle's theorem), found
//! recursively down the derivative chain, and refined by bisection:
//!
//! ```
//! use rolle_core::zeros;
//!
//! assert_eq!(zeros(&[ -1., 0., 1. ]).unwrap(), vec![ -1., 1. ]);
//! ```

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod bisect;
pub mod config;
pub mod end_zero;
pub mod error;
pub mod polynomial;
pub mod zeros;

// Re-export key types for external use
pub use config::{Config, TOLERANCE};
pub use end_zero::Direction;
pub use error::{Result, SolveError};
pub use polynomial::{degree, derivative, evaluate_polynomial, Polynomial};
pub use zeros::{zeros, Solver};
