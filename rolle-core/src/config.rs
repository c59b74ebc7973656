use serde::{Deserialize, Serialize};

/// Magnitude at or below which an evaluated polynomial counts as zero.
pub const TOLERANCE: f64 = 0.001;

/// Iteration guards. Well-scaled inputs converge in a few dozen halvings/doublings; these only
/// trip once `f64` has run out of resolution (bisection) or range (doubling).
pub const MAX_BISECTIONS: usize = 2000;
pub const MAX_DOUBLINGS: usize = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Threshold for the near-zero test, see [`crate::polynomial::is_near_zero`].
    pub tolerance: f64,
    /// Halvings allowed per bracket before [`crate::error::SolveError::BisectionDiverged`].
    pub max_bisections: usize,
    /// Step doublings allowed per end search before [`crate::error::SolveError::NoEndSignChange`].
    pub max_doublings: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tolerance: TOLERANCE,
            max_bisections: MAX_BISECTIONS,
            max_doublings: MAX_DOUBLINGS,
        }
    }
}

impl Config {
    pub fn with_tolerance(tolerance: f64) -> Self {
        Config { tolerance, ..Config::default() }
    }
}
