use crate::end_zero::Direction;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SolveError {
    #[error("No sign change between {left} (p = {f_left}) and {right} (p = {f_right})")]
    NoSignChange {
        left: f64,
        right: f64,
        f_left: f64,
        f_right: f64,
    },

    #[error("Bisection did not converge after {iters} halvings; last bracket [{left}, {right}]")]
    BisectionDiverged {
        left: f64,
        right: f64,
        iters: usize,
    },

    #[error("No sign change found moving {direction:?} from {x} after {steps} doublings")]
    NoEndSignChange {
        x: f64,
        direction: Direction,
        steps: usize,
    },
}

pub type Result<T> = std::result::Result<T, SolveError>;
