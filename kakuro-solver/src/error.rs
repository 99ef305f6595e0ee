use kakuro_core::CoreError;
use thiserror::Error;

/// Errors a solve attempt can fail with.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("no assignment satisfies every run; the puzzle has no solution")]
    Unsolvable,
    #[error("solve called on a puzzle that already holds a solution")]
    AlreadySolved,
    #[error("the solve deadline elapsed before a result was found")]
    Timeout,
    #[error(transparent)]
    Core(#[from] CoreError),
}
