use kakuro_core::CoreError;
use thiserror::Error;

/// Why a claimed solution was rejected, checked in this order: every entry
/// filled in, every run's sum, then every digit within `min_val..=max_val`,
/// then (if exclusive) every run's distinctness. Range is checked before
/// distinctness because distinctness is computed with a digit-indexed
/// bitmask, which an out-of-range digit would otherwise panic against.
#[derive(Debug, Error)]
pub enum SolutionError {
    #[error("cell at board position {position} is still unsolved")]
    NotSolved { position: usize },
    #[error("run #{run_index} sums to {actual}, expected {expected}")]
    InvalidSum { run_index: usize, expected: u32, actual: u32 },
    #[error("cell at board position {position} holds {value}, outside {min}..={max}")]
    OutOfRange { position: usize, value: u8, min: u8, max: u8 },
    #[error("run #{run_index} repeats a digit")]
    NonUnique { run_index: usize },
    /// The tokens don't even form a structurally valid board; `verify_solution`
    /// re-derives runs from scratch and can hit this where `check_solution`
    /// on an already-parsed `Puzzle` never would.
    #[error(transparent)]
    Malformed(#[from] CoreError),
}
