use thiserror::Error;

/// Which run a clue component refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Across,
    Down,
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("board length {len} is not a multiple of width {width}")]
    MalformedShape { len: usize, width: usize },

    #[error("token {token:?} outside the canonical {{Black, Entry, Clue}} alphabet")]
    InvalidToken { token: String },

    #[error("clue at position {position} has a non-zero {direction} component with no adjacent entry")]
    ClueWithoutEntry { position: usize, direction: Direction },

    #[error("run at position {position} has {len} cells, exceeding the maximum of 9")]
    RunTooLong { position: usize, len: usize },

    #[error("run at position {position} has target sum {sum}, outside the valid 1..=45 range")]
    RunSumOutOfRange { position: usize, sum: u32 },
}
