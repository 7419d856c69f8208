use thiserror::Error;

/// Errors raised while building boards or starting a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("puzzle size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("expected {expected} cells, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("cell value {value} is out of range (max {max})")]
    ValueOutOfRange { value: u32, max: u32 },

    #[error("cell value {0} appears more than once")]
    DuplicateValue(u32),

    #[error("initial board is {initial}x{initial} but goal is {goal}x{goal}")]
    DimensionMismatch { initial: usize, goal: usize },

    #[error("goal is not reachable from the initial board")]
    Unsolvable,

    #[error("cannot parse cell {0:?}")]
    ParseCell(String),
}
