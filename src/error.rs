//! Error taxonomy for range validation.

use std::fmt;

use thiserror::Error;

/// Why a range count cannot form a centered square spiral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeProblem {
    /// The count has no integer square root.
    NotSquare,
    /// The square root is even, so there is no center cell.
    EvenRoot { root: u64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpiralError {
    #[error("two arguments are required: the start and end numbers of the spiral")]
    MissingArguments,

    #[error("start number must be positive")]
    InvalidStart,

    #[error("end number {end} must not be smaller than start number {start}")]
    InvalidOrder { start: u64, end: u64 },

    #[error("{count} numbers cannot form a square spiral: {problem}")]
    InvalidSize { count: u64, problem: SizeProblem },

    #[error("spiral side {side} exceeds the maximum of {max}")]
    TooLarge { side: u64, max: u64 },
}

impl fmt::Display for SizeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare => f.write_str("count is not a perfect square"),
            Self::EvenRoot { root } => write!(f, "side {root} is even"),
        }
    }
}

impl SpiralError {
    /// Process exit code reported by the `spiral` binary.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingArguments | Self::InvalidStart | Self::InvalidOrder { .. } => 1,
            Self::InvalidSize {
                problem: SizeProblem::NotSquare,
                ..
            } => 3,
            Self::InvalidSize {
                problem: SizeProblem::EvenRoot { .. },
                ..
            } => 4,
            Self::TooLarge { .. } => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpiralError>;
