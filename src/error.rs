//! Errors for operations whose operand dimensions are only known at runtime.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathError {
    #[error("Expected an operand of dimension {expected}, found dimension {found}")]
    InvalidDimension { expected: usize, found: usize },

    #[error("Index {index} is out of bounds for a vector of dimension {dimension}")]
    IndexOutOfBounds { index: usize, dimension: usize },
}

impl MathError {
    pub(crate) fn invalid_dimension(expected: usize, found: usize) -> Self {
        log::debug!("Rejecting operand of dimension {found} where {expected} is required");
        Self::InvalidDimension { expected, found }
    }

    pub(crate) fn index_out_of_bounds(index: usize, dimension: usize) -> Self {
        log::debug!("Rejecting component index {index} for dimension {dimension}");
        Self::IndexOutOfBounds { index, dimension }
    }
}
