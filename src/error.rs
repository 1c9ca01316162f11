// src/error.rs
//! Error type for checked vector and matrix operations.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Precondition violations reported by vector and matrix operations.
///
/// These are contract errors: retrying with the same operands always fails
/// the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LinalgError {
    /// Operand shapes are incompatible for `operation`.
    #[error("dimension mismatch in {operation}: {left} vs {right}")]
    DimensionMismatch {
        operation: &'static str,
        left: String,
        right: String,
    },

    /// The operation needs a square matrix.
    #[error("matrix must be square, got {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },

    /// The determinant is zero, so no inverse exists.
    #[error("matrix is singular (determinant is 0)")]
    Singular,

    /// Normalizing or measuring an angle against a zero-length vector.
    #[error("vector has zero magnitude")]
    ZeroMagnitude,

    /// A matrix needs at least one row and one column.
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,

    /// `rows × columns` elements cannot be stored in one buffer.
    #[error("matrix shape {rows}x{columns} is too large to store")]
    ShapeOverflow { rows: usize, columns: usize },

    /// Row, column or component index past the end.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl LinalgError {
    pub(crate) fn mismatch(
        operation: &'static str,
        left: impl ToString,
        right: impl ToString,
    ) -> Self {
        LinalgError::DimensionMismatch {
            operation,
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}
