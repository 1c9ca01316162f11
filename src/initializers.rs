// src/initializers.rs
//! Cell initializers for [`Matrix::from_fn`](crate::Matrix::from_fn) and
//! [`Matrix::from_fn_with_dims`](crate::Matrix::from_fn_with_dims).
//!
//! Coordinates are **1-based**: the top-left cell is `(1, 1)`.
//!
//! ```rust
//! use linalg_engine::{initializers, Matrix};
//!
//! let m = Matrix::from_fn_with_dims(2, 3, initializers::increment).unwrap();
//! assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! ```

use crate::types::Scalar;

/// Alternating `+1` / `-1` pattern: `+1` when `(row*columns + rows + column)` is odd.
pub fn checkerboard(row: usize, column: usize, rows: usize, columns: usize) -> Scalar {
    if (row * columns + rows + column) % 2 == 1 {
        1.0
    } else {
        -1.0
    }
}

/// Row-major count starting at 1: `(row - 1) * columns + column`.
///
/// # Panics
///
/// If `row` is 0; coordinates start at 1.
pub fn increment(row: usize, column: usize, _rows: usize, columns: usize) -> Scalar {
    assert!(row >= 1, "initializer rows are 1-based, got row 0");
    ((row - 1) * columns + column) as Scalar
}

/// `1` on the diagonal, `0` elsewhere.
pub fn identity(row: usize, column: usize) -> Scalar {
    if row == column {
        1.0
    } else {
        0.0
    }
}
