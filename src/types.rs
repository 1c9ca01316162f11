// src/types.rs
//! Numeric primitives shared by every value type.

/// Element type of vectors and matrices.
pub type Scalar = f64;

/// Per-element tolerance used by `==` on [`Vector`](crate::Vector) and
/// [`Matrix`](crate::Matrix).
pub const EPSILON: Scalar = 1e-5;

/// True when `a` and `b` differ by no more than `tolerance`.
#[inline(always)]
pub(crate) fn within(a: Scalar, b: Scalar, tolerance: Scalar) -> bool {
    (a - b).abs() <= tolerance
}
