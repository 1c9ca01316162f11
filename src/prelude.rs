// src/prelude.rs
//! The “everything” import for linalg_engine.
//!
//! Brings the value types, the error type and the initializers in with one glob:
//! ```rust
//! use linalg_engine::prelude::*;
//! ```

// core data types
pub use crate::matrix::Matrix;
pub use crate::types::{Scalar, EPSILON};
pub use crate::vector::Vector;

// errors
pub use crate::error::{LinalgError, Result};

// initializer functions, used as `initializers::increment`
pub use crate::initializers;
