//! # linalg_engine Quickstart
//!
//! ```rust
//! use linalg_engine::prelude::*;
//!
//! // [[1, 2], [3, 4]] filled by the row-major counter
//! let a = Matrix::from_fn_with_dims(2, 2, initializers::increment).unwrap();
//! assert_eq!(a.determinant().unwrap(), -2.0);
//!
//! let inv = a.inverse().unwrap();
//! let expected = Matrix::from_rows(vec![vec![-2.0, 1.0], vec![1.5, -0.5]]).unwrap();
//! assert_eq!(inv, expected);
//!
//! // Right-handed cross product
//! let z = Vector::from([1.0, 2.0, 0.0]).cross(&Vector::from([2.0, 1.0, 0.0])).unwrap();
//! assert_eq!(z, Vector::from([0.0, 0.0, -3.0]));
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod error;
pub mod initializers;
pub mod matrix;
pub mod prelude;
pub mod types;
pub mod vector;

// --- Public API exports ---

pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use types::{Scalar, EPSILON};
pub use vector::Vector;
