//! MTools: a minimal dense matrix value type.
//!
//! A [`Matrix`] owns a row-major `f32` buffer of fixed dimensions. Binary
//! operations borrow their operands and return a freshly allocated result;
//! the only in-place mutation is bulk assignment through
//! [`Matrix::set_data`] and single-element [`Matrix::set`].
//!
//! # Quick Start
//!
//! ```
//! use mtools::prelude::*;
//!
//! let mut m = create_matrix(2, 2).unwrap();
//! m.set_data(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//!
//! let sum = (&m + &m).unwrap();
//! assert_eq!(sum.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
//!
//! let product = dot(&m, &m).unwrap();
//! assert_eq!(product.as_slice(), &[7.0, 10.0, 15.0, 22.0]);
//!
//! // Shape errors are values, not panics
//! let tall = create_matrix(3, 2).unwrap();
//! assert!(matches!(add(&m, &tall), Err(MtoolsError::DimensionMismatch { .. })));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: The Matrix type
//! - [`ops`]: Module-level functions and operator overloads
//! - [`error`]: Error taxonomy
//!
//! # Features
//!
//! - `parallel`: compute [`Matrix::dot`] output rows on the rayon thread pool

pub mod error;
pub mod ops;
pub mod prelude;
pub mod primitives;

pub use error::{MtoolsError, Result};
pub use primitives::Matrix;
