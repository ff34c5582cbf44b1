//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use mtools::prelude::*;
//! ```

pub use crate::error::{MtoolsError, Result};
pub use crate::ops::{add, create_matrix, div, dot, mul, sub};
pub use crate::primitives::Matrix;
