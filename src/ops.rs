//! Module-level operation table and operator overloads.
//!
//! The free functions mirror the `MTools` module surface (`create_matrix`,
//! `add`, `sub`, `mul`, `div`, `dot`). The `std::ops` impls cover the
//! arithmetic operator slots; there is no Rust operator for matrix
//! multiplication, so that one is [`dot`] / [`Matrix::dot`] only.
//!
//! Operators borrow both sides and yield `Result<Matrix>`, so a shape error
//! surfaces at the expression rather than as a panic.
//!
//! # Examples
//!
//! ```
//! use mtools::ops;
//!
//! let a = ops::create_matrix(2, 3).unwrap();
//! let b = ops::create_matrix(3, 2).unwrap();
//!
//! assert!((&a + &b).is_err());
//! assert_eq!(ops::dot(&a, &b).unwrap().shape(), (2, 2));
//! ```

use crate::error::Result;
use crate::primitives::Matrix;
use std::ops::{Add, Div, Mul, Sub};

/// Creates a zero-filled `rows x cols` matrix.
///
/// # Errors
///
/// See [`Matrix::new`].
pub fn create_matrix(rows: usize, cols: usize) -> Result<Matrix> {
    Matrix::new(rows, cols)
}

/// Element-wise sum of `a` and `b`.
///
/// # Errors
///
/// Returns an error if the shapes differ.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.add(b)
}

/// Element-wise difference `a - b`.
///
/// # Errors
///
/// Returns an error if the shapes differ.
pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.sub(b)
}

/// Element-wise (Hadamard) product.
///
/// # Errors
///
/// Returns an error if the shapes differ.
pub fn mul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.mul(b)
}

/// Element-wise quotient `a / b`, with IEEE-754 division by zero.
///
/// # Errors
///
/// Returns an error if the shapes differ.
pub fn div(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.div(b)
}

/// Matrix product `a · b`.
///
/// # Errors
///
/// Returns an error if `a.n_cols() != b.n_rows()`.
pub fn dot(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.dot(b)
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<&Matrix> for &Matrix {
            type Output = Result<Matrix>;

            fn $method(self, rhs: &Matrix) -> Self::Output {
                Matrix::$method(self, rhs)
            }
        }
    };
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);
impl_binop!(Div, div);
