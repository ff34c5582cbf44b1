//! Matrix type for 2D numeric data.

use crate::error::{MtoolsError, Result};
use num_traits::ToPrimitive;
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A 2D matrix of `f32` values (row-major storage).
///
/// Dimensions are fixed at construction. Every binary operation borrows its
/// operands and returns a newly allocated matrix.
///
/// # Examples
///
/// ```
/// use mtools::primitives::Matrix;
///
/// let mut m = Matrix::new(2, 2).expect("2x2 fits in memory");
/// m.set_data(&[1.0, 2.0, 3.0, 4.0]).expect("all values are f32");
///
/// let squared = m.mul(&m).expect("same shape");
/// assert_eq!(squared.as_slice(), &[1.0, 4.0, 9.0, 16.0]);
///
/// let product = m.dot(&m).expect("inner dimensions match");
/// assert_eq!(product.as_slice(), &[7.0, 10.0, 15.0, 22.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

/// Reserves exactly `rows * cols` floats without aborting on failure.
fn alloc_buffer(rows: usize, cols: usize) -> Result<Vec<f32>> {
    let len = rows
        .checked_mul(cols)
        .ok_or(MtoolsError::CapacityOverflow { rows, cols })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|source| MtoolsError::AllocationFailed { rows, cols, source })?;
    trace!(rows, cols, len, "allocated matrix buffer");
    Ok(data)
}

// Construction
impl Matrix {
    /// Creates a zero-filled `rows x cols` matrix.
    ///
    /// Zero-sized dimensions are allowed and produce an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MtoolsError::CapacityOverflow`] if `rows * cols` overflows,
    /// or [`MtoolsError::AllocationFailed`] if the buffer can't be allocated.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let mut data = alloc_buffer(rows, cols)?;
        data.resize(rows * cols, 0.0);
        Ok(Self { data, rows, cols })
    }

    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(MtoolsError::CapacityOverflow { rows, cols })?;
        if data.len() != expected {
            return Err(MtoolsError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::new`].
    pub fn eye(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        m.data.iter_mut().step_by(n + 1).for_each(|x| *x = 1.0);
        Ok(m)
    }

    /// Consumes the matrix, returning `(data, (rows, cols))`.
    #[must_use]
    pub fn into_vec(self) -> (Vec<f32>, (usize, usize)) {
        (self.data, (self.rows, self.cols))
    }
}

// Accessors
impl Matrix {
    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of elements, `rows * cols`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx >= rows`.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[f32] {
        assert!(row_idx < self.rows, "row {row_idx} out of bounds");
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

// Bulk assignment
impl Matrix {
    /// Overwrites the buffer from `values` in row-major order.
    ///
    /// Copies `min(values.len(), rows * cols)` elements. Extra input is
    /// ignored and elements past the end of a short input keep their values.
    /// Returns how many elements were written.
    ///
    /// # Errors
    ///
    /// Returns [`MtoolsError::InvalidElement`] if a value in the copied range
    /// can't be represented as `f32`, including finite values beyond
    /// `f32::MAX`. Infinities and NaN pass through. The matrix is left
    /// unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtools::primitives::Matrix;
    ///
    /// let mut m = Matrix::new(2, 2).unwrap();
    /// assert_eq!(m.set_data(&[1, 2, 3, 4, 5, 6]).unwrap(), 4);
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn set_data<V: ToPrimitive>(&mut self, values: &[V]) -> Result<usize> {
        let n = values.len().min(self.data.len());

        // Validate the whole range first so a bad value leaves no partial write.
        let mut converted = Vec::new();
        converted
            .try_reserve_exact(n)
            .map_err(|source| MtoolsError::AllocationFailed {
                rows: self.rows,
                cols: self.cols,
                source,
            })?;
        for (index, value) in values[..n].iter().enumerate() {
            let x = value.to_f32().ok_or_else(|| MtoolsError::InvalidElement {
                index,
                reason: "value is not representable as f32".to_string(),
            })?;
            // Finite input that overflows f32 would otherwise saturate to inf
            if !x.is_finite() && value.to_f64().is_some_and(f64::is_finite) {
                return Err(MtoolsError::InvalidElement {
                    index,
                    reason: "value is out of f32 range".to_string(),
                });
            }
            converted.push(x);
        }

        self.data[..n].copy_from_slice(&converted);

        if values.len() != self.data.len() {
            debug!(
                given = values.len(),
                capacity = self.data.len(),
                written = n,
                "set_data length differs from matrix capacity"
            );
        }
        Ok(n)
    }
}

// Math
impl Matrix {
    fn zip_with(
        &self,
        other: &Self,
        op: &'static str,
        f: impl Fn(f32, f32) -> f32,
    ) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MtoolsError::dimension_mismatch(
                op,
                self.shape(),
                other.shape(),
            ));
        }
        trace!(op, rows = self.rows, cols = self.cols, "element-wise");

        let mut data = alloc_buffer(self.rows, self.cols)?;
        data.extend(self.data.iter().zip(other.data.iter()).map(|(&a, &b)| f(a, b)));

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    /// Multiplies element-wise (Hadamard product).
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "mul", |a, b| a * b)
    }

    /// Divides element-wise.
    ///
    /// Division by zero follows IEEE-754: `x / 0.0` is `±inf` and
    /// `0.0 / 0.0` is `NaN`. It is never reported as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn div(&self, other: &Self) -> Result<Self> {
        let result = self.zip_with(other, "div", |a, b| a / b)?;
        let zero_divisors = other.data.iter().filter(|&&b| b == 0.0).count();
        if zero_divisors > 0 {
            debug!(zero_divisors, "div produced non-finite values");
        }
        Ok(result)
    }

    /// Matrix-matrix multiplication.
    ///
    /// Each output element is summed over the shared dimension in increasing
    /// index order.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.cols != other.rows`.
    pub fn dot(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MtoolsError::inner_dimension_mismatch(
                "dot",
                self.cols,
                other.rows,
            ));
        }
        trace!(
            lhs_rows = self.rows,
            inner = self.cols,
            rhs_cols = other.cols,
            "dot"
        );

        let mut result = Self::new(self.rows, other.cols)?;
        if other.cols == 0 {
            return Ok(result);
        }

        #[cfg(feature = "parallel")]
        result
            .data
            .par_chunks_mut(other.cols)
            .enumerate()
            .for_each(|(i, out_row)| self.dot_row(other, i, out_row));

        #[cfg(not(feature = "parallel"))]
        result
            .data
            .chunks_mut(other.cols)
            .enumerate()
            .for_each(|(i, out_row)| self.dot_row(other, i, out_row));

        Ok(result)
    }

    fn dot_row(&self, other: &Self, i: usize, out_row: &mut [f32]) {
        let lhs_row = self.row(i);
        for (j, out) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (k, &a) in lhs_row.iter().enumerate() {
                sum += a * other.data[k * other.cols + j];
            }
            *out = sum;
        }
    }
}

// Printing
impl Matrix {
    /// Writes the dimensions and every element in row-major order.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the writer.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        write!(w, "{self}")
    }

    /// Prints the matrix to standard output.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from stdout.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        self.write_to(stdout.lock())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix ({}x{}):", self.rows, self.cols)?;
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.cols) {
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{x:.6}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
