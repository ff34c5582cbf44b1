//! Error types for mtools operations.
//!
//! Every fallible operation reports one of these synchronously at the point
//! of failure.

use std::collections::TryReserveError;
use thiserror::Error;

/// Main error type for matrix operations.
///
/// # Examples
///
/// ```
/// use mtools::error::MtoolsError;
///
/// let err = MtoolsError::dimension_mismatch("add", (2, 3), (3, 2));
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Error, Debug)]
pub enum MtoolsError {
    /// The allocator refused the buffer for a `rows x cols` matrix.
    #[error("Allocation failed for {rows}x{cols} matrix: {source}")]
    AllocationFailed {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
        /// Underlying reservation error
        #[source]
        source: TryReserveError,
    },

    /// `rows * cols` does not fit in `usize`.
    #[error("Capacity overflow: {rows}x{cols} elements exceed addressable size")]
    CapacityOverflow {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Operand shapes don't satisfy the operation's shape relation.
    #[error("Matrix dimension mismatch in {op}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Operation name
        op: &'static str,
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Buffer length disagrees with the requested shape.
    #[error("Invalid shape: {len} elements cannot fill a {rows}x{cols} matrix")]
    InvalidShape {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
        /// Provided buffer length
        len: usize,
    },

    /// Bulk assignment input holds a value that is not an `f32` number.
    #[error("Invalid element at index {index}: {reason}")]
    InvalidElement {
        /// Position in the input sequence
        index: usize,
        /// Why the value was rejected
        reason: String,
    },
}

impl MtoolsError {
    /// Create a dimension mismatch error from two `(rows, cols)` shapes.
    #[must_use]
    pub fn dimension_mismatch(
        op: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            op,
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create an inner-dimension mismatch error for matrix multiplication.
    #[must_use]
    pub fn inner_dimension_mismatch(op: &'static str, lhs_cols: usize, rhs_rows: usize) -> Self {
        Self::DimensionMismatch {
            op,
            expected: format!("rhs rows={lhs_cols}"),
            actual: format!("{rhs_rows}"),
        }
    }

    /// Returns true for the dimension mismatch variant.
    #[must_use]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MtoolsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MtoolsError::dimension_mismatch("add", (2, 3), (3, 2));
        let msg = err.to_string();
        assert!(msg.contains("dimension mismatch"));
        assert!(msg.contains("add"));
        assert!(msg.contains("2x3"));
        assert!(msg.contains("3x2"));
        assert!(err.is_dimension_mismatch());
    }

    #[test]
    fn test_inner_dimension_mismatch_display() {
        let err = MtoolsError::inner_dimension_mismatch("dot", 3, 4);
        let msg = err.to_string();
        assert!(msg.contains("dot"));
        assert!(msg.contains("rhs rows=3"));
        assert!(msg.contains("got 4"));
    }

    #[test]
    fn test_capacity_overflow_display() {
        let err = MtoolsError::CapacityOverflow {
            rows: usize::MAX,
            cols: 2,
        };
        assert!(err.to_string().contains("Capacity overflow"));
        assert!(!err.is_dimension_mismatch());
    }

    #[test]
    fn test_invalid_shape_display() {
        let err = MtoolsError::InvalidShape {
            rows: 2,
            cols: 3,
            len: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("2x3"));
        assert!(msg.contains("4 elements"));
    }

    #[test]
    fn test_invalid_element_display() {
        let err = MtoolsError::InvalidElement {
            index: 7,
            reason: "out of f32 range".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("index 7"));
        assert!(msg.contains("out of f32 range"));
    }

    #[test]
    fn test_allocation_failed_source() {
        use std::error::Error;
        let source = Vec::<f32>::new()
            .try_reserve_exact(usize::MAX)
            .expect_err("reserving usize::MAX floats must fail");
        let err = MtoolsError::AllocationFailed {
            rows: usize::MAX,
            cols: 1,
            source,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("Allocation failed"));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MtoolsError>();
    }
}
