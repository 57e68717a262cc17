//! Error types for matrix multiplication operations.
//!
//! This module defines custom error types that provide better error handling
//! than panicking, allowing applications to gracefully handle ill-formed
//! inputs. Allocation failure is deliberately not represented here: a failed
//! temporary allocation is fatal and aborts through the global allocation
//! error handler, since a partial matrix product cannot be meaningfully
//! recovered.

use std::fmt;

/// Errors that can occur when validating multiplication inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrassenError {
    /// The two operands have different dimensions.
    SizeMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
        /// Human-readable error message.
        message: String,
    },
    /// A backing buffer's length does not match the requested dimension.
    LengthMismatch {
        /// The requested matrix dimension.
        n: usize,
        /// The length the backing buffer must have (`n * n`).
        expected: usize,
        /// The length the backing buffer actually has.
        actual: usize,
        /// Human-readable error message.
        message: String,
    },
    /// A two-dimensional array with unequal axes was supplied.
    NotSquare {
        /// Number of rows in the rejected array.
        rows: usize,
        /// Number of columns in the rejected array.
        cols: usize,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for StrassenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrassenError::SizeMismatch {
                left,
                right,
                message,
            } => write!(
                f,
                "Operand size mismatch: {} ({}x{} vs {}x{})",
                message, left, left, right, right
            ),
            StrassenError::LengthMismatch {
                n,
                expected,
                actual,
                message,
            } => write!(
                f,
                "Invalid backing length: {} (dimension {} needs {} elements, got {})",
                message, n, expected, actual
            ),
            StrassenError::NotSquare {
                rows,
                cols,
                message,
            } => write!(
                f,
                "Matrix is not square: {} (shape {}x{})",
                message, rows, cols
            ),
        }
    }
}

impl std::error::Error for StrassenError {}

/// Result type alias for multiplication operations.
pub type Result<T> = std::result::Result<T, StrassenError>;

/// Creates a size mismatch error.
pub fn size_mismatch(left: usize, right: usize, message: impl Into<String>) -> StrassenError {
    StrassenError::SizeMismatch {
        left,
        right,
        message: message.into(),
    }
}

/// Creates a backing length mismatch error.
pub fn length_mismatch(n: usize, actual: usize, message: impl Into<String>) -> StrassenError {
    StrassenError::LengthMismatch {
        n,
        expected: n * n,
        actual,
        message: message.into(),
    }
}

/// Creates a non-square shape error.
pub fn not_square(rows: usize, cols: usize, message: impl Into<String>) -> StrassenError {
    StrassenError::NotSquare {
        rows,
        cols,
        message: message.into(),
    }
}
