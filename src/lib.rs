//! Dense square-matrix multiplication via Strassen's algorithm.
//!
//! The engine recurses on quadrants using the memory-efficient in-place
//! Winograd schedule, reusing a fixed set of twelve half-size temporaries per
//! recursion level instead of the naive working set, and falls back to the
//! direct cubic product at and below [`BASE_CASE_THRESHOLD`].
//!
//! Matrices are owned, contiguous, row-major [`SquareMatrix`] values. The two
//! public multipliers share one contract: operands must be the same size, and
//! the product is returned as a freshly allocated matrix.
//!
//! ```
//! use strassen::{multiply, multiply_naive, SquareMatrix};
//!
//! let a = SquareMatrix::from_fn(64, |i, j| (i + j) as f64);
//! let b = SquareMatrix::identity(64);
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c.max_abs_diff(&a), 0.0);
//!
//! let reference = multiply_naive(&a, &b).unwrap();
//! assert_eq!(c.max_abs_diff(&reference), 0.0);
//! ```

pub mod error;
pub mod matrix;
pub mod naive;
pub mod probe;
pub mod strassen;

mod arith;
mod quadrant;

pub use error::{Result, StrassenError};
pub use matrix::SquareMatrix;
pub use naive::multiply_naive;
pub use probe::{warn_non_finite, BlockProbe};
pub use strassen::{multiply, multiply_with_probe};

/// Largest size handled by the direct cubic product instead of recursing.
///
/// Below this point the bookkeeping of a recursion level costs more than the
/// eighth multiplication it saves. The best value varies between platforms.
pub const BASE_CASE_THRESHOLD: usize = 16;
