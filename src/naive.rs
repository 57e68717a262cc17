//! Direct cubic matrix multiplication.
//!
//! Serves two roles: the terminal case of the recursive engine, where small
//! blocks no longer benefit from splitting, and the ground-truth reference
//! the driver and tests compare the engine against.

use crate::error::Result;
use crate::matrix::{same_size, SquareMatrix};
use crate::probe::BlockProbe;

/// Computes `A * B` with the classic triple loop.
///
/// `C[i][j] = Σₖ A[i][k] * B[k][j]` over `i, j` in `[0, n)`. O(n³) time,
/// no extra space beyond the output.
///
/// Returns [`crate::StrassenError::SizeMismatch`] when the operands differ
/// in size.
pub fn multiply_naive(a: &SquareMatrix, b: &SquareMatrix) -> Result<SquareMatrix> {
    let n = same_size(a, b)?;
    let mut c = SquareMatrix::zeroed(n);
    naive_into(a, b, &mut c, None);
    Ok(c)
}

/// Writes `A * B` into `c`, overwriting whatever it held.
///
/// The destination is fully rewritten, so the engine can hand it a
/// temporary still carrying values from an earlier schedule step.
pub(crate) fn naive_into(
    a: &SquareMatrix,
    b: &SquareMatrix,
    c: &mut SquareMatrix,
    probe: Option<BlockProbe<'_>>,
) {
    let n = a.n();
    debug_assert_eq!(n, b.n());
    debug_assert_eq!(n, c.n());

    for i in 0..n {
        let lhs_row = a.row(i);
        for j in 0..n {
            let mut sum = 0.0;
            for (k, &x) in lhs_row.iter().enumerate() {
                sum += x * b[(k, j)];
            }
            c[(i, j)] = sum;
        }
    }

    if let Some(f) = probe {
        f(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_two_product() {
        let a = SquareMatrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = SquareMatrix::from_vec(2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let c = multiply_naive(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = SquareMatrix::from_fn(7, |i, j| (3 * i + j) as f64);
        let id = SquareMatrix::identity(7);
        let c = multiply_naive(&a, &id).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn test_empty_product() {
        let a = SquareMatrix::zeroed(0);
        let c = multiply_naive(&a, &a).unwrap();
        assert_eq!(c.n(), 0);
    }

    #[test]
    fn test_rejects_mismatched_operands() {
        let a = SquareMatrix::zeroed(2);
        let b = SquareMatrix::zeroed(3);
        assert!(multiply_naive(&a, &b).is_err());
    }

    #[test]
    fn test_overwrites_stale_destination() {
        let a = SquareMatrix::identity(3);
        let b = SquareMatrix::from_fn(3, |i, j| (i + j) as f64);
        let mut c = SquareMatrix::from_fn(3, |_, _| 99.0);
        naive_into(&a, &b, &mut c, None);
        assert_eq!(c, b);
    }
}
