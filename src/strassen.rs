//! The recursive Strassen engine.
//!
//! Each non-base call splits its operands into quadrants, runs a fixed
//! sequence of block additions, subtractions and seven recursive products,
//! and reassembles the four result quadrants. The sequence is the published
//! in-place schedule for the Winograd variant: it works inside twelve
//! half-size temporaries by overwriting operands whose remaining readers have
//! already consumed them, so the step order is a strict dependency chain and
//! must not be rearranged.

use crate::arith::{add_assign, add_into, sub_from, sub_into};
use crate::error::Result;
use crate::matrix::{same_size, SquareMatrix};
use crate::naive::naive_into;
use crate::probe::BlockProbe;
use crate::quadrant::{assemble_into, extract_into};
use crate::BASE_CASE_THRESHOLD;

/// The twelve temporaries of one recursion level.
///
/// Acquired as one unit at frame entry and dropped as one unit at frame
/// exit, so no quadrant buffer can outlive its recursion frame. All blocks
/// start zeroed; for an odd parent the padded trailing row/column is never
/// written during extraction and therefore behaves as true zero everywhere
/// downstream.
struct QuadrantSet {
    a11: SquareMatrix,
    a12: SquareMatrix,
    a21: SquareMatrix,
    a22: SquareMatrix,
    b11: SquareMatrix,
    b12: SquareMatrix,
    b21: SquareMatrix,
    b22: SquareMatrix,
    c11: SquareMatrix,
    c12: SquareMatrix,
    c21: SquareMatrix,
    c22: SquareMatrix,
}

impl QuadrantSet {
    /// Allocates the set and extracts both operands into their quadrants.
    ///
    /// `trim = half - padding` rows/columns are copied into the quadrants
    /// along the padded edge, leaving the padded entries zero.
    fn split(a: &SquareMatrix, b: &SquareMatrix, half: usize, padding: usize) -> QuadrantSet {
        let mut q = QuadrantSet {
            a11: SquareMatrix::zeroed(half),
            a12: SquareMatrix::zeroed(half),
            a21: SquareMatrix::zeroed(half),
            a22: SquareMatrix::zeroed(half),
            b11: SquareMatrix::zeroed(half),
            b12: SquareMatrix::zeroed(half),
            b21: SquareMatrix::zeroed(half),
            b22: SquareMatrix::zeroed(half),
            c11: SquareMatrix::zeroed(half),
            c12: SquareMatrix::zeroed(half),
            c21: SquareMatrix::zeroed(half),
            c22: SquareMatrix::zeroed(half),
        };
        let trim = half - padding;

        extract_into(a, &mut q.a11, half, half, 0, 0);
        extract_into(a, &mut q.a12, half, trim, 0, half);
        extract_into(a, &mut q.a21, trim, half, half, 0);
        extract_into(a, &mut q.a22, trim, trim, half, half);

        extract_into(b, &mut q.b11, half, half, 0, 0);
        extract_into(b, &mut q.b12, half, trim, 0, half);
        extract_into(b, &mut q.b21, trim, half, half, 0);
        extract_into(b, &mut q.b22, trim, trim, half, half);

        q
    }
}

/// Computes `A * B` with the Strassen engine.
///
/// Operands at or below [`BASE_CASE_THRESHOLD`] go straight to the cubic
/// product; larger ones recurse on quadrants. Odd sizes are handled by
/// zero-padding one trailing row/column per level, trimmed away before the
/// result is returned, so the output is always exactly `n`×`n`.
///
/// Returns [`crate::StrassenError::SizeMismatch`] when the operands differ
/// in size. Allocation failure for the recursion temporaries is fatal and
/// aborts with a diagnostic.
pub fn multiply(a: &SquareMatrix, b: &SquareMatrix) -> Result<SquareMatrix> {
    let n = same_size(a, b)?;
    let mut c = SquareMatrix::zeroed(n);
    strassen_into(a, b, &mut c, None);
    Ok(c)
}

/// Same as [`multiply`], reporting every finished block to `probe`.
///
/// The probe is called after each block addition, subtraction and base-case
/// product, at every recursion level, with the destination block. It cannot
/// influence the computation; see [`crate::probe`].
pub fn multiply_with_probe(
    a: &SquareMatrix,
    b: &SquareMatrix,
    probe: BlockProbe<'_>,
) -> Result<SquareMatrix> {
    let n = same_size(a, b)?;
    let mut c = SquareMatrix::zeroed(n);
    strassen_into(a, b, &mut c, Some(probe));
    Ok(c)
}

/// One recursion frame: base case, or split / schedule / assemble.
fn strassen_into(
    a: &SquareMatrix,
    b: &SquareMatrix,
    c: &mut SquareMatrix,
    probe: Option<BlockProbe<'_>>,
) {
    let n = a.n();
    debug_assert_eq!(n, b.n());
    debug_assert_eq!(n, c.n());

    if n <= BASE_CASE_THRESHOLD {
        naive_into(a, b, c, probe);
        return;
    }

    let padding = n % 2;
    let half = n / 2 + padding;
    let mut q = QuadrantSet::split(a, b, half, padding);

    // IP schedule for C <- A x B from "Memory efficient scheduling of
    // Strassen-Winograd's matrix multiplication algorithm" (Dumas, Pernet,
    // Roch), Table 3. Each temporary is overwritten only once all of its
    // remaining readers have consumed it; reordering any two steps silently
    // corrupts the product.
    sub_into(&q.a11, &q.a21, &mut q.c11, probe);
    add_assign(&mut q.a21, &q.a22, probe);
    sub_into(&q.b12, &q.b11, &mut q.c22, probe);
    sub_from(&mut q.b12, &q.b22, probe);
    strassen_into(&q.c11, &q.b12, &mut q.c21, probe);
    sub_into(&q.a21, &q.a11, &mut q.c12, probe);
    strassen_into(&q.a11, &q.b11, &mut q.c11, probe);
    sub_into(&q.b22, &q.c22, &mut q.b11, probe);
    strassen_into(&q.a21, &q.c22, &mut q.a11, probe);
    sub_into(&q.b11, &q.b21, &mut q.c22, probe);
    strassen_into(&q.a22, &q.c22, &mut q.a21, probe);

    sub_into(&q.a12, &q.c12, &mut q.a22, probe);
    strassen_into(&q.c12, &q.b11, &mut q.c22, probe);
    add_assign(&mut q.c22, &q.c11, probe);
    strassen_into(&q.a12, &q.b21, &mut q.c12, probe);
    add_assign(&mut q.c11, &q.c12, probe);
    add_into(&q.c22, &q.a11, &mut q.c12, probe);
    add_assign(&mut q.c22, &q.c21, probe);
    sub_into(&q.c22, &q.a21, &mut q.c21, probe);
    add_assign(&mut q.c22, &q.a11, probe);
    strassen_into(&q.a22, &q.b22, &mut q.a12, probe);
    add_assign(&mut q.c12, &q.a12, probe);

    assemble_into(half, padding, &q.c11, &q.c12, &q.c21, &q.c22, c);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multiply_naive;
    use std::cell::Cell;

    fn deterministic(n: usize) -> SquareMatrix {
        // Varied but reproducible entries, positive and negative.
        SquareMatrix::from_fn(n, |i, j| ((i * 31 + j * 17) % 23) as f64 - 11.0)
    }

    #[test]
    fn test_threshold_size_uses_base_case_and_matches_reference() {
        let a = deterministic(16);
        let b = deterministic(16);
        let c = multiply(&a, &b).unwrap();
        let t = multiply_naive(&a, &b).unwrap();
        assert_eq!(c.max_abs_diff(&t), 0.0);
    }

    #[test]
    fn test_one_recursion_level_matches_reference() {
        let a = deterministic(17);
        let b = deterministic(17);
        let c = multiply(&a, &b).unwrap();
        let t = multiply_naive(&a, &b).unwrap();
        assert_eq!(c.max_abs_diff(&t), 0.0);
    }

    #[test]
    fn test_odd_size_output_dimensions() {
        let a = deterministic(21);
        let b = deterministic(21);
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.n(), 21);
        assert_eq!(c.as_slice().len(), 21 * 21);
        let t = multiply_naive(&a, &b).unwrap();
        assert_eq!(c.max_abs_diff(&t), 0.0);
    }

    #[test]
    fn test_empty_product() {
        let a = SquareMatrix::zeroed(0);
        let c = multiply(&a, &a).unwrap();
        assert_eq!(c.n(), 0);
    }

    #[test]
    fn test_rejects_mismatched_operands() {
        let a = SquareMatrix::zeroed(17);
        let b = SquareMatrix::zeroed(18);
        assert!(multiply(&a, &b).is_err());
    }

    #[test]
    fn test_probe_observes_without_changing_the_result() {
        let a = deterministic(33);
        let b = deterministic(33);

        let calls = Cell::new(0usize);
        let probe = |_: &SquareMatrix| calls.set(calls.get() + 1);

        let with_probe = multiply_with_probe(&a, &b, &probe).unwrap();
        let without = multiply(&a, &b).unwrap();

        assert!(calls.get() > 0);
        assert_eq!(with_probe.max_abs_diff(&without), 0.0);
    }
}
