//! Element-wise add and subtract over equally sized square blocks.
//!
//! The recursion schedule reuses its temporaries as both source and
//! destination of successive steps, so alongside the plain
//! destination-distinct forms there are two aliasing forms covering the
//! patterns the schedule needs: `dst = dst + src` and `dst = src - dst`.
//! Distinctness of the remaining operands is enforced by borrowing; an
//! operand can never alias the destination unless the operation's own
//! signature says so.
//!
//! Every operation reports its finished destination block to the optional
//! probe before returning.

use crate::matrix::SquareMatrix;
use crate::probe::BlockProbe;

#[inline]
fn fire(probe: Option<BlockProbe<'_>>, block: &SquareMatrix) {
    if let Some(f) = probe {
        f(block);
    }
}

/// `dst = a + b`, all three distinct.
pub(crate) fn add_into(
    a: &SquareMatrix,
    b: &SquareMatrix,
    dst: &mut SquareMatrix,
    probe: Option<BlockProbe<'_>>,
) {
    debug_assert_eq!(a.n(), b.n());
    debug_assert_eq!(a.n(), dst.n());
    for ((d, &x), &y) in dst
        .as_mut_slice()
        .iter_mut()
        .zip(a.as_slice())
        .zip(b.as_slice())
    {
        *d = x + y;
    }
    fire(probe, dst);
}

/// `dst = a - b`, all three distinct.
pub(crate) fn sub_into(
    a: &SquareMatrix,
    b: &SquareMatrix,
    dst: &mut SquareMatrix,
    probe: Option<BlockProbe<'_>>,
) {
    debug_assert_eq!(a.n(), b.n());
    debug_assert_eq!(a.n(), dst.n());
    for ((d, &x), &y) in dst
        .as_mut_slice()
        .iter_mut()
        .zip(a.as_slice())
        .zip(b.as_slice())
    {
        *d = x - y;
    }
    fire(probe, dst);
}

/// `dst = dst + src`; the destination aliases the left operand.
pub(crate) fn add_assign(
    dst: &mut SquareMatrix,
    src: &SquareMatrix,
    probe: Option<BlockProbe<'_>>,
) {
    debug_assert_eq!(dst.n(), src.n());
    for (d, &s) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d += s;
    }
    fire(probe, dst);
}

/// `dst = src - dst`; the destination aliases the right operand.
pub(crate) fn sub_from(dst: &mut SquareMatrix, src: &SquareMatrix, probe: Option<BlockProbe<'_>>) {
    debug_assert_eq!(dst.n(), src.n());
    for (d, &s) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d = s - *d;
    }
    fire(probe, dst);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: usize, scale: f64) -> SquareMatrix {
        SquareMatrix::from_fn(n, |i, j| scale * (i * n + j) as f64)
    }

    #[test]
    fn test_add_into() {
        let a = filled(3, 1.0);
        let b = filled(3, 2.0);
        let mut c = SquareMatrix::zeroed(3);
        add_into(&a, &b, &mut c, None);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(c[(i, j)], 3.0 * (i * 3 + j) as f64);
            }
        }
    }

    #[test]
    fn test_sub_into() {
        let a = filled(3, 5.0);
        let b = filled(3, 2.0);
        let mut c = SquareMatrix::zeroed(3);
        sub_into(&a, &b, &mut c, None);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(c[(i, j)], 3.0 * (i * 3 + j) as f64);
            }
        }
    }

    #[test]
    fn test_add_assign_aliases_left_operand() {
        let mut dst = filled(4, 1.0);
        let src = filled(4, 10.0);
        add_assign(&mut dst, &src, None);
        assert_eq!(dst[(2, 3)], 11.0 * 11.0);
        assert_eq!(dst[(0, 1)], 11.0);
    }

    #[test]
    fn test_sub_from_aliases_right_operand() {
        // dst = src - dst
        let mut dst = filled(2, 1.0);
        let src = filled(2, 3.0);
        sub_from(&mut dst, &src, None);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(dst[(i, j)], 2.0 * (i * 2 + j) as f64);
            }
        }
    }

    #[test]
    fn test_probe_sees_destination_after_write() {
        use std::cell::Cell;

        let a = filled(2, 1.0);
        let b = filled(2, 1.0);
        let mut c = SquareMatrix::zeroed(2);

        let seen = Cell::new(0.0);
        let probe = |block: &SquareMatrix| seen.set(block[(1, 1)]);
        add_into(&a, &b, &mut c, Some(&probe));

        assert_eq!(seen.get(), 6.0);
        assert_eq!(c[(1, 1)], 6.0);
    }
}
