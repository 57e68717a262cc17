//! Optional numeric-range instrumentation.
//!
//! The engine can report every block it finishes computing to a
//! caller-supplied probe. Probes observe, never steer: a probe receives a
//! shared reference to the destination block after an addition, subtraction
//! or base-case product completes, and whatever it does has no effect on
//! control flow or on the values produced.

use crate::matrix::SquareMatrix;

/// A diagnostic callback invoked with each freshly written block.
///
/// Disabled by default; [`crate::multiply`] runs without one, and
/// [`crate::multiply_with_probe`] threads the caller's probe through every
/// recursion level.
pub type BlockProbe<'a> = &'a dyn Fn(&SquareMatrix);

/// Ready-made probe that reports non-finite values on stderr.
///
/// Overflowed sums show up as infinities and invalid operations as NaNs;
/// both are worth knowing about when multiplying matrices near the edge of
/// `f64` range, but neither is an error, so this only warns.
pub fn warn_non_finite(block: &SquareMatrix) {
    let mut infinite = 0usize;
    let mut nan = 0usize;
    for &x in block.as_slice() {
        if x.is_infinite() {
            infinite += 1;
        } else if x.is_nan() {
            nan += 1;
        }
    }
    let n = block.n();
    if infinite > 0 {
        eprintln!("WARNING: data is infinity! ({infinite} element(s) in a {n}x{n} block)");
    }
    if nan > 0 {
        eprintln!("WARNING: data is not-a-number! ({nan} element(s) in a {n}x{n} block)");
    }
}
