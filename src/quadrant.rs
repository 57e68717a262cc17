//! Quadrant extraction and reassembly.
//!
//! Splitting copies rectangles out of the parent matrix into zero-initialized
//! half-size blocks; reassembly writes the four result quadrants back into a
//! full-size matrix. Both sides understand the one-row/one-column padding used
//! for odd parents: extraction copies one fewer row/column into the padded
//! quadrants (the padded entries keep their initial zero), and reassembly
//! skips the padded row/column so it never reaches the final result.

use crate::matrix::SquareMatrix;

/// Copies a `rows`×`cols` rectangle of `src` starting at
/// `(row_offset, col_offset)` into the top-left corner of `dst`.
///
/// Entries of `dst` outside the rectangle are left as they are; the engine
/// always passes freshly zeroed destinations, which is what makes implicit
/// zero padding work without copying any zeros.
pub(crate) fn extract_into(
    src: &SquareMatrix,
    dst: &mut SquareMatrix,
    rows: usize,
    cols: usize,
    row_offset: usize,
    col_offset: usize,
) {
    debug_assert!(rows <= dst.n() && cols <= dst.n());
    debug_assert!(row_offset + rows <= src.n() && col_offset + cols <= src.n());
    for i in 0..rows {
        let src_row = &src.row(row_offset + i)[col_offset..col_offset + cols];
        dst.row_mut(i)[..cols].copy_from_slice(src_row);
    }
}

/// Writes four `half`-sized quadrants into one
/// `(2 * half - padding)`-sized matrix.
///
/// `c11` lands in full; `c12`, `c21` and `c22` contribute only
/// `half - padding` rows/columns along the padded edge.
pub(crate) fn assemble_into(
    half: usize,
    padding: usize,
    c11: &SquareMatrix,
    c12: &SquareMatrix,
    c21: &SquareMatrix,
    c22: &SquareMatrix,
    out: &mut SquareMatrix,
) {
    let trim = half - padding;
    debug_assert_eq!(out.n(), half + trim);

    for i in 0..half {
        out.row_mut(i)[..half].copy_from_slice(c11.row(i));
        out.row_mut(i)[half..].copy_from_slice(&c12.row(i)[..trim]);
    }
    for i in 0..trim {
        out.row_mut(half + i)[..half].copy_from_slice(c21.row(i));
        out.row_mut(half + i)[half..].copy_from_slice(&c22.row(i)[..trim]);
    }
}
