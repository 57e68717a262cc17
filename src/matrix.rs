//! Owned storage for dense square matrices.
//!
//! A [`SquareMatrix`] keeps all `n * n` elements in one contiguous row-major
//! allocation. Row access is a computed offset into that block, so splitting,
//! copying and freeing a matrix each touch exactly one buffer and the backing
//! memory never fragments across an owner's lifetime.

use std::ops::{Index, IndexMut};

use ndarray::Array2;

use crate::error::{length_mismatch, not_square, Result, StrassenError};

/// Calculates the flat index of a 2D element in a row-major matrix.
///
/// # Arguments
///
/// * `i` - Row index.
/// * `j` - Column index.
/// * `ld` - Leading dimension (number of columns for row-major).
#[inline(always)]
fn at(i: usize, j: usize, ld: usize) -> usize {
    (i * ld) + j
}

/// An `n`×`n` matrix of `f64` values in one contiguous row-major buffer.
///
/// The matrix owns its backing `Vec<f64>`; dropping the matrix releases the
/// whole buffer in one deallocation. Elements are addressed either through
/// row slices ([`SquareMatrix::row`]) or `(row, column)` indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// Creates an `n`×`n` matrix with every element set to zero.
    ///
    /// Allocation failure is fatal: the global allocation error handler
    /// prints a diagnostic and aborts the process.
    pub fn zeroed(n: usize) -> Self {
        SquareMatrix {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Creates an `n`×`n` matrix by evaluating `f(row, column)` per element.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut m = SquareMatrix::zeroed(n);
        for i in 0..n {
            for j in 0..n {
                m.data[at(i, j, n)] = f(i, j);
            }
        }
        m
    }

    /// Wraps an existing row-major buffer as an `n`×`n` matrix.
    ///
    /// Returns [`StrassenError::LengthMismatch`] when `data.len() != n * n`.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != n * n {
            return Err(length_mismatch(
                n,
                data.len(),
                "backing vector must hold exactly n * n elements",
            ));
        }
        Ok(SquareMatrix { n, data })
    }

    /// Creates the `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = SquareMatrix::zeroed(n);
        for i in 0..n {
            m.data[at(i, i, n)] = 1.0;
        }
        m
    }

    /// The matrix dimension `n`.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// The whole backing buffer in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Row `i` as a contiguous slice of `n` elements.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[at(i, 0, self.n)..at(i, 0, self.n) + self.n]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let start = at(i, 0, self.n);
        &mut self.data[start..start + self.n]
    }

    /// Largest absolute elementwise difference between `self` and `other`.
    ///
    /// Returns `0.0` for two empty matrices.
    ///
    /// # Panics
    ///
    /// Panics if the matrices differ in size.
    pub fn max_abs_diff(&self, other: &SquareMatrix) -> f64 {
        assert_eq!(self.n, other.n, "matrices must share one dimension");
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }
}

/// Checks that two multiplication operands share one dimension.
pub(crate) fn same_size(a: &SquareMatrix, b: &SquareMatrix) -> Result<usize> {
    if a.n() != b.n() {
        return Err(crate::error::size_mismatch(
            a.n(),
            b.n(),
            "multiplication operands must be the same size",
        ));
    }
    Ok(a.n())
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[at(i, j, self.n)]
    }
}

impl IndexMut<(usize, usize)> for SquareMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[at(i, j, self.n)]
    }
}

impl From<&SquareMatrix> for Array2<f64> {
    fn from(m: &SquareMatrix) -> Self {
        Array2::from_shape_vec((m.n, m.n), m.data.clone())
            .expect("an n x n buffer always matches an (n, n) shape")
    }
}

impl TryFrom<Array2<f64>> for SquareMatrix {
    type Error = StrassenError;

    fn try_from(arr: Array2<f64>) -> Result<Self> {
        let (rows, cols) = arr.dim();
        if rows != cols {
            return Err(not_square(
                rows,
                cols,
                "only square matrices are supported",
            ));
        }
        // Iteration is in logical (row-major) order regardless of the
        // array's memory layout.
        let data = arr.iter().copied().collect();
        Ok(SquareMatrix { n: rows, data })
    }
}
