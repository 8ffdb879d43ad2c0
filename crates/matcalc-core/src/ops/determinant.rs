//! Determinant by recursive cofactor expansion.
//!
//! Expansion runs along the column holding the most exact zeros, and rows
//! whose entry in that column is zero are skipped without recursing. The
//! choice of column never changes the value, only how many minors are
//! visited.
//!
//! The cost still grows factorially with the side length, so this engine is
//! meant for small matrices (roughly n <= 10 for dense input). It is kept
//! instead of an LU factorisation because it is exact on integer-valued input
//! that stays within `f64` precision.

use log::{debug, trace};

use crate::error::MatrixError;
use crate::math::SquareView;
use crate::validate;

/// Determinant of a square matrix.
pub fn determinant<R: AsRef<[f64]>>(m: &[R]) -> Result<f64, MatrixError> {
    let m = validate::square(m)?;
    debug!("determinant: {}x{}", m.nrows(), m.ncols());
    Ok(expand(&SquareView::full(&m)))
}

/// Column with the strictly greatest zero count; ties go to the lowest index.
pub(crate) fn pivot_column(view: &SquareView<'_>) -> usize {
    let mut best_col = 0;
    let mut max_zeros = None;
    for col in 0..view.size() {
        let zeros = view.zeros_in_column(col);
        if max_zeros.map_or(true, |max| zeros > max) {
            max_zeros = Some(zeros);
            best_col = col;
        }
    }
    best_col
}

pub(crate) fn expand(view: &SquareView<'_>) -> f64 {
    let n = view.size();
    match n {
        1 => return view.get(0, 0),
        2 => return view.get(0, 0) * view.get(1, 1) - view.get(0, 1) * view.get(1, 0),
        _ => {}
    }

    let col = pivot_column(view);
    trace!("determinant: expanding {}x{} along column {}", n, n, col);

    let mut det = 0.0;
    for row in 0..n {
        let entry = view.get(row, col);
        if entry == 0.0 {
            continue;
        }
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        det += sign * entry * expand(&view.minor(row, col));
    }
    det
}
