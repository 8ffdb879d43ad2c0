//! Index-based square views used by the cofactor expansion.
//!
//! A minor is described by the row and column indices it keeps from the
//! base matrix, so building one costs two small index vectors rather than a
//! copy of the remaining entries.

use crate::math::Array2;

#[derive(Clone, Debug)]
pub struct SquareView<'a> {
    base: &'a Array2<f64>,
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl<'a> SquareView<'a> {
    /// View over the whole of a square matrix.
    pub fn full(base: &'a Array2<f64>) -> Self {
        debug_assert!(base.is_square());
        Self {
            base,
            rows: (0..base.nrows()).collect(),
            cols: (0..base.ncols()).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.base[(self.rows[row], self.cols[col])]
    }

    /// The minor obtained by deleting `row` and `col` (view coordinates).
    pub fn minor(&self, row: usize, col: usize) -> SquareView<'a> {
        SquareView {
            base: self.base,
            rows: without(&self.rows, row),
            cols: without(&self.cols, col),
        }
    }

    /// Count of exact-zero entries in `col`.
    pub fn zeros_in_column(&self, col: usize) -> usize {
        (0..self.size()).filter(|&r| self.get(r, col) == 0.0).count()
    }
}

fn without(indices: &[usize], skip: usize) -> Vec<usize> {
    let mut kept = Vec::with_capacity(indices.len().saturating_sub(1));
    kept.extend_from_slice(&indices[..skip]);
    kept.extend_from_slice(&indices[skip + 1..]);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_skips_row_and_column() {
        let m = Array2::from_shape_vec((3, 3), (1..=9).map(f64::from).collect()).unwrap();
        let view = SquareView::full(&m);
        let minor = view.minor(1, 0);
        assert_eq!(minor.size(), 2);
        assert_eq!(minor.get(0, 0), 2.0);
        assert_eq!(minor.get(0, 1), 3.0);
        assert_eq!(minor.get(1, 0), 8.0);
        assert_eq!(minor.get(1, 1), 9.0);

        let nested = minor.minor(0, 1);
        assert_eq!(nested.size(), 1);
        assert_eq!(nested.get(0, 0), 8.0);
    }

    #[test]
    fn zero_count_per_column() {
        let m = Array2::from_shape_vec((3, 3), vec![1.0, 0.0, 0.0, 0.0, 0.0, 2.0, 3.0, 0.0, 4.0])
            .unwrap();
        let view = SquareView::full(&m);
        assert_eq!(view.zeros_in_column(0), 1);
        assert_eq!(view.zeros_in_column(1), 3);
        assert_eq!(view.zeros_in_column(2), 1);
    }
}
