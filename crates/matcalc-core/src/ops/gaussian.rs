//! Gaussian elimination with partial pivoting.
//!
//! The same forward pass backs both `solve` (on the augmented system) and
//! `rank` (on a plain copy of the matrix).

use log::{debug, trace};

use crate::config::EngineConfig;
use crate::error::MatrixError;
use crate::error::ShapeError;
use crate::math::{Array1, Array2};
use crate::validate;

/// Forward elimination over the first `pivot_cols` columns of `work`.
///
/// Pivot rows are normalised so the pivot becomes exactly 1, and entries
/// below each pivot are eliminated. Columns to the right of `pivot_cols`
/// (the augmented column) are carried along. Returns the number of pivots.
pub(crate) fn forward_eliminate(work: &mut Array2<f64>, pivot_cols: usize, eps: f64) -> usize {
    let (rows, width) = work.shape();
    let mut rank = 0;

    for col in 0..pivot_cols {
        let pivot_row = match (rank..rows).find(|&r| work[(r, col)].abs() > eps) {
            Some(r) => r,
            None => {
                trace!("eliminate: no pivot in column {}", col);
                continue;
            }
        };

        if pivot_row != rank {
            trace!("eliminate: swapping rows {} and {}", rank, pivot_row);
            work.swap_rows(rank, pivot_row);
        }

        let pivot = work[(rank, col)];
        for j in col..width {
            work[(rank, j)] /= pivot;
        }

        for row in rank + 1..rows {
            let factor = work[(row, col)];
            for j in col..width {
                let delta = factor * work[(rank, j)];
                work[(row, j)] -= delta;
            }
        }

        rank += 1;
    }

    rank
}

/// Solve `coefficients * x = constants` with the default thresholds.
pub fn solve<R: AsRef<[f64]>>(
    coefficients: &[R],
    constants: &[f64],
) -> Result<Array1<f64>, MatrixError> {
    solve_with(coefficients, constants, &EngineConfig::default())
}

/// Solve a square linear system.
///
/// Returns the unique solution, or [`MatrixError::Inconsistent`] when some
/// eliminated row reads `0 = b` with `b != 0`, or
/// [`MatrixError::UnderdeterminedInfiniteSolutions`] when the rank is below
/// the system size without such a row.
pub fn solve_with<R: AsRef<[f64]>>(
    coefficients: &[R],
    constants: &[f64],
    config: &EngineConfig,
) -> Result<Array1<f64>, MatrixError> {
    let a = validate::system(coefficients, constants)?;
    let n = a.nrows();
    debug!("solve: {}x{} system", n, n);

    let mut augmented = augment(&a, constants);
    let eps = config.pivot_epsilon;
    let rank = forward_eliminate(&mut augmented, n, eps);
    debug!("solve: elimination rank {}", rank);

    for row in rank..n {
        let coefficients_vanish = augmented.row_slice(row)[..n].iter().all(|x| x.abs() <= eps);
        if coefficients_vanish && augmented[(row, n)].abs() > eps {
            return Err(MatrixError::Inconsistent);
        }
    }
    if rank < n {
        return Err(MatrixError::UnderdeterminedInfiniteSolutions);
    }

    Ok(back_substitute(&augmented))
}

fn augment(a: &Array2<f64>, constants: &[f64]) -> Array2<f64> {
    let n = a.nrows();
    let mut augmented = Array2::zeros(n, n + 1);
    for (i, row) in a.rows().enumerate() {
        augmented.row_slice_mut(i)[..n].copy_from_slice(row);
        augmented[(i, n)] = constants[i];
    }
    augmented
}

/// Upper-triangular system with unit diagonal.
fn back_substitute(augmented: &Array2<f64>) -> Array1<f64> {
    let n = augmented.nrows();
    let mut solution = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut value = augmented[(i, n)];
        for j in i + 1..n {
            value -= augmented[(i, j)] * solution[j];
        }
        solution[i] = value;
    }
    solution
}

/// Number of pivots found by forward elimination, default threshold.
pub fn rank<R: AsRef<[f64]>>(m: &[R]) -> Result<usize, ShapeError> {
    rank_with(m, &EngineConfig::default())
}

/// Number of pivots found by forward elimination over a copy of `m`.
///
/// Any rectangular shape is accepted.
pub fn rank_with<R: AsRef<[f64]>>(m: &[R], config: &EngineConfig) -> Result<usize, ShapeError> {
    let mut work = validate::rectangular(m)?;
    let cols = work.ncols();
    let rank = forward_eliminate(&mut work, cols, config.pivot_epsilon);
    debug!("rank: {}x{} -> {}", work.nrows(), cols, rank);
    Ok(rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elimination_normalises_pivots() {
        let mut work = Array2::from_rows_unchecked(&[[2.0, 4.0, 6.0], [1.0, 3.0, 5.0]]);
        let rank = forward_eliminate(&mut work, 2, 1e-12);
        assert_eq!(rank, 2);
        assert_eq!(work.row_slice(0), &[1.0, 2.0, 3.0]);
        assert_eq!(work.row_slice(1), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn elimination_skips_empty_columns() {
        let mut work = Array2::from_rows_unchecked(&[[0.0, 1.0], [0.0, 2.0]]);
        assert_eq!(forward_eliminate(&mut work, 2, 1e-12), 1);
        assert_eq!(work.row_slice(0), &[0.0, 1.0]);
    }

    #[test]
    fn augment_appends_constants() {
        let a = Array2::from_rows_unchecked(&[[1.0, 2.0], [3.0, 4.0]]);
        let aug = augment(&a, &[5.0, 6.0]);
        assert_eq!(aug.to_rows(), vec![vec![1.0, 2.0, 5.0], vec![3.0, 4.0, 6.0]]);
    }
}
