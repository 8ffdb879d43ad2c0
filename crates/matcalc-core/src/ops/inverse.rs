//! Inverse through the adjugate: `inv(A) = adj(A) / det(A)`.

use log::debug;

use crate::config::EngineConfig;
use crate::error::MatrixError;
use crate::math::{Array2, SquareView};
use crate::ops::determinant::expand;
use crate::validate;

/// Inverse with the default singularity threshold.
pub fn inverse<R: AsRef<[f64]>>(m: &[R]) -> Result<Array2<f64>, MatrixError> {
    inverse_with(m, &EngineConfig::default())
}

/// Inverse of a square matrix.
///
/// Fails with [`MatrixError::Singular`] when `|det| < config.singular_epsilon`.
pub fn inverse_with<R: AsRef<[f64]>>(
    m: &[R],
    config: &EngineConfig,
) -> Result<Array2<f64>, MatrixError> {
    let m = validate::square(m)?;
    let n = m.nrows();
    let full = SquareView::full(&m);

    let det = expand(&full);
    debug!("inverse: {}x{}, det = {}", n, n, det);
    if det.abs() < config.singular_epsilon {
        return Err(MatrixError::Singular);
    }

    if n == 1 {
        return Ok(Array2::from_rows_unchecked(&[[1.0 / m[(0, 0)]]]));
    }

    let cofactors = cofactor_matrix(&full);
    let adjugate = cofactors.transpose();
    Ok(adjugate.mapv(|c| c / det))
}

/// `C[i][j] = (-1)^(i+j) * det(minor(i, j))`.
fn cofactor_matrix(full: &SquareView<'_>) -> Array2<f64> {
    let n = full.size();
    let mut cofactors = Array2::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            cofactors[(i, j)] = sign * expand(&full.minor(i, j));
        }
    }
    cofactors
}
