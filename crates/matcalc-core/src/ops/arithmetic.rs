//! Structural and elementwise operations: add, multiply, transpose.

use log::debug;

use crate::error::ShapeError;
use crate::math::Array2;
use crate::validate;

/// Elementwise sum of two equally shaped matrices.
pub fn add<A, B>(a: &[A], b: &[B]) -> Result<Array2<f64>, ShapeError>
where
    A: AsRef<[f64]>,
    B: AsRef<[f64]>,
{
    let (a, b) = validate::equal_shape(a, b)?;
    debug!("add: {}x{}", a.nrows(), a.ncols());

    let mut out = a;
    for (x, y) in out.as_mut_slice().iter_mut().zip(b.as_slice()) {
        *x += *y;
    }
    Ok(out)
}

/// Matrix product `A * B`.
///
/// Each entry is accumulated as `sum_k A[i][k] * B[k][j]` in increasing `k`.
pub fn multiply<A, B>(a: &[A], b: &[B]) -> Result<Array2<f64>, ShapeError>
where
    A: AsRef<[f64]>,
    B: AsRef<[f64]>,
{
    let (a, b) = validate::multiply_compatible(a, b)?;
    debug!(
        "multiply: ({}x{}) * ({}x{})",
        a.nrows(),
        a.ncols(),
        b.nrows(),
        b.ncols()
    );
    Ok(matmul(&a, &b))
}

pub(crate) fn matmul(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    let (rows, inner, cols) = (a.nrows(), a.ncols(), b.ncols());
    let mut out = Array2::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            let mut acc = 0.0;
            for k in 0..inner {
                acc += a[(i, k)] * b[(k, j)];
            }
            out[(i, j)] = acc;
        }
    }
    out
}

/// Rows become columns.
pub fn transpose<R: AsRef<[f64]>>(m: &[R]) -> Result<Array2<f64>, ShapeError> {
    let m = validate::rectangular(m)?;
    Ok(m.transpose())
}
