//! Shape checks shared by every operation.
//!
//! Each check returns the first violated precondition. The order in which
//! the operations call these helpers is part of their error contract.

use crate::error::{ShapeError, Side};
use crate::math::Array2;

/// Zero rows or an empty first row.
pub fn is_empty<R: AsRef<[f64]>>(m: &[R]) -> bool {
    m.first().map_or(true, |r| r.as_ref().is_empty())
}

/// Every row has the length of the first row.
pub fn check_rectangular<R: AsRef<[f64]>>(m: &[R], side: Side) -> Result<(), ShapeError> {
    let cols = m.first().map_or(0, |r| r.as_ref().len());
    if m.iter().any(|r| r.as_ref().len() != cols) {
        return Err(ShapeError::RaggedRows(side));
    }
    Ok(())
}

/// Every row has length `rows`; reports the first offending row.
pub fn check_square<R: AsRef<[f64]>>(m: &[R]) -> Result<(), ShapeError> {
    let n = m.len();
    match m.iter().position(|r| r.as_ref().len() != n) {
        Some(row) => Err(ShapeError::NotSquare {
            row,
            len: m[row].as_ref().len(),
            expected: n,
        }),
        None => Ok(()),
    }
}

/// Operands of `add`: empty, row count, column count, raggedness of A then B.
pub fn equal_shape<A, B>(
    a: &[A],
    b: &[B],
) -> Result<(Array2<f64>, Array2<f64>), ShapeError>
where
    A: AsRef<[f64]>,
    B: AsRef<[f64]>,
{
    if is_empty(a) || is_empty(b) {
        return Err(ShapeError::EmptyMatrices);
    }
    if a.len() != b.len() {
        return Err(ShapeError::RowCountMismatch);
    }
    if a[0].as_ref().len() != b[0].as_ref().len() {
        return Err(ShapeError::ColumnCountMismatch);
    }
    check_rectangular(a, Side::First)?;
    check_rectangular(b, Side::Second)?;
    Ok((Array2::from_rows_unchecked(a), Array2::from_rows_unchecked(b)))
}

/// Operands of `multiply`: empty, raggedness of A then B, inner dimensions.
pub fn multiply_compatible<A, B>(
    a: &[A],
    b: &[B],
) -> Result<(Array2<f64>, Array2<f64>), ShapeError>
where
    A: AsRef<[f64]>,
    B: AsRef<[f64]>,
{
    if is_empty(a) || is_empty(b) {
        return Err(ShapeError::EmptyMatrices);
    }
    check_rectangular(a, Side::First)?;
    check_rectangular(b, Side::Second)?;
    let (rows_a, cols_a) = (a.len(), a[0].as_ref().len());
    let (rows_b, cols_b) = (b.len(), b[0].as_ref().len());
    if cols_a != rows_b {
        return Err(ShapeError::MultiplyIncompatible {
            rows_a,
            cols_a,
            rows_b,
            cols_b,
        });
    }
    Ok((Array2::from_rows_unchecked(a), Array2::from_rows_unchecked(b)))
}

/// Single square operand: zero rows first, then per-row length against n.
pub fn square<R: AsRef<[f64]>>(m: &[R]) -> Result<Array2<f64>, ShapeError> {
    if m.is_empty() {
        return Err(ShapeError::EmptyMatrix);
    }
    check_square(m)?;
    Ok(Array2::from_rows_unchecked(m))
}

/// Single operand of any shape: empty, then raggedness.
pub fn rectangular<R: AsRef<[f64]>>(m: &[R]) -> Result<Array2<f64>, ShapeError> {
    if is_empty(m) {
        return Err(ShapeError::EmptyMatrix);
    }
    check_rectangular(m, Side::Only)?;
    Ok(Array2::from_rows_unchecked(m))
}

/// Linear system: empty, constants length, square coefficients.
pub fn system<R: AsRef<[f64]>>(
    coefficients: &[R],
    constants: &[f64],
) -> Result<Array2<f64>, ShapeError> {
    let n = coefficients.len();
    if n == 0 {
        return Err(ShapeError::EmptySystem);
    }
    if constants.len() != n {
        return Err(ShapeError::DimensionMismatch {
            expected: n,
            actual: constants.len(),
        });
    }
    check_square(coefficients)?;
    Ok(Array2::from_rows_unchecked(coefficients))
}
