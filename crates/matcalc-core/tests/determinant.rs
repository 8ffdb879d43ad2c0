//! Integration tests for the cofactor-expansion determinant.

use matcalc_core::{determinant, MatrixError, ShapeError};

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn empty_matrix_errors() {
    let empty: Vec<Vec<f64>> = vec![];
    let err = determinant(&empty).unwrap_err();
    assert_eq!(err, MatrixError::Shape(ShapeError::EmptyMatrix));
    assert_eq!(err.to_string(), "Matrix cannot be empty");
}

#[test]
fn non_square_matrix_errors() {
    let err = determinant(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Matrix must be square. Row 0 has length 3, expected 2"
    );
}

#[test]
fn irregular_matrix_reports_offending_row() {
    let m = vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]];
    assert_eq!(
        determinant(&m).unwrap_err(),
        MatrixError::Shape(ShapeError::NotSquare {
            row: 1,
            len: 3,
            expected: 2
        })
    );
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

#[test]
fn one_by_one() {
    assert_eq!(determinant(&[[5.0]]).unwrap(), 5.0);
    assert_eq!(determinant(&[[-3.0]]).unwrap(), -3.0);
    assert_eq!(determinant(&[[0.0]]).unwrap(), 0.0);
}

#[test]
fn two_by_two() {
    assert_eq!(determinant(&[[1.0, 2.0], [3.0, 4.0]]).unwrap(), -2.0);
    assert_eq!(determinant(&[[0.0, 1.0], [1.0, 0.0]]).unwrap(), -1.0);
    assert_eq!(
        determinant(&[[1e6, 2e6], [3e6, 4e6]]).unwrap(),
        1e6 * 4e6 - 2e6 * 3e6
    );
}

#[test]
fn three_by_three() {
    assert_eq!(
        determinant(&[[2.0, -3.0, 1.0], [2.0, 0.0, -1.0], [1.0, 4.0, 5.0]]).unwrap(),
        49.0
    );
}

#[test]
fn zero_column_gives_zero() {
    assert_eq!(
        determinant(&[[1.0, 0.0, 2.0], [3.0, 0.0, 4.0], [5.0, 0.0, 6.0]]).unwrap(),
        0.0
    );
}

#[test]
fn zero_row_gives_zero() {
    assert_eq!(
        determinant(&[[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [7.0, 8.0, 9.0]]).unwrap(),
        0.0
    );
}

#[test]
fn dependent_rows_give_zero() {
    assert_eq!(
        determinant(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [7.0, 8.0, 9.0]]).unwrap(),
        0.0
    );
}

#[test]
fn four_by_four() {
    let m = [
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [2.0, 6.0, 4.0, 8.0],
        [3.0, 1.0, 1.0, 2.0],
    ];
    assert_eq!(determinant(&m).unwrap(), 72.0);

    let sparse = [
        [1.0, 0.0, 2.0, -1.0],
        [3.0, 0.0, 0.0, 5.0],
        [2.0, 1.0, 4.0, -3.0],
        [1.0, 0.0, 5.0, 0.0],
    ];
    assert_eq!(determinant(&sparse).unwrap(), 30.0);
}

#[test]
fn diagonal_five_by_five() {
    let mut m = vec![vec![0.0; 5]; 5];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = (i + 2) as f64;
    }
    assert_eq!(determinant(&m).unwrap(), 720.0);
}

#[test]
fn identity_and_triangular() {
    let eye = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    assert_eq!(determinant(&eye).unwrap(), 1.0);
    let upper = [[2.0, 3.0, 1.0], [0.0, 4.0, 5.0], [0.0, 0.0, 6.0]];
    assert_eq!(determinant(&upper).unwrap(), 48.0);
}

#[test]
fn almost_singular_two_by_two() {
    let det = determinant(&[[1.0, 2.0], [2.0, 4.000001]]).unwrap();
    assert!(0.00000099999 < det && det < 0.00000100111, "det = {}", det);
}

// ---------------------------------------------------------------------------
// Algebraic properties
// ---------------------------------------------------------------------------

#[test]
fn transpose_preserves_value() {
    let m = [[2.0, 0.0, 1.0], [0.0, 3.0, 0.0], [4.0, 0.0, 5.0]];
    let t = [[2.0, 0.0, 4.0], [0.0, 3.0, 0.0], [1.0, 0.0, 5.0]];
    assert_eq!(determinant(&m).unwrap(), determinant(&t).unwrap());
}

#[test]
fn swapping_rows_negates() {
    let m = [[1.0, 2.0, 0.0], [0.0, 1.0, 3.0], [4.0, 0.0, 1.0]];
    let swapped = [[0.0, 1.0, 3.0], [1.0, 2.0, 0.0], [4.0, 0.0, 1.0]];
    assert_eq!(determinant(&swapped).unwrap(), -determinant(&m).unwrap());
}

#[test]
fn scaling_row_scales() {
    let m = [[1.0, 2.0], [3.0, 4.0]];
    let scaled = [[2.0, 4.0], [3.0, 4.0]];
    assert_eq!(
        determinant(&scaled).unwrap(),
        2.0 * determinant(&m).unwrap()
    );
}
