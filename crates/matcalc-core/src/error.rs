use std::error::Error;
use std::fmt;

/// Which operand a shape failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
    /// The single operand of a one-matrix operation.
    Only,
}

/// Precondition failures detected before any numeric work is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// One of the two operands has no rows or an empty first row.
    EmptyMatrices,
    /// The single operand has no rows or an empty first row.
    EmptyMatrix,
    /// The coefficient matrix of a linear system has no rows.
    EmptySystem,
    RaggedRows(Side),
    RowCountMismatch,
    ColumnCountMismatch,
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    MultiplyIncompatible {
        rows_a: usize,
        cols_a: usize,
        rows_b: usize,
        cols_b: usize,
    },
    DimensionMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShapeError::EmptyMatrices => write!(f, "Matrices cannot be empty"),
            ShapeError::EmptyMatrix => write!(f, "Matrix cannot be empty"),
            ShapeError::EmptySystem => write!(f, "System cannot be empty"),
            ShapeError::RaggedRows(Side::First) => {
                write!(f, "All rows of the first matrix must have the same length")
            }
            ShapeError::RaggedRows(Side::Second) => {
                write!(f, "All rows of the second matrix must have the same length")
            }
            ShapeError::RaggedRows(Side::Only) => {
                write!(f, "All rows of the matrix must have the same length")
            }
            ShapeError::RowCountMismatch => {
                write!(f, "Matrices must have the same number of rows")
            }
            ShapeError::ColumnCountMismatch => {
                write!(f, "Matrices must have the same number of columns")
            }
            ShapeError::NotSquare { row, len, expected } => write!(
                f,
                "Matrix must be square. Row {} has length {}, expected {}",
                row, len, expected
            ),
            ShapeError::MultiplyIncompatible {
                rows_a,
                cols_a,
                rows_b,
                cols_b,
            } => write!(
                f,
                "Incompatible dimensions for multiplication: matrix A ({}x{}) and matrix B ({}x{}). \
                 The number of columns of A must equal the number of rows of B",
                rows_a, cols_a, rows_b, cols_b
            ),
            ShapeError::DimensionMismatch { expected, actual } => write!(
                f,
                "Constants vector length {} does not match system size {}",
                actual, expected
            ),
        }
    }
}

impl Error for ShapeError {}

/// Failures of the determinant, inverse and solver engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    Shape(ShapeError),
    /// Determinant magnitude fell below the singularity threshold.
    Singular,
    /// Elimination produced a `0 = b` row with `b != 0`.
    Inconsistent,
    /// Elimination rank is below the system size and no row is inconsistent.
    UnderdeterminedInfiniteSolutions,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::Shape(e) => write!(f, "{}", e),
            MatrixError::Singular => write!(
                f,
                "Matrix is singular (determinant = 0), the inverse does not exist"
            ),
            MatrixError::Inconsistent => write!(f, "System is inconsistent: no solutions"),
            MatrixError::UnderdeterminedInfiniteSolutions => {
                write!(f, "System has infinitely many solutions")
            }
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatrixError::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeError> for MatrixError {
    fn from(value: ShapeError) -> Self {
        MatrixError::Shape(value)
    }
}
