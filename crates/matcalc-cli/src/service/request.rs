use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Body of the single-matrix operations.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MatrixRequest {
    pub matrix: Vec<Vec<f64>>,
}

/// Body of `add` and `multiply`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TwoMatricesRequest {
    pub matrix_a: Vec<Vec<f64>>,
    pub matrix_b: Vec<Vec<f64>>,
}

/// Body of `solve`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SystemRequest {
    pub coefficients: Vec<Vec<f64>>,
    pub constants: Vec<f64>,
}

/// Operations exposed at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
    Determinant,
    Inverse,
    Solve,
    Transpose,
    Rank,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Multiply,
        Operation::Determinant,
        Operation::Inverse,
        Operation::Solve,
        Operation::Transpose,
        Operation::Rank,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Multiply => "multiply",
            Operation::Determinant => "determinant",
            Operation::Inverse => "inverse",
            Operation::Solve => "solve",
            Operation::Transpose => "transpose",
            Operation::Rank => "rank",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Operation::Add => "Elementwise sum of two matrices of equal shape",
            Operation::Multiply => "Matrix product A * B",
            Operation::Determinant => "Determinant of a square matrix",
            Operation::Inverse => "Inverse of a square, non-singular matrix",
            Operation::Solve => "Solve a square linear system by Gaussian elimination",
            Operation::Transpose => "Transpose of a matrix",
            Operation::Rank => "Rank of a matrix",
        }
    }

    /// Example request body for this operation.
    pub fn template(&self) -> serde_json::Value {
        match self {
            Operation::Add | Operation::Multiply => json!({
                "matrix_a": [[1.0, 2.0], [3.0, 4.0]],
                "matrix_b": [[5.0, 6.0], [7.0, 8.0]],
            }),
            Operation::Solve => json!({
                "coefficients": [[2.0, 1.0], [1.0, 3.0]],
                "constants": [5.0, 10.0],
            }),
            Operation::Determinant | Operation::Inverse | Operation::Transpose | Operation::Rank => {
                json!({ "matrix": [[1.0, 2.0], [3.0, 4.0]] })
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == name)
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}
