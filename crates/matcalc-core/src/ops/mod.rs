//! The numeric operations.
//!
//! Every function validates its operands first and only then allocates its
//! own working storage; inputs are never modified.
pub mod arithmetic;
pub mod determinant;
pub mod gaussian;
pub mod inverse;

pub use arithmetic::{add, multiply, transpose};
pub use determinant::determinant;
pub use gaussian::{rank, rank_with, solve, solve_with};
pub use inverse::{inverse, inverse_with};
