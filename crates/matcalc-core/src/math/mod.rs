//! Dense storage types used throughout the crate.
//!
//! Provides `Array2` (row-major matrix) and `Array1` (vector) containers
//! with the small set of conveniences the engines need, plus the
//! index-based `SquareView` used for determinant minors.
pub mod matrix;
pub mod vector;
pub mod view;

pub use matrix::{Array2, LayoutError};
pub use vector::Array1;
pub use view::SquareView;
