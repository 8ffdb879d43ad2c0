//! matcalc-core: dense matrix arithmetic on `f64`.
//!
//! This crate provides addition, multiplication, transpose, determinant,
//! inverse, rank and square linear-system solving over small dense
//! row-major matrices. Operands are accepted as nested rows (`&[R]` where
//! `R: AsRef<[f64]>`), validated, and results come back as owned
//! [`math::Array2`] / [`math::Array1`] values or a typed error.
//!
//! All operations are pure functions of their inputs. [`Engine`] carries the
//! numeric thresholds from [`config::EngineConfig`]; the free functions in
//! [`ops`] use the defaults.
pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod ops;
pub mod validate;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{MatrixError, ShapeError, Side};
pub use ops::{add, determinant, inverse, multiply, rank, solve, transpose};
