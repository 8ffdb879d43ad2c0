use crate::config::EngineConfig;
use crate::error::{MatrixError, ShapeError};
use crate::math::{Array1, Array2};
use crate::ops;

/// Entry point bundling the operations with a fixed set of thresholds.
///
/// Holds no state besides its configuration, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn add<A, B>(&self, a: &[A], b: &[B]) -> Result<Array2<f64>, ShapeError>
    where
        A: AsRef<[f64]>,
        B: AsRef<[f64]>,
    {
        ops::add(a, b)
    }

    pub fn multiply<A, B>(&self, a: &[A], b: &[B]) -> Result<Array2<f64>, ShapeError>
    where
        A: AsRef<[f64]>,
        B: AsRef<[f64]>,
    {
        ops::multiply(a, b)
    }

    pub fn transpose<R: AsRef<[f64]>>(&self, m: &[R]) -> Result<Array2<f64>, ShapeError> {
        ops::transpose(m)
    }

    /// Exact cofactor expansion; no threshold applies, so the config is unused.
    pub fn determinant<R: AsRef<[f64]>>(&self, m: &[R]) -> Result<f64, MatrixError> {
        ops::determinant(m)
    }

    pub fn inverse<R: AsRef<[f64]>>(&self, m: &[R]) -> Result<Array2<f64>, MatrixError> {
        ops::inverse_with(m, &self.config)
    }

    pub fn solve<R: AsRef<[f64]>>(
        &self,
        coefficients: &[R],
        constants: &[f64],
    ) -> Result<Array1<f64>, MatrixError> {
        ops::solve_with(coefficients, constants, &self.config)
    }

    pub fn rank<R: AsRef<[f64]>>(&self, m: &[R]) -> Result<usize, ShapeError> {
        ops::rank_with(m, &self.config)
    }
}
