use serde::{Deserialize, Serialize};

/// Numeric thresholds used by the engines.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// `|det|` below this value makes a matrix singular for inversion.
    /// Absolute, not scaled by the magnitude of the entries.
    pub singular_epsilon: f64,

    /// Entries with `|x|` at or below this value are never chosen as pivots
    /// and count as zero when classifying eliminated rows.
    pub pivot_epsilon: f64,
}

impl EngineConfig {
    pub const DEFAULT_SINGULAR_EPSILON: f64 = 1e-10;
    pub const DEFAULT_PIVOT_EPSILON: f64 = 1e-12;

    pub fn new(singular_epsilon: f64, pivot_epsilon: f64) -> Self {
        Self {
            singular_epsilon,
            pivot_epsilon,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            singular_epsilon: Self::DEFAULT_SINGULAR_EPSILON,
            pivot_epsilon: Self::DEFAULT_PIVOT_EPSILON,
        }
    }
}
