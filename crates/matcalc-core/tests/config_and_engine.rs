//! Integration tests for EngineConfig and the Engine entry point.

use matcalc_core::{Engine, EngineConfig, MatrixError};

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

#[test]
fn default_thresholds() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.singular_epsilon, 1e-10);
    assert_eq!(cfg.pivot_epsilon, 1e-12);
}

#[test]
fn config_round_trips_through_json() {
    let cfg = EngineConfig::new(1e-8, 1e-9);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("singular_epsilon"));
    assert!(json.contains("pivot_epsilon"));
    let back: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn missing_config_fields_use_defaults() {
    let cfg: EngineConfig = serde_json::from_str(r#"{"singular_epsilon": 0.5}"#).unwrap();
    assert_eq!(cfg.singular_epsilon, 0.5);
    assert_eq!(cfg.pivot_epsilon, EngineConfig::DEFAULT_PIVOT_EPSILON);

    let empty: EngineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, EngineConfig::default());
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[test]
fn default_engine_matches_free_functions() {
    let engine = Engine::default();
    let m = [[1.0, 2.0], [3.0, 4.0]];
    assert_eq!(engine.determinant(&m).unwrap(), -2.0);
    assert_eq!(engine.inverse(&m).unwrap(), matcalc_core::inverse(&m).unwrap());
    assert_eq!(engine.rank(&m).unwrap(), 2);
    assert_eq!(
        engine.add(&m, &m).unwrap().to_rows(),
        vec![vec![2.0, 4.0], vec![6.0, 8.0]]
    );
    assert_eq!(
        engine.multiply(&m, &m).unwrap().to_rows(),
        vec![vec![7.0, 10.0], vec![15.0, 22.0]]
    );
    assert_eq!(
        engine.transpose(&m).unwrap().to_rows(),
        vec![vec![1.0, 3.0], vec![2.0, 4.0]]
    );
    assert_eq!(
        engine.solve(&[[2.0, 1.0], [1.0, 3.0]], &[5.0, 10.0]).unwrap().as_slice(),
        &[1.0, 3.0]
    );
}

#[test]
fn singular_threshold_applies_to_inverse() {
    let m = [[1e-3, 0.0], [0.0, 1e-3]];
    assert!(Engine::default().inverse(&m).is_ok());

    let strict = Engine::new(EngineConfig::new(1e-5, EngineConfig::DEFAULT_PIVOT_EPSILON));
    assert_eq!(strict.config().singular_epsilon, 1e-5);
    assert_eq!(strict.inverse(&m).unwrap_err(), MatrixError::Singular);
}

#[test]
fn pivot_threshold_applies_to_solve_and_rank() {
    let m = [[1.0, 0.0], [0.0, 1e-6]];
    let engine = Engine::default();
    assert_eq!(engine.rank(&m).unwrap(), 2);
    assert!(engine.solve(&m, &[1.0, 0.0]).is_ok());

    let coarse = Engine::new(EngineConfig::new(
        EngineConfig::DEFAULT_SINGULAR_EPSILON,
        1e-3,
    ));
    assert_eq!(coarse.rank(&m).unwrap(), 1);
    assert_eq!(
        coarse.solve(&m, &[1.0, 0.0]).unwrap_err(),
        MatrixError::UnderdeterminedInfiniteSolutions
    );
    assert_eq!(
        coarse.solve(&m, &[1.0, 1.0]).unwrap_err(),
        MatrixError::Inconsistent
    );
}
