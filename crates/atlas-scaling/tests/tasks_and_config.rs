//! Integration tests for task helpers and scaler configuration.

use atlas_scaling::{
    flip_source_tasks, DataKind, Scaler, ScalerConfig, ScalingError, ScalingType, Task,
};
use ndarray::array;

// ---------------------------------------------------------------------------
// flip_source_tasks
// ---------------------------------------------------------------------------

#[test]
fn flip_negates_values_and_keeps_params() {
    let tasks = vec![
        Task::new(array![[1.0, 2.0], [3.0, 4.0]], array![[0.5], [-2.0]]).unwrap(),
        Task::new(array![[5.0, 6.0]], array![[7.0]]).unwrap(),
    ];

    let flipped = flip_source_tasks(&tasks);
    assert_eq!(flipped.len(), tasks.len());
    for (f, t) in flipped.iter().zip(tasks.iter()) {
        assert_eq!(f.params, t.params);
        assert_eq!(f.values, t.values.mapv(|v| -v));
    }
}

#[test]
fn flip_does_not_mutate_input() {
    let tasks = vec![Task::new(array![[1.0]], array![[3.0]]).unwrap()];
    let _ = flip_source_tasks(&tasks);
    assert_eq!(tasks[0].values, array![[3.0]]);
}

#[test]
fn flip_twice_is_identity() {
    let tasks = vec![Task::new(array![[1.0, 0.0]], array![[3.0, -4.0]]).unwrap()];
    assert_eq!(flip_source_tasks(&flip_source_tasks(&tasks)), tasks);
}

#[test]
fn flip_empty_collection() {
    assert!(flip_source_tasks(&[]).is_empty());
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

#[test]
fn task_new_requires_aligned_rows() {
    let err = Task::new(array![[1.0], [2.0]], array![[1.0]]).unwrap_err();
    assert!(matches!(
        err,
        ScalingError::RowMismatch {
            params_rows: 2,
            values_rows: 1
        }
    ));
}

#[test]
fn task_field_selects_by_kind() {
    let task = Task::new(array![[1.0, 2.0]], array![[9.0]]).unwrap();
    assert_eq!(task.n_samples(), 1);
    assert_eq!(task.field(DataKind::Params).ncols(), 2);
    assert_eq!(task.field(DataKind::Values)[[0, 0]], 9.0);
}

// ---------------------------------------------------------------------------
// ScalingType / ScalerConfig
// ---------------------------------------------------------------------------

#[test]
fn scaling_type_from_str_known() {
    let t: ScalingType = "standardization".parse().unwrap();
    assert_eq!(t, ScalingType::Standardization);
    let t: ScalingType = "IDENTITY".parse().unwrap();
    assert_eq!(t, ScalingType::Identity);
}

#[test]
fn scaling_type_from_str_unknown_errors() {
    let result: Result<ScalingType, _> = "robust".parse();
    assert!(matches!(
        result,
        Err(ScalingError::UnsupportedScalingType(_))
    ));
}

#[test]
fn scaler_config_default_values() {
    let cfg = ScalerConfig::default();
    assert_eq!(cfg.param_type, ScalingType::Standardization);
    assert_eq!(cfg.value_type, ScalingType::Standardization);
}

#[test]
fn scaler_config_from_json() {
    let cfg =
        ScalerConfig::from_json(r#"{"param_type": "normalization", "value_type": "identity"}"#)
            .unwrap();
    assert_eq!(cfg.param_type, ScalingType::Normalization);
    assert_eq!(cfg.value_type, ScalingType::Identity);

    let scaler = Scaler::from_config(&cfg);
    assert_eq!(scaler.param_type(), ScalingType::Normalization);
    assert_eq!(scaler.value_type(), ScalingType::Identity);
}

#[test]
fn scaler_config_accepts_any_case_like_scaler_new() {
    let cfg =
        ScalerConfig::from_json(r#"{"param_type": "Normalization", "value_type": "IDENTITY"}"#)
            .unwrap();
    assert_eq!(cfg.param_type, ScalingType::Normalization);
    assert_eq!(cfg.value_type, ScalingType::Identity);
    assert_eq!(
        Scaler::from_config(&cfg),
        Scaler::new("Normalization", "IDENTITY").unwrap()
    );
}

#[test]
fn scaler_config_missing_field_uses_default() {
    let cfg = ScalerConfig::from_json(r#"{"value_type": "normalization"}"#).unwrap();
    assert_eq!(cfg.param_type, ScalingType::Standardization);
    assert_eq!(cfg.value_type, ScalingType::Normalization);
}

#[test]
fn scaler_config_rejects_unknown_mode() {
    let err = ScalerConfig::from_json(r#"{"param_type": "minmax"}"#).unwrap_err();
    match err {
        ScalingError::Serialization(msg) => assert!(msg.contains("minmax")),
        other => panic!("expected Serialization error, got {:?}", other),
    }
}

#[test]
fn scaler_config_serializes_to_json() {
    let cfg = ScalerConfig::new(ScalingType::Identity, ScalingType::Normalization);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"param_type\":\"identity\""));
    assert!(json.contains("\"value_type\":\"normalization\""));
}
