//! End-to-end prediction pipeline tests against artifact files on disk.

use std::path::PathBuf;

use aircast::features::assemble;
use aircast::inference::artifact::{KnnArtifact, ScalerArtifact};
use aircast::inference::loader;
use aircast::state::AppState;
use aircast::verdict::AirQuality;

/// Fresh scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("aircast-test-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn identity_scaler() -> ScalerArtifact {
    ScalerArtifact {
        feature_names: vec!["lag_3".into(), "lag_2".into(), "lag_1".into()],
        mean: vec![0.0; 3],
        scale: vec![1.0; 3],
    }
}

/// One stored point with target 0.00003: every prediction returns it.
fn constant_model() -> KnnArtifact {
    KnnArtifact {
        feature_names: vec!["lag_3".into(), "lag_2".into(), "lag_1".into()],
        n_neighbors: 1,
        points: vec![vec![0.0; 3]],
        targets: vec![0.00003],
    }
}

fn write_artifacts(dir: &PathBuf, scaler: &ScalerArtifact, model: &KnnArtifact) -> (PathBuf, PathBuf) {
    let model_path = dir.join("knn_lag_3.json");
    let scaler_path = dir.join("scaler_lag_3.json");
    std::fs::write(&model_path, serde_json::to_string(model).unwrap()).unwrap();
    std::fs::write(&scaler_path, serde_json::to_string(scaler).unwrap()).unwrap();
    (model_path, scaler_path)
}

#[test]
fn stub_artifacts_produce_the_expected_concentration() {
    let dir = scratch_dir("stub");
    let (model_path, scaler_path) = write_artifacts(&dir, &identity_scaler(), &constant_model());

    let predictor = loader::load_from(&model_path, &scaler_path).expect("artifacts load");
    let features = assemble(0.000012, 0.000014, 0.000017).expect("assembly");
    let outcome = predictor.run(features).expect("prediction");

    let expected = (0.00003 / 100.0) * 46.0055 * 1_000_000.0;
    assert_eq!(outcome.standardized_ug_m3, expected);
    assert!((outcome.standardized_ug_m3 - 13.8165).abs() < 1e-4);
    assert_eq!(outcome.verdict.quality, AirQuality::Good);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_model_file_is_fatal_and_blocks_input() {
    let dir = scratch_dir("missing");
    // Only the scaler exists.
    let scaler_path = dir.join("scaler_lag_3.json");
    std::fs::write(&scaler_path, serde_json::to_string(&identity_scaler()).unwrap()).unwrap();
    let model_path = dir.join("knn_lag_3.json");

    let load = loader::load_from(&model_path, &scaler_path);
    let message = match &load {
        Err(e) => e.to_string(),
        Ok(_) => panic!("loading must fail without the model file"),
    };
    assert!(message.contains("knn_lag_3.json"));

    // The session opens dead: no predictor, and running does nothing.
    let mut state = AppState::new(load);
    assert!(state.fatal.is_some());
    state.run_prediction();
    assert!(state.outcome.is_none());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn corrupt_artifact_fails_with_cause() {
    let dir = scratch_dir("corrupt");
    let model_path = dir.join("knn_lag_3.json");
    let scaler_path = dir.join("scaler_lag_3.json");
    std::fs::write(&model_path, "not json at all").unwrap();
    std::fs::write(&scaler_path, serde_json::to_string(&identity_scaler()).unwrap()).unwrap();

    let err = loader::load_from(&model_path, &scaler_path).unwrap_err();
    assert!(format!("{err:#}").contains("deserializing"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn bad_column_order_in_artifact_is_a_load_failure() {
    let dir = scratch_dir("order");
    let mut scaler = identity_scaler();
    scaler.feature_names = vec!["lag_1".into(), "lag_2".into(), "lag_3".into()];
    let (model_path, scaler_path) = write_artifacts(&dir, &scaler, &constant_model());

    let err = loader::load_from(&model_path, &scaler_path).unwrap_err();
    assert!(format!("{err:#}").contains("expected"));

    std::fs::remove_dir_all(&dir).ok();
}
