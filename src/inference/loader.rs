use std::path::Path;

use anyhow::{bail, Context, Result};

use super::artifact::{KnnArtifact, ScalerArtifact};
use super::predictor::Predictor;

// ---------------------------------------------------------------------------
// Startup artifact loading
// ---------------------------------------------------------------------------

/// Fixed artifact file names, matching the training run that produced them.
pub const MODEL_PATH: &str = "knn_lag_3.json";
pub const SCALER_PATH: &str = "scaler_lag_3.json";

/// Load both artifacts from the working directory. Called once at startup;
/// any failure here is fatal for the session.
pub fn load_default() -> Result<Predictor> {
    load_from(Path::new(MODEL_PATH), Path::new(SCALER_PATH))
}

/// Load a model/scaler pair from explicit paths.
///
/// A missing file is reported by name before any parsing is attempted, so
/// the user sees which artifact to restore.
pub fn load_from(model_path: &Path, scaler_path: &Path) -> Result<Predictor> {
    for path in [model_path, scaler_path] {
        if !path.exists() {
            bail!("artifact file '{}' not found", path.display());
        }
    }

    let scaler = read_artifact::<ScalerArtifact>(scaler_path)?;
    scaler
        .validate()
        .with_context(|| format!("validating '{}'", scaler_path.display()))?;

    let model = read_artifact::<KnnArtifact>(model_path)?;
    model
        .validate()
        .with_context(|| format!("validating '{}'", model_path.display()))?;

    log::info!(
        "loaded scaler '{}' and model '{}' ({} points, k={})",
        scaler_path.display(),
        model_path.display(),
        model.points.len(),
        model.n_neighbors
    );

    Ok(Predictor::new(scaler, model))
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("deserializing '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_named_in_the_error() {
        let err = load_from(
            Path::new("/nonexistent/knn_lag_3.json"),
            Path::new("/nonexistent/scaler_lag_3.json"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("knn_lag_3.json"));
        assert!(err.to_string().contains("not found"));
    }
}
