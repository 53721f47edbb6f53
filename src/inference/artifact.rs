use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::features::EXPECTED_ORDER;

// ---------------------------------------------------------------------------
// Serialized artifact state (the reimplemented .pkl pair)
// ---------------------------------------------------------------------------

/// Standard-scaler parameters fit during the external training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    /// Column order the scaler was fit on.
    pub feature_names: Vec<String>,
    /// Per-feature mean subtracted by the transform.
    pub mean: Vec<f64>,
    /// Per-feature standard deviation divided by the transform.
    pub scale: Vec<f64>,
}

/// K-nearest-neighbours regressor state: the training points (already in
/// scaled space) and their target values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnnArtifact {
    /// Column order the model was fit on.
    pub feature_names: Vec<String>,
    /// Number of neighbours averaged per prediction.
    pub n_neighbors: usize,
    /// Stored training rows, one per sample, in scaled feature space.
    pub points: Vec<Vec<f64>>,
    /// Target column density (mol/m²) for each stored row.
    pub targets: Vec<f64>,
}

fn check_feature_names(kind: &str, names: &[String]) -> Result<()> {
    if names.len() != EXPECTED_ORDER.len()
        || names.iter().zip(EXPECTED_ORDER).any(|(a, b)| a.as_str() != b)
    {
        bail!(
            "{kind} was fit on columns {names:?}, expected {:?}",
            EXPECTED_ORDER
        );
    }
    Ok(())
}

impl ScalerArtifact {
    /// Validate shape and numeric sanity after deserialization.
    pub fn validate(&self) -> Result<()> {
        check_feature_names("scaler", &self.feature_names)?;
        if self.mean.len() != self.feature_names.len() {
            bail!(
                "scaler has {} means for {} features",
                self.mean.len(),
                self.feature_names.len()
            );
        }
        if self.scale.len() != self.feature_names.len() {
            bail!(
                "scaler has {} scale entries for {} features",
                self.scale.len(),
                self.feature_names.len()
            );
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            bail!("scaler contains a zero or non-finite scale entry");
        }
        Ok(())
    }
}

impl KnnArtifact {
    /// Validate shape consistency after deserialization.
    pub fn validate(&self) -> Result<()> {
        check_feature_names("model", &self.feature_names)?;
        if self.points.is_empty() {
            bail!("model has no stored training points");
        }
        if self.targets.len() != self.points.len() {
            bail!(
                "model has {} targets for {} points",
                self.targets.len(),
                self.points.len()
            );
        }
        if self.n_neighbors == 0 || self.n_neighbors > self.points.len() {
            bail!(
                "n_neighbors = {} is outside 1..={}",
                self.n_neighbors,
                self.points.len()
            );
        }
        if let Some(bad) = self
            .points
            .iter()
            .position(|p| p.len() != self.feature_names.len())
        {
            bail!(
                "training point {bad} has {} values for {} features",
                self.points[bad].len(),
                self.feature_names.len()
            );
        }
        Ok(())
    }
}
