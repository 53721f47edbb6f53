use thiserror::Error;

use crate::convert::to_standard_concentration;
use crate::features::{FeatureVector, ScaledFeatureVector, SchemaMismatch, LAG_COUNT};
use crate::verdict::{classify, Verdict};

use super::artifact::{KnnArtifact, ScalerArtifact};

// ---------------------------------------------------------------------------
// Predictor: scaler + KNN model behind one narrow contract
// ---------------------------------------------------------------------------

/// Errors scoped to a single prediction request. The session stays usable
/// after any of these.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("feature schema mismatch: {0}")]
    Schema(#[from] SchemaMismatch),
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Everything the UI displays for one completed prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The assembled input row (pre-scaling), in expected column order.
    pub features: FeatureVector,
    /// The same row after z-score standardization.
    pub scaled: ScaledFeatureVector,
    /// Raw model output, mol/m².
    pub raw_mol_per_m2: f64,
    /// Converted mass concentration, µg/m³.
    pub standardized_ug_m3: f64,
    /// Classification against the WHO guideline.
    pub verdict: Verdict,
}

/// The loaded artifact pair. Built once at startup, read-only afterwards.
#[derive(Debug)]
pub struct Predictor {
    scaler: ScalerArtifact,
    model: KnnArtifact,
}

impl Predictor {
    /// Wrap validated artifacts. Callers come through [`super::loader`],
    /// which validates before constructing.
    pub fn new(scaler: ScalerArtifact, model: KnnArtifact) -> Self {
        Self { scaler, model }
    }

    /// Standardize a feature row: `(x - mean) / scale`, per column.
    /// Order is preserved, so the scaled row carries the same labels.
    pub fn scale(&self, features: &FeatureVector) -> ScaledFeatureVector {
        let mut out = [0.0; LAG_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = (features.0[i] - self.scaler.mean[i]) / self.scaler.scale[i];
        }
        ScaledFeatureVector(out)
    }

    /// Predict the next-day column density (mol/m²) for one scaled row:
    /// unweighted mean of the `k` nearest stored targets by Euclidean
    /// distance.
    pub fn predict(&self, scaled: &ScaledFeatureVector) -> Result<f64, PredictError> {
        let mut ranked: Vec<(f64, f64)> = self
            .model
            .points
            .iter()
            .zip(&self.model.targets)
            .map(|(point, &target)| {
                let dist_sq: f64 = point
                    .iter()
                    .zip(scaled.0)
                    .map(|(&p, x)| (p - x) * (p - x))
                    .sum();
                (dist_sq, target)
            })
            .collect();

        if ranked.iter().any(|(d, t)| !d.is_finite() || !t.is_finite()) {
            return Err(PredictError::Inference(
                "non-finite value while ranking neighbours".to_string(),
            ));
        }

        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        let k = self.model.n_neighbors;
        let sum: f64 = ranked.iter().take(k).map(|(_, t)| t).sum();
        Ok(sum / k as f64)
    }

    /// Run the full request for one feature row: scale, predict, convert to
    /// µg/m³, classify.
    pub fn run(&self, features: FeatureVector) -> Result<Outcome, PredictError> {
        let scaled = self.scale(&features);
        let raw = self.predict(&scaled)?;
        let standardized = to_standard_concentration(raw);
        Ok(Outcome {
            features,
            scaled,
            raw_mol_per_m2: raw,
            standardized_ug_m3: standardized,
            verdict: classify(standardized),
        })
    }
}
