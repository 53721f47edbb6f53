/// Inference layer: artifact types, loading, and the prediction pipeline.
///
/// Architecture:
/// ```text
///  scaler_lag_3.json   knn_lag_3.json
///         │                  │
///         ▼                  ▼
///    ┌──────────┐      ┌──────────┐
///    │  loader   │ ───▶ │ Predictor │  scaler + KNN model, loaded once
///    └──────────┘      └──────────┘
///                            │
///          FeatureVector ───▶│  scale → predict → convert → classify
///                            ▼
///                        Outcome (µg/m³, mol/m², verdict)
/// ```

pub mod artifact;
pub mod loader;
pub mod predictor;

pub use predictor::{Outcome, PredictError, Predictor};
