use crate::features::assemble;
use crate::inference::{Outcome, PredictError, Predictor};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded artifact pair (None when startup loading failed).
    pub predictor: Option<Predictor>,

    /// Fatal startup error; when set, the UI shows it and accepts no input.
    pub fatal: Option<String>,

    /// Lag inputs, mol/m². `lag1` is yesterday, `lag3` three days ago.
    pub lag1: f64,
    pub lag2: f64,
    pub lag3: f64,

    /// Result of the most recent prediction.
    pub outcome: Option<Outcome>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state from the startup loading result. A load failure puts
    /// the session into the dead fatal state rather than crashing.
    pub fn new(load_result: anyhow::Result<Predictor>) -> Self {
        let (predictor, fatal) = match load_result {
            Ok(p) => (Some(p), None),
            Err(e) => (None, Some(format!("{e:#}"))),
        };
        Self {
            predictor,
            fatal,
            // Defaults from the original tool's input widgets.
            lag1: 0.000012,
            lag2: 0.000014,
            lag3: 0.000017,
            outcome: None,
            status_message: None,
        }
    }

    /// Run one prediction from the current inputs. Request-scoped failures
    /// land in `status_message`; the session stays usable.
    pub fn run_prediction(&mut self) {
        let Some(predictor) = &self.predictor else {
            return;
        };
        let result = assemble(self.lag1, self.lag2, self.lag3)
            .map_err(PredictError::from)
            .and_then(|fv| predictor.run(fv));
        match result {
            Ok(outcome) => {
                log::info!(
                    "predicted {:.6} mol/m² → {:.1} µg/m³ ({})",
                    outcome.raw_mol_per_m2,
                    outcome.standardized_ug_m3,
                    outcome.verdict.quality
                );
                self.outcome = Some(outcome);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("prediction failed: {e}");
                self.outcome = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::loader;
    use std::path::Path;

    #[test]
    fn failed_startup_load_disables_prediction() {
        let load = loader::load_from(
            Path::new("/nonexistent/knn_lag_3.json"),
            Path::new("/nonexistent/scaler_lag_3.json"),
        );
        let mut state = AppState::new(load);
        assert!(state.predictor.is_none());
        assert!(state.fatal.is_some());

        state.run_prediction();
        assert!(state.outcome.is_none());
    }
}
