use thiserror::Error;

// ---------------------------------------------------------------------------
// Feature assembly: three lag inputs → ordered feature vector
// ---------------------------------------------------------------------------

/// Number of daily lags the trained artifacts were fit on.
pub const LAG_COUNT: usize = 3;

/// Column order the trained model expects: oldest lag first. This is a
/// contract with the external training run, not a naming convention to tidy.
pub const EXPECTED_ORDER: [&str; LAG_COUNT] = ["lag_3", "lag_2", "lag_1"];

/// Build the feature column names for a given lag count: `lag_1 … lag_N`.
pub fn feature_names(lag_count: usize) -> Vec<String> {
    (1..=lag_count).map(|i| format!("lag_{i}")).collect()
}

/// The assembled feature columns don't match [`EXPECTED_ORDER`].
#[derive(Debug, Error, PartialEq)]
#[error("feature column {missing:?} not found among {available:?}")]
pub struct SchemaMismatch {
    pub missing: String,
    pub available: Vec<String>,
}

/// An ordered feature row in [`EXPECTED_ORDER`], ready for scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; LAG_COUNT]);

/// The same row after per-feature standardization. A distinct type so the
/// model can require scaled input at compile time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledFeatureVector(pub [f64; LAG_COUNT]);

impl FeatureVector {
    /// Column labels, matching [`EXPECTED_ORDER`] position for position.
    pub fn names() -> [&'static str; LAG_COUNT] {
        EXPECTED_ORDER
    }
}

/// Assemble the ordered feature vector from the three lag observations
/// (`lag1` = yesterday, `lag3` = three days ago).
///
/// The inputs are first labelled with [`feature_names`], then reordered to
/// [`EXPECTED_ORDER`]. A mismatch between the two name sets means the lag
/// count changed without updating the ordering contract.
pub fn assemble(lag1: f64, lag2: f64, lag3: f64) -> Result<FeatureVector, SchemaMismatch> {
    let names = feature_names(LAG_COUNT);
    let labelled: Vec<(String, f64)> = names
        .into_iter()
        .zip([lag1, lag2, lag3])
        .collect();

    let mut ordered = [0.0; LAG_COUNT];
    for (slot, expected) in ordered.iter_mut().zip(EXPECTED_ORDER) {
        let value = labelled
            .iter()
            .find(|(name, _)| name == expected)
            .map(|(_, v)| *v);
        match value {
            Some(v) => *slot = v,
            None => {
                return Err(SchemaMismatch {
                    missing: expected.to_string(),
                    available: labelled.into_iter().map(|(n, _)| n).collect(),
                })
            }
        }
    }
    Ok(FeatureVector(ordered))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_lag_count() {
        assert_eq!(feature_names(3), vec!["lag_1", "lag_2", "lag_3"]);
        assert_eq!(feature_names(1), vec!["lag_1"]);
        assert!(feature_names(0).is_empty());
    }

    #[test]
    fn assembles_oldest_first() {
        let fv = assemble(0.000012, 0.000014, 0.000017).unwrap();
        assert_eq!(fv.0, [0.000017, 0.000014, 0.000012]);
    }

    #[test]
    fn expected_order_covers_every_generated_name() {
        let mut generated = feature_names(LAG_COUNT);
        let mut expected: Vec<String> = EXPECTED_ORDER.iter().map(|s| s.to_string()).collect();
        generated.sort();
        expected.sort();
        assert_eq!(generated, expected);
    }
}
