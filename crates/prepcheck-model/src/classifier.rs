//! The classifier facade and the narrow model capability it wraps.

use std::path::Path;

use prepcheck_core::FeatureVector;
use tracing::debug;

use crate::error::ModelError;
use crate::labels::LabelEncoder;

/// The one capability the external model must provide: a single-row
/// prediction returning a numeric class code.
pub trait PreparednessModel: Send + Sync {
    fn predict(&self, row: &[f32; 5]) -> Result<i64, ModelError>;
}

/// Classifier adapter: model plus label decoding behind one call.
pub struct Classifier {
    model: Box<dyn PreparednessModel>,
    encoder: LabelEncoder,
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier").field("encoder", &self.encoder).finish_non_exhaustive()
    }
}

impl Classifier {
    pub fn new(model: Box<dyn PreparednessModel>, encoder: LabelEncoder) -> Self {
        Self { model, encoder }
    }

    /// Run the model over one feature vector and decode the result.
    pub fn classify(&self, features: &FeatureVector) -> Result<String, ModelError> {
        let row = features.to_row();
        let code = self.model.predict(&row)?;
        let level = self.encoder.decode(code)?;
        debug!(code, level, "classified household");
        Ok(level.to_string())
    }

    pub fn encoder(&self) -> &LabelEncoder {
        &self.encoder
    }
}

/// Read the ordered feature-name list from a `features.json` artifact.
pub fn load_feature_names(path: &Path) -> Result<Vec<String>, ModelError> {
    if !path.exists() {
        return Err(ModelError::MissingArtifact(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Check the artifact's feature order against the order this build derives.
///
/// The model is only valid for the exact column order it was trained with;
/// a mismatch means the artifacts and the binary are from different
/// generations and startup must fail.
pub fn validate_feature_order(path: &Path) -> Result<(), ModelError> {
    let artifact = load_feature_names(path)?;
    let expected: Vec<String> =
        FeatureVector::FEATURE_NAMES.iter().map(|s| (*s).to_string()).collect();
    if artifact != expected {
        return Err(ModelError::FeatureOrderMismatch { artifact, expected });
    }
    Ok(())
}
