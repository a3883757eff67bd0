//! ONNX Runtime implementation of [`PreparednessModel`].
//!
//! The model directory must contain `model.onnx` (the exported classifier),
//! `labels.json` (encoder class list), and `features.json` (training-time
//! column order). All three are loaded read-only at startup.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tracing::info;

use crate::classifier::{Classifier, PreparednessModel, validate_feature_order};
use crate::error::ModelError;
use crate::labels::LabelEncoder;

/// A pre-trained multi-class classifier behind an ONNX Runtime session.
///
/// Inference mutates session scratch state, so the session sits behind a
/// mutex; a single 5-feature row is far below any contention that would
/// justify more machinery.
pub struct OnnxModel {
    session: Mutex<Session>,
    input_name: String,
}

impl std::fmt::Debug for OnnxModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxModel").field("input_name", &self.input_name).finish_non_exhaustive()
    }
}

impl OnnxModel {
    /// Load `model.onnx` from the model directory.
    pub fn load(model_dir: &Path) -> Result<Self, ModelError> {
        let model_path = model_dir.join("model.onnx");
        if !model_path.exists() {
            return Err(ModelError::MissingArtifact(model_path));
        }

        let session = Session::builder()?.commit_from_file(&model_path)?;
        let input_name = session.inputs()[0].name().to_string();

        info!(model = %model_path.display(), input = %input_name, "loaded preparedness classifier");
        Ok(Self { session: Mutex::new(session), input_name })
    }
}

impl PreparednessModel for OnnxModel {
    fn predict(&self, row: &[f32; 5]) -> Result<i64, ModelError> {
        let mut session = self
            .session
            .lock()
            .map_err(|_| ModelError::Invocation("model session lock poisoned".to_string()))?;

        let tensor = Tensor::from_array(([1i64, 5], row.to_vec().into_boxed_slice()))?;
        let outputs = session.run(ort::inputs![self.input_name.as_str() => tensor])?;

        // Tree-ensemble exports emit the label as int64; other exports emit
        // per-class scores to arg-max.
        if let Ok((_, labels)) = outputs[0].try_extract_tensor::<i64>() {
            return labels
                .first()
                .copied()
                .ok_or_else(|| ModelError::Invocation("empty label output".to_string()));
        }

        let (_, scores) = outputs[0].try_extract_tensor::<f32>()?;
        scores
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i as i64)
            .ok_or_else(|| ModelError::Invocation("empty score output".to_string()))
    }
}

/// Load the full classifier stack from one artifact directory.
///
/// Fails fast on any missing artifact or on a feature-order mismatch; a
/// server must not come up with a half-loaded model.
pub fn load_classifier(model_dir: &Path) -> Result<Classifier, ModelError> {
    validate_feature_order(&model_dir.join("features.json"))?;
    let encoder = LabelEncoder::load(&model_dir.join("labels.json"))?;
    let model = OnnxModel::load(model_dir)?;

    info!(classes = encoder.len(), "classifier ready");
    Ok(Classifier::new(Box::new(model), encoder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_model_dir_errors() {
        let dir = std::env::temp_dir().join("prepcheck-no-such-model-dir");
        let err = OnnxModel::load(&dir).unwrap_err();
        assert!(matches!(err, ModelError::MissingArtifact(_)));
    }

    #[test]
    fn load_classifier_requires_feature_list_first() {
        // An empty directory fails on features.json before touching the
        // (absent) model, so startup errors name the first missing artifact.
        let dir = std::env::temp_dir().join(format!("prepcheck-empty-model-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let err = load_classifier(&dir).unwrap_err();
        match err {
            ModelError::MissingArtifact(path) => {
                assert!(path.ends_with("features.json"), "unexpected artifact: {path:?}");
            }
            other => panic!("expected MissingArtifact, got {other:?}"),
        }
    }
}
