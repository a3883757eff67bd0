use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found: {0}")]
    MissingArtifact(std::path::PathBuf),

    #[error("artifact read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feature order mismatch: artifact lists {artifact:?}, this build derives {expected:?}")]
    FeatureOrderMismatch { artifact: Vec<String>, expected: Vec<String> },

    #[error("classifier returned unknown class code {0}")]
    UnknownClass(i64),

    #[cfg(feature = "onnx")]
    #[error("onnx runtime error: {0}")]
    Onnx(#[from] ort::Error),

    #[error("model invocation failed: {0}")]
    Invocation(String),
}
