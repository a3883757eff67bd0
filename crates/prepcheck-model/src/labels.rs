//! Label encoder: bidirectional mapping between the classifier's numeric
//! class codes and human-readable preparedness levels.
//!
//! The class list ships as `labels.json` next to the model, written by the
//! training side in encoder order. Class `i` in the file decodes to code `i`.

use std::path::Path;

use crate::error::ModelError;

/// Class names in training-time encoder order.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Load the class list from a `labels.json` artifact (a JSON string array).
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::MissingArtifact(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        let classes: Vec<String> = serde_json::from_str(&raw)?;
        Ok(Self { classes })
    }

    /// Decode a class code to its level name.
    pub fn decode(&self, code: i64) -> Result<&str, ModelError> {
        usize::try_from(code)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
            .ok_or(ModelError::UnknownClass(code))
    }

    /// Encode a level name back to its class code.
    pub fn encode(&self, label: &str) -> Option<i64> {
        self.classes.iter().position(|c| c == label).map(|i| i as i64)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
