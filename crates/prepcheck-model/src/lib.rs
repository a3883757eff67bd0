//! Classifier adapter: the only place the pre-trained preparedness model is
//! touched. Everything else in the workspace talks to the
//! [`PreparednessModel`] trait and the [`LabelEncoder`], so tests substitute
//! deterministic stubs.

mod classifier;
mod error;
mod labels;

#[cfg(feature = "onnx")]
mod onnx;

pub use classifier::{Classifier, PreparednessModel, load_feature_names, validate_feature_order};
pub use error::ModelError;
pub use labels::LabelEncoder;

#[cfg(feature = "onnx")]
pub use onnx::{OnnxModel, load_classifier};
