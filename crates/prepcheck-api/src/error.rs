//! API error taxonomy and its HTTP mapping.
//!
//! Client-caused problems (missing fields, unknown lookup keys, semantic
//! input errors) map to 400; classifier failures map to 500 with the
//! underlying message passed through. Every error body is `{"error": msg}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prepcheck_core::CoreError;
use prepcheck_model::ModelError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid state")]
    InvalidState,

    #[error("Invalid disaster type")]
    InvalidDisasterType,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Input(#[from] CoreError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidState
            | Self::InvalidDisasterType
            | Self::MissingField(_)
            | Self::Input(_) => StatusCode::BAD_REQUEST,
            Self::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
