// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::services::{completion::CompletionError, speech::SpeechError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),
    #[error("speech synthesis failed: {0}")]
    Speech(#[from] SpeechError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Completion(_) | AppError::Speech(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message returned to the caller. Upstream bodies stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Completion(CompletionError::Api { status, .. }) => {
                format!("completion service request failed (upstream status {status})")
            }
            AppError::Completion(_) => "completion service request failed".to_string(),
            AppError::Speech(SpeechError::Api { status, .. }) => {
                format!("speech synthesis request failed (upstream status {status})")
            }
            AppError::Speech(_) => "speech synthesis request failed".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
