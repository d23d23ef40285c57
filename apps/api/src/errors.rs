use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// The body is always `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file uploaded")]
    MissingFile,

    /// Carries the status axum assigns: 413 past the body limit, 400 for a
    /// malformed stream.
    #[error("Failed to read upload: {detail}")]
    Multipart { status: StatusCode, detail: String },

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("AI processing failed: {0}")]
    Inference(#[from] LlmError),
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Multipart {
            status: e.status(),
            detail: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingFile => StatusCode::BAD_REQUEST,
            AppError::Multipart { status, .. } => *status,
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Inference(e) => {
                tracing::error!("AI error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MissingFile.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Multipart {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                detail: "length limit exceeded".to_string(),
            }
            .into_response()
            .status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::Extraction(ExtractError::NoText).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Inference(LlmError::NoModelsAvailable)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_carry_stage_prefix() {
        assert_eq!(AppError::MissingFile.to_string(), "No file uploaded");
        assert_eq!(
            AppError::Extraction(ExtractError::EmptyFile).to_string(),
            "Extraction failed: file is empty"
        );
        assert_eq!(
            AppError::Multipart {
                status: StatusCode::BAD_REQUEST,
                detail: "incomplete stream".to_string(),
            }
            .to_string(),
            "Failed to read upload: incomplete stream"
        );
        assert_eq!(
            AppError::Inference(LlmError::EmptyContent).to_string(),
            "AI processing failed: LLM returned empty content"
        );
    }
}
