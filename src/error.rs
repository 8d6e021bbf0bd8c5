use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Custom error type for the application
///
/// One variant per failure class of the request pipeline. Only
/// `UnsupportedInputType` is the caller's fault; everything else is a
/// server-side processing failure.
#[derive(Debug)]
pub enum AppError {
    UnsupportedInputType(String),
    Decode(String),
    Extraction(String),
    Model(String),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AppError::UnsupportedInputType(msg) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_INPUT_TYPE", msg)
            }
            AppError::Decode(msg) => {
                error!("Decode error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "DECODE_ERROR", msg)
            }
            AppError::Extraction(msg) => {
                error!("Extraction error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "EXTRACTION_ERROR", msg)
            }
            AppError::Model(msg) => {
                error!("Model error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "MODEL_ERROR", msg)
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(err: base64::DecodeError) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;
