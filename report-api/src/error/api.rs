use axum_core::response::IntoResponse;
use displaydoc::Display;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{SERVER_ERROR_TYPE, invalid_req::InvalidRequestError};

/// Common API errors
#[derive(Debug, Error, Display, strum::AsRefStr)]
pub enum ApiError {
    /// Invalid request: {0}
    InvalidRequest(#[from] InvalidRequestError),
    /// Panic: {0}
    Panic(String),
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorDetails {
    pub message: String,
    pub r#type: Option<String>,
    pub param: Option<String>,
    pub code: Option<String>,
}

impl ErrorResponse {
    pub(crate) fn new(message: String, r#type: &str) -> Self {
        Self {
            error: ErrorDetails {
                message,
                r#type: Some(r#type.to_string()),
                param: None,
                code: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum_core::response::Response {
        match self {
            ApiError::InvalidRequest(error) => error.into_response(),
            ApiError::Panic(details) => {
                tracing::error!(details = %details, "handler panicked");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(ErrorResponse::new(
                        "Internal server error".to_string(),
                        SERVER_ERROR_TYPE,
                    )),
                )
                    .into_response()
            }
        }
    }
}
