use axum_core::response::IntoResponse;
use displaydoc::Display;
use http::StatusCode;
use thiserror::Error;
use tracing::debug;

use super::{INVALID_REQUEST_ERROR_TYPE, api::ErrorResponse};

/// User errors
#[derive(Debug, Error, Display, strum::AsRefStr)]
pub enum InvalidRequestError {
    /// Resource not found: {0}
    NotFound(String),
    /// Invalid request body: {0}
    InvalidRequestBody(#[from] serde_json::Error),
    /// Invalid query string: {0}
    InvalidQuery(String),
    /// Invalid multipart body: {0}
    InvalidMultipart(String),
    /// Multipart body has no `file` field
    MissingFile,
    /// Uploaded file is empty
    EmptyFile,
    /// Uploaded file is {size} bytes, the limit is {limit}
    FileTooLarge { size: usize, limit: usize },
}

impl IntoResponse for InvalidRequestError {
    fn into_response(self) -> axum_core::response::Response {
        debug!(error = %self, "Invalid request");
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidRequestBody(_)
            | Self::InvalidQuery(_)
            | Self::InvalidMultipart(_)
            | Self::MissingFile
            | Self::EmptyFile
            | Self::FileTooLarge { .. } => StatusCode::BAD_REQUEST,
        };
        (
            status,
            axum::Json(ErrorResponse::new(
                self.to_string(),
                INVALID_REQUEST_ERROR_TYPE,
            )),
        )
            .into_response()
    }
}
