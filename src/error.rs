use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;

/// Errors the chat API reports as an `{error, details?}` JSON body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    /// Every delivery attempt failed. `details` holds the last upstream body
    /// or network error, never the API key.
    #[error("خطأ في الاتصال بـ Gemini API")]
    UpstreamFailure { details: String },
    /// Upstream answered 2xx with a body that is not JSON.
    #[error("Failed parsing Gemini response")]
    ParseFailure { body: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        let (status, details) = match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, None),
            AppError::UpstreamFailure { details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, Some(details))
            }
            AppError::ParseFailure { body } => (StatusCode::INTERNAL_SERVER_ERROR, Some(body)),
        };
        (status, Json(ErrorBody { error, details })).into_response()
    }
}
