use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use papyrus_core::error::ExtractError;

use crate::dto::ErrorResponse;

/// Wrapper so we can implement `IntoResponse` for `ExtractError`.
pub struct ApiError(pub ExtractError);

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ExtractError::Url(_) => StatusCode::BAD_REQUEST,
            ExtractError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            ExtractError::Processing(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        tracing::error!(kind = self.0.kind(), error = %self.0, "Request failed");

        let body = ErrorResponse {
            error: self.0.kind().to_string(),
            message: self.0.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
