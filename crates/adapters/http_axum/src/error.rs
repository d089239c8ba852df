//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use prereg_domain::error::PreregError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PreregError`] to an HTTP response with appropriate status code.
pub struct ApiError(PreregError);

impl From<PreregError> for ApiError {
    fn from(err: PreregError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PreregError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PreregError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            PreregError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
