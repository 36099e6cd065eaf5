//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homehub_domain::error::HomeHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HomeHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HomeHubError);

impl From<HomeHubError> for ApiError {
    fn from(err: HomeHubError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code the wrapped error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            HomeHubError::Validation(_) => StatusCode::BAD_REQUEST,
            HomeHubError::NotFound(_) | HomeHubError::Integrity(_) => StatusCode::NOT_FOUND,
            HomeHubError::Duplicate(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self.0 {
            HomeHubError::Validation(err) => tracing::debug!(error = %err, "rejected payload"),
            HomeHubError::NotFound(err) => tracing::debug!(error = %err, "lookup failed"),
            HomeHubError::Integrity(err) => tracing::warn!(error = %err, "dangling reference"),
            HomeHubError::Duplicate(err) => tracing::warn!(error = %err, "key conflict"),
        }

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
