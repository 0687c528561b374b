//! Handler-level error rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use extraction::FetchError;

/// The outbound document fetch could not complete.
///
/// This is the only failure a handler surfaces directly; everything
/// else travels inside the response envelope.
#[derive(Debug)]
pub struct ApiError(pub FetchError);

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "outbound fetch failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}
