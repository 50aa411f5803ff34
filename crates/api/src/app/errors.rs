use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use catalog_infra::StoreError;

/// The only failure the API reports: the store could not answer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    /// `500` with the raw error message as a plain-text body.
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
