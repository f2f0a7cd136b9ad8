use actix_web::{ResponseError, http::StatusCode};
use thiserror::Error;

/// Failures on the relay path. Every variant surfaces to the browser as a
/// 500 whose plain-text body is the display string; the upstream's own
/// status code is never forwarded.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("expected a multipart/form-data request")]
    NotMultipart,
    #[error("failed to reach the inference service: {0}")]
    Request(#[from] reqwest::Error),
    #[error("inference service answered with status {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("inference service returned a malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
