//! API error types and their HTTP status mapping

use hyper::StatusCode;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
///
/// Invalid input is rejected before any call to the generation API;
/// everything that goes wrong talking to it collapses into `Generation`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("generation failed: {0}")]
    Generation(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Generation(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
