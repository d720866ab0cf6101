//! Error types for the proxy.
//!
//! All upstream failures collapse to a bare 404 for the caller; the
//! distinction between "backend said no" and "backend unreachable" lives
//! only in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Proxy error type.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// The backend answered with a non-200 status.
    #[error("upstream error ({path}): {message}")]
    Upstream {
        /// Request path, for log correlation.
        path: String,
        /// The backend's reported message.
        message: String,
    },

    /// The backend could not be reached or its response could not be read.
    #[error("upstream unreachable ({path}): {source}")]
    Unreachable {
        /// Request path, for log correlation.
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Render cache read/write failure.
    #[error("cache I/O error: {0}")]
    CacheIo(#[from] std::io::Error),
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Upstream { path, message } => {
                tracing::error!(path = %path, message = %message, "upstream request failed");
                StatusCode::NOT_FOUND
            }
            Self::Unreachable { path, source } => {
                tracing::error!(path = %path, error = %source, "upstream unreachable");
                StatusCode::NOT_FOUND
            }
            Self::CacheIo(err) => {
                tracing::error!(error = %err, "render cache I/O failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // No diagnostic detail reaches the caller.
        (status, "").into_response()
    }
}
