//! Attachment proxy route handler.
//!
//! Handles `GET /file/attachments/{id}/{filename}` by forwarding the
//! upstream response unchanged. Attachments are never cached.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::Response;

use crate::error::ServeError;
use crate::state::AppState;

/// Proxy an attachment fetch to the upstream backend.
///
/// Status, headers, and body pass through as-is. Transfer-encoding is
/// dropped since the body is buffered and re-framed here.
pub async fn proxy_attachment(
    State(state): State<AppState>,
    Path((id, filename)): Path<(String, String)>,
) -> Result<Response, ServeError> {
    let payload = state.upstream.fetch_attachment(&id, &filename).await?;

    let mut response = Response::new(Body::from(payload.body));
    *response.status_mut() = payload.status;

    let headers = response.headers_mut();
    for (name, value) in payload.headers.iter() {
        if name == header::TRANSFER_ENCODING {
            continue;
        }
        // append, not insert: repeated headers keep all their values
        headers.append(name, value.clone());
    }

    Ok(response)
}
