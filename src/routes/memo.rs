//! Memo render route handler.
//!
//! Handles `GET /memos/{id}`: fetch the memo from the backend, serve the
//! cached render if one exists for its current update time, otherwise run
//! the render pipeline and cache the result.

use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::ServeError;
use crate::render;
use crate::state::AppState;

/// Handle a memo render request.
///
/// 1. Fetches the memo from the upstream backend (any failure becomes a
///    bare 404, details go to the log)
/// 2. Checks the render cache under `(id, updateTime)`
/// 3. On miss: escapes edge hashtags, assembles preamble + body +
///    attachment links, renders markdown to HTML, and stores the artifact
pub async fn render_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ServeError> {
    let memo = state.upstream.fetch_memo(&id).await?;

    if let Some(html) = state.cache.lookup(&id, &memo.update_time).await? {
        tracing::debug!(memo_id = %id, "render cache hit");
        return Ok(html_response(html));
    }

    tracing::debug!(memo_id = %id, update_time = %memo.update_time, "render cache miss, generating");

    let escaped = render::escape_edge_hashtags(&memo.content);
    let assembled = render::assemble(&state.preamble, &escaped, &memo.attachments);
    let html = render::render_markdown(&assembled);

    state.cache.store(&id, &memo.update_time, &html).await?;

    Ok(html_response(html))
}

/// Build a 200 response carrying rendered HTML.
fn html_response(html: String) -> Response {
    let headers = [(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    )];
    (StatusCode::OK, headers, html).into_response()
}
