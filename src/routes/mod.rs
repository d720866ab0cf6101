//! Route definitions for the proxy.
//!
//! ## Routes
//!
//! - `GET /memos/{id}` - Rendered memo HTML (cached)
//! - `GET /file/attachments/{id}/{filename}` - Attachment passthrough
//! - `GET /health` - Health check (JSON)

mod attachment;
mod health;
mod memo;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete proxy router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/memos/{id}", get(memo::render_memo))
        .route(
            "/file/attachments/{id}/{filename}",
            get(attachment::proxy_attachment),
        )
        .route("/health", get(health::health_check))
        .with_state(state)
}
