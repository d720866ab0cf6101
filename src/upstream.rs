//! Client for the upstream memos backend.
//!
//! Two endpoints are consumed: the memo-by-id API and the raw attachment
//! file endpoint. Every call is attempted exactly once; there is no retry
//! policy.

use axum::http::{HeaderMap, StatusCode};
use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;

use crate::error::ServeError;

/// A memo as returned by `GET /api/v1/memos/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    /// Raw markdown content.
    #[serde(default)]
    pub content: String,

    /// Attachments in the backend's order.
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    /// Opaque last-update token. Used only as the cache key; never parsed.
    pub update_time: String,
}

/// An attachment record attached to a memo.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    /// Compound identifier of the form `<collection>/<uid>`.
    pub name: String,

    /// Original filename.
    pub filename: String,

    /// MIME-like type string.
    #[serde(rename = "type")]
    pub r#type: String,
}

impl Attachment {
    /// Whether this attachment renders as an inline image.
    pub fn is_image(&self) -> bool {
        self.r#type.starts_with("image")
    }

    /// The attachment's own identifier: the segment of `name` after the
    /// collection prefix. `None` when the name has no non-empty second
    /// segment.
    pub fn uid(&self) -> Option<&str> {
        self.name.split('/').nth(1).filter(|s| !s.is_empty())
    }
}

/// Raw attachment payload fetched from the backend, passed through to the
/// caller unchanged.
#[derive(Debug)]
pub struct AttachmentPayload {
    /// Upstream status code.
    pub status: StatusCode,
    /// Upstream response headers.
    pub headers: HeaderMap,
    /// Raw body bytes.
    pub body: Bytes,
}

/// Error body shape the backend uses for non-200 responses.
#[derive(Debug, Deserialize)]
struct UpstreamMessage {
    message: String,
}

/// HTTP client for the memos backend.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new client for the given base URL.
    ///
    /// `timeout` bounds every outbound call; `None` leaves calls unbounded.
    pub fn new(base_url: impl Into<String>, timeout: Option<std::time::Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            client: builder.build().expect("failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch a memo by id from `/api/v1/memos/{id}`.
    pub async fn fetch_memo(&self, id: &str) -> Result<Memo, ServeError> {
        let path = format!("/memos/{id}");
        let url = format!("{}/api/v1{path}", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|source| {
            ServeError::Unreachable {
                path: path.clone(),
                source,
            }
        })?;

        if response.status() != StatusCode::OK {
            return Err(self.non_ok(path, response).await);
        }

        response
            .json::<Memo>()
            .await
            .map_err(|source| ServeError::Unreachable { path, source })
    }

    /// Fetch raw attachment bytes from `/file/attachments/{uid}/{filename}`.
    ///
    /// On success the upstream status, headers, and body are returned
    /// unmodified for passthrough.
    pub async fn fetch_attachment(
        &self,
        uid: &str,
        filename: &str,
    ) -> Result<AttachmentPayload, ServeError> {
        let path = format!("/file/attachments/{uid}/{filename}");
        let url = format!("{}{path}", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|source| {
            ServeError::Unreachable {
                path: path.clone(),
                source,
            }
        })?;

        if response.status() != StatusCode::OK {
            return Err(self.non_ok(path, response).await);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|source| ServeError::Unreachable { path, source })?;

        Ok(AttachmentPayload {
            status,
            headers,
            body,
        })
    }

    /// Turn a non-200 backend response into an error carrying the backend's
    /// `message` field, falling back to the HTTP status when the body is
    /// not the expected JSON shape.
    async fn non_ok(&self, path: String, response: reqwest::Response) -> ServeError {
        let status = response.status();
        let message = match response.json::<UpstreamMessage>().await {
            Ok(body) => body.message,
            Err(_) => status.to_string(),
        };
        ServeError::Upstream { path, message }
    }
}
