//! Memos Preview - caching HTML rendering proxy for a Memos backend.
//!
//! This crate provides a small HTTP server that sits in front of a Memos
//! note-taking backend. It fetches a memo and its attachments from the
//! upstream API, renders the memo's markdown to a full HTML document, and
//! caches the result on disk keyed by the memo's id and update timestamp.
//! Attachments are proxied through to the upstream unchanged.
//!
//! # Architecture
//!
//! - **Upstream**: reqwest client for the memo and attachment endpoints
//! - **Render**: hashtag escaping, attachment link assembly, markdown to
//!   HTML via pulldown-cmark
//! - **Cache**: write-once filesystem cache at `{CACHE_ROOT}/{id}/{updateTime}`
//!
//! # URL Pattern
//!
//! ```text
//! GET /memos/{id}
//! GET /file/attachments/{id}/{filename}
//! ```
//!
//! A cached render artifact is valid forever: a memo edit changes its
//! `updateTime`, which changes the cache key, so stale entries are simply
//! orphaned rather than invalidated.

pub mod cache;
pub mod config;
pub mod error;
pub mod preamble;
pub mod render;
pub mod routes;
pub mod state;
pub mod upstream;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
