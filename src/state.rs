//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::cache::RenderCache;
use crate::config::Config;
use crate::upstream::UpstreamClient;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Client for the upstream memos backend.
    pub upstream: UpstreamClient,

    /// Filesystem render cache.
    pub cache: RenderCache,

    /// Static HTML preamble, loaded once at startup.
    pub preamble: Arc<str>,
}

impl AppState {
    /// Create a new application state from configuration and the loaded
    /// preamble.
    pub fn new(config: Config, preamble: String) -> Self {
        let upstream = UpstreamClient::new(&config.upstream_host, config.upstream_timeout);
        let cache = RenderCache::new(&config.cache_root);

        tracing::info!(
            upstream_host = %config.upstream_host,
            cache_root = %config.cache_root,
            preamble_bytes = preamble.len(),
            "application state initialized"
        );

        Self {
            config: Arc::new(config),
            upstream,
            cache,
            preamble: preamble.into(),
        }
    }
}
