//! Application configuration loaded from environment variables.

use std::time::Duration;

use anyhow::Context;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Base URL of the upstream memos backend.
    pub upstream_host: String,

    /// Timeout for outbound calls to the backend. `None` means no timeout.
    pub upstream_timeout: Option<Duration>,

    /// Filesystem root for rendered HTML artifacts.
    pub cache_root: String,

    /// Directory containing the HTML preamble fragments.
    pub html_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults)
    ///
    /// Optional:
    /// - `BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `UPSTREAM_HOST`: Backend base URL (default: "http://memos:5230")
    /// - `UPSTREAM_TIMEOUT_SECS`: Outbound call timeout in seconds (default: none)
    /// - `CACHE_ROOT`: Render cache directory (default: "/cache")
    /// - `HTML_DIR`: Preamble fragment directory (default: "html")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let upstream_host = std::env::var("UPSTREAM_HOST")
            .unwrap_or_else(|_| "http://memos:5230".to_string())
            .trim_end_matches('/')
            .to_string();

        let upstream_timeout = match std::env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(secs) => {
                let secs: u64 = secs
                    .parse()
                    .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let cache_root = std::env::var("CACHE_ROOT").unwrap_or_else(|_| "/cache".to_string());

        let html_dir = std::env::var("HTML_DIR").unwrap_or_else(|_| "html".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            upstream_host = %upstream_host,
            upstream_timeout_secs = upstream_timeout.map(|t| t.as_secs()),
            cache_root = %cache_root,
            html_dir = %html_dir,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            upstream_host,
            upstream_timeout,
            cache_root,
            html_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "BIND_ADDR",
        "UPSTREAM_HOST",
        "UPSTREAM_TIMEOUT_SECS",
        "CACHE_ROOT",
        "HTML_DIR",
    ];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.upstream_host, "http://memos:5230");
            assert_eq!(config.upstream_timeout, None);
            assert_eq!(config.cache_root, "/cache");
            assert_eq!(config.html_dir, "html");
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("BIND_ADDR", "127.0.0.1:9090"),
                ("UPSTREAM_HOST", "http://localhost:5230"),
                ("UPSTREAM_TIMEOUT_SECS", "30"),
                ("CACHE_ROOT", "/tmp/render-cache"),
                ("HTML_DIR", "fragments"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.upstream_host, "http://localhost:5230");
                assert_eq!(config.upstream_timeout, Some(Duration::from_secs(30)));
                assert_eq!(config.cache_root, "/tmp/render-cache");
                assert_eq!(config.html_dir, "fragments");
            },
        );
    }

    #[test]
    fn config_upstream_host_trailing_slash_stripped() {
        with_env_vars(&[("UPSTREAM_HOST", "http://memos:5230/")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.upstream_host, "http://memos:5230");
        });
    }

    #[test]
    fn config_invalid_timeout_rejected() {
        with_env_vars(&[("UPSTREAM_TIMEOUT_SECS", "soon")], || {
            assert!(Config::from_env().is_err());
        });
    }
}
