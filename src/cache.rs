//! Write-once filesystem cache for rendered HTML.
//!
//! An artifact lives at `{root}/{memo_id}/{update_time}`. The update time
//! is an opaque token from the backend: editing a memo changes it, which
//! changes the key, so entries are never invalidated in place — old ones
//! are simply orphaned. Nothing here deletes files.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence for unique temp file names within this process.
static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Filesystem-backed render cache.
#[derive(Debug, Clone)]
pub struct RenderCache {
    root: PathBuf,
}

impl RenderCache {
    /// Create a cache rooted at `root`. The directory is created lazily on
    /// first store.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_dir(&self, memo_id: &str) -> PathBuf {
        self.root.join(memo_id)
    }

    /// Look up the rendered HTML for `(memo_id, update_time)`.
    ///
    /// A missing artifact is the normal miss case and returns `Ok(None)`;
    /// any other I/O failure propagates.
    pub async fn lookup(
        &self,
        memo_id: &str,
        update_time: &str,
    ) -> std::io::Result<Option<String>> {
        let path = self.entry_dir(memo_id).join(update_time);
        match tokio::fs::read_to_string(&path).await {
            Ok(html) => Ok(Some(html)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Persist rendered HTML for `(memo_id, update_time)`.
    ///
    /// The artifact is written to a temp sibling and renamed into place, so
    /// a concurrent reader never observes a partial file and a failed write
    /// leaves no truncated artifact behind. Re-storing the same key
    /// replaces the file with identical bytes.
    pub async fn store(
        &self,
        memo_id: &str,
        update_time: &str,
        html: &str,
    ) -> std::io::Result<()> {
        let dir = self.entry_dir(memo_id);
        tokio::fs::create_dir_all(&dir).await?;

        let tmp = dir.join(format!(
            "{update_time}.tmp.{}.{}",
            std::process::id(),
            WRITE_SEQ.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(err) = tokio::fs::write(&tmp, html).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(err);
        }

        tokio::fs::rename(&tmp, dir.join(update_time)).await
    }
}
