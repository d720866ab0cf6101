//! Static HTML preamble loading.
//!
//! The preamble is the concatenation of every `*.html` fragment in the
//! configured directory, sorted by filename and joined with newlines. It
//! is loaded once at startup and shared read-only for the life of the
//! process. A missing directory or an empty one degrades to an empty
//! preamble rather than aborting startup.

use std::path::Path;

/// Load and concatenate the HTML preamble fragments from `dir`.
pub fn load_preamble(dir: impl AsRef<Path>) -> String {
    let dir = dir.as_ref();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::error!(dir = %dir.display(), error = %err, "preamble directory not readable");
            return String::new();
        }
    };

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .collect();
    paths.sort();

    let mut fragments = Vec::with_capacity(paths.len());
    for path in &paths {
        match std::fs::read_to_string(path) {
            Ok(fragment) => fragments.push(fragment),
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to read preamble fragment");
            }
        }
    }

    if fragments.is_empty() {
        tracing::error!(dir = %dir.display(), "no HTML preamble fragments were loaded");
    }

    fragments.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_preamble_concatenates_sorted_by_filename() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("20-scripts.html"), "<script></script>").unwrap();
        std::fs::write(tmp.path().join("10-style.html"), "<style></style>").unwrap();

        assert_eq!(
            load_preamble(tmp.path()),
            "<style></style>\n<script></script>"
        );
    }

    #[test]
    fn load_preamble_ignores_non_html_files() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("style.html"), "<style></style>").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "ignore me").unwrap();

        assert_eq!(load_preamble(tmp.path()), "<style></style>");
    }

    #[test]
    fn load_preamble_missing_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load_preamble(tmp.path().join("nope")), "");
    }

    #[test]
    fn load_preamble_empty_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load_preamble(tmp.path()), "");
    }
}
