//! Hashtag escaping for the first and last content lines.
//!
//! A memo often starts or ends with a line of `#tags`. Left alone, a
//! leading `#tag` renders as a heading, so those runs get a markdown
//! backslash escape. Interior lines are left untouched.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a maximal non-whitespace run starting with `#`.
static HASHTAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\S+").expect("hashtag regex should compile"));

/// Escape hashtag runs on the first and last line of `content`.
///
/// A single-line text is both first and last line and is escaped once.
/// Empty content is returned unchanged.
pub fn escape_edge_hashtags(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let last = lines.len() - 1;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || i == last {
                HASHTAG_REGEX.replace_all(line, r"\$0").into_owned()
            } else {
                (*line).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
