//! Content assembly: preamble injection and attachment link generation.

use crate::upstream::Attachment;

/// Build the local proxy path for an attachment.
pub fn proxy_path(uid: &str, filename: &str) -> String {
    format!("/file/attachments/{uid}/{filename}")
}

/// Assemble the full markdown source for a memo.
///
/// The preamble comes first, then the (already escaped) memo body, then
/// one block per attachment with images sorted ahead of other files.
/// Attachment order within each group is preserved.
///
/// An attachment whose `name` lacks its uid segment gets no link; the
/// render continues without it.
pub fn assemble(preamble: &str, body: &str, attachments: &[Attachment]) -> String {
    let mut content = format!("{preamble}\n\n{body}");

    let mut sorted: Vec<&Attachment> = attachments.iter().collect();
    sorted.sort_by_key(|a| !a.is_image());

    for attachment in sorted {
        let Some(uid) = attachment.uid() else {
            tracing::warn!(
                name = %attachment.name,
                filename = %attachment.filename,
                "attachment name has no uid segment, skipping link"
            );
            continue;
        };

        let path = proxy_path(uid, &attachment.filename);
        let filename = &attachment.filename;

        if attachment.is_image() {
            content.push_str(&format!(
                "\n\n<a href=\"{path}\"><img src=\"{path}\" alt=\"{filename}\" width=\"500\"/></a>"
            ));
        } else {
            content.push_str(&format!("\n\n[{filename}]({path})"));
        }
    }

    content
}
