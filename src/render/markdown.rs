//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Render assembled markdown to HTML.
///
/// Enabled beyond core CommonMark: tables, task lists, strikethrough,
/// heading attributes, and math passthrough. Fenced code blocks are core
/// syntax; a ` ```mermaid ` block comes out as a `language-mermaid` code
/// block for the preamble's script to pick up.
///
/// Rendering is a pure function: the same input always produces the same
/// HTML.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options.insert(Options::ENABLE_MATH);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_markdown_empty() {
        assert!(render_markdown("").is_empty());
    }

    #[test]
    fn render_markdown_heading() {
        let result = render_markdown("# Hello");
        assert!(result.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn render_markdown_escaped_hashtag_stays_literal() {
        let result = render_markdown(r"\#tag");
        assert!(result.contains("<p>#tag</p>"));
    }

    #[test]
    fn render_markdown_table() {
        let result = render_markdown("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(result.contains("<table>"));
        assert!(result.contains("<th>"));
        assert!(result.contains("<td>"));
    }

    #[test]
    fn render_markdown_task_list() {
        let result = render_markdown("- [x] done\n- [ ] open");
        assert!(result.contains("type=\"checkbox\""));
    }

    #[test]
    fn render_markdown_strikethrough() {
        let result = render_markdown("~~deleted~~");
        assert!(result.contains("<del>deleted</del>"));
    }

    #[test]
    fn render_markdown_fenced_code_block() {
        let result = render_markdown("```rust\nfn main() {}\n```");
        assert!(result.contains("<pre>"));
        assert!(result.contains("fn main() {}"));
    }

    #[test]
    fn render_markdown_mermaid_block_keeps_language() {
        let result = render_markdown("```mermaid\ngraph TD;\n```");
        assert!(result.contains("language-mermaid"));
    }

    #[test]
    fn render_markdown_inline_image_html_passed_through() {
        // Attachment anchors are injected as raw HTML and must survive.
        let result = render_markdown("<a href=\"/x\"><img src=\"/x\" alt=\"a\" width=\"500\"/></a>");
        assert!(result.contains("<img src=\"/x\""));
    }

    #[test]
    fn render_markdown_deterministic() {
        let input = "# Title\n\nsome *text* with `code`";
        assert_eq!(render_markdown(input), render_markdown(input));
    }
}
