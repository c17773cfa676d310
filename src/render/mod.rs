//! Markdown-subset renderer for bookmark content
//!
//! Converts a bookmark's text into a self-contained HTML document. The
//! supported subset is small: fenced code blocks, `#`/`##`/`###` headings,
//! single-level `-`/`*` lists, and inline code, bold, italic and links.
//! Everything else is rendered as escaped paragraph text.
//!
//! # Architecture
//!
//! - `escape.rs` - HTML escaping, the only injection boundary
//! - `inline.rs` - Ordered inline substitution stages
//! - `line.rs` - Line splitting and classification
//! - `block.rs` - Block state machine producing the body fragment
//! - `template.rs` - Fixed document shell with embedded CSS
//!
//! Rendering is a pure function of its input and never fails.
//!
//! # Example
//! ```
//! use bookmark_view::render::render_markdown;
//!
//! let html = render_markdown(Some("# Title\n- **one**\n- two"));
//! assert!(html.contains("<h1>Title</h1><ul><li><strong>one</strong></li><li>two</li></ul>"));
//! ```

pub mod block;
pub mod escape;
pub mod inline;
pub mod line;
pub mod template;

pub use block::{BlockRenderer, RenderState};
pub use escape::escape_html;
pub use inline::{format_inline, InlineStage};
pub use line::{classify_line, split_lines, trim_line, BlockKind, HeadingLevel, Line};
pub use template::wrap_document;

use log::debug;

/// Body used when there is nothing to render.
pub const EMPTY_PLACEHOLDER: &str = "<p>(no content)</p>";

/// Render bookmark content into a complete HTML document.
///
/// `None`, empty and whitespace-only content all render the
/// [`EMPTY_PLACEHOLDER`] body.
pub fn render_markdown(markdown: Option<&str>) -> String {
    let body = match markdown {
        Some(text) => render_body(text),
        None => EMPTY_PLACEHOLDER.to_string(),
    };
    wrap_document(&body)
}

/// Render bookmark content into a body fragment without the document shell.
pub fn render_body(markdown: &str) -> String {
    if trim_line(markdown).is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let lines = split_lines(markdown);
    let line_count = lines.len();

    let mut renderer = BlockRenderer::new();
    for line in lines {
        renderer.push_line(line);
    }
    let body = renderer.finish();

    debug!(
        "Rendered {} lines into {} bytes of HTML",
        line_count,
        body.len()
    );
    body
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        render_markdown(Some(text))
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    /// Open/close counts for the multi-line blocks must match.
    fn assert_balanced(html: &str) {
        assert_eq!(count(html, "<pre><code>"), count(html, "</code></pre>"), "{html}");
        assert_eq!(count(html, "<ul>"), count(html, "</ul>"), "{html}");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Documented behavior
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_script_is_escaped() {
        let html = render("<script>alert(1)</script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"));
    }

    #[test]
    fn test_heading() {
        assert!(render("# Title").contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_list() {
        assert!(render("- a\n- b").contains("<ul><li>a</li><li>b</li></ul>"));
    }

    #[test]
    fn test_code_block_without_inline_formatting() {
        let html = render("```\nline1\nline2\n```");
        assert!(html.contains("<pre><code>line1\nline2\n</code></pre>"));

        let html = render("```\n**x** `y`\n```");
        assert!(html.contains("<pre><code>**x** `y`\n</code></pre>"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn test_bold_and_italic() {
        let html = render("**bold** and *em*");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>em</em>"));
    }

    #[test]
    fn test_absent_and_empty_input_use_placeholder() {
        let absent = render_markdown(None);
        let empty = render_markdown(Some(""));
        let blank = render_markdown(Some("  \n\t\n"));

        assert!(absent.contains(EMPTY_PLACEHOLDER));
        assert_eq!(absent, empty);
        assert_eq!(absent, blank);
        assert_eq!(render_body(""), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_unterminated_fence_closed_at_end() {
        let html = render("before\n```\nafter 1\n# after 2");
        assert!(html.contains("<p>before</p><pre><code>after 1\n# after 2\n</code></pre>"));
        assert_balanced(&html);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────

    const SAMPLES: &[&str] = &[
        "",
        "plain",
        "# H\n- a\n- b\n```\ncode\n",
        "- a\n```\n- b",
        "```\n```\n```",
        "***x*** __y_ `z [a](b",
        "* list\n\n\n* again\r\n## h\r\n",
        "<a href='x'>\"q\"</a> & more",
        "```\n- a\n",
        "- a\n- b",
    ];

    #[test]
    fn test_render_is_deterministic() {
        for sample in SAMPLES {
            assert_eq!(render(sample), render(sample), "{sample:?}");
        }
    }

    #[test]
    fn test_block_markup_is_always_balanced() {
        for sample in SAMPLES {
            assert_balanced(&render(sample));
        }
    }

    #[test]
    fn test_no_user_markup_survives() {
        for sample in SAMPLES {
            let body = render_body(sample);
            assert!(!body.contains("<a href='x'>"), "{body}");
            assert!(!body.contains("<script"), "{body}");
        }
    }

    #[test]
    fn test_crlf_document() {
        assert_eq!(
            render_body("# T\r\n- a\r\n- b\r\n"),
            "<h1>T</h1><ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_unicode_space_lines_are_paragraphs() {
        assert_eq!(render_body("\u{a0}# Title"), "<p>\u{a0}# Title</p>");
        assert_eq!(render_body("\u{1}# Title"), "<h1>Title</h1>");
        assert_eq!(render_body("a\n\u{3000}\nb"), "<p>a</p><p>\u{3000}</p><p>b</p>");
        assert_eq!(render_body("\u{3000}"), "<p>\u{3000}</p>");
    }

    #[test]
    fn test_trailing_newlines_do_not_add_breaks() {
        assert_eq!(render_body("text\n\n\n"), "<p>text</p>");
    }

    #[test]
    fn test_mixed_document() {
        let markdown = "\
# Notes
Some *context* with a [link](https://example.com).

- first `item`
- second
```
let x = 1 < 2;
```
## Done";
        assert_eq!(
            render_body(markdown),
            "<h1>Notes</h1>\
             <p>Some <em>context</em> with a <a href=\"https://example.com\">link</a>.</p>\
             <br>\
             <ul><li>first <code>item</code></li><li>second</li></ul>\
             <pre><code>let x = 1 &lt; 2;\n</code></pre>\
             <h2>Done</h2>"
        );
    }

    #[test]
    fn test_concurrent_renders_agree() {
        let expected = render("# Shared\n- a\n```\nx\n```");
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| render_markdown(Some("# Shared\n- a\n```\nx\n```"))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
