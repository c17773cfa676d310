//! Block-level rendering.
//!
//! [`BlockRenderer`] consumes lines in source order and appends one HTML
//! fragment per line to its output buffer. It tracks a single
//! [`RenderState`], so a document can never be inside a code block and a
//! list at the same time.
//!
//! # Example
//! ```
//! use bookmark_view::render::block::BlockRenderer;
//! use bookmark_view::render::line::split_lines;
//!
//! let mut renderer = BlockRenderer::new();
//! for line in split_lines("- a\n- b") {
//!     renderer.push_line(line);
//! }
//! assert_eq!(renderer.finish(), "<ul><li>a</li><li>b</li></ul>");
//! ```

use super::escape::escape_html;
use super::inline::format_inline;
use super::line::{classify_line, BlockKind, HeadingLevel, Line};

/// Where the renderer is between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    /// Outside any multi-line block
    #[default]
    Normal,
    /// Between an opening fence and its closing fence
    InCodeBlock,
    /// Inside an open `<ul>`
    InList,
}

/// Line-by-line block renderer for one document.
#[derive(Debug, Default)]
pub struct BlockRenderer {
    state: RenderState,
    html: String,
}

impl BlockRenderer {
    /// Create a renderer in the [`RenderState::Normal`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Render one line.
    pub fn push_line(&mut self, line: Line<'_>) {
        let kind = classify_line(line);

        if self.state == RenderState::InCodeBlock {
            if kind == BlockKind::FenceMarker {
                self.html.push_str("</code></pre>");
                self.state = RenderState::Normal;
            } else {
                self.html.push_str(&escape_html(line.raw));
                self.html.push('\n');
            }
            return;
        }

        if !matches!(kind, BlockKind::ListItem(_)) {
            self.close_list();
        }

        match kind {
            BlockKind::FenceMarker => {
                self.html.push_str("<pre><code>");
                self.state = RenderState::InCodeBlock;
            }
            BlockKind::Heading { level, text } => self.push_heading(level, text),
            BlockKind::ListItem(text) => {
                if self.state != RenderState::InList {
                    self.html.push_str("<ul>");
                    self.state = RenderState::InList;
                }
                self.push_element("li", text);
            }
            BlockKind::Blank => self.html.push_str("<br>"),
            BlockKind::Paragraph(text) => self.push_element("p", text),
        }
    }

    /// Close whatever block is still open and return the body HTML.
    pub fn finish(mut self) -> String {
        match self.state {
            RenderState::InCodeBlock => self.html.push_str("</code></pre>"),
            RenderState::InList => self.html.push_str("</ul>"),
            RenderState::Normal => {}
        }
        self.html
    }

    fn close_list(&mut self) {
        if self.state == RenderState::InList {
            self.html.push_str("</ul>");
            self.state = RenderState::Normal;
        }
    }

    fn push_heading(&mut self, level: HeadingLevel, text: &str) {
        self.push_element(level.tag(), text);
    }

    fn push_element(&mut self, tag: &str, text: &str) {
        self.html.push('<');
        self.html.push_str(tag);
        self.html.push('>');
        self.html.push_str(&format_inline(text));
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push('>');
    }
}
