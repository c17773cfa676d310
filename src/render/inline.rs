//! Inline formatting for a single span of text.
//!
//! The span is escaped first and then passed through a fixed list of
//! substitution stages. Each stage sees the previous stage's output, so a
//! stage may only introduce markup of its own; it never sees raw user text.
//!
//! Markers without a matching closer are left as literal characters.

use super::escape::escape_html;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// ─────────────────────────────────────────────────────────────────────────────
// Patterns
// ─────────────────────────────────────────────────────────────────────────────

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code span pattern is valid"));

static STRONG_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("strong pattern is valid"));

static STRONG_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_]+)__").expect("strong pattern is valid"));

static EM_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("emphasis pattern is valid"));

static EM_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_]+)_").expect("emphasis pattern is valid"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

/// URL schemes that are never written into an `href`.
const UNSAFE_SCHEMES: [&str; 4] = ["javascript:", "vbscript:", "file:", "data:"];

/// `data:` prefixes that are allowed through despite the scheme rule.
const SAFE_DATA_PREFIXES: [&str; 4] = [
    "data:image/png",
    "data:image/gif",
    "data:image/jpeg",
    "data:image/webp",
];

// ─────────────────────────────────────────────────────────────────────────────
// Pipeline
// ─────────────────────────────────────────────────────────────────────────────

/// One substitution stage of the inline pipeline.
///
/// Every stage expects HTML-escaped input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStage {
    /// `` `code` `` to `<code>`
    CodeSpan,
    /// `**text**` and `__text__` to `<strong>`
    Bold,
    /// `*text*` and `_text_` to `<em>`, skipping markers next to a twin
    Italic,
    /// `[label](url)` to `<a href="url">`
    Link,
}

impl InlineStage {
    /// The stages in the order they run.
    pub const PIPELINE: [InlineStage; 4] = [
        InlineStage::CodeSpan,
        InlineStage::Bold,
        InlineStage::Italic,
        InlineStage::Link,
    ];

    /// Apply this stage to already-escaped text.
    pub fn apply(self, text: &str) -> String {
        match self {
            InlineStage::CodeSpan => CODE_SPAN.replace_all(text, "<code>${1}</code>").into_owned(),
            InlineStage::Bold => {
                let text = STRONG_STAR.replace_all(text, "<strong>${1}</strong>");
                STRONG_UNDERSCORE
                    .replace_all(&text, "<strong>${1}</strong>")
                    .into_owned()
            }
            InlineStage::Italic => {
                let text = replace_isolated(text, &EM_STAR, '*');
                replace_isolated(&text, &EM_UNDERSCORE, '_')
            }
            InlineStage::Link => LINK
                .replace_all(text, |caps: &Captures<'_>| {
                    let href = if is_safe_url(&caps[2]) { &caps[2] } else { "" };
                    format!("<a href=\"{}\">{}</a>", href, &caps[1])
                })
                .into_owned(),
        }
    }
}

/// Escape `raw` and apply every inline stage in order.
///
/// Must not be used for code block content, which is only escaped.
pub fn format_inline(raw: &str) -> String {
    InlineStage::PIPELINE
        .iter()
        .fold(escape_html(raw), |text, stage| stage.apply(&text))
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Wrap matches of `pattern` in `<em>`, except where the match is directly
/// preceded or followed by `marker`.
///
/// A rejected match does not consume its text: scanning resumes one marker
/// past the rejected opening, so a later marker in the same run can still
/// open a match.
fn replace_isolated(text: &str, pattern: &Regex, marker: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search_from = 0;

    while let Some(caps) = pattern.captures_at(text, search_from) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let before = text[..whole.start()].chars().next_back();
        let after = text[whole.end()..].chars().next();
        if before == Some(marker) || after == Some(marker) {
            search_from = whole.start() + marker.len_utf8();
            continue;
        }

        out.push_str(&text[copied..whole.start()]);
        out.push_str("<em>");
        out.push_str(inner.as_str());
        out.push_str("</em>");
        copied = whole.end();
        search_from = whole.end();
    }

    out.push_str(&text[copied..]);
    out
}

/// Whether `url` may be written into an `href` attribute.
fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect();

    if SAFE_DATA_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
    {
        return true;
    }
    !UNSAFE_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
