//! HTML escaping for raw text runs.
//!
//! This is the only place user text is made safe for HTML. Every other
//! render stage either works on escaped text or emits its own fixed markup.

/// Escape the five HTML-significant characters in `text`.
///
/// `&` is handled in the same pass as the other characters, so an input
/// that already contains entities is escaped again rather than passed
/// through (`&lt;` becomes `&amp;lt;`).
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
