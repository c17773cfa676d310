//! Line classification for the block renderer.

/// Marker that opens or closes a fenced code block.
const FENCE: &str = "```";

/// Heading level (1-3; deeper markers are plain paragraphs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
}

impl HeadingLevel {
    /// The HTML tag name for this level.
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

/// Heading markers, longest first so `### ` is never read as `# `.
const HEADING_MARKERS: [(&str, HeadingLevel); 3] = [
    ("### ", HeadingLevel::H3),
    ("## ", HeadingLevel::H2),
    ("# ", HeadingLevel::H1),
];

/// A single source line together with its trimmed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line as written, without its line terminator
    pub raw: &'a str,
    /// The line with surrounding whitespace removed
    pub trimmed: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            trimmed: trim_line(raw),
        }
    }
}

/// Strip leading and trailing characters at or below U+0020.
///
/// Covers the ASCII space and every control character. Unicode spaces such
/// as U+00A0 or U+3000 are content and are kept.
pub fn trim_line(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// What a line means at block level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind<'a> {
    /// A triple-backtick fence line
    FenceMarker,
    /// An ATX heading; `text` is everything after the marker
    Heading { level: HeadingLevel, text: &'a str },
    /// A `- ` or `* ` bullet; the text follows the two-character marker
    ListItem(&'a str),
    /// An empty or whitespace-only line
    Blank,
    /// Anything else; carries the untrimmed line
    Paragraph(&'a str),
}

/// Classify a line.
///
/// The fence check always runs first. Callers inside a code block should
/// only act on [`BlockKind::FenceMarker`] and treat every other kind as
/// literal code.
pub fn classify_line(line: Line<'_>) -> BlockKind<'_> {
    let trimmed = line.trimmed;

    if trimmed.starts_with(FENCE) {
        return BlockKind::FenceMarker;
    }

    for (marker, level) in HEADING_MARKERS {
        if let Some(text) = trimmed.strip_prefix(marker) {
            return BlockKind::Heading { level, text };
        }
    }

    if let Some(text) = list_item_text(trimmed) {
        return BlockKind::ListItem(text);
    }

    if trimmed.is_empty() {
        return BlockKind::Blank;
    }

    BlockKind::Paragraph(line.raw)
}

/// The item text if `trimmed` is `-` or `*`, a space, then at least one character.
fn list_item_text(trimmed: &str) -> Option<&str> {
    let text = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))?;
    (!text.is_empty()).then_some(text)
}

/// Split a document into lines.
///
/// Lines end at `\n`; a `\r` left at the end of a line is dropped, and
/// empty lines at the very end of the document are discarded.
pub fn split_lines(document: &str) -> Vec<Line<'_>> {
    let mut lines: Vec<Line<'_>> = document
        .split('\n')
        .map(|raw| Line::new(raw.strip_suffix('\r').unwrap_or(raw)))
        .collect();

    while lines.last().is_some_and(|line| line.raw.is_empty()) {
        lines.pop();
    }
    lines
}
