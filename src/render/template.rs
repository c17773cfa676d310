//! Document shell for rendered bookmark content.
//!
//! The shell is a complete HTML document with an inlined stylesheet and no
//! external references, so it can be handed to an offline viewer as-is.

/// Name written into the `generator` meta tag.
const GENERATOR: &str = "bookmark-view";

/// Stylesheet embedded in every document.
const DOCUMENT_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Helvetica Neue', Arial, 'Noto Sans', sans-serif;
    font-size: 16px;
    line-height: 1.6;
    padding: 20px;
    color: #24292e;
    background-color: #ffffff;
    max-width: 100%;
}

/* Code */
pre {
    background-color: #f6f8fa;
    border: 1px solid #e1e4e8;
    border-radius: 6px;
    padding: 16px;
    overflow-x: auto;
    margin: 16px 0;
    font-size: 85%;
    line-height: 1.45;
}

code {
    background-color: rgba(27, 31, 35, 0.05);
    padding: 0.2em 0.4em;
    border-radius: 3px;
    font-family: 'SFMono-Regular', 'JetBrains Mono', 'Consolas', 'Liberation Mono', 'Menlo', monospace;
    font-size: 85%;
}

pre code {
    background-color: transparent;
    padding: 0;
    border-radius: 0;
    font-size: 100%;
}

/* Headings */
h1, h2, h3 {
    margin-top: 24px;
    margin-bottom: 16px;
    font-weight: 600;
    line-height: 1.25;
}

h1 { font-size: 2em; border-bottom: 2px solid #eaecef; padding-bottom: 0.3em; }
h2 { font-size: 1.5em; border-bottom: 1px solid #eaecef; padding-bottom: 0.3em; }
h3 { font-size: 1.25em; }

/* Paragraphs */
p {
    margin: 16px 0;
}

/* Lists */
ul {
    padding-left: 2em;
    margin: 16px 0;
}

li {
    margin: 4px 0;
}

/* Links */
a {
    color: #0366d6;
    text-decoration: none;
}

a:hover {
    text-decoration: underline;
}

/* Strong and emphasis */
strong {
    font-weight: 600;
}

em {
    font-style: italic;
}
"#;

/// Wrap a body fragment in the fixed document shell.
///
/// `body` is inserted verbatim; it must already be safe HTML.
pub fn wrap_document(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="{generator}">
    <style>
{css}
    </style>
</head>
<body>
{body}
</body>
</html>"#,
        generator = GENERATOR,
        css = DOCUMENT_CSS,
        body = body,
    )
}
