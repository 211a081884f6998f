//! HTML format implementation
//!
//! This module implements Markdown → HTML export. HTML is also accepted as a source
//! (see [`crate::formats::markdown`] for the HTML → Markdown direction).
//!
//! # Element Mapping Table
//!
//! | Markdown Element    | HTML Equivalent                          | Notes                                   |
//! |---------------------|------------------------------------------|-----------------------------------------|
//! | # .. ######         | `<h1>`..`<h6>`                           | Marker must be followed by a space      |
//! | **bold**            | `<strong>`                               | Matched before italic                   |
//! | *italic*            | `<em>`                                   |                                         |
//! | `code`              | `<code>`                                 | Content escaped                         |
//! | Fenced code block   | `<pre><code>`                            | Same delimiter closes; info → class     |
//! | ![alt](src)         | `<img src alt />`                        | Matched before links                    |
//! | [label](url)        | `<a href>`                               |                                         |
//! | - / * / + item      | `<ul><li>`                               | Line scan, see below                    |
//! | N. item             | `<ol><li>`                               |                                         |
//! | Other text line     | `<p>`                                    | One paragraph per line                  |
//! | ---, ***, ___       | `<hr />`                                 | Three or more; lifted before bold       |
//!
//! # Lists
//!
//! Markdown has no explicit list delimiters, so the serializer walks the lines in order,
//! holding two flags (inside unordered / inside ordered). Containers open on the first
//! item, close as soon as a line stops matching, and any list still open at the end of
//! the input is closed.
//!
//! # Lossy Conversions
//!
//! - Nested lists are flattened into their parent list
//! - Consecutive text lines become separate paragraphs
//! - Raw HTML in the source passes through unescaped

pub mod serializer;

use crate::format::Format;

/// Format implementation for HTML
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }
}
