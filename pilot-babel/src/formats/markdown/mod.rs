//! Markdown format implementation
//!
//! Markdown is the source dialect for the LinkedIn and HTML targets, and the target of
//! HTML import, which is implemented here.
//!
//! # Element Mapping Table (HTML → Markdown)
//!
//! | HTML Element                 | Markdown Equivalent     | Notes                                   |
//! |------------------------------|-------------------------|-----------------------------------------|
//! | `<h1>`..`<h6>`               | `#`..`######`           | Heading on its own line                 |
//! | `<strong>`, `<b>`            | `**text**`              |                                         |
//! | `<em>`, `<i>`                | `*text*`                |                                         |
//! | `<code>`                     | `` `text` ``            |                                         |
//! | `<pre><code>`, `<pre>`       | Fenced block (```)      | Language class is dropped               |
//! | `<a href>`                   | `[label](href)`         | No href → label only                    |
//! | `<img src alt>`              | `![alt](src)`           | Any attribute order; no src → dropped   |
//! | `<li>`                       | `- item`                |                                         |
//! | `<ul>`, `<ol>`               | (stripped)              | Nesting and numbering are lost          |
//! | `<p>`                        | Text + blank line       |                                         |
//! | `<br>`                       | Newline                 |                                         |
//! | `<hr>`                       | `---`                   |                                         |
//! | Anything else                | (stripped)              | Text content kept                       |
//!
//! # Lossy Conversions
//!
//! HTML → Markdown → HTML is not a round trip: list numbering, nesting, attributes other
//! than href/src/alt, and whitespace inside code blocks are not preserved.

pub mod serializer;

use crate::format::Format;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark-style Markdown"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }
}
