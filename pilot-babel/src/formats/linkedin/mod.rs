//! LinkedIn format implementation
//!
//! This module implements one-way conversion from Markdown to LinkedIn-flavored plain text.
//! LinkedIn posts render no markup at all, so every construct is either flattened into
//! characters or dropped.
//!
//! # Element Mapping Table
//!
//! | Markdown Element    | LinkedIn Output                 | Notes                                   |
//! |---------------------|---------------------------------|-----------------------------------------|
//! | Heading (# ..)      | Heading text                    | Markers stripped                        |
//! | **bold**            | BOLD                            | Upper-cased (see [`BoldStyle`])         |
//! | *italic*            | italic                          | Markers stripped                        |
//! | `code`              | code                            | Backticks stripped                      |
//! | - / * / + item      | • item                          | Bullet is configurable                  |
//! | N. item             | k. item                         | k counts ordered lines so far           |
//! | [label](url)        | label (url)                     |                                         |
//! | ![alt](src)         | alt (src)                       |                                         |
//! | Fenced code block   | (removed)                       | ``` and ~~~ fences                      |
//! | Horizontal rule     | (removed)                       |                                         |
//! | Pipe table          | cell \| cell                    | Separator row dropped                   |
//! | :alias:             | emoji                           | Known aliases only                      |
//!
//! # Length Limit
//!
//! Results longer than [`LinkedInOptions::char_limit`] characters get a warning line appended.
//! The text itself is never truncated.

pub mod emoji;
pub mod rules;
pub mod serializer;

use crate::format::Format;

pub use rules::{BoldStyle, LinkedInOptions, DEFAULT_BULLET, LINKEDIN_CHAR_LIMIT};

/// Format implementation for LinkedIn plain text
pub struct LinkedInFormat;

impl Format for LinkedInFormat {
    fn name(&self) -> &str {
        "linkedin"
    }

    fn description(&self) -> &str {
        "LinkedIn-ready plain text"
    }

    fn supports_serialization(&self) -> bool {
        true
    }
}
