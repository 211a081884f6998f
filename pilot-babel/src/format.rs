//! Format trait and conversion pair definitions
//!
//! This module defines the Format trait that describes every dialect known to the engine,
//! together with the typed source/target enums and the [`Conversion`] pair they resolve to.

use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trait describing a text dialect
///
/// Implementors only describe a dialect (name, extensions, which side of a
/// conversion it can stand on). The rewrite routines themselves live in
/// `formats::<dialect>` and are selected by [`Conversion`].
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "html", "linkedin")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format can be the source of a conversion
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format can be the target of a conversion
    fn supports_serialization(&self) -> bool {
        false
    }
}

/// Dialect the input text is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Markdown,
    Html,
}

/// Dialect the output text is produced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    #[serde(rename = "linkedin")]
    LinkedIn,
    Html,
    Markdown,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 2] = [SourceFormat::Markdown, SourceFormat::Html];

    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Markdown => "markdown",
            SourceFormat::Html => "html",
        }
    }
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 3] = [
        TargetFormat::LinkedIn,
        TargetFormat::Html,
        TargetFormat::Markdown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TargetFormat::LinkedIn => "linkedin",
            TargetFormat::Html => "html",
            TargetFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(SourceFormat::Markdown),
            "html" | "htm" => Ok(SourceFormat::Html),
            _ => Err(FormatError::FormatNotFound(s.to_string())),
        }
    }
}

impl FromStr for TargetFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linkedin" => Ok(TargetFormat::LinkedIn),
            "html" | "htm" => Ok(TargetFormat::Html),
            "markdown" | "md" => Ok(TargetFormat::Markdown),
            _ => Err(FormatError::FormatNotFound(s.to_string())),
        }
    }
}

/// A supported (source, target) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Conversion {
    MarkdownToLinkedIn,
    MarkdownToHtml,
    HtmlToMarkdown,
}

impl Conversion {
    pub const ALL: [Conversion; 3] = [
        Conversion::MarkdownToLinkedIn,
        Conversion::MarkdownToHtml,
        Conversion::HtmlToMarkdown,
    ];

    /// Resolve a typed pair, rejecting every combination without a routine.
    pub fn resolve(from: SourceFormat, to: TargetFormat) -> Result<Self, FormatError> {
        match (from, to) {
            (SourceFormat::Markdown, TargetFormat::LinkedIn) => Ok(Conversion::MarkdownToLinkedIn),
            (SourceFormat::Markdown, TargetFormat::Html) => Ok(Conversion::MarkdownToHtml),
            (SourceFormat::Html, TargetFormat::Markdown) => Ok(Conversion::HtmlToMarkdown),
            (SourceFormat::Markdown, TargetFormat::Markdown)
            | (SourceFormat::Html, TargetFormat::Html)
            | (SourceFormat::Html, TargetFormat::LinkedIn) => {
                Err(FormatError::UnsupportedConversion {
                    from: from.to_string(),
                    to: to.to_string(),
                })
            }
        }
    }

    pub fn source(&self) -> SourceFormat {
        match self {
            Conversion::MarkdownToLinkedIn | Conversion::MarkdownToHtml => SourceFormat::Markdown,
            Conversion::HtmlToMarkdown => SourceFormat::Html,
        }
    }

    pub fn target(&self) -> TargetFormat {
        match self {
            Conversion::MarkdownToLinkedIn => TargetFormat::LinkedIn,
            Conversion::MarkdownToHtml => TargetFormat::Html,
            Conversion::HtmlToMarkdown => TargetFormat::Markdown,
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}
