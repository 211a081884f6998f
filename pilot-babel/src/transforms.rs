//! Conversion entry points
//!
//! This module dispatches a (source, target) pair to the matching rewrite routine.
//! Every call is independent: no state is kept between conversions, and the only
//! failures are raised before any text is rewritten.
//!
//! # Example
//!
//! ```ignore
//! use pilot_babel::transforms::convert;
//! use pilot_babel::format::{SourceFormat, TargetFormat};
//!
//! let text = convert("**Hello**", SourceFormat::Markdown, TargetFormat::LinkedIn)?;
//! assert_eq!(text, "HELLO");
//! ```

use crate::error::FormatError;
use crate::format::{Conversion, SourceFormat, TargetFormat};
use crate::formats::linkedin::LinkedInOptions;
use crate::formats::{html, linkedin, markdown};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Knobs for the conversion routines; defaults reproduce the standard behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    pub linkedin: LinkedInOptions,
}

/// A single conversion to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source_format: SourceFormat,
    pub target_format: TargetFormat,
    pub text: String,
}

/// Converted text, or the reason nothing was converted
pub type ConversionResult = Result<String, FormatError>;

impl ConversionRequest {
    pub fn new(
        text: impl Into<String>,
        source_format: SourceFormat,
        target_format: TargetFormat,
    ) -> Self {
        Self {
            source_format,
            target_format,
            text: text.into(),
        }
    }

    /// Run the request with default options
    pub fn run(&self) -> ConversionResult {
        self.run_with_options(&ConvertOptions::default())
    }

    pub fn run_with_options(&self, options: &ConvertOptions) -> ConversionResult {
        convert_with_options(&self.text, self.source_format, self.target_format, options)
    }
}

/// Convert `text` from one dialect to another with default options
pub fn convert(text: &str, from: SourceFormat, to: TargetFormat) -> ConversionResult {
    convert_with_options(text, from, to, &ConvertOptions::default())
}

/// Convert `text` from one dialect to another
pub fn convert_with_options(
    text: &str,
    from: SourceFormat,
    to: TargetFormat,
    options: &ConvertOptions,
) -> ConversionResult {
    if text.trim().is_empty() {
        return Err(FormatError::EmptyInput);
    }
    let conversion = Conversion::resolve(from, to)?;
    Ok(run_conversion(conversion, text, options))
}

/// Apply the routine for an already-resolved pair. Never fails.
pub fn run_conversion(conversion: Conversion, text: &str, options: &ConvertOptions) -> String {
    let output = match conversion {
        Conversion::MarkdownToLinkedIn => {
            linkedin::serializer::serialize_to_linkedin(text, &options.linkedin)
        }
        Conversion::MarkdownToHtml => html::serializer::serialize_to_html(text),
        Conversion::HtmlToMarkdown => markdown::serializer::serialize_to_markdown(text),
    };
    debug!(
        %conversion,
        input_len = text.len(),
        output_len = output.len(),
        "converted text"
    );
    output
}
