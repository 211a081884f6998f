//! Text conversion between Markdown, HTML and LinkedIn plain text
//!
//!     This crate converts a piece of text written in one markup dialect into another. It is the
//!     engine behind the formatpilot CLI and editor integrations, and it knows nothing about
//!     either: it takes a string and a (source, target) pair and hands back a string.
//!
//!     Supported pairs:
//!         - markdown → linkedin: plain text for a platform that renders no markup
//!         - markdown → html: an HTML fragment
//!         - html → markdown: Markdown recovered from a tag soup
//!
//!     Every other pair is rejected with [`FormatError::UnsupportedConversion`] before any
//!     rewrite runs, as is blank input ([`FormatError::EmptyInput`]).
//!
//! Architecture
//!
//!     The conversions are ordered sequences of pattern rewrites, not parse-then-render
//!     pipelines. Rule order is significant and documented in each serializer. The only
//!     stateful step is the Markdown → HTML list pass, a line scan holding two flags.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait, source/target enums, Conversion pairs
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── transforms.rs           # convert() and the pair dispatch
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── serializer.rs   # Rewrite routine producing <format>
//!     │   │   └── mod.rs
//!     ├── common                  # Whitespace, entities, attribute scanning
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── <format>/mod.rs         # Integration tests per target format
//!     ├── properties/mod.rs       # proptest properties over generated input
//!     └── fixtures
//!
//!     Round trips are not lossless: HTML → Markdown → HTML drops list numbering, nesting and
//!     most attributes. Tests assert on content, not byte equality, for such chains.
//!
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod transforms;

pub use error::FormatError;
pub use format::{Conversion, Format, SourceFormat, TargetFormat};
pub use formats::{BoldStyle, LinkedInOptions};
pub use registry::FormatRegistry;
pub use transforms::{
    convert, convert_with_options, ConversionRequest, ConversionResult, ConvertOptions,
};
