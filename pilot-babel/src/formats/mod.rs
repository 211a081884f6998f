//! Format implementations
//!
//! One module per dialect. Each module describes its dialect through the
//! [`Format`](crate::format::Format) trait and holds the serializer that produces it.

pub mod html;
pub mod linkedin;
pub mod markdown;

pub use html::HtmlFormat;
pub use linkedin::{BoldStyle, LinkedInFormat, LinkedInOptions};
pub use markdown::MarkdownFormat;
