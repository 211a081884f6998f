//! Error types for conversion operations

use thiserror::Error;

/// Errors that can occur before a conversion starts.
///
/// Rewrite passes themselves never fail; every variant here is raised before
/// any text is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input was empty or contained only whitespace
    #[error("Input text is empty")]
    EmptyInput,
    /// The (from, to) pair has no conversion routine
    #[error("Conversion from '{from}' to '{to}' is not supported")]
    UnsupportedConversion { from: String, to: String },
    /// Format name not known to the registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
}
