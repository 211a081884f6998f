//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all known dialects.
//! Formats can be registered, retrieved by name, and detected from filenames.

use crate::error::FormatError;
use crate::format::{Conversion, Format, SourceFormat, TargetFormat};
use std::collections::HashMap;

/// Registry of text formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
///
/// let conversion = registry.resolve("markdown", "linkedin")?;
/// assert_eq!(conversion, Conversion::MarkdownToLinkedIn);
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Formats usable as a conversion source (sorted)
    pub fn source_formats(&self) -> Vec<String> {
        self.filtered(|f| f.supports_parsing())
    }

    /// Formats usable as a conversion target (sorted)
    pub fn target_formats(&self) -> Vec<String> {
        self.filtered(|f| f.supports_serialization())
    }

    fn filtered(&self, keep: impl Fn(&dyn Format) -> bool) -> Vec<String> {
        let mut names: Vec<_> = self
            .formats
            .values()
            .map(|f| &**f)
            .filter(|f| keep(*f))
            .map(|f| f.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = FormatRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("doc.md"), Some("markdown".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("doc.unknown"), None);
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for format in self.formats.values() {
            if format.file_extensions().contains(&extension) {
                return Some(format.name().to_string());
            }
        }

        None
    }

    /// Resolve a pair of format names to a supported [`Conversion`]
    ///
    /// Unknown names give [`FormatError::FormatNotFound`]; known names that cannot
    /// stand on the requested side, or pairs without a routine, give
    /// [`FormatError::UnsupportedConversion`].
    pub fn resolve(&self, from: &str, to: &str) -> Result<Conversion, FormatError> {
        let source = self.get(from)?;
        let target = self.get(to)?;

        let unsupported = || FormatError::UnsupportedConversion {
            from: source.name().to_string(),
            to: target.name().to_string(),
        };

        if !source.supports_parsing() || !target.supports_serialization() {
            return Err(unsupported());
        }

        let from = source
            .name()
            .parse::<SourceFormat>()
            .map_err(|_| unsupported())?;
        let to = target
            .name()
            .parse::<TargetFormat>()
            .map_err(|_| unsupported())?;
        Conversion::resolve(from, to)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::html::HtmlFormat);
        registry.register(crate::formats::linkedin::LinkedInFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
