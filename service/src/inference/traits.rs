//! Core trait definitions for document introspection and class inference

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;
use xml2class_core::{Element, Xml2ClassError};

use crate::inference::types::ClassSet;

/// Error types for class inference operations.
///
/// Inference over an in-memory element tree is infallible apart from the
/// identifier check; the remaining variants come from the I/O glue around it.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// File system operations failed while reading the sample document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The sample document could not be loaded into an element tree.
    ///
    /// This occurs when:
    /// - XML is malformed or truncated
    /// - The document has no root element, or more than one
    /// - Text cannot be decoded or unescaped
    #[error("Load error: {0}")]
    LoadError(#[from] Xml2ClassError),

    /// A class name is empty once characters invalid in identifiers are removed.
    ///
    /// The default class name is the concatenation of every tag on the path,
    /// so this only happens when all of them sanitize to nothing.
    #[error("Element '{xml_name}' at {path} has no identifier-safe name")]
    InvalidIdentifier {
        /// Original tag local name
        xml_name: String,
        /// Slash-separated path of tag names from the root
        path: String,
    },

    /// Inference configuration contains invalid settings.
    #[error("Configuration error: {0}")]
    ConfigurationError(
        /// Configuration validation error naming the invalid parameter
        String,
    ),
}

/// Result type for inference operations
pub type InferenceResult<T> = Result<T, InferenceError>;

/// Trait for turning a sample document into a class collection
///
/// Implementations own the loading step; the returned [`ClassSet`] is the
/// output of a single inference run.
#[async_trait]
pub trait ClassIntrospector: Send + Sync {
    /// Read a file and infer its classes
    ///
    /// # Errors
    /// Returns error if:
    /// - File cannot be read
    /// - File content is not well-formed
    /// - A class name cannot be made identifier-safe
    async fn analyze_file(&self, path: &Path) -> InferenceResult<ClassSet>;

    /// Infer classes from raw document bytes
    ///
    /// # Errors
    /// Returns error if the bytes are not a well-formed document or a class
    /// name cannot be made identifier-safe.
    async fn analyze_bytes(&self, data: &[u8]) -> InferenceResult<ClassSet>;

    /// Infer classes from an already-parsed tree
    ///
    /// # Errors
    /// Returns error if a class name cannot be made identifier-safe.
    fn analyze_element(&self, root: &Element) -> InferenceResult<ClassSet>;

    /// Get the format this introspector handles (e.g. "xml")
    fn format_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_display() {
        let err = InferenceError::InvalidIdentifier {
            xml_name: "-".to_string(),
            path: "/-".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Element '-' at /- has no identifier-safe name"
        );
    }

    #[test]
    fn test_load_error_conversion() {
        let err: InferenceError = Xml2ClassError::EmptyDocument.into();
        assert!(matches!(err, InferenceError::LoadError(_)));
        assert_eq!(err.to_string(), "Load error: Document has no root element");
    }
}
