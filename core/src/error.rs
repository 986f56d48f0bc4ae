//! Error types for loading XML documents into element trees

use thiserror::Error;

/// Main error type for xml2class loading operations
#[derive(Error, Debug)]
pub enum Xml2ClassError {
    /// Malformed XML input
    #[error("Failed to parse XML at byte {position}: {message}")]
    XmlError {
        /// Error message
        message: String,
        /// Byte offset in the input where the reader stopped
        position: u64,
    },

    /// The document contains no root element
    #[error("Document has no root element")]
    EmptyDocument,

    /// A second top-level element follows the root
    #[error("Unexpected element '{name}' after the document root")]
    MultipleRoots {
        /// Local name of the extra element
        name: String,
    },

    /// Text that is not valid UTF-8 or cannot be unescaped
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for xml2class operations
pub type Result<T> = std::result::Result<T, Xml2ClassError>;

impl Xml2ClassError {
    /// Create a new XML parse error at the given byte offset
    #[must_use]
    pub fn xml(message: impl Into<String>, position: u64) -> Self {
        Self::XmlError {
            message: message.into(),
            position,
        }
    }

    /// Create a new encoding error
    #[must_use]
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::EncodingError(message.into())
    }
}
