//! # xml2class Core
//!
//! Core types for inferring a class schema from an example XML document.
//!
//! This crate provides the data model shared by the inference service and its
//! consumers: the parsed element tree handed to the engine, the `Class`/`Field`
//! schema it produces, and the error types of the loading layer.
//!
//! ## Design Principles
//!
//! - **Read-only input**: the element tree is never mutated by inference
//! - **Value semantics**: classes are referenced by name, not by pointer
//! - **Explicit identity**: registry membership is keyed by `(name, xml_name)`

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core error types
pub mod error;

/// Parsed XML element tree consumed by inference
pub mod element;

/// Class and field definitions produced by inference
pub mod types;

// Re-export commonly used types
pub use element::{Attribute, Element};
pub use error::{Result, Xml2ClassError};
pub use types::{Class, ClassKey, Field, XmlType};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::{Attribute, Element};
    pub use crate::error::{Result, Xml2ClassError};
    pub use crate::types::{Class, ClassKey, Field, XmlType};
}
