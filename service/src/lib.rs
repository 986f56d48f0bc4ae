//! # xml2class Service
//!
//! Infers a normalized, strongly-typed class schema from an example XML
//! document, so that downstream tooling can emit source-code bindings whose
//! classes and fields mirror the document's structure.
//!
//! ## Overview
//!
//! - **Loading**: [`loader`] turns XML text into an element tree
//! - **Inference**: [`inference`] walks the tree and produces a deduplicated
//!   collection of classes with typed fields, resolved names and list-vs-scalar
//!   cardinality
//! - **Configuration**: [`config`] loads YAML settings with environment
//!   variable substitution
//!
//! ## Quick Start
//!
//! ```rust
//! use xml2class_service::inference::infer_classes;
//! use xml2class_service::loader::XmlTreeLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = "<Root><Item>a</Item><Item>b</Item></Root>";
//! let root = XmlTreeLoader::default().parse_str(xml)?;
//! let classes = infer_classes(&root)?;
//!
//! let root_class = classes.root().ok_or("no root class")?;
//! assert_eq!(root_class.fields[0].field_type, "List<String>");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Command-line front end
pub mod cli;

/// Configuration loading
pub mod config;

/// Class inference from element trees
pub mod inference;

/// Document loaders
pub mod loader;

pub use inference::{
    ClassIntrospector, ClassSet, InferenceConfig, InferenceEngine, InferenceError,
    InferenceResult, XmlClassIntrospector, infer_classes,
};
pub use xml2class_core::{Attribute, Class, ClassKey, Element, Field, XmlType};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Xml2ClassConfig, load_config};
    pub use crate::inference::{
        ClassIntrospector, ClassSet, InferenceConfig, InferenceEngine, InferenceError,
        InferenceResult, ListXmlName, XmlClassIntrospector, infer_classes,
    };
    pub use crate::loader::{LoaderConfig, XmlTreeLoader};
    pub use xml2class_core::prelude::*;
}
