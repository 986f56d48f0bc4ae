//! Class Inference Module
//!
//! This module infers a normalized class schema from one example XML
//! document, so that downstream tooling can emit bindings mirroring the
//! document's structure.
//!
//! # Architecture
//!
//! - **Inference Engine** (`engine.rs`) - Depth-first walk producing one class per shape
//! - **Field Extraction** (`fields.rs`) - Element/attribute fields and list collapsing
//! - **Name Resolution** (`naming.rs`) - Path-derived, identifier-safe class names
//! - **Class Registry** (`registry.rs`) - Identity-keyed working set of one run
//! - **Introspector** (`introspector.rs`) - File/bytes entry points over the loader
//!
//! # Usage Example
//!
//! ```rust
//! use xml2class_service::inference::InferenceEngine;
//! use xml2class_service::loader::XmlTreeLoader;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let root = XmlTreeLoader::default().parse_str("<Root id=\"5\"><Child/></Root>")?;
//! let classes = InferenceEngine::default().infer(&root)?;
//!
//! let root_class = classes.root().ok_or("no root class")?;
//! assert_eq!(root_class.fields.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod engine;
pub mod fields;
pub mod introspector;
pub mod naming;
pub mod registry;
pub mod traits;
pub mod types;

pub use engine::InferenceEngine;
pub use introspector::XmlClassIntrospector;
pub use naming::{NameResolver, ResolvedName};
pub use registry::ClassRegistry;
pub use traits::{ClassIntrospector, InferenceError, InferenceResult};
pub use types::{ClassSet, InferenceConfig, InferenceStats, ListXmlName};

use xml2class_core::Element;

/// Infer classes from `root` with the default configuration
///
/// # Errors
///
/// Returns `InferenceError::InvalidIdentifier` if an element's name cannot be
/// made identifier-safe.
pub fn infer_classes(root: &Element) -> InferenceResult<ClassSet> {
    InferenceEngine::default().infer(root)
}
