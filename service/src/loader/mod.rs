//! Document loaders
//!
//! Loaders turn raw document bytes into the [`Element`](xml2class_core::Element)
//! tree consumed by class inference.

pub mod xml;

pub use xml::{LoaderConfig, XmlTreeLoader};
