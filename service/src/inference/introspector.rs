//! XML introspector for class inference
//!
//! Reads a sample document, loads it into an element tree and hands the tree
//! to the [`InferenceEngine`].

use async_trait::async_trait;
use std::path::Path;
use tracing::info;
use xml2class_core::Element;

use crate::inference::engine::InferenceEngine;
use crate::inference::traits::{ClassIntrospector, InferenceResult};
use crate::inference::types::{ClassSet, InferenceConfig};
use crate::loader::{LoaderConfig, XmlTreeLoader};

/// XML introspector implementation
#[derive(Debug, Clone, Default)]
pub struct XmlClassIntrospector {
    loader: XmlTreeLoader,
    engine: InferenceEngine,
}

impl XmlClassIntrospector {
    /// Create an introspector from loader and inference settings
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::ConfigurationError` if the inference settings
    /// are invalid.
    pub fn new(loader: LoaderConfig, inference: InferenceConfig) -> InferenceResult<Self> {
        Ok(Self {
            loader: XmlTreeLoader::new(loader),
            engine: InferenceEngine::new(inference)?,
        })
    }
}

#[async_trait]
impl ClassIntrospector for XmlClassIntrospector {
    async fn analyze_file(&self, path: &Path) -> InferenceResult<ClassSet> {
        info!("Starting XML file analysis: {}", path.display());
        let bytes = tokio::fs::read(path).await?;
        self.analyze_bytes(&bytes).await
    }

    async fn analyze_bytes(&self, data: &[u8]) -> InferenceResult<ClassSet> {
        info!("Analyzing XML bytes: {} bytes", data.len());
        let root = self.loader.parse_bytes(data)?;
        self.analyze_element(&root)
    }

    fn analyze_element(&self, root: &Element) -> InferenceResult<ClassSet> {
        self.engine.infer(root)
    }

    fn format_name(&self) -> &str {
        "xml"
    }
}
