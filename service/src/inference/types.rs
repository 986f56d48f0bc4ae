//! Core types for class inference
//!
//! This module defines the configuration of an inference run and the
//! collection of classes it produces.

use serde::{Deserialize, Serialize};
use xml2class_core::types::STRING_TYPE;
use xml2class_core::{Class, Field, XmlType};

use crate::inference::traits::{InferenceError, InferenceResult};

/// Which name a collapsed list field records as its `xml_name`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListXmlName {
    /// The first member's type (`String` or the class name). Compatible with
    /// existing generated bindings.
    #[default]
    ElementType,
    /// The first member's original tag name
    TagName,
}

/// Settings for one inference run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Type name of empty leaves and attribute values
    pub scalar_type: String,

    /// `xml_name` recorded on collapsed list fields
    pub list_xml_name: ListXmlName,

    /// Strip every character that is not alphanumeric or `_` from class
    /// names. When disabled only hyphens are stripped.
    pub strip_invalid_identifier_chars: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            scalar_type: STRING_TYPE.to_string(),
            list_xml_name: ListXmlName::default(),
            strip_invalid_identifier_chars: true,
        }
    }
}

impl InferenceConfig {
    /// Check the configuration for unusable values
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::ConfigurationError` if `scalar_type` is empty
    /// or contains list brackets.
    pub fn validate(&self) -> InferenceResult<()> {
        if self.scalar_type.trim().is_empty() {
            return Err(InferenceError::ConfigurationError(
                "scalar_type must not be empty".to_string(),
            ));
        }
        if self.scalar_type.contains(['<', '>']) {
            return Err(InferenceError::ConfigurationError(format!(
                "scalar_type '{}' must not contain '<' or '>'",
                self.scalar_type
            )));
        }
        Ok(())
    }
}

/// Counters collected during one inference run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceStats {
    /// Elements turned into candidate classes
    pub candidates: usize,
    /// Candidates kept in the registry
    pub retained: usize,
    /// Candidates dropped as empty or already seen
    pub dropped: usize,
    /// Names that received a numeric collision suffix
    pub suffixed: usize,
    /// Deepest nesting level visited (root is 1)
    pub max_depth: usize,
}

/// The classes produced by one inference run
///
/// Order follows registry insertion (leaves before their parents, root last)
/// and carries no meaning; look classes up by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSet {
    /// Resolved name of the document root's class
    root: String,

    /// Retained classes
    classes: Vec<Class>,

    #[serde(skip)]
    scalar_type: String,

    #[serde(skip)]
    stats: InferenceStats,
}

impl ClassSet {
    pub(crate) fn new(
        root: String,
        classes: Vec<Class>,
        scalar_type: String,
        stats: InferenceStats,
    ) -> Self {
        Self {
            root,
            classes,
            scalar_type,
            stats,
        }
    }

    /// Class of the document root. Always present.
    pub fn root(&self) -> Option<&Class> {
        self.classes.iter().rev().find(|class| class.name == self.root)
    }

    /// Resolved name of the root class
    pub fn root_name(&self) -> &str {
        &self.root
    }

    /// Look up a class by resolved name
    pub fn get(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|class| class.name == name)
    }

    /// Whether a class with this name was retained
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Resolve the class an element field refers to, unwrapping `List<T>`.
    ///
    /// Attribute fields and scalar-typed fields resolve to `None`.
    pub fn resolve(&self, field: &Field) -> Option<&Class> {
        if field.xml_type == XmlType::Attribute {
            return None;
        }
        let target = field.element_type();
        if target == self.scalar_type {
            return None;
        }
        self.get(target)
    }

    /// Iterate over the retained classes
    pub fn iter(&self) -> std::slice::Iter<'_, Class> {
        self.classes.iter()
    }

    /// Number of retained classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no class was retained
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Counters from the run that produced this set
    pub fn stats(&self) -> &InferenceStats {
        &self.stats
    }

    /// Consume the set, returning the classes
    pub fn into_classes(self) -> Vec<Class> {
        self.classes
    }
}

impl<'a> IntoIterator for &'a ClassSet {
    type Item = &'a Class;
    type IntoIter = std::slice::Iter<'a, Class>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
