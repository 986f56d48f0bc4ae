//! Parsed XML element tree
//!
//! This is the read-only input of class inference. A loader (see the service
//! crate) or a caller building trees in code produces an [`Element`]; the
//! inference engine only ever borrows it.

use serde::{Deserialize, Serialize};

/// A single XML attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Local name without prefix
    pub name: String,

    /// Resolved namespace URI, empty when unqualified
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Literal (unescaped) attribute value
    pub value: String,
}

impl Attribute {
    /// Create an unqualified attribute
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: String::new(),
            value: value.into(),
        }
    }

    /// Set the namespace URI
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

/// An XML element node with its attributes and child elements in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Local name without prefix
    pub name: String,

    /// Resolved namespace URI, empty when unqualified
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Attributes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    /// Child elements in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,

    /// Concatenated text content, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Element {
    /// Create an unqualified element with no attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the namespace URI
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Append an unqualified attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Append a fully specified attribute
    #[must_use]
    pub fn with_qualified_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Append a child element
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the text content
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Whether the element has any attribute
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Whether the element has any child element
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// An empty leaf carries no attributes and no child elements.
    ///
    /// Text content does not count: `<a>text</a>` is an empty leaf.
    pub fn is_empty(&self) -> bool {
        !self.has_attributes() && !self.has_children()
    }
}
