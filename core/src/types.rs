//! Class and field definitions produced by schema inference

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar textual type used for empty leaves and attribute values
pub const STRING_TYPE: &str = "String";

const LIST_PREFIX: &str = "List<";
const LIST_SUFFIX: &str = ">";

/// Serialization kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XmlType {
    /// Sourced from a child element
    Element,
    /// Sourced from an attribute
    Attribute,
}

impl fmt::Display for XmlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlType::Element => write!(f, "Element"),
            XmlType::Attribute => write!(f, "Attribute"),
        }
    }
}

/// One named, typed member of a class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Field identifier. For element fields this is the referenced class name.
    pub name: String,

    /// `String`, a class name, or `List<T>` of either
    #[serde(rename = "type")]
    pub field_type: String,

    /// Original tag or attribute name
    pub xml_name: String,

    /// Element or attribute
    pub xml_type: XmlType,

    /// Namespace inherited from the source node
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

impl Field {
    /// Create an element field
    pub fn element(
        name: impl Into<String>,
        field_type: impl Into<String>,
        xml_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            xml_name: xml_name.into(),
            xml_type: XmlType::Element,
            namespace: namespace.into(),
        }
    }

    /// Create an attribute field; name and xml name are the attribute's local name
    pub fn attribute(
        name: impl Into<String>,
        field_type: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            xml_name: name.clone(),
            name,
            field_type: field_type.into(),
            xml_type: XmlType::Attribute,
            namespace: namespace.into(),
        }
    }

    /// Whether the field type is `List<T>`
    pub fn is_list(&self) -> bool {
        list_element_type(&self.field_type).is_some()
    }

    /// The type with any `List<..>` wrapper removed
    pub fn element_type(&self) -> &str {
        list_element_type(&self.field_type).unwrap_or(&self.field_type)
    }
}

/// Wrap a type name as `List<T>`
pub fn list_type(inner: &str) -> String {
    format!("{LIST_PREFIX}{inner}{LIST_SUFFIX}")
}

/// Inner type of a `List<T>` type name, `None` for scalar types
pub fn list_element_type(type_name: &str) -> Option<&str> {
    type_name
        .strip_prefix(LIST_PREFIX)
        .and_then(|rest| rest.strip_suffix(LIST_SUFFIX))
}

/// Registry identity of a class: the resolved name together with the tag name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassKey {
    /// Resolved class name
    pub name: String,
    /// Original tag local name
    pub xml_name: String,
}

impl ClassKey {
    /// Create a key from its parts
    pub fn new(name: impl Into<String>, xml_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            xml_name: xml_name.into(),
        }
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.xml_name)
    }
}

/// Inferred schema type for one structural shape of element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Resolved, identifier-safe, unique name
    pub name: String,

    /// Original tag local name (not unique)
    pub xml_name: String,

    /// Tag namespace, empty when unqualified
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Fields with unique names
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Class {
    /// Registry identity of this class
    pub fn key(&self) -> ClassKey {
        ClassKey::new(self.name.clone(), self.xml_name.clone())
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Whether the class has any field
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_list_type_helpers() {
        assert_eq!(list_type("String"), "List<String>");
        assert_eq!(list_element_type("List<RootItem>"), Some("RootItem"));
        assert_eq!(list_element_type("RootItem"), None);
    }

    #[test]
    fn test_field_element_type_unwraps_lists() {
        let field = Field::element("RootItem", "List<RootItem>", "Item", "");
        assert!(field.is_list());
        assert_eq!(field.element_type(), "RootItem");

        let scalar = Field::attribute("id", STRING_TYPE, "");
        assert!(!scalar.is_list());
        assert_eq!(scalar.element_type(), "String");
        assert_eq!(scalar.xml_name, "id");
        assert_eq!(scalar.xml_type, XmlType::Attribute);
    }

    #[test]
    fn test_class_key_identity() {
        let mut keys = HashSet::new();
        assert!(keys.insert(ClassKey::new("RootItem", "Item")));
        assert!(!keys.insert(ClassKey::new("RootItem", "Item")));
        assert!(keys.insert(ClassKey::new("RootItem", "item")));
    }

    #[test]
    fn test_field_serializes_type_key() {
        let field = Field::element("RootChild", "String", "Child", "");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "String");
        assert_eq!(json["xml_type"], "element");
        assert!(json.get("namespace").is_none());
    }
}
