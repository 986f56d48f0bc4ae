//! Class registry
//!
//! The working set of classes discovered during one inference run. Membership
//! is keyed by [`ClassKey`] (`name`, `xml_name`); entries are never removed or
//! modified once inserted. Classes come back in insertion order, which callers
//! must not rely on for meaning.

use indexmap::IndexMap;
use xml2class_core::{Class, ClassKey};

/// Append-only collection of classes keyed by identity
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: IndexMap<ClassKey, Class>,
}

impl ClassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a class with this identity is present
    pub fn contains(&self, key: &ClassKey) -> bool {
        self.classes.contains_key(key)
    }

    /// Number of registered classes whose original tag name equals `xml_name`
    pub fn count_xml_name(&self, xml_name: &str) -> usize {
        self.classes
            .keys()
            .filter(|key| key.xml_name == xml_name)
            .count()
    }

    /// Insert a class unless its identity is already present.
    ///
    /// Returns `true` if the class was added.
    pub fn insert(&mut self, class: Class) -> bool {
        let key = class.key();
        if self.classes.contains_key(&key) {
            return false;
        }
        self.classes.insert(key, class);
        true
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Consume the registry, returning the classes in insertion order
    pub fn into_classes(self) -> Vec<Class> {
        self.classes.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xml2class_core::Field;

    fn class(name: &str, xml_name: &str, fields: Vec<Field>) -> Class {
        Class {
            name: name.to_string(),
            xml_name: xml_name.to_string(),
            namespace: String::new(),
            fields,
        }
    }

    #[test]
    fn test_insert_is_keyed_by_identity() {
        let mut registry = ClassRegistry::new();
        assert!(registry.insert(class("RootItem", "Item", vec![])));
        assert!(!registry.insert(class(
            "RootItem",
            "Item",
            vec![Field::attribute("a", "String", "")]
        )));
        assert!(registry.insert(class("RootItem", "item", vec![])));
        assert_eq!(registry.len(), 2);

        assert!(registry.contains(&ClassKey::new("RootItem", "Item")));

        // The first insertion wins
        let classes = registry.into_classes();
        assert!(classes[0].fields.is_empty());
    }

    #[test]
    fn test_count_xml_name() {
        let mut registry = ClassRegistry::new();
        registry.insert(class("aab", "ab", vec![]));
        registry.insert(class("xab", "ab", vec![]));
        registry.insert(class("ab", "b", vec![]));
        assert_eq!(registry.count_xml_name("ab"), 2);
        assert_eq!(registry.count_xml_name("b"), 1);
        assert_eq!(registry.count_xml_name("aab"), 0);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut registry = ClassRegistry::new();
        registry.insert(class("c", "c", vec![]));
        registry.insert(class("a", "a", vec![]));
        registry.insert(class("b", "b", vec![]));
        assert!(!registry.is_empty());
        let names: Vec<_> = registry.into_classes().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
