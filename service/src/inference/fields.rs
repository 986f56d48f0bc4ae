//! Field extraction and deduplication
//!
//! Every direct child element and every attribute of an element becomes one
//! field, elements first, then attributes, each in document order. Sibling
//! fields that end up with the same name are then collapsed into a single
//! `List<T>` field.

use indexmap::IndexMap;
use xml2class_core::types::list_type;
use xml2class_core::{Class, Element, Field};

use crate::inference::types::ListXmlName;

/// Field for a child element whose class has already been inferred.
///
/// The field is named after the child's resolved class, so siblings of the
/// same shape share a field name. Empty leaves are typed as `scalar_type`.
pub fn element_field(child: &Element, class: &Class, scalar_type: &str) -> Field {
    let field_type = if child.is_empty() {
        scalar_type.to_string()
    } else {
        class.name.clone()
    };
    Field::element(
        class.name.clone(),
        field_type,
        class.xml_name.clone(),
        class.namespace.clone(),
    )
}

/// Fields for the attributes of `element`, in document order
pub fn attribute_fields<'a>(
    element: &'a Element,
    scalar_type: &'a str,
) -> impl Iterator<Item = Field> + 'a {
    element.attributes.iter().map(move |attribute| {
        Field::attribute(
            attribute.name.clone(),
            scalar_type,
            attribute.namespace.clone(),
        )
    })
}

/// Collapse fields sharing a name into one list field.
///
/// Groups keep the position of their first member. A group of one passes
/// through unchanged; a larger group becomes a field typed
/// `List<first.type>` with namespace and serialization kind of its first
/// member. Its `xml_name` is taken according to `list_xml_name`.
pub fn deduplicate(fields: Vec<Field>, list_xml_name: ListXmlName) -> Vec<Field> {
    let mut groups: IndexMap<String, Vec<Field>> = IndexMap::new();
    for field in fields {
        groups.entry(field.name.clone()).or_default().push(field);
    }

    groups
        .into_iter()
        .filter_map(|(name, mut group)| {
            if group.len() == 1 {
                return group.pop();
            }
            let first = group.into_iter().next()?;
            let xml_name = match list_xml_name {
                ListXmlName::ElementType => first.field_type.clone(),
                ListXmlName::TagName => first.xml_name,
            };
            Some(Field {
                name,
                field_type: list_type(&first.field_type),
                xml_name,
                xml_type: first.xml_type,
                namespace: first.namespace,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use xml2class_core::{Attribute, XmlType};

    fn class(name: &str, xml_name: &str) -> Class {
        Class {
            name: name.to_string(),
            xml_name: xml_name.to_string(),
            namespace: "urn:test".to_string(),
            fields: Vec::new(),
        }
    }

    #[test]
    fn test_empty_leaf_field_is_scalar() {
        let child = Element::new("Child").with_text("hello");
        let field = element_field(&child, &class("RootChild", "Child"), "String");
        assert_eq!(
            field,
            Field::element("RootChild", "String", "Child", "urn:test")
        );
    }

    #[test]
    fn test_nested_field_references_class() {
        let child = Element::new("Child").with_attribute("x", "1");
        let field = element_field(&child, &class("RootChild", "Child"), "String");
        assert_eq!(field.field_type, "RootChild");
        assert_eq!(field.xml_type, XmlType::Element);
    }

    #[test]
    fn test_attribute_fields_in_order() {
        let element = Element::new("Root")
            .with_attribute("id", "5")
            .with_qualified_attribute(Attribute::new("lang", "en").with_namespace("urn:xml"));
        let fields: Vec<_> = attribute_fields(&element, "String").collect();
        assert_eq!(
            fields,
            vec![
                Field::attribute("id", "String", ""),
                Field::attribute("lang", "String", "urn:xml"),
            ]
        );
    }

    #[test]
    fn test_duplicates_collapse_into_list() {
        let fields = vec![
            Field::element("RootItem", "String", "Item", ""),
            Field::element("RootOther", "RootOther", "Other", ""),
            Field::element("RootItem", "String", "Item", ""),
            Field::attribute("id", "String", ""),
        ];
        let deduped = deduplicate(fields, ListXmlName::ElementType);
        assert_eq!(
            deduped,
            vec![
                Field::element("RootItem", "List<String>", "String", ""),
                Field::element("RootOther", "RootOther", "Other", ""),
                Field::attribute("id", "String", ""),
            ]
        );
    }

    #[test]
    fn test_list_xml_name_from_tag() {
        let fields = vec![
            Field::element("RootItem", "RootItem", "Item", ""),
            Field::element("RootItem", "RootItem", "Item", ""),
        ];
        let deduped = deduplicate(fields, ListXmlName::TagName);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].field_type, "List<RootItem>");
        assert_eq!(deduped[0].xml_name, "Item");
    }

    #[test]
    fn test_list_keeps_first_member_kind() {
        // An attribute whose name matches a sibling element's class name
        let fields = vec![
            Field::attribute("RootItem", "String", "urn:a"),
            Field::element("RootItem", "RootItem", "Item", "urn:b"),
        ];
        let deduped = deduplicate(fields, ListXmlName::ElementType);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].xml_type, XmlType::Attribute);
        assert_eq!(deduped[0].namespace, "urn:a");
        assert_eq!(deduped[0].field_type, "List<String>");
    }
}
