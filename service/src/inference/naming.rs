//! Class name resolution
//!
//! A candidate class arrives with its path-derived default name (every tag
//! from the root down, concatenated). Resolution strips characters that are
//! not valid in identifiers and, when an already-registered class carries the
//! default name as its *tag* name, appends `count + 1` as a suffix.
//!
//! The collision check compares the unresolved default name against original
//! tag names rather than against resolved names. This is best effort: two
//! different paths that concatenate to the same string can still resolve to
//! the same name.

use xml2class_core::Class;

use crate::inference::registry::ClassRegistry;
use crate::inference::types::InferenceConfig;

/// Outcome of resolving one candidate name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    /// Final identifier-safe name
    pub name: String,
    /// Numeric suffix appended to disambiguate, if any
    pub suffix: Option<usize>,
}

/// Assigns final names to candidate classes
#[derive(Debug, Clone, Copy)]
pub struct NameResolver {
    strip_all: bool,
}

impl NameResolver {
    /// Create a resolver from the run configuration
    pub fn new(config: &InferenceConfig) -> Self {
        Self {
            strip_all: config.strip_invalid_identifier_chars,
        }
    }

    /// Remove characters that cannot appear in an identifier
    pub fn sanitize(&self, name: &str) -> String {
        if self.strip_all {
            name.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect()
        } else {
            name.replace('-', "")
        }
    }

    /// Resolve the final name of `candidate`, whose `name` still holds the
    /// path-derived default.
    ///
    /// Returns `None` when nothing identifier-safe is left of the name.
    pub fn resolve(&self, candidate: &Class, registry: &ClassRegistry) -> Option<ResolvedName> {
        let stripped = self.sanitize(&candidate.name);
        if stripped.is_empty() {
            return None;
        }

        let count = registry.count_xml_name(&candidate.name);
        if count > 0 && !registry.contains(&candidate.key()) {
            let suffix = count + 1;
            return Some(ResolvedName {
                name: format!("{stripped}{suffix}"),
                suffix: Some(suffix),
            });
        }

        Some(ResolvedName {
            name: stripped,
            suffix: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xml2class_core::Field;

    fn candidate(name: &str, xml_name: &str) -> Class {
        Class {
            name: name.to_string(),
            xml_name: xml_name.to_string(),
            namespace: String::new(),
            fields: Vec::new(),
        }
    }

    fn with_field(mut class: Class) -> Class {
        class.fields.push(Field::attribute("k", "String", ""));
        class
    }

    #[test]
    fn test_hyphens_are_stripped() {
        let resolver = NameResolver::new(&InferenceConfig::default());
        let registry = ClassRegistry::new();
        let resolved = resolver
            .resolve(&candidate("RootA-1", "A-1"), &registry)
            .unwrap();
        assert_eq!(resolved.name, "RootA1");
        assert_eq!(resolved.suffix, None);
    }

    #[test]
    fn test_strip_modes() {
        let strict = NameResolver::new(&InferenceConfig::default());
        assert_eq!(strict.sanitize("order.line-item_2"), "orderlineitem_2");
        assert_eq!(strict.sanitize("café"), "café");

        let lenient = NameResolver::new(&InferenceConfig {
            strip_invalid_identifier_chars: false,
            ..InferenceConfig::default()
        });
        assert_eq!(lenient.sanitize("order.line-item_2"), "order.lineitem_2");
    }

    #[test]
    fn test_collision_with_registered_tag_name_adds_suffix() {
        let resolver = NameResolver::new(&InferenceConfig::default());
        let mut registry = ClassRegistry::new();
        registry.insert(with_field(candidate("aab", "ab")));

        let resolved = resolver.resolve(&candidate("ab", "b"), &registry).unwrap();
        assert_eq!(resolved.name, "ab2");
        assert_eq!(resolved.suffix, Some(2));
    }

    #[test]
    fn test_suffix_counts_every_matching_tag() {
        let resolver = NameResolver::new(&InferenceConfig::default());
        let mut registry = ClassRegistry::new();
        registry.insert(with_field(candidate("xab", "ab")));
        registry.insert(with_field(candidate("yab", "ab")));

        let resolved = resolver.resolve(&candidate("ab", "b"), &registry).unwrap();
        assert_eq!(resolved.name, "ab3");
    }

    #[test]
    fn test_already_registered_identity_keeps_plain_name() {
        let resolver = NameResolver::new(&InferenceConfig::default());
        let mut registry = ClassRegistry::new();
        registry.insert(with_field(candidate("ab", "ab")));

        let resolved = resolver.resolve(&candidate("ab", "ab"), &registry).unwrap();
        assert_eq!(resolved.name, "ab");
        assert_eq!(resolved.suffix, None);
    }

    #[test]
    fn test_nothing_left_after_stripping() {
        let resolver = NameResolver::new(&InferenceConfig::default());
        let registry = ClassRegistry::new();
        assert!(resolver.resolve(&candidate("--", "--"), &registry).is_none());
    }
}
