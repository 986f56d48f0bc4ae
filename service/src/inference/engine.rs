//! Inference engine
//!
//! Walks an element tree depth-first and produces one class per structurally
//! distinct element. A child's class is always finished (named and registered)
//! before the parent's field list is built, so every field type refers to a
//! resolved name.
//!
//! The walk uses an explicit stack of ancestor frames rather than recursion,
//! so document nesting depth is bounded by memory, not by the call stack. The
//! frame stack is also the ancestor chain from which default names are built.

use tracing::{debug, info};
use xml2class_core::{Class, Element, Field};

use crate::inference::fields::{attribute_fields, deduplicate, element_field};
use crate::inference::naming::NameResolver;
use crate::inference::registry::ClassRegistry;
use crate::inference::traits::{InferenceError, InferenceResult};
use crate::inference::types::{ClassSet, InferenceConfig, InferenceStats};

/// One element on the traversal stack
struct Frame<'a> {
    element: &'a Element,
    /// Root-to-here concatenation of tag local names
    complete_name: String,
    /// Index of the next child to visit
    next_child: usize,
    /// Fields of the children finished so far
    fields: Vec<Field>,
}

impl<'a> Frame<'a> {
    fn new(element: &'a Element, complete_name: String) -> Self {
        Self {
            element,
            complete_name,
            next_child: 0,
            fields: Vec::with_capacity(element.children.len() + element.attributes.len()),
        }
    }
}

/// Class inference engine
///
/// Holds only configuration; every call to [`InferenceEngine::infer`] starts
/// from a fresh registry that is dropped when the call returns.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    config: InferenceConfig,
    resolver: NameResolver,
}

impl Default for InferenceEngine {
    fn default() -> Self {
        let config = InferenceConfig::default();
        Self {
            resolver: NameResolver::new(&config),
            config,
        }
    }
}

impl InferenceEngine {
    /// Create an engine with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::ConfigurationError` if the configuration is invalid.
    pub fn new(config: InferenceConfig) -> InferenceResult<Self> {
        config.validate()?;
        Ok(Self {
            resolver: NameResolver::new(&config),
            config,
        })
    }

    /// Configuration used by this engine
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer the classes of the document rooted at `root`.
    ///
    /// The root class is always part of the result. Other candidates are kept
    /// only when they have at least one field and their `(name, xml_name)`
    /// identity has not been registered yet.
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::InvalidIdentifier` if an element's default
    /// name is empty after stripping characters invalid in identifiers.
    pub fn infer(&self, root: &Element) -> InferenceResult<ClassSet> {
        let mut registry = ClassRegistry::new();
        let mut stats = InferenceStats {
            max_depth: 1,
            ..InferenceStats::default()
        };
        let mut root_name = String::new();
        let mut stack = vec![Frame::new(root, root.name.clone())];

        while let Some(top) = stack.last_mut() {
            let element = top.element;
            if let Some(child) = element.children.get(top.next_child) {
                top.next_child += 1;
                let complete_name = format!("{}{}", top.complete_name, child.name);
                stack.push(Frame::new(child, complete_name));
                stats.max_depth = stats.max_depth.max(stack.len());
                continue;
            }

            let Some(frame) = stack.pop() else { break };
            let class = self.finish(frame, &stack, &mut registry, &mut stats)?;
            match stack.last_mut() {
                Some(parent) => parent
                    .fields
                    .push(element_field(element, &class, &self.config.scalar_type)),
                None => root_name = class.name,
            }
        }

        info!(
            root = %root_name,
            classes = registry.len(),
            candidates = stats.candidates,
            dropped = stats.dropped,
            max_depth = stats.max_depth,
            "Class inference complete"
        );

        Ok(ClassSet::new(
            root_name,
            registry.into_classes(),
            self.config.scalar_type.clone(),
            stats,
        ))
    }

    /// Build, name and register the class of a frame whose children are all done
    fn finish(
        &self,
        frame: Frame<'_>,
        ancestors: &[Frame<'_>],
        registry: &mut ClassRegistry,
        stats: &mut InferenceStats,
    ) -> InferenceResult<Class> {
        let Frame {
            element,
            complete_name,
            mut fields,
            ..
        } = frame;
        stats.candidates += 1;

        fields.extend(attribute_fields(element, &self.config.scalar_type));
        let mut candidate = Class {
            name: complete_name,
            xml_name: element.name.clone(),
            namespace: element.namespace.clone(),
            fields: deduplicate(fields, self.config.list_xml_name),
        };

        let resolved = self
            .resolver
            .resolve(&candidate, registry)
            .ok_or_else(|| InferenceError::InvalidIdentifier {
                xml_name: element.name.clone(),
                path: element_path(ancestors, element),
            })?;
        if let Some(suffix) = resolved.suffix {
            stats.suffixed += 1;
            debug!(
                default_name = %candidate.name,
                suffix,
                "Class name collides with a registered tag name"
            );
        }
        candidate.name = resolved.name;

        let is_root = ancestors.is_empty();
        let keep =
            is_root || (candidate.has_fields() && !registry.contains(&candidate.key()));
        if keep && registry.insert(candidate.clone()) {
            stats.retained += 1;
        } else {
            stats.dropped += 1;
            debug!(
                name = %candidate.name,
                xml_name = %candidate.xml_name,
                fields = candidate.fields.len(),
                "Dropping empty or already registered class"
            );
        }

        Ok(candidate)
    }
}

/// Slash-separated tag path of `element` below `ancestors`
fn element_path(ancestors: &[Frame<'_>], element: &Element) -> String {
    let mut path = String::new();
    for frame in ancestors {
        path.push('/');
        path.push_str(&frame.element.name);
    }
    path.push('/');
    path.push_str(&element.name);
    path
}
