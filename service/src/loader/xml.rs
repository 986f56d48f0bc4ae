//! XML loader
//!
//! Builds an [`Element`] tree from XML text using quick-xml's namespace-aware
//! reader. Element and attribute names are reported as local names with their
//! resolved namespace URI. Comments, processing instructions, the XML
//! declaration and DOCTYPE are skipped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use tracing::{debug, warn};
use xml2class_core::{Attribute, Element, Result, Xml2ClassError};

/// Namespace URI reported for `xmlns` declarations when they are kept
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

/// Loader options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Trim leading and trailing whitespace from text content
    pub trim_text: bool,

    /// Report `xmlns` / `xmlns:*` declarations as attributes
    pub include_namespace_declarations: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            trim_text: true,
            include_namespace_declarations: false,
        }
    }
}

/// Loads XML documents into element trees
#[derive(Debug, Clone, Default)]
pub struct XmlTreeLoader {
    config: LoaderConfig,
}

impl XmlTreeLoader {
    /// Create a loader with the given options
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Parse a document held in a string
    ///
    /// # Errors
    ///
    /// See [`XmlTreeLoader::parse_reader`].
    pub fn parse_str(&self, xml: &str) -> Result<Element> {
        self.parse_reader(xml.as_bytes())
    }

    /// Parse a document held in a byte buffer
    ///
    /// # Errors
    ///
    /// See [`XmlTreeLoader::parse_reader`].
    pub fn parse_bytes(&self, data: &[u8]) -> Result<Element> {
        self.parse_reader(data)
    }

    /// Parse a document from any buffered reader
    ///
    /// # Errors
    ///
    /// Returns `Xml2ClassError::XmlError` for malformed markup or elements left
    /// open at end of input, `Xml2ClassError::EmptyDocument` when there is no
    /// root element, `Xml2ClassError::MultipleRoots` when a second top-level
    /// element follows the root, and `Xml2ClassError::EncodingError` for names
    /// or text that are not valid UTF-8.
    pub fn parse_reader<R: BufRead>(&self, source: R) -> Result<Element> {
        let mut reader = NsReader::from_reader(source);
        reader.trim_text(self.config.trim_text);

        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(start)) => {
                    let element = self.open_element(&reader, &start)?;
                    check_single_root(&stack, root.as_ref(), &element)?;
                    stack.push(element);
                }
                Ok(Event::Empty(start)) => {
                    let element = self.open_element(&reader, &start)?;
                    check_single_root(&stack, root.as_ref(), &element)?;
                    close_element(element, &mut stack, &mut root);
                }
                Ok(Event::End(_)) => {
                    if let Some(element) = stack.pop() {
                        close_element(element, &mut stack, &mut root);
                    }
                }
                Ok(Event::Text(text)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = text
                            .unescape()
                            .map_err(|e| Xml2ClassError::encoding(e.to_string()))?;
                        append_text(current, &text);
                    }
                }
                Ok(Event::CData(data)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = utf8(data.as_ref())?;
                        if self.config.trim_text {
                            append_text(current, text.trim());
                        } else {
                            append_text(current, &text);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Xml2ClassError::xml(
                        e.to_string(),
                        position(reader.buffer_position()),
                    ));
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(Xml2ClassError::xml(
                format!("element '{}' is not closed", open.name),
                position(reader.buffer_position()),
            ));
        }

        root.ok_or(Xml2ClassError::EmptyDocument)
    }

    /// Build an element (without children) from a start tag
    fn open_element<R>(&self, reader: &NsReader<R>, start: &BytesStart<'_>) -> Result<Element> {
        let (namespace, local) = reader.resolve_element(start.name());
        let mut element = Element::new(utf8(local.as_ref())?)
            .with_namespace(namespace_uri(namespace, start.name().as_ref()));

        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| {
                Xml2ClassError::xml(e.to_string(), position(reader.buffer_position()))
            })?;
            let key = attribute.key.as_ref();
            let value = attribute
                .unescape_value()
                .map_err(|e| Xml2ClassError::encoding(e.to_string()))?
                .into_owned();

            if key == b"xmlns" || key.starts_with(b"xmlns:") {
                if self.config.include_namespace_declarations {
                    let name = key.strip_prefix(b"xmlns:").unwrap_or(key);
                    element.attributes.push(
                        Attribute::new(utf8(name)?, value).with_namespace(XMLNS_NAMESPACE),
                    );
                }
                continue;
            }

            let (namespace, local) = reader.resolve_attribute(attribute.key);
            element.attributes.push(
                Attribute::new(utf8(local.as_ref())?, value)
                    .with_namespace(namespace_uri(namespace, key)),
            );
        }

        debug!(
            element = %element.name,
            attributes = element.attributes.len(),
            "Opened element"
        );
        Ok(element)
    }
}

/// Reject a second top-level element
fn check_single_root(stack: &[Element], root: Option<&Element>, element: &Element) -> Result<()> {
    if stack.is_empty() && root.is_some() {
        return Err(Xml2ClassError::MultipleRoots {
            name: element.name.clone(),
        });
    }
    Ok(())
}

/// Attach a finished element to its parent, or make it the root
fn close_element(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn append_text(element: &mut Element, text: &str) {
    if text.is_empty() {
        return;
    }
    match element.text.as_mut() {
        Some(existing) => existing.push_str(text),
        None => element.text = Some(text.to_string()),
    }
}

fn namespace_uri(result: ResolveResult<'_>, qualified_name: &[u8]) -> String {
    match result {
        ResolveResult::Bound(namespace) => String::from_utf8_lossy(namespace.as_ref()).into_owned(),
        ResolveResult::Unbound => String::new(),
        ResolveResult::Unknown(prefix) => {
            warn!(
                name = %String::from_utf8_lossy(qualified_name),
                prefix = %String::from_utf8_lossy(&prefix),
                "Namespace prefix is not declared; treating name as unqualified"
            );
            String::new()
        }
    }
}

fn utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| Xml2ClassError::encoding(e.to_string()))
}

fn position(offset: usize) -> u64 {
    u64::try_from(offset).unwrap_or(u64::MAX)
}
