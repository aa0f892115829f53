//! Render targets
//!
//! Motions never touch a rendering surface directly. They write through the
//! [`RenderTarget`] trait, which a host implements for its element handle
//! (a DOM node, a scene-graph node, ...). [`MemoryTarget`] is a plain
//! in-memory implementation used by tests and the CLI preview.

use indexmap::IndexMap;
use serde::Serialize;

/// SVG namespace URI, used for generated `<stop>` children
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A child element to insert under a target
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ElementNode {
    /// Namespace URI, `None` for the host's default namespace
    pub namespace: Option<String>,
    pub tag: String,
    /// Attributes in insertion order
    pub attributes: Vec<(String, String)>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            namespace: None,
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    /// Create an element in the SVG namespace
    pub fn svg(tag: impl Into<String>) -> Self {
        Self {
            namespace: Some(SVG_NAMESPACE.to_string()),
            ..Self::new(tag)
        }
    }

    /// Add an attribute (builder pattern)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The element a motion writes to
///
/// Every mutation a motion performs goes through these methods. Removing a
/// property or attribute that was never set must be a no-op.
pub trait RenderTarget {
    /// Set an inline style property
    fn set_style(&mut self, property: &str, value: &str);

    /// Remove an inline style property
    fn remove_style(&mut self, property: &str);

    fn set_attribute(&mut self, name: &str, value: &str);

    fn remove_attribute(&mut self, name: &str);

    /// Replace all children with `children`. An empty list clears them.
    fn replace_children(&mut self, children: Vec<ElementNode>);
}

/// In-memory render target
///
/// Records styles and attributes in the order they were first set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryTarget {
    pub styles: IndexMap<String, String>,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<ElementNode>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// True when nothing has been written (or everything was reverted)
    pub fn is_pristine(&self) -> bool {
        self.styles.is_empty() && self.attributes.is_empty() && self.children.is_empty()
    }
}

impl RenderTarget for MemoryTarget {
    fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }

    fn remove_style(&mut self, property: &str) {
        self.styles.shift_remove(property);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.shift_remove(name);
    }

    fn replace_children(&mut self, children: Vec<ElementNode>) {
        self.children = children;
    }
}
