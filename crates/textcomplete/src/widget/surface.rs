//! Retained rendering surface for the dropdown.
//!
//! [`Surface`] stands in for the list element a toolkit would give us: a
//! root node with a class name, an inline style map and ordered children.
//! Children are [`NodeRef`] handles so that an item can keep a handle to the
//! row it rendered and toggle its own classes later.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use textcomplete_core::{Error, Result};

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// Shared handle to a child node.
pub type NodeRef = Arc<RwLock<Node>>;

/// Unique identifier of a surface, stable for the surface's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    fn next() -> Self {
        Self(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Where a surface is attached in the host tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mount {
    /// Attached directly under the document body.
    #[default]
    Body,
}

/// A child element of a surface (a list row, header or footer).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    tag: String,
    class_list: Vec<String>,
    text: String,
}

impl Node {
    /// Create an empty node with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class_list: Vec::new(),
            text: String::new(),
        }
    }

    /// Add a class using builder pattern.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Set the text content using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The element tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The space-separated class attribute.
    pub fn class_name(&self) -> String {
        self.class_list.join(" ")
    }

    /// Check whether the node carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|c| c == class)
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.class_list.push(class);
        }
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, class: &str) {
        self.class_list.retain(|c| c != class);
    }

    /// The text content.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The dropdown's root element.
#[derive(Debug)]
pub struct Surface {
    id: SurfaceId,
    mount: Mount,
    class_name: String,
    style: BTreeMap<String, String>,
    children: Vec<NodeRef>,
}

impl Surface {
    /// Tag of every surface; the dropdown renders as a list.
    pub const TAG: &'static str = "ul";

    /// Create a new, empty surface attached at `mount`.
    pub fn new(mount: Mount) -> Self {
        Self {
            id: SurfaceId::next(),
            mount,
            class_name: String::new(),
            style: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// The surface's unique id.
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Where the surface is attached.
    pub fn mount(&self) -> Mount {
        self.mount
    }

    /// The element tag.
    pub fn tag(&self) -> &'static str {
        Self::TAG
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// The class attribute.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Replace the class attribute.
    pub fn set_class_name(&mut self, class_name: impl Into<String>) {
        self.class_name = class_name.into();
    }

    /// Get an inline style value.
    ///
    /// Property names may be given in camelCase (`backgroundColor`) or
    /// kebab-case (`background-color`).
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .get(&normalize_property(property))
            .map(String::as_str)
    }

    /// Set an inline style value.
    ///
    /// Returns [`Error::InvalidStyle`] if the property name is blank.
    pub fn set_style(&mut self, property: &str, value: impl Into<String>) -> Result<()> {
        let property = normalize_property(property);
        if property.is_empty() {
            return Err(Error::invalid_style(property));
        }
        self.style.insert(property, value.into());
        Ok(())
    }

    /// Remove an inline style value, returning the old value.
    pub fn remove_style(&mut self, property: &str) -> Option<String> {
        self.style.remove(&normalize_property(property))
    }

    /// All inline styles, ordered by (normalized) property name.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.style.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set a style whose property name is known to be valid.
    pub(crate) fn put_style(&mut self, property: &'static str, value: impl Into<String>) {
        self.style.insert(property.to_string(), value.into());
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Append a node as the last child and return its handle.
    pub fn append_child(&mut self, node: Node) -> NodeRef {
        let node = Arc::new(RwLock::new(node));
        self.children.push(node.clone());
        node
    }

    /// All children, in document order.
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Child at `index`, if any.
    pub fn child(&self, index: usize) -> Option<&NodeRef> {
        self.children.get(index)
    }

    /// The first child, if any.
    pub fn first_child(&self) -> Option<&NodeRef> {
        self.children.first()
    }

    /// The last child, if any.
    pub fn last_child(&self) -> Option<&NodeRef> {
        self.children.last()
    }

    /// Remove every child.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }
}

/// Vendor prefixes written in camelCase, e.g. `WebkitTransform`.
const VENDOR_PREFIXES: [&str; 3] = ["Webkit", "Moz", "ms"];

/// Convert a camelCase property name to kebab-case and trim it.
///
/// A leading capital starts the name rather than a new word, except for
/// vendor prefixes, which map to `-webkit-`, `-moz-` and `-ms-`.
fn normalize_property(property: &str) -> String {
    let property = property.trim();
    let vendor = VENDOR_PREFIXES.iter().any(|prefix| {
        property
            .strip_prefix(prefix)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|ch| ch.is_ascii_uppercase())
    });

    let mut out = String::with_capacity(property.len() + 4);
    if vendor {
        out.push('-');
    }
    for (index, ch) in property.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if index > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
