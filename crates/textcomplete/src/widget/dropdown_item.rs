//! A single row of the dropdown.

use std::fmt;
use std::sync::Arc;

use super::surface::{Node, NodeRef, Surface};
use crate::search_result::SearchResult;

/// Class carried by every item row.
pub const ITEM_CLASS: &str = "textcomplete-item";

/// Class added to the row of the active item.
pub const ACTIVE_CLASS: &str = "active";

/// Wraps one [`SearchResult`] and tracks whether it is the active row.
///
/// Items are created by [`Dropdown::render`](super::Dropdown::render) and live
/// until the next render or [`Dropdown::clear`](super::Dropdown::clear).
/// `activate` does not look at sibling items; the dropdown deactivates the
/// previous item before activating the next one.
pub struct DropdownItem<T> {
    search_result: Arc<SearchResult<T>>,
    active: bool,
    node: Option<NodeRef>,
}

impl<T> DropdownItem<T> {
    /// Wrap a search result. The item starts inactive and unrendered.
    pub fn new(search_result: impl Into<Arc<SearchResult<T>>>) -> Self {
        Self {
            search_result: search_result.into(),
            active: false,
            node: None,
        }
    }

    /// The wrapped search result.
    pub fn search_result(&self) -> &Arc<SearchResult<T>> {
        &self.search_result
    }

    /// Whether this item is the highlighted one.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The rendered row, once appended.
    pub fn node(&self) -> Option<&NodeRef> {
        self.node.as_ref()
    }

    /// Mark this item active and highlight its row.
    pub fn activate(&mut self) -> &mut Self {
        if !self.active {
            self.active = true;
            if let Some(node) = &self.node {
                node.write().add_class(ACTIVE_CLASS);
            }
        }
        self
    }

    /// Clear the active flag and the row highlight.
    pub fn deactivate(&mut self) -> &mut Self {
        if self.active {
            self.active = false;
            if let Some(node) = &self.node {
                node.write().remove_class(ACTIVE_CLASS);
            }
        }
        self
    }

    /// Render this item as the next row of `surface`.
    pub fn appended(&mut self, surface: &mut Surface) {
        let mut row = Node::new("li")
            .with_class(ITEM_CLASS)
            .with_text(self.search_result.label());
        if self.active {
            row.add_class(ACTIVE_CLASS);
        }
        self.node = Some(surface.append_child(row));
        textcomplete_core::tc_trace!(label = self.search_result.label(), "item appended");
    }

    /// Release the rendered row. Called when the dropdown drops its items.
    pub fn finalize(&mut self) {
        self.node = None;
    }
}

impl<T> fmt::Debug for DropdownItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownItem")
            .field("label", &self.search_result.label())
            .field("active", &self.active)
            .field("rendered", &self.node.is_some())
            .finish()
    }
}
