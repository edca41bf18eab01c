//! Widget layer of textcomplete.
//!
//! - [`Dropdown`]: the suggestion list and its visibility/selection state
//! - [`DropdownItem`]: one row, wrapping a [`SearchResult`](crate::SearchResult)
//! - [`DropdownOptions`] and [`Edge`]: construction options
//! - [`Surface`] and [`Node`]: the retained tree the dropdown renders into

pub mod dropdown;
pub mod dropdown_item;
pub mod options;
pub mod surface;

pub use dropdown::{
    CursorOffset, Dropdown, DropdownSignals, FOOTER_CLASS, HEADER_CLASS, RenderEvent, SelectEvent,
};
pub use dropdown_item::{ACTIVE_CLASS, DropdownItem, ITEM_CLASS};
pub use options::{DEFAULT_CLASS_NAME, DropdownOptions, Edge, EdgeGenerator};
pub use surface::{Mount, Node, NodeRef, Surface, SurfaceId};
