//! Prelude module for textcomplete.
//!
//! ```ignore
//! use textcomplete::prelude::*;
//! ```

pub use crate::config::DropdownConfig;
pub use crate::search_result::SearchResult;
pub use crate::widget::{
    CursorOffset, Dropdown, DropdownItem, DropdownOptions, DropdownSignals, Edge, SelectEvent,
    Surface,
};
pub use textcomplete_core::{CancelableEvent, ConnectionId, Error, Result, Signal};
