//! textcomplete - the dropdown half of an autocomplete.
//!
//! This is the main crate: it re-exports the core systems
//! ([`Signal`], [`CancelableEvent`], [`Error`]) and adds the widget layer.
//!
//! # Example
//!
//! ```
//! use textcomplete::prelude::*;
//!
//! let mut dropdown = Dropdown::<String>::new(DropdownOptions::new());
//! dropdown.signals().hide.connect(|event| event.prevent_default());
//!
//! dropdown.render(
//!     vec![SearchResult::new("alice".to_string(), "al", "@alice")],
//!     CursorOffset::new(18.0, 4.0),
//! );
//! dropdown.deactivate();
//!
//! // Hide was prevented, but the items are gone
//! assert!(dropdown.is_shown());
//! assert!(dropdown.is_empty());
//! ```

pub use textcomplete_core::*;

pub mod config;
pub mod prelude;
mod search_result;
pub mod widget;

pub use config::DropdownConfig;
pub use search_result::SearchResult;
