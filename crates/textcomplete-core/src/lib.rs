//! Core systems for textcomplete.
//!
//! This crate provides the foundations the widget layer is built on:
//!
//! - **Signal/Slot System**: synchronous, ordered listener dispatch
//! - **Cancelable Events**: payload plus a `default_prevented` flag
//! - **Errors**: the shared [`Error`] type
//! - **Logging**: `tracing` helpers with consistent targets
//!
//! # Example
//!
//! ```
//! use textcomplete_core::{CancelableEvent, Signal};
//!
//! let hide = Signal::<CancelableEvent<()>>::new();
//! let hidden = Signal::<()>::new();
//!
//! hide.connect(|event| event.prevent_default());
//! hidden.connect(|_| unreachable!("hide was prevented"));
//!
//! let event = CancelableEvent::new(());
//! hide.dispatch(&event);
//! if !event.is_default_prevented() {
//!     hidden.emit(());
//! }
//! ```

mod error;
mod event;
pub mod logging;
pub mod signal;

pub use error::{Error, Result};
pub use event::CancelableEvent;
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};

// Used by the exported logging macros
#[doc(hidden)]
pub use tracing;
