//! Cancelable event objects.
//!
//! A [`CancelableEvent`] carries a payload and a `default_prevented` flag.
//! Listeners receive it by shared reference and may call
//! [`prevent_default`](CancelableEvent::prevent_default); the emitter checks
//! the flag only after every listener has run and then decides whether to
//! perform the paired follow-up (state change plus the "-ed" signal).

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// An event whose default follow-up can be suppressed by any listener.
pub struct CancelableEvent<T> {
    payload: T,
    default_prevented: AtomicBool,
}

impl<T> CancelableEvent<T> {
    /// Create a fresh, not-yet-prevented event.
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            default_prevented: AtomicBool::new(false),
        }
    }

    /// The event payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume the event, returning its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Mark the event as prevented. Idempotent.
    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }

    /// Whether any listener has prevented the default action.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }
}

impl<T: fmt::Debug> fmt::Debug for CancelableEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelableEvent")
            .field("payload", &self.payload)
            .field("default_prevented", &self.is_default_prevented())
            .finish()
    }
}
