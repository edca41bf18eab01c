//! Logging helpers built on `tracing`.
//!
//! textcomplete never installs a subscriber; applications (and tests) choose
//! one. Targets follow the crate/module path, e.g. `textcomplete::dropdown`.

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for timing a whole operation such as a dropdown render.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "textcomplete::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// Thin wrappers around the `tracing` macros with a fixed target.
#[macro_export]
macro_rules! tc_trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: "textcomplete", $($arg)*)
    };
}

#[macro_export]
macro_rules! tc_debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "textcomplete", $($arg)*)
    };
}

#[macro_export]
macro_rules! tc_warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "textcomplete", $($arg)*)
    };
}
