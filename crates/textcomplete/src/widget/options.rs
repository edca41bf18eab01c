//! Construction options for [`Dropdown`](super::Dropdown).

use std::fmt;
use std::sync::Arc;

/// Default class attribute of the dropdown surface.
pub const DEFAULT_CLASS_NAME: &str = "dropdown-menu textcomplete-dropdown";

/// Generator signature for header/footer content.
///
/// Receives the raw payloads of the results being rendered.
pub type EdgeGenerator<T> = Arc<dyn Fn(&[&T]) -> String + Send + Sync>;

/// Content of the header or footer row.
pub enum Edge<T> {
    /// Fixed text, inserted verbatim.
    Text(String),
    /// Called once per render with the raw result payloads.
    Generator(EdgeGenerator<T>),
}

impl<T> Edge<T> {
    /// Fixed text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Generated content.
    pub fn generator<F>(f: F) -> Self
    where
        F: Fn(&[&T]) -> String + Send + Sync + 'static,
    {
        Self::Generator(Arc::new(f))
    }

    /// Produce the content for the current render.
    pub(crate) fn resolve(&self, raw: &[&T]) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Generator(generate) => generate(raw),
        }
    }
}

impl<T> Clone for Edge<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Text(text) => Self::Text(text.clone()),
            Self::Generator(generate) => Self::Generator(generate.clone()),
        }
    }
}

impl<T> fmt::Debug for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

impl<T> From<&str> for Edge<T> {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl<T> From<String> for Edge<T> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Options controlling the dropdown's surface and behavior.
#[derive(Debug, Clone)]
pub struct DropdownOptions<T> {
    class_name: String,
    style: Vec<(String, String)>,
    header: Option<Edge<T>>,
    footer: Option<Edge<T>>,
    max_count: Option<usize>,
    rotate: bool,
}

impl<T> Default for DropdownOptions<T> {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            style: Vec::new(),
            header: None,
            footer: None,
            max_count: None,
            rotate: true,
        }
    }
}

impl<T> DropdownOptions<T> {
    /// Options with every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the surface class attribute.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Add an inline style applied when the surface is created.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((property.into(), value.into()));
        self
    }

    /// Render a header row before the items.
    pub fn with_header(mut self, header: impl Into<Edge<T>>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Render a footer row after the items.
    pub fn with_footer(mut self, footer: impl Into<Edge<T>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Render at most `max_count` results.
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    /// Whether keyboard navigation wraps around at either end.
    pub fn with_rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn style(&self) -> &[(String, String)] {
        &self.style
    }

    pub fn header(&self) -> Option<&Edge<T>> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&Edge<T>> {
        self.footer.as_ref()
    }

    pub fn max_count(&self) -> Option<usize> {
        self.max_count
    }

    pub fn rotate(&self) -> bool {
        self.rotate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DropdownOptions::<()>::new();
        assert_eq!(options.class_name(), DEFAULT_CLASS_NAME);
        assert!(options.style().is_empty());
        assert!(options.header().is_none());
        assert!(options.footer().is_none());
        assert_eq!(options.max_count(), None);
        assert!(options.rotate());
    }

    #[test]
    fn test_edge_resolution() {
        let text: Edge<u32> = "Users".into();
        assert_eq!(text.resolve(&[]), "Users");

        let generated = Edge::<u32>::generator(|raw| format!("{} match(es)", raw.len()));
        assert_eq!(generated.resolve(&[&1, &2]), "2 match(es)");
    }
}
