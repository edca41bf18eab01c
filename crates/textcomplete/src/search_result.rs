//! Search results handed to the dropdown by the search controller.

use std::fmt;

/// One ranked candidate produced by a search.
///
/// The dropdown treats the payload as opaque: it only passes `data` to
/// header/footer generators and shows `label` in the row. Results are shared
/// by `Arc` between the item, the `render` payload and the `select` event.
pub struct SearchResult<T> {
    data: T,
    term: String,
    label: String,
}

impl<T> SearchResult<T> {
    /// Create a result with a pre-rendered label.
    pub fn new(data: T, term: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            data,
            term: term.into(),
            label: label.into(),
        }
    }

    /// Create a result whose label is produced by `template(data, term)`.
    pub fn from_template<F>(data: T, term: impl Into<String>, template: F) -> Self
    where
        F: FnOnce(&T, &str) -> String,
    {
        let term = term.into();
        let label = template(&data, &term);
        Self { data, term, label }
    }

    /// The raw payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The search term that matched this result.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The display content of the row.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T: fmt::Debug> fmt::Debug for SearchResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchResult")
            .field("data", &self.data)
            .field("term", &self.term)
            .finish_non_exhaustive()
    }
}
