//! The autocomplete dropdown.
//!
//! [`Dropdown`] shows a ranked list of [`SearchResult`]s anchored at the text
//! cursor, tracks one active item for keyboard navigation and reports its
//! lifecycle through the signals in [`DropdownSignals`].
//!
//! # Lifecycle
//!
//! ```text
//! render ──► (layout) ──► [show ──► shown] ──► rendered
//! deactivate ──► [hide ──► hidden] ──► (clear)
//! select_active_item ──► callback ──► deactivate ──► select
//! ```
//!
//! `render`, `show` and `hide` carry a [`CancelableEvent`]. Preventing `show`
//! or `hide` cancels the visibility change and its "-ed" signal. Preventing
//! `render` only suppresses `rendered`; the items are still laid out.
//!
//! # Example
//!
//! ```
//! use textcomplete::widget::{CursorOffset, Dropdown, DropdownOptions};
//! use textcomplete::SearchResult;
//!
//! let mut dropdown = Dropdown::<&str>::new(DropdownOptions::new().with_header("Emoji"));
//! dropdown.signals().select.connect(|event| {
//!     println!("selected {}", event.search_result.label());
//! });
//!
//! dropdown.render(
//!     vec![
//!         SearchResult::new("smile", "sm", ":smile:"),
//!         SearchResult::new("smirk", "sm", ":smirk:"),
//!     ],
//!     CursorOffset::new(12.0, 40.0),
//! );
//!
//! dropdown.down(|item| println!("highlighted {}", item.search_result().label()));
//! dropdown.select_active_item(|_| {});
//! assert!(!dropdown.is_shown());
//! ```

use std::fmt;
use std::sync::Arc;

use textcomplete_core::{CancelableEvent, Error, PerfSpan, Result, Signal};

use super::dropdown_item::DropdownItem;
use super::options::DropdownOptions;
use super::surface::{Mount, Node, Surface};
use crate::search_result::SearchResult;

/// Class of the header row.
pub const HEADER_CLASS: &str = "textcomplete-header";

/// Class of the footer row.
pub const FOOTER_CLASS: &str = "textcomplete-footer";

/// Payload of the cancelable `render` signal: the results about to be shown.
pub type RenderEvent<T> = CancelableEvent<Vec<Arc<SearchResult<T>>>>;

/// Payload of the `select` signal.
pub struct SelectEvent<T> {
    /// The chosen result.
    pub search_result: Arc<SearchResult<T>>,
}

impl<T> SelectEvent<T> {
    pub fn new(search_result: Arc<SearchResult<T>>) -> Self {
        Self { search_result }
    }
}

impl<T> fmt::Debug for SelectEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectEvent")
            .field("label", &self.search_result.label())
            .finish()
    }
}

/// Anchor coordinates of the dropdown, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorOffset {
    pub top: f64,
    pub left: f64,
}

impl CursorOffset {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Signals emitted by a [`Dropdown`].
pub struct DropdownSignals<T> {
    /// Emitted first thing in `render` with the incoming results. Cancelable.
    pub render: Signal<RenderEvent<T>>,
    /// Emitted at the end of `render`, unless `render` was prevented.
    pub rendered: Signal<()>,
    /// Emitted before the dropdown becomes visible. Cancelable.
    pub show: Signal<CancelableEvent<()>>,
    /// Emitted after the dropdown became visible.
    pub shown: Signal<()>,
    /// Emitted before the dropdown is hidden. Cancelable.
    pub hide: Signal<CancelableEvent<()>>,
    /// Emitted after the dropdown was hidden.
    pub hidden: Signal<()>,
    /// Emitted when a result is chosen.
    pub select: Signal<SelectEvent<T>>,
}

impl<T: 'static> Default for DropdownSignals<T> {
    fn default() -> Self {
        Self {
            render: Signal::new(),
            rendered: Signal::new(),
            show: Signal::new(),
            shown: Signal::new(),
            hide: Signal::new(),
            hidden: Signal::new(),
            select: Signal::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// The suggestion list of an autocomplete.
///
/// Invalid calls (navigating or selecting while hidden or empty) are silent
/// no-ops. At most one item is active at a time as long as items are only
/// activated through [`up`](Self::up) and [`down`](Self::down).
pub struct Dropdown<T> {
    options: DropdownOptions<T>,
    items: Vec<DropdownItem<T>>,
    shown: bool,
    surface: Option<Surface>,
    signals: DropdownSignals<T>,
}

impl<T: 'static> Default for Dropdown<T> {
    fn default() -> Self {
        Self::new(DropdownOptions::default())
    }
}

impl<T: 'static> Dropdown<T> {
    /// Create a hidden, empty dropdown. The surface is created on first use.
    pub fn new(options: DropdownOptions<T>) -> Self {
        Self {
            options,
            items: Vec::new(),
            shown: false,
            surface: None,
            signals: DropdownSignals::default(),
        }
    }

    /// Create a hidden surface attached under the document body.
    pub fn create_element() -> Surface {
        let mut surface = Surface::new(Mount::Body);
        surface.put_style("display", "none");
        surface.put_style("position", "absolute");
        surface.put_style("z-index", "10000");
        surface
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The dropdown's surface, created and styled on first access.
    pub fn el(&mut self) -> &mut Surface {
        let options = &self.options;
        self.surface.get_or_insert_with(|| {
            let mut surface = Self::create_element();
            surface.set_class_name(options.class_name());
            for (property, value) in options.style() {
                if let Err(err) = surface.set_style(property, value.as_str()) {
                    textcomplete_core::tc_warn!(%err, "ignoring dropdown style");
                }
            }
            tracing::debug!(
                target: "textcomplete::dropdown",
                surface = ?surface.id(),
                "surface created"
            );
            surface
        })
    }

    /// The surface, if it has been created.
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn options(&self) -> &DropdownOptions<T> {
        &self.options
    }

    pub fn signals(&self) -> &DropdownSignals<T> {
        &self.signals
    }

    /// Whether the dropdown is visible.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// The current items, in rank order.
    pub fn items(&self) -> &[DropdownItem<T>] {
        &self.items
    }

    /// Mutable access to one item, e.g. to activate it directly.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut DropdownItem<T>> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The active item, or `None` if no item is active.
    pub fn active_item(&self) -> Option<&DropdownItem<T>> {
        self.items.iter().find(|item| item.is_active())
    }

    /// Index of the active item.
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(DropdownItem::is_active)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Replace the items with `results` and show the dropdown at `offset`.
    ///
    /// Emits `render` first. The surface is rebuilt (header, items, footer),
    /// moved to `offset` and shown if hidden, even when `results` is empty.
    /// `rendered` follows unless a listener prevented `render`.
    pub fn render<I, R>(&mut self, results: I, offset: CursorOffset) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Arc<SearchResult<T>>>,
    {
        let _perf = PerfSpan::new("dropdown.render");

        let event = RenderEvent::new(results.into_iter().map(Into::into).collect());
        self.signals.render.dispatch(&event);
        let prevented = event.is_default_prevented();
        let mut results = event.into_payload();

        // Edges see every result, only the rows are capped.
        let (header, footer) = {
            let raw: Vec<&T> = results.iter().map(|result| result.data()).collect();
            (
                self.options.header().map(|edge| edge.resolve(&raw)),
                self.options.footer().map(|edge| edge.resolve(&raw)),
            )
        };

        if let Some(max_count) = self.options.max_count() {
            results.truncate(max_count);
        }

        tracing::debug!(
            target: "textcomplete::dropdown",
            count = results.len(),
            prevented,
            "rendering dropdown"
        );

        self.clear();
        if let Some(header) = header {
            self.el()
                .append_child(Node::new("li").with_class(HEADER_CLASS).with_text(header));
        }
        self.append(results.into_iter().map(DropdownItem::new).collect());
        if let Some(footer) = footer {
            self.el()
                .append_child(Node::new("li").with_class(FOOTER_CLASS).with_text(footer));
        }
        self.set_offset(offset);
        self.show();

        if !prevented {
            self.signals.rendered.emit(());
        }
        self
    }

    /// Move the surface to `offset`.
    pub fn set_offset(&mut self, offset: CursorOffset) -> &mut Self {
        let surface = self.el();
        surface.put_style("top", format!("{}px", offset.top));
        surface.put_style("left", format!("{}px", offset.left));
        self
    }

    /// Store `items` in order and let each render itself into the surface.
    pub fn append(&mut self, items: Vec<DropdownItem<T>>) -> &mut Self {
        for mut item in items {
            item.appended(self.el());
            self.items.push(item);
        }
        self
    }

    /// Remove every row and drop every item.
    pub fn clear(&mut self) -> &mut Self {
        for item in &mut self.items {
            item.finalize();
        }
        self.items.clear();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear_children();
        }
        self
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Make the dropdown visible. No-op when already shown.
    pub fn show(&mut self) -> &mut Self {
        if self.shown {
            return self;
        }

        let event = CancelableEvent::new(());
        self.signals.show.dispatch(&event);
        if event.is_default_prevented() {
            tracing::debug!(target: "textcomplete::dropdown", "show prevented");
            return self;
        }

        self.el().put_style("display", "block");
        self.shown = true;
        tracing::debug!(target: "textcomplete::dropdown", "dropdown shown");
        self.signals.shown.emit(());
        self
    }

    /// Hide the dropdown. No-op when already hidden.
    pub fn hide(&mut self) -> &mut Self {
        if !self.shown {
            return self;
        }

        let event = CancelableEvent::new(());
        self.signals.hide.dispatch(&event);
        if event.is_default_prevented() {
            tracing::debug!(target: "textcomplete::dropdown", "hide prevented");
            return self;
        }

        self.el().put_style("display", "none");
        self.shown = false;
        tracing::debug!(target: "textcomplete::dropdown", "dropdown hidden");
        self.signals.hidden.emit(());
        self
    }

    /// Hide the dropdown and drop its items.
    ///
    /// The items are cleared even if a listener prevents `hide`.
    pub fn deactivate(&mut self) -> &mut Self {
        self.hide().clear()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Emit `select` for `item`. Visibility and items are left untouched.
    pub fn select(&self, item: &DropdownItem<T>) {
        self.signals
            .select
            .emit(SelectEvent::new(item.search_result().clone()));
    }

    /// Choose the item at `index` as if its row was clicked: deactivate the
    /// dropdown, then emit `select`.
    pub fn select_at(&mut self, index: usize) -> Result<()> {
        let len = self.items.len();
        let search_result = self
            .items
            .get(index)
            .map(|item| item.search_result().clone())
            .ok_or(Error::ItemOutOfRange { index, len })?;

        self.deactivate();
        self.signals.select.emit(SelectEvent::new(search_result));
        Ok(())
    }

    /// Choose the active item.
    ///
    /// When shown with an active item: calls `callback` with it, deactivates
    /// the dropdown, then emits `select`. Otherwise does nothing.
    pub fn select_active_item<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce(&DropdownItem<T>),
    {
        if !self.shown {
            tracing::trace!(target: "textcomplete::dropdown", "select ignored, dropdown hidden");
            return self;
        }
        let Some(index) = self.active_index() else {
            tracing::trace!(target: "textcomplete::dropdown", "select ignored, no active item");
            return self;
        };

        callback(&self.items[index]);
        let search_result = self.items[index].search_result().clone();
        self.deactivate();
        self.signals.select.emit(SelectEvent::new(search_result));
        self
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Activate the previous item and pass it to `callback`.
    ///
    /// With no active item, or from the first item, the last item is
    /// activated (the first stays active when rotation is off).
    pub fn up<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce(&DropdownItem<T>),
    {
        self.navigate(Direction::Up, callback)
    }

    /// Activate the next item and pass it to `callback`.
    ///
    /// With no active item the first item is activated; from the last item
    /// the selection wraps to the first (stays put when rotation is off).
    pub fn down<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce(&DropdownItem<T>),
    {
        self.navigate(Direction::Down, callback)
    }

    fn navigate<F>(&mut self, direction: Direction, callback: F) -> &mut Self
    where
        F: FnOnce(&DropdownItem<T>),
    {
        if !self.shown || self.items.is_empty() {
            tracing::trace!(target: "textcomplete::dropdown", ?direction, "navigation ignored");
            return self;
        }

        let last = self.items.len() - 1;
        let rotate = self.options.rotate();
        let current = self.active_index();
        let next = match (direction, current) {
            (Direction::Up, None) => last,
            (Direction::Up, Some(0)) => {
                if rotate {
                    last
                } else {
                    0
                }
            }
            (Direction::Up, Some(index)) => index - 1,
            (Direction::Down, None) => 0,
            (Direction::Down, Some(index)) if index == last => {
                if rotate {
                    0
                } else {
                    last
                }
            }
            (Direction::Down, Some(index)) => index + 1,
        };

        // Also repairs items activated out of band through `item_mut`
        for item in self.items.iter_mut().filter(|item| item.is_active()) {
            item.deactivate();
        }
        self.items[next].activate();
        tracing::trace!(
            target: "textcomplete::dropdown",
            ?direction,
            from = ?current,
            to = next,
            "active item moved"
        );

        callback(&self.items[next]);
        self
    }
}

impl<T> fmt::Debug for Dropdown<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("shown", &self.shown)
            .field("items_count", &self.items.len())
            .field("surface", &self.surface.as_ref().map(Surface::id))
            .finish()
    }
}
