//! The terminal browser's window: a document, its layout, and a scrollable viewport.
//!
//! Distances are measured in the same units the tracker thresholds use. One terminal row is
//! `row_height` units tall, so a page laid out into rows can answer the same "where is this
//! element relative to the viewport" question a browser does.

use crate::click::{ScrollBehavior, ScrollRequest};
use crate::dom::{Document, NodeId};
use crate::layout::Layout;
use crate::page::{
    Page, Rect, ACTIVE_CLASS, HERO_CLASS, MENU_CONTAINER_ID, MENU_LINK_CLASS, NAV_ATTRIBUTE,
    NAV_MARKER, SECTION_TAG,
};
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Size of the visible area.
pub struct Viewport {
    /// Columns available for page text.
    pub width: usize,
    /// Visible rows.
    pub height: usize,
    /// Distance units per row.
    pub row_height: f64,
}

/// A loaded page plus scroll state.
pub struct Window {
    document: Document,
    layout: Layout,
    viewport: Viewport,
    scroll_y: f64,
    smooth_target: Option<f64>,
}

#[allow(clippy::cast_precision_loss)]
fn rows_to_units(rows: usize, row_height: f64) -> f64 {
    rows as f64 * row_height
}

impl Window {
    #[must_use]
    /// Lays out `document` for `viewport`, scrolled to the top.
    pub fn new(document: Document, viewport: Viewport) -> Self {
        let layout = Layout::compute(&document, viewport.width);
        Self {
            document,
            layout,
            viewport,
            scroll_y: 0.0,
            smooth_target: None,
        }
    }

    #[must_use]
    /// The page's document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    /// Current layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn refresh_layout(&mut self) {
        if !self.layout.is_current(&self.document, self.viewport.width) {
            self.layout = Layout::compute(&self.document, self.viewport.width);
            trace!(rows = self.layout.height(), "relayout");
        }
        let max = self.max_scroll();
        let y = self.scroll_y.clamp(0.0, max);
        self.scroll_y = y;
        // A target the page can no longer reach is pulled back to the new bottom.
        self.smooth_target = self
            .smooth_target
            .map(|target| target.clamp(0.0, max))
            .filter(|target| (target - y).abs() > f64::EPSILON);
    }

    /// Applies a structural change to the document and lays it out again.
    pub fn mutate(&mut self, f: impl FnOnce(&mut Document)) {
        f(&mut self.document);
        self.refresh_layout();
    }

    /// Changes the viewport size. Returns whether the scroll offset had to move.
    pub fn resize(&mut self, width: usize, height: usize) -> bool {
        let before = self.scroll_y;
        self.viewport.width = width;
        self.viewport.height = height;
        self.refresh_layout();
        (self.scroll_y - before).abs() > f64::EPSILON
    }

    #[must_use]
    /// Current scroll offset from the top of the page.
    pub const fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    #[must_use]
    /// Largest reachable scroll offset, never negative.
    pub fn max_scroll(&self) -> f64 {
        let hidden = self.layout.height().saturating_sub(self.viewport.height);
        // `f64::max` also maps a NaN product to zero.
        rows_to_units(hidden, self.viewport.row_height).max(0.0)
    }

    #[must_use]
    /// Index of the first row visible in the viewport.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn first_visible_row(&self) -> usize {
        (self.scroll_y / self.viewport.row_height).floor() as usize
    }

    /// Scrolls to `y` (clamped), cancelling any smooth scroll. Returns whether the offset changed.
    pub fn scroll_to(&mut self, y: f64) -> bool {
        self.smooth_target = None;
        self.set_scroll(y)
    }

    /// Scrolls by `dy` units. Returns whether the offset changed.
    pub fn scroll_by(&mut self, dy: f64) -> bool {
        self.scroll_to(self.scroll_y + dy)
    }

    fn set_scroll(&mut self, y: f64) -> bool {
        let y = y.clamp(0.0, self.max_scroll());
        let changed = (y - self.scroll_y).abs() > f64::EPSILON;
        self.scroll_y = y;
        changed
    }

    #[must_use]
    /// Offset of an element's top edge from the top of the page.
    pub fn document_top(&self, node: NodeId) -> Option<f64> {
        self.layout
            .rows_of(node)
            .map(|rows| rows_to_units(rows.start, self.viewport.row_height))
    }

    /// Carries out a scroll request.
    ///
    /// Instant requests move immediately; smooth ones only set the target, which
    /// [`Window::step_smooth_scroll`] then approaches frame by frame. Returns whether anything
    /// changed or started moving.
    pub fn scroll_into_view(&mut self, request: &ScrollRequest) -> bool {
        let Some(target) = self
            .document
            .element_by_id(&request.target_id)
            .and_then(|node| self.document_top(node))
        else {
            return false;
        };
        let target = target.clamp(0.0, self.max_scroll());
        match request.behavior {
            ScrollBehavior::Instant => self.scroll_to(target),
            ScrollBehavior::Smooth => {
                if (target - self.scroll_y).abs() <= f64::EPSILON {
                    self.smooth_target = None;
                    return false;
                }
                self.smooth_target = Some(target);
                true
            }
        }
    }

    #[must_use]
    /// Whether a smooth scroll is still in flight.
    pub const fn is_smooth_scrolling(&self) -> bool {
        self.smooth_target.is_some()
    }

    /// Advances a smooth scroll by at most `step` units. Returns whether the offset changed.
    pub fn step_smooth_scroll(&mut self, step: f64) -> bool {
        let Some(target) = self.smooth_target else {
            return false;
        };
        let delta = target - self.scroll_y;
        let next = if delta.abs() <= step {
            self.smooth_target = None;
            target
        } else {
            self.scroll_y + step.copysign(delta)
        };
        let moved = self.set_scroll(next);
        if !moved {
            self.smooth_target = None;
        }
        moved
    }
}

impl Page for Window {
    type Node = NodeId;

    fn navigable_sections(&self) -> Vec<NodeId> {
        self.document.query_all(|doc, n| {
            doc.tag_name(n) == Some(SECTION_TAG)
                && doc
                    .attribute(n, NAV_ATTRIBUTE)
                    .is_some_and(|v| v.contains(NAV_MARKER))
        })
    }

    fn hero_heading(&self) -> Option<NodeId> {
        self.document
            .first_by_class(HERO_CLASS)
            .and_then(|hero| self.document.first_element_child(hero))
    }

    fn menu_container(&self) -> Option<NodeId> {
        self.document.element_by_id(MENU_CONTAINER_ID)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document.element_by_id(id)
    }

    fn tag_name(&self, node: NodeId) -> Option<String> {
        self.document.tag_name(node).map(str::to_string)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.document.attribute(node, name).map(str::to_string)
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        // Elements that were not laid out report an empty box at the origin.
        let Some(rows) = self.layout.rows_of(node) else {
            return Rect::new(0.0, 0.0);
        };
        let row_height = self.viewport.row_height;
        Rect::new(
            rows_to_units(rows.start, row_height) - self.scroll_y,
            rows_to_units(rows.end, row_height) - self.scroll_y,
        )
    }

    fn has_marker(&self, node: NodeId) -> bool {
        self.document.has_class(node, ACTIVE_CLASS)
    }

    fn add_marker(&mut self, node: NodeId) {
        self.document.add_class(node, ACTIVE_CLASS);
    }

    fn remove_marker(&mut self, node: NodeId) {
        self.document.remove_class(node, ACTIVE_CLASS);
    }

    fn menu_hrefs(&self, container: NodeId) -> Vec<String> {
        self.document
            .descendants(container)
            .into_iter()
            .filter(|n| self.document.tag_name(*n) == Some("a"))
            .filter_map(|n| self.document.attribute(n, "href").map(str::to_string))
            .collect()
    }

    fn append_menu_item(&mut self, container: NodeId, href: &str, label: &str) -> NodeId {
        let doc = &mut self.document;
        let item = doc.create_element("li");
        let link = doc.create_element("a");
        doc.set_attribute(link, "href", href);
        doc.set_attribute(link, "class", MENU_LINK_CLASS);
        let text = doc.create_text(label);
        doc.append_child(link, text);
        doc.append_child(item, link);
        doc.append_child(container, item);
        self.refresh_layout();
        item
    }
}

#[cfg(test)]
#[path = "tests/window.rs"]
mod tests;
