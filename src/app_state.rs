//! The state machine bridging terminal input and the page.
//!
//! Input arrives as key presses, mouse events and frame ticks. Anything that moves the scroll
//! offset is turned into a scroll notification, which runs the tracker against the window;
//! anything that lands on the menu is turned into a click notification on the menu container.

use crate::click::{self, ClickEvent};
use crate::config::Config;
use crate::dom::{Document, NodeId};
use crate::error::Result;
use crate::menu;
use crate::page::Page;
use crate::report;
use crate::tracker::{self, ScrollOutcome};
use crate::window::{Viewport, Window};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One menu row as currently found in the page.
pub struct MenuEntry {
    /// The `li` element.
    pub item: NodeId,
    /// The `a` element inside it.
    pub link: NodeId,
    /// Visible text.
    pub label: String,
    /// Link destination.
    pub href: String,
    /// Whether the section the link points at carries the active marker.
    pub active: bool,
}

/// Session state for the terminal browser.
pub struct AppState {
    /// The page being viewed.
    pub window: Window,
    /// Menu row highlighted for keyboard clicks.
    pub selected_link: usize,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Report of the latest scroll notification.
    pub last_outcome: Option<ScrollOutcome>,
    /// Scroll notifications delivered so far.
    pub notifications: usize,
    scroll_step: usize,
    smooth_scroll_step: f64,
}

impl AppState {
    /// Opens `document` in a window, installs the menu and delivers an initial scroll
    /// notification so the first section starts highlighted.
    ///
    /// # Errors
    ///
    /// Returns an error if the page lacks a menu container or a hero heading.
    pub fn new(document: Document, viewport: Viewport, cfg: &Config) -> Result<Self> {
        let mut window = Window::new(document, viewport);
        menu::install(&mut window)?;
        let mut app = Self {
            window,
            selected_link: 0,
            message: None,
            last_outcome: None,
            notifications: 0,
            scroll_step: cfg.scroll_step.max(1),
            smooth_scroll_step: cfg.smooth_scroll_step.max(1.0),
        };
        app.notify_scroll()?;
        Ok(app)
    }

    /// Delivers one scroll notification.
    ///
    /// # Errors
    ///
    /// Propagates tracker errors.
    pub fn notify_scroll(&mut self) -> Result<()> {
        let outcome = tracker::on_scroll(&mut self.window)?;
        self.notifications += 1;
        self.last_outcome = Some(outcome);
        Ok(())
    }

    fn notify_or_report(&mut self) {
        if let Err(e) = self.notify_scroll() {
            warn!(error = %e, "scroll notification failed");
            self.message = Some(format!("Error: {e}"));
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn rows_to_units(&self, rows: isize) -> f64 {
        rows as f64 * self.window.viewport().row_height
    }

    /// Scrolls by `rows` (negative is up), notifying if the offset moved.
    pub fn scroll_rows(&mut self, rows: isize) {
        if self.window.scroll_by(self.rows_to_units(rows)) {
            self.notify_or_report();
        }
    }

    /// Scrolls by `steps` arrow-key steps.
    #[allow(clippy::cast_possible_wrap)]
    pub fn scroll_steps(&mut self, steps: isize) {
        self.scroll_rows(steps * self.scroll_step as isize);
    }

    /// Scrolls by whole viewport heights.
    #[allow(clippy::cast_possible_wrap)]
    pub fn scroll_pages(&mut self, pages: isize) {
        let height = self.window.viewport().height.saturating_sub(1).max(1);
        self.scroll_rows(pages * height as isize);
    }

    /// Jumps to the top of the page.
    pub fn scroll_home(&mut self) {
        if self.window.scroll_to(0.0) {
            self.notify_or_report();
        }
    }

    /// Jumps to the bottom of the page.
    pub fn scroll_end(&mut self) {
        let bottom = self.window.max_scroll();
        if self.window.scroll_to(bottom) {
            self.notify_or_report();
        }
    }

    /// Adapts to a new terminal size.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.window.resize(width, height) {
            self.notify_or_report();
        }
    }

    /// Advances an in-flight smooth scroll by one frame. Returns whether it moved.
    pub fn tick(&mut self) -> bool {
        let moved = self.window.step_smooth_scroll(self.smooth_scroll_step);
        if moved {
            self.notify_or_report();
        }
        moved
    }

    #[must_use]
    /// Menu rows as currently present in the page's menu container.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        let Some(container) = self.window.menu_container() else {
            return Vec::new();
        };
        let doc = self.window.document();
        doc.element_children(container)
            .filter_map(|item| {
                let link = doc
                    .element_children(item)
                    .find(|n| doc.tag_name(*n) == Some("a"))?;
                let href = doc.attribute(link, "href").unwrap_or_default().to_string();
                let active = href
                    .strip_prefix('#')
                    .and_then(|id| self.window.element_by_id(id))
                    .is_some_and(|section| self.window.has_marker(section));
                Some(MenuEntry {
                    item,
                    link,
                    label: doc.text_content(link),
                    href,
                    active,
                })
            })
            .collect()
    }

    #[must_use]
    /// `id`s of the sections currently marked active, in document order.
    pub fn active_section_ids(&self) -> Vec<String> {
        report::active_section_ids(&self.window)
    }

    /// Moves the keyboard selection to the next menu row, wrapping around.
    pub fn select_next_link(&mut self) {
        let count = self.menu_entries().len();
        if count > 0 {
            self.selected_link = (self.selected_link + 1) % count;
        }
    }

    /// Moves the keyboard selection to the previous menu row, wrapping around.
    pub fn select_prev_link(&mut self) {
        let count = self.menu_entries().len();
        if count > 0 {
            self.selected_link = (self.selected_link + count - 1) % count;
        }
    }

    /// Delivers a click on `target` to the menu container's handler.
    ///
    /// Returns whether a scroll was requested.
    pub fn click(&mut self, target: NodeId) -> bool {
        let mut event = ClickEvent::new(target);
        let request = click::handle_click(&self.window, &mut event);
        debug!(?target, prevented = event.default_prevented, ?request, "click");
        match request {
            Some(request) => {
                self.message = Some(format!("Scrolling to #{}", request.target_id));
                self.window.scroll_into_view(&request);
                true
            }
            None => false,
        }
    }

    /// Clicks the link under the keyboard selection.
    pub fn click_selected(&mut self) -> bool {
        match self.menu_entries().get(self.selected_link) {
            Some(entry) => self.click(entry.link),
            None => false,
        }
    }

    /// Clicks whatever sits at (`row`, `column`) of the menu list.
    ///
    /// Within a row the label text is the link; the rest of the row is the list item. Rows below
    /// the last item belong to the container itself.
    pub fn click_menu_at(&mut self, row: usize, column: usize) -> bool {
        let entries = self.menu_entries();
        let target = match entries.get(row) {
            Some(entry) if column < entry.label.chars().count() => {
                self.selected_link = row;
                entry.link
            }
            Some(entry) => entry.item,
            None => match self.window.menu_container() {
                Some(container) => container,
                None => return false,
            },
        };
        self.click(target)
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
