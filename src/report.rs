//! Headless scroll reports: one JSON object per replayed scroll offset.

use crate::error::Result;
use crate::page::Page;
use crate::tracker::{self, ScrollOutcome};
use crate::window::Window;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
/// What one scroll notification did, plus the state it left behind.
pub struct ScrollReport {
    /// Offset after clamping.
    pub scroll_y: f64,
    #[serde(flatten)]
    /// Tracker report, flattened into the top-level object.
    pub outcome: ScrollOutcome,
    /// `id`s of every section carrying the active marker afterwards, in document order.
    pub active: Vec<String>,
}

#[must_use]
/// `id`s of the sections currently marked active, in document order.
pub fn active_section_ids(window: &Window) -> Vec<String> {
    window
        .navigable_sections()
        .into_iter()
        .filter(|s| window.has_marker(*s))
        .filter_map(|s| window.element_id(s))
        .collect()
}

/// Scrolls `window` to `y` and delivers one scroll notification.
///
/// A notification is delivered even if the offset did not change.
///
/// # Errors
///
/// Propagates tracker errors.
pub fn replay(window: &mut Window, y: f64) -> Result<ScrollReport> {
    window.scroll_to(y);
    let outcome = tracker::on_scroll(window)?;
    Ok(ScrollReport {
        scroll_y: window.scroll_y(),
        outcome,
        active: active_section_ids(window),
    })
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;
