//! Click navigation on the menu container.
//!
//! Clicks are delegated from the container, so the handler has to work out whether the target
//! is one of the generated links before doing anything.

use crate::page::Page;
use tracing::{debug, warn};

/// Only destinations containing this fragment are scrolled to.
pub const SECTION_FRAGMENT: &str = "#section";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a scroll request should be carried out.
pub enum ScrollBehavior {
    /// Move towards the target over several frames.
    Smooth,
    /// Jump straight to the target.
    Instant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Ask the host to bring an element into view.
pub struct ScrollRequest {
    /// `id` of the element to scroll to.
    pub target_id: String,
    /// How to get there.
    pub behavior: ScrollBehavior,
}

#[derive(Clone, Copy, Debug)]
/// A click delivered to the menu container.
pub struct ClickEvent<N> {
    /// Innermost element under the pointer.
    pub target: N,
    /// Set once the handler has suppressed the default link navigation.
    pub default_prevented: bool,
}

impl<N> ClickEvent<N> {
    /// A click on `target` whose default action is still pending.
    pub const fn new(target: N) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    /// Suppresses the default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Handles a click on the menu container.
///
/// Clicks that do not land on a link are ignored. Clicks on a link always have their default
/// navigation suppressed; a smooth scroll is requested only when the destination names an
/// existing section.
pub fn handle_click<P: Page>(page: &P, event: &mut ClickEvent<P::Node>) -> Option<ScrollRequest> {
    if page.tag_name(event.target).as_deref() != Some("a") {
        return None;
    }
    event.prevent_default();

    let href = page.attribute(event.target, "href")?;
    if !href.contains(SECTION_FRAGMENT) {
        debug!(%href, "link does not point at a section");
        return None;
    }
    let id = href.rsplit_once('#').map_or(href.as_str(), |(_, id)| id);
    if page.element_by_id(id).is_none() {
        warn!(%id, "link points at a missing section");
        return None;
    }
    Some(ScrollRequest {
        target_id: id.to_string(),
        behavior: ScrollBehavior::Smooth,
    })
}

#[cfg(test)]
#[path = "tests/click.rs"]
mod tests;
