//! Active-section tracking: which sections carry the active marker after a scroll.
//!
//! The decision itself is a pure function of the hero heading's offset and the sections'
//! viewport-relative rectangles, so it can be exercised without any page at all. [`on_scroll`]
//! is the adapter that gathers that geometry from a [`Page`] and applies the result.
//!
//! Two regimes exist:
//!
//! - **Top of page**: while the hero heading's top offset is at least [`DEFAULT_VALUE`], the
//!   first section is forced active and no other section is looked at.
//! - **Within**: otherwise every section whose span contains the reference line
//!   ([`TOP_VALUE`] from the top of the viewport) is active and every other section is not.
//!   Nothing prevents several short sections from being active together.

use crate::error::{Error, Result};
use crate::page::{Page, Rect};
use serde::Serialize;
use tracing::{debug, trace};

/// A section is active if its top edge is at or above this offset...
pub const TOP_VALUE: f64 = 150.0;
/// ...and its bottom edge at or below this one.
pub const BOTTOM_VALUE: f64 = 150.0;
/// Hero offsets at or above this count as the top of the page.
pub const DEFAULT_VALUE: f64 = -150.0;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Outcome of the pure decision.
pub enum Decision {
    /// Force the first section active and leave all others untouched.
    TopOfPage,
    /// Exactly these section indices (ascending) should be active.
    Within(Vec<usize>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Which regime a call went through.
pub enum Branch {
    /// Hero heading near the top of the viewport.
    TopOfPage,
    /// Containment predicate evaluated for every section.
    Within,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Report of one tracker invocation.
pub struct ScrollOutcome {
    /// Regime taken.
    pub branch: Branch,
    /// Hero heading offset the decision was based on.
    pub hero_top: f64,
    /// Sections that gained the marker during this call.
    pub activated: Vec<String>,
    /// Sections that lost the marker during this call.
    pub deactivated: Vec<String>,
}

#[must_use]
/// Whether the hero offset puts the page at (or near) its top.
pub fn is_near_top(hero_top: f64) -> bool {
    hero_top >= DEFAULT_VALUE
}

#[must_use]
/// Whether the reference line falls inside the rectangle, edges included.
pub fn contains_reference_line(rect: Rect) -> bool {
    rect.top <= TOP_VALUE && rect.bottom >= BOTTOM_VALUE
}

#[must_use]
/// Decides which sections should be active. `sections` is in document order.
pub fn decide(hero_top: f64, sections: &[Rect]) -> Decision {
    if is_near_top(hero_top) {
        return Decision::TopOfPage;
    }
    Decision::Within(
        sections
            .iter()
            .enumerate()
            .filter(|(_, rect)| contains_reference_line(**rect))
            .map(|(i, _)| i)
            .collect(),
    )
}

fn describe<P: Page>(page: &P, node: P::Node, index: usize) -> String {
    page.element_id(node)
        .unwrap_or_else(|| format!("section[{index}]"))
}

/// Runs the tracker once against the live page.
///
/// Sections and geometry are re-read on every call. Markers are only added when absent and only
/// removed when present, so repeated calls with the same geometry change nothing.
///
/// # Errors
///
/// Returns [`Error::MissingElement`] if the page has no hero heading.
pub fn on_scroll<P: Page>(page: &mut P) -> Result<ScrollOutcome> {
    let hero = page
        .hero_heading()
        .ok_or(Error::MissingElement("hero heading"))?;
    let hero_top = page.bounding_rect(hero).top;
    let sections = page.navigable_sections();

    let mut outcome = ScrollOutcome {
        branch: Branch::Within,
        hero_top,
        activated: Vec::new(),
        deactivated: Vec::new(),
    };

    // Geometry of the sections is only gathered below the top of the page.
    let decision = if is_near_top(hero_top) {
        Decision::TopOfPage
    } else {
        let rects: Vec<Rect> = sections.iter().map(|s| page.bounding_rect(*s)).collect();
        decide(hero_top, &rects)
    };
    trace!(hero_top, sections = sections.len(), ?decision, "scroll");

    match decision {
        Decision::TopOfPage => {
            outcome.branch = Branch::TopOfPage;
            if let Some(&first) = sections.first() {
                if !page.has_marker(first) {
                    page.add_marker(first);
                    let name = describe(page, first, 0);
                    debug!(section = %name, "activated at top of page");
                    outcome.activated.push(name);
                }
            }
        }
        Decision::Within(active) => {
            for (i, section) in sections.iter().copied().enumerate() {
                let want = active.binary_search(&i).is_ok();
                let has = page.has_marker(section);
                if want && !has {
                    page.add_marker(section);
                    let name = describe(page, section, i);
                    debug!(section = %name, "activated");
                    outcome.activated.push(name);
                } else if !want && has {
                    page.remove_marker(section);
                    let name = describe(page, section, i);
                    debug!(section = %name, "deactivated");
                    outcome.deactivated.push(name);
                }
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
