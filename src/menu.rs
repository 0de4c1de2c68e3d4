//! Menu construction: one link per navigable section, appended to the menu container.

use crate::error::{Error, Result};
use crate::page::{Page, MENU_LINK_CLASS};
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A generated menu entry.
pub struct MenuLink {
    /// Destination, always `#<section id>`.
    pub href: String,
    /// Visible text, the section's nav label.
    pub label: String,
}

#[must_use]
/// Links for every navigable section, in document order.
///
/// Sections without an `id` have nowhere to point to and are skipped.
pub fn links<P: Page>(page: &P) -> Vec<MenuLink> {
    page.navigable_sections()
        .into_iter()
        .filter_map(|section| {
            let Some(id) = page.element_id(section) else {
                warn!("navigable section without an id, no menu link generated");
                return None;
            };
            let label = page.nav_label(section).unwrap_or_default();
            Some(MenuLink {
                href: format!("#{id}"),
                label,
            })
        })
        .collect()
}

/// Appends the menu links to the page's menu container.
///
/// Links whose destination is already present in the container are not added again, so calling
/// this twice leaves the menu as it was after the first call. Returns the links appended.
///
/// # Errors
///
/// Returns [`Error::MissingElement`] if the page has no menu container.
pub fn install<P: Page>(page: &mut P) -> Result<Vec<MenuLink>> {
    let container = page
        .menu_container()
        .ok_or(Error::MissingElement("menu container"))?;
    let existing = page.menu_hrefs(container);

    let fresh: Vec<MenuLink> = links(&*page)
        .into_iter()
        .filter(|link| !existing.contains(&link.href))
        .collect();
    for link in &fresh {
        page.append_menu_item(container, &link.href, &link.label);
    }
    info!(links = fresh.len(), "menu installed");
    Ok(fresh)
}

/// Escapes text for use inside HTML content or a double-quoted attribute.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[must_use]
/// Renders the links as the list items the page receives, one per line.
pub fn render_markup(links: &[MenuLink]) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                "<li><a href=\"{}\" class=\"{MENU_LINK_CLASS}\">{}</a></li>\n",
                escape_html(&link.href),
                escape_html(&link.label)
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/menu.rs"]
mod tests;
