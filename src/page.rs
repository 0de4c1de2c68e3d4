//! The structural contract between the navigation logic and whatever hosts the page.
//!
//! Menu construction, click handling and the active-section tracker only ever talk to a page
//! through this trait. The terminal browser implements it in [`crate::window`]; tests implement
//! it with hand-written geometry.

/// Attribute that marks a navigable section and carries its menu label.
pub const NAV_ATTRIBUTE: &str = "data-nav";
/// Substring the nav attribute must contain for the element to count as navigable.
pub const NAV_MARKER: &str = "Section";
/// Tag of navigable section elements.
pub const SECTION_TAG: &str = "section";
/// Presentation class toggled on the section currently in view.
pub const ACTIVE_CLASS: &str = "active__section";
/// Class of the element whose first child is the hero heading.
pub const HERO_CLASS: &str = "main__hero";
/// `id` of the list the menu is appended to.
pub const MENU_CONTAINER_ID: &str = "navbar__list";
/// Class given to every generated menu link.
pub const MENU_LINK_CLASS: &str = "menu__link";

#[derive(Clone, Copy, Debug, PartialEq)]
/// Vertical extent of an element relative to the top of the viewport, in distance units.
pub struct Rect {
    /// Offset of the top edge; negative once scrolled past.
    pub top: f64,
    /// Offset of the bottom edge.
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    /// Creates a rectangle from its two edges.
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Read and write access to a live page.
///
/// Every query resolves against the current state of the page; callers must not assume that
/// handles or geometry from a previous call are still meaningful.
pub trait Page {
    /// Handle to an element in this page.
    type Node: Copy + Eq;

    /// Navigable sections in document order, resolved afresh.
    fn navigable_sections(&self) -> Vec<Self::Node>;
    /// The hero heading used to detect the top of the page.
    fn hero_heading(&self) -> Option<Self::Node>;
    /// The element menu links are appended to.
    fn menu_container(&self) -> Option<Self::Node>;
    /// Element with the given `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Lower-cased tag name.
    fn tag_name(&self, node: Self::Node) -> Option<String>;
    /// Attribute value, if set.
    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;
    /// Current viewport-relative geometry.
    fn bounding_rect(&self, node: Self::Node) -> Rect;

    /// Whether the active marker is set.
    fn has_marker(&self, node: Self::Node) -> bool;
    /// Sets the active marker.
    fn add_marker(&mut self, node: Self::Node);
    /// Clears the active marker.
    fn remove_marker(&mut self, node: Self::Node);

    /// Existing link destinations inside the menu container.
    fn menu_hrefs(&self, container: Self::Node) -> Vec<String>;
    /// Appends `<li><a href=… class=menu__link>label</a></li>` to the container.
    fn append_menu_item(&mut self, container: Self::Node, href: &str, label: &str) -> Self::Node;

    /// `id` of the element, if any.
    fn element_id(&self, node: Self::Node) -> Option<String> {
        self.attribute(node, "id")
    }

    /// Menu label of a navigable section.
    fn nav_label(&self, node: Self::Node) -> Option<String> {
        self.attribute(node, NAV_ATTRIBUTE)
    }
}
