use super::AppState;
use crate::config::Config;
use crate::dom::Document;
use crate::error::Error;
use crate::fixtures::{landing_document, section_top, viewport, ROW_HEIGHT};
use crate::tracker::Branch;

fn app(sections: usize) -> AppState {
    AppState::new(landing_document(sections), viewport(), &Config::default()).unwrap()
}

#[test]
fn test_startup_installs_menu_and_highlights_first_section() {
    let app = app(4);
    let entries = app.menu_entries();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].label, "Section 1");
    assert!(entries[0].active);
    assert!(entries[1..].iter().all(|e| !e.active));
    assert_eq!(app.active_section_ids(), vec!["section1"]);
    assert_eq!(app.notifications, 1);
}

#[test]
fn test_startup_without_hero_fails() {
    let mut doc = Document::new();
    let root = doc.root();
    let list = doc.create_element("ul");
    doc.set_attribute(list, "id", "navbar__list");
    doc.append_child(root, list);
    assert!(matches!(
        AppState::new(doc, viewport(), &Config::default()),
        Err(Error::MissingElement("hero heading"))
    ));
}

#[test]
fn test_scrolling_moves_the_highlight() {
    let mut app = app(4);
    // 10 rows down: hero at -200, section 2 spans 20..200.
    app.scroll_rows(10);
    assert_eq!(app.active_section_ids(), vec!["section2"]);
    let outcome = app.last_outcome.as_ref().unwrap();
    assert_eq!(outcome.branch, Branch::Within);
    assert_eq!(outcome.deactivated, vec!["section1"]);

    app.scroll_end();
    assert_eq!(app.active_section_ids(), vec!["section4"]);
}

#[test]
fn test_back_at_top_section_one_is_forced_but_others_kept() {
    let mut app = app(4);
    app.scroll_rows(10);
    assert_eq!(app.active_section_ids(), vec!["section2"]);

    app.scroll_home();
    // Top of page forces section 1 on without evaluating section 2.
    assert_eq!(app.active_section_ids(), vec!["section1", "section2"]);
    assert_eq!(app.last_outcome.as_ref().unwrap().branch, Branch::TopOfPage);
}

#[test]
fn test_scroll_that_does_not_move_delivers_no_notification() {
    let mut app = app(2);
    let before = app.notifications;
    app.scroll_rows(-5);
    assert_eq!(app.notifications, before);
}

#[test]
fn test_enter_on_selected_link_smooth_scrolls_with_notifications() {
    let mut app = app(4);
    app.select_next_link();
    assert_eq!(app.selected_link, 1);
    assert!(app.click_selected());
    assert!(app.window.is_smooth_scrolling());

    let before = app.notifications;
    let mut frames = 0;
    while app.tick() {
        frames += 1;
    }
    assert!(frames > 1);
    assert_eq!(app.notifications, before + frames);
    assert!((app.window.scroll_y() - section_top(2)).abs() < f64::EPSILON);
    assert_eq!(app.active_section_ids(), vec!["section2"]);
}

#[test]
fn test_link_selection_wraps() {
    let mut app = app(3);
    app.select_prev_link();
    assert_eq!(app.selected_link, 2);
    app.select_next_link();
    assert_eq!(app.selected_link, 0);
}

#[test]
fn test_menu_clicks_by_position() {
    let mut app = app(3);
    // On the label text: the link.
    assert!(app.click_menu_at(2, 0));
    assert_eq!(app.selected_link, 2);
    // Past the label on the same row: the list item, ignored.
    app.window.scroll_to(0.0);
    assert!(!app.click_menu_at(1, 20));
    // Below the last row: the container, ignored.
    assert!(!app.click_menu_at(9, 0));
}

#[test]
fn test_page_scroll_uses_viewport_height() {
    let mut app = app(4);
    app.scroll_pages(1);
    assert!((app.window.scroll_y() - 9.0 * ROW_HEIGHT).abs() < f64::EPSILON);
}
