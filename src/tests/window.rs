use crate::click::{ScrollBehavior, ScrollRequest};
use crate::fixtures::{
    landing_document, landing_window, section_top, viewport, HEIGHT, ROW_HEIGHT, SECTION_ROWS,
};
use crate::page::{Page, Rect};
use crate::window::{Viewport, Window};

#[allow(clippy::cast_precision_loss)]
fn max_scroll(sections: usize) -> f64 {
    (2 + SECTION_ROWS * sections - HEIGHT) as f64 * ROW_HEIGHT
}

#[test]
fn test_finds_structural_elements() {
    let win = landing_window(4);
    assert_eq!(win.navigable_sections().len(), 4);
    let hero = win.hero_heading().unwrap();
    assert_eq!(win.tag_name(hero).as_deref(), Some("h1"));
    assert!(win.menu_container().is_some());
}

#[test]
fn test_only_section_tags_with_marker_label_are_navigable() {
    let mut win = landing_window(2);
    win.mutate(|doc| {
        let main = doc.parent(doc.element_by_id("section1").unwrap()).unwrap();
        let contact = doc.create_element("section");
        doc.set_attribute(contact, "id", "contact");
        doc.set_attribute(contact, "data-nav", "Contact");
        doc.append_child(main, contact);
        let div = doc.create_element("div");
        doc.set_attribute(div, "data-nav", "Section 9");
        doc.append_child(main, div);
    });
    let ids: Vec<String> = win
        .navigable_sections()
        .into_iter()
        .filter_map(|s| win.element_id(s))
        .collect();
    assert_eq!(ids, vec!["section1", "section2"]);
}

#[test]
fn test_bounding_rect_follows_scroll() {
    let mut win = landing_window(4);
    let s2 = win.element_by_id("section2").unwrap();
    let top = section_top(2);
    let bottom = top + 9.0 * ROW_HEIGHT;
    assert_eq!(win.bounding_rect(s2), Rect::new(top, bottom));

    assert!(win.scroll_to(100.0));
    assert_eq!(win.bounding_rect(s2), Rect::new(top - 100.0, bottom - 100.0));
}

#[test]
fn test_scroll_is_clamped() {
    let mut win = landing_window(4);
    assert!(!win.scroll_to(-50.0));
    assert!(win.scroll_to(1e9));
    assert!((win.scroll_y() - max_scroll(4)).abs() < f64::EPSILON);
    assert!(!win.scroll_by(10.0));
}

#[test]
fn test_instant_scroll_into_view() {
    let mut win = landing_window(4);
    let request = ScrollRequest {
        target_id: "section3".to_string(),
        behavior: ScrollBehavior::Instant,
    };
    assert!(win.scroll_into_view(&request));
    assert!((win.scroll_y() - section_top(3)).abs() < f64::EPSILON);
    assert!(!win.is_smooth_scrolling());
}

#[test]
fn test_smooth_scroll_steps_to_target() {
    let mut win = landing_window(4);
    let request = ScrollRequest {
        target_id: "section2".to_string(),
        behavior: ScrollBehavior::Smooth,
    };
    assert!(win.scroll_into_view(&request));
    assert!(win.is_smooth_scrolling());
    assert!(win.scroll_y().abs() < f64::EPSILON);

    let mut steps = 0;
    while win.step_smooth_scroll(40.0) {
        steps += 1;
        assert!(steps < 100, "smooth scroll never settled");
    }
    // 220 units at 40 per frame: five full steps and a final partial one.
    assert_eq!(steps, 6);
    assert!((win.scroll_y() - section_top(2)).abs() < f64::EPSILON);
    assert!(!win.is_smooth_scrolling());
}

#[test]
fn test_smooth_scroll_is_cancelled_by_direct_scroll() {
    let mut win = landing_window(4);
    let request = ScrollRequest {
        target_id: "section4".to_string(),
        behavior: ScrollBehavior::Smooth,
    };
    win.scroll_into_view(&request);
    win.step_smooth_scroll(40.0);
    win.scroll_to(0.0);
    assert!(!win.is_smooth_scrolling());
    assert!(!win.step_smooth_scroll(40.0));
}

#[test]
fn test_scroll_into_unknown_element_does_nothing() {
    let mut win = landing_window(2);
    let request = ScrollRequest {
        target_id: "nowhere".to_string(),
        behavior: ScrollBehavior::Smooth,
    };
    assert!(!win.scroll_into_view(&request));
    assert!(!win.is_smooth_scrolling());
}

#[test]
fn test_resize_relayouts_and_clamps() {
    let mut win = landing_window(4);
    win.scroll_to(1e9);
    // A taller viewport leaves less to scroll, so the offset has to move.
    assert!(win.resize(40, 30));
    assert!((win.scroll_y() - max_scroll(4) + 20.0 * ROW_HEIGHT).abs() < f64::EPSILON);
}

#[test]
fn test_resize_during_smooth_scroll_settles_at_new_bottom() {
    let mut win = landing_window(4);
    let request = ScrollRequest {
        target_id: "section4".to_string(),
        behavior: ScrollBehavior::Smooth,
    };
    assert!(win.scroll_into_view(&request));
    win.step_smooth_scroll(40.0);
    win.step_smooth_scroll(40.0);

    // Section 4 now lies beyond the reachable bottom.
    win.resize(40, 30);
    let bottom = win.max_scroll();
    assert!(bottom < section_top(4));

    let mut steps = 0;
    while win.step_smooth_scroll(40.0) {
        steps += 1;
        assert!(steps < 100, "smooth scroll never settled");
    }
    assert!((win.scroll_y() - bottom).abs() < f64::EPSILON);
    assert!(!win.is_smooth_scrolling());
}

#[test]
fn test_resize_onto_smooth_target_stops_the_scroll() {
    let mut win = landing_window(4);
    win.scroll_to(1e9);
    let request = ScrollRequest {
        target_id: "section1".to_string(),
        behavior: ScrollBehavior::Smooth,
    };
    assert!(win.scroll_into_view(&request));
    // Everything fits, so both offset and target collapse to the top.
    win.resize(40, 100);
    assert!(!win.is_smooth_scrolling());
    assert!(!win.step_smooth_scroll(40.0));
}

#[test]
fn test_degenerate_row_height_does_not_panic() {
    for row_height in [0.0, -20.0, f64::NAN] {
        let mut win = Window::new(
            landing_document(4),
            Viewport {
                row_height,
                ..viewport()
            },
        );
        assert!(win.max_scroll().abs() < f64::EPSILON);
        assert!(!win.scroll_to(100.0));
        assert!(!win.scroll_by(-100.0));
    }
}

#[test]
fn test_marker_round_trip() {
    let mut win = landing_window(1);
    let s1 = win.element_by_id("section1").unwrap();
    assert!(!win.has_marker(s1));
    win.add_marker(s1);
    assert!(win.document().has_class(s1, "active__section"));
    win.remove_marker(s1);
    assert!(!win.has_marker(s1));
}

#[test]
fn test_appended_menu_items_are_visible_to_queries() {
    let mut win = landing_window(1);
    let container = win.menu_container().unwrap();
    win.append_menu_item(container, "#section1", "Section 1");
    assert_eq!(win.menu_hrefs(container), vec!["#section1"]);
}
