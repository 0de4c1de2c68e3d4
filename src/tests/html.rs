use super::{decode_entities, HtmlFormat};
use crate::formats::parse_document;
use crate::page::Page;
use crate::window::{Viewport, Window};

const LANDING: &str = include_str!("../../demos/landing.html");

fn open(source: &str) -> Window {
    let doc = parse_document(&HtmlFormat, "test.html", source).unwrap();
    Window::new(
        doc,
        Viewport {
            width: 60,
            height: 20,
            row_height: 20.0,
        },
    )
}

#[test]
fn test_landing_page_contract() {
    let win = open(LANDING);

    let labels: Vec<String> = win
        .navigable_sections()
        .into_iter()
        .filter_map(|s| win.nav_label(s))
        .collect();
    assert_eq!(labels, vec!["Section 1", "Section 2", "Section 3", "Section 4"]);

    let hero = win.hero_heading().unwrap();
    assert_eq!(win.tag_name(hero).as_deref(), Some("h1"));
    assert_eq!(win.document().text_content(hero), "Landing Page");

    assert!(win.menu_container().is_some());
    assert!(win.element_by_id("contact").is_some());
}

#[test]
fn test_entities_and_inline_text() {
    let win = open(LANDING);
    let doc = win.document();
    let found = doc
        .query_all(|d, n| d.tag_name(n) == Some("p"))
        .into_iter()
        .map(|p| doc.text_content(p))
        .any(|text| text == "Fish & chips are not on the menu.");
    assert!(found);
}

#[test]
fn test_hidden_elements_are_not_laid_out() {
    let win = open(LANDING);
    let doc = win.document();
    let script = doc
        .query_all(|d, n| d.tag_name(n) == Some("script"))
        .into_iter()
        .next()
        .unwrap();
    assert_eq!(win.layout().rows_of(script), None);
    assert!(win
        .layout()
        .lines()
        .iter()
        .all(|line| !line.text.contains("Navigation starts")));
}

#[test]
fn test_attribute_quoting_styles() {
    let win = open(
        "<main><section id=section1 data-nav='Section 1' class=\"a b\"></section></main>",
    );
    let doc = win.document();
    let section = doc.element_by_id("section1").unwrap();
    assert_eq!(doc.attribute(section, "data-nav"), Some("Section 1"));
    assert!(doc.has_class(section, "a"));
    assert!(doc.has_class(section, "b"));
}

#[test]
fn test_attribute_values_are_decoded() {
    let win = open("<section id=\"s\" data-nav=\"Section &amp; More\"></section>");
    let doc = win.document();
    let section = doc.element_by_id("s").unwrap();
    assert_eq!(doc.attribute(section, "data-nav"), Some("Section & More"));
}

#[test]
fn test_decode_entities() {
    assert_eq!(decode_entities("a &amp; b"), "a & b");
    assert_eq!(decode_entities("&lt;p&gt;"), "<p>");
    assert_eq!(decode_entities("&#65;&#x42;"), "AB");
    assert_eq!(decode_entities("&copy; 2024"), "\u{a9} 2024");
    assert_eq!(decode_entities("AT&T"), "AT&T");
    assert_eq!(decode_entities("&bogus;"), "&bogus;");
}
