use super::{active_section_ids, replay};
use crate::fixtures::{landing_window, section_top, HEIGHT, ROW_HEIGHT, SECTION_ROWS};
use crate::tracker::Branch;
use serde_json::json;

#[test]
fn test_report_flattens_outcome_into_top_level() {
    let mut win = landing_window(4);
    let report = replay(&mut win, 300.0).unwrap();
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "scroll_y": 300.0,
            "branch": "within",
            "hero_top": -300.0,
            "activated": ["section3"],
            "deactivated": [],
            "active": ["section3"],
        })
    );
}

#[test]
fn test_report_at_top_names_first_section() {
    let mut win = landing_window(4);
    let report = replay(&mut win, 0.0).unwrap();
    assert_eq!(report.outcome.branch, Branch::TopOfPage);
    assert_eq!(report.outcome.activated, vec!["section1"]);
    assert_eq!(report.active, vec!["section1"]);
}

#[test]
fn test_successive_reports_carry_previous_markers() {
    let mut win = landing_window(4);
    replay(&mut win, 0.0).unwrap();
    let report = replay(&mut win, section_top(2)).unwrap();
    assert_eq!(report.outcome.branch, Branch::Within);
    assert_eq!(report.outcome.deactivated, vec!["section1"]);
    assert_eq!(report.active, vec!["section2"]);
    assert_eq!(active_section_ids(&win), vec!["section2"]);
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn test_report_offset_is_clamped() {
    let mut win = landing_window(4);
    let report = replay(&mut win, 1e9).unwrap();
    let bottom = (2 + SECTION_ROWS * 4 - HEIGHT) as f64 * ROW_HEIGHT;
    assert!((report.scroll_y - bottom).abs() < f64::EPSILON);
}
