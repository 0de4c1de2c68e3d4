use super::Config;
use crate::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(Config::from_toml(""), Some(Config::default()));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let cfg = Config::from_toml("row_height = 16.0\nscroll_step = 3\n").unwrap();
    assert!((cfg.row_height - 16.0).abs() < f64::EPSILON);
    assert_eq!(cfg.scroll_step, 3);
    assert_eq!(cfg.frame_millis, Config::default().frame_millis);
    assert!(cfg.log_file.is_empty());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "log_file = \"navspy.log\"\nframe_millis = 33").unwrap();
    let cfg = Config::load_from(file.path()).unwrap();
    assert_eq!(cfg.log_file, "navspy.log");
    assert_eq!(cfg.frame_millis, 33);
}

#[test]
fn test_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(Config::load_from(&dir.path().join("navspy.toml")), None);
}

#[test]
fn test_defaults_are_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_unusable_row_height_is_rejected() {
    for row_height in [0.0, -20.0, f64::NAN, f64::INFINITY] {
        let cfg = Config {
            row_height,
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(&err, Error::InvalidConfig(msg) if msg.starts_with("row_height")));
    }
}

#[test]
fn test_row_height_from_file_is_validated() {
    let cfg = Config::from_toml("row_height = -20.0\n").unwrap();
    assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn test_zero_smooth_step_is_rejected() {
    let cfg = Config {
        smooth_scroll_step: 0.0,
        ..Config::default()
    };
    assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
}
