use super::*;
use crate::foundation::core::Tuning;

#[test]
fn empty_object_uses_defaults() {
    let cfg = RenderConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, RenderConfig::default());
    assert_eq!(cfg.rows.get(), Tuning::DEFAULT_ROWS);
    assert!(!cfg.threading.parallel);
    assert_eq!(cfg.threading.threads, None);
}

#[test]
fn full_config_parses() {
    let cfg = RenderConfig::from_json_str(
        r#"{ "rows": 14, "threading": { "parallel": true, "threads": 3 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.rows.get(), 14);
    assert!(cfg.threading.parallel);
    assert_eq!(cfg.threading.threads, Some(3));
}

#[test]
fn out_of_range_rows_are_rejected() {
    let err = RenderConfig::from_json_str(r#"{ "rows": 40 }"#).unwrap_err();
    assert!(matches!(err, MosaicError::Validation(_)));
    assert!(err.to_string().contains("10..=30"), "{err}");
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(RenderConfig::from_json_str(r#"{ "colour": "red" }"#).is_err());
}

#[test]
fn missing_file_is_an_error() {
    assert!(RenderConfig::load("target/does/not/exist.json").is_err());
}
