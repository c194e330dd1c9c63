use super::*;

#[test]
fn empty_document_uses_defaults() {
    let s = PaintSettings::from_json("{}").unwrap();
    assert_eq!(s, PaintSettings::default());
    assert_eq!(s.alt_text_font.size_px, 12.0);
    assert_eq!(s.alt_text_outline, Rgba8::BLACK);
}

#[test]
fn partial_document_overrides_fields() {
    let s = PaintSettings::from_json(
        r#"{"alt_text_font": {"size_px": 16.0}, "alt_text_outline": {"r": 255, "g": 0, "b": 0, "a": 255}}"#,
    )
    .unwrap();
    assert_eq!(s.alt_text_font.size_px, 16.0);
    assert_eq!(s.alt_text_font.family, "sans-serif");
    assert_eq!(s.alt_text_outline, Rgba8::rgb(255, 0, 0));
}

#[test]
fn json_round_trip() {
    let mut s = PaintSettings::default();
    s.alt_text_font.family = "serif".to_owned();
    let back = PaintSettings::from_json(&s.to_json().unwrap()).unwrap();
    assert_eq!(back, s);
}

#[test]
fn malformed_json_is_serde_error() {
    let err = PaintSettings::from_json("{ nope").unwrap_err();
    assert!(matches!(err, PaintError::Serde(_)));
    let err = PaintSettings::from_json(r#"{"unknown": 1}"#).unwrap_err();
    assert!(matches!(err, PaintError::Serde(_)));
}

#[test]
fn out_of_range_values_fail_validation() {
    let err = PaintSettings::from_json(r#"{"alt_text_font": {"size_px": 0.0}}"#).unwrap_err();
    assert!(matches!(err, PaintError::Validation(_)));
    let err = PaintSettings::from_json(r#"{"alt_text_font": {"family": "  "}}"#).unwrap_err();
    assert!(matches!(err, PaintError::Validation(_)));
}

#[test]
fn missing_file_is_validation_error() {
    let err = PaintSettings::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open paint settings"));
}
