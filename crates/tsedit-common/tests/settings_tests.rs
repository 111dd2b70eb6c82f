//! Tests for loading manipulation settings.
use std::io::Write;
use tsedit_common::{IndentationText, ManipulationSettings, NewLineKind, QuoteKind, SettingsError};

#[test]
fn defaults_use_four_spaces_and_line_feeds() {
    let settings = ManipulationSettings::default();
    assert_eq!(settings.indentation_text.as_str(), "    ");
    assert_eq!(settings.new_line_kind.as_str(), "\n");
    assert_eq!(settings.quote_kind.as_char(), '"');
}

#[test]
fn partial_json_keeps_defaults_for_missing_keys() {
    let settings = ManipulationSettings::from_json(r#"{ "quoteKind": "Single" }"#).unwrap();
    assert_eq!(settings.quote_kind, QuoteKind::Single);
    assert_eq!(settings.indentation_text, IndentationText::FourSpaces);
    assert_eq!(settings.new_line_kind, NewLineKind::LineFeed);
}

#[test]
fn invalid_json_is_reported() {
    let err = ManipulationSettings::from_json(r#"{ "indentationText": "ThreeSpaces" }"#).unwrap_err();
    assert!(matches!(err, SettingsError::Json(_)), "got {err:?}");
}

#[test]
fn settings_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "indentationText": "Tab", "newLineKind": "CarriageReturnLineFeed" }}"#
    )
    .unwrap();

    let settings = ManipulationSettings::from_file(file.path()).unwrap();
    assert_eq!(settings.indentation_text.as_str(), "\t");
    assert_eq!(settings.new_line_kind.as_str(), "\r\n");
}

#[test]
fn missing_file_names_the_path() {
    let err = ManipulationSettings::from_file("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
