//! Tests for FormatKind parsing and lookup.

use std::path::Path;

use crate::FormatKind;

#[test]
fn from_str_accepts_aliases_case_insensitively() {
    assert_eq!(FormatKind::from_str("JSON"), Some(FormatKind::Json));
    assert_eq!(FormatKind::from_str("yml"), Some(FormatKind::Yaml));
    assert_eq!(FormatKind::from_str("txt"), Some(FormatKind::Plaintext));
    assert_eq!(FormatKind::from_str("raw"), Some(FormatKind::Plaintext));
    assert_eq!(FormatKind::from_str("Toml"), Some(FormatKind::Toml));
    assert_eq!(FormatKind::from_str("csv"), Some(FormatKind::Csv));
    assert_eq!(FormatKind::from_str("xml"), None);
}

#[test]
fn display_round_trips_through_from_str() {
    for kind in [
        FormatKind::Plaintext,
        FormatKind::Json,
        FormatKind::Yaml,
        FormatKind::Toml,
        FormatKind::Csv,
    ] {
        assert_eq!(FormatKind::from_str(&kind.to_string()), Some(kind));
    }
}

#[test]
fn extension_lookup() {
    assert_eq!(FormatKind::from_extension("YAML"), Some(FormatKind::Yaml));
    assert_eq!(FormatKind::from_extension("text"), Some(FormatKind::Plaintext));
    assert_eq!(FormatKind::from_extension("exe"), None);

    assert_eq!(
        FormatKind::from_path(Path::new("out/report.json")),
        Some(FormatKind::Json)
    );
    assert_eq!(FormatKind::from_path(Path::new("out/README")), None);
}

#[test]
fn plaintext_and_json_are_always_available() {
    assert!(FormatKind::Plaintext.is_available());
    assert!(FormatKind::Json.is_available());
    assert_eq!(FormatKind::Yaml.is_available(), cfg!(feature = "yaml"));
    assert_eq!(FormatKind::Toml.is_available(), cfg!(feature = "toml"));
    assert_eq!(FormatKind::Csv.is_available(), cfg!(feature = "csv"));
}

#[test]
fn default_kind_is_plaintext() {
    assert_eq!(FormatKind::default(), FormatKind::Plaintext);
}
