//! Unit tests for configuration loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.min_year, 1871);
    assert_eq!(settings.max_year, 2014);
    assert_eq!(settings.file_name_template, "baseball-{year}.csv");
    assert_eq!(settings.log_level, "info");
    assert!(settings.source_url_template.is_none());
}

#[test]
fn test_from_toml_partial_uses_defaults() {
    let settings = Settings::from_toml(
        r#"
        max_year = 2010
        source_url_template = "https://stats.example.com/{year}.csv"
        "#,
    )
    .unwrap();

    assert_eq!(settings.min_year, 1871);
    assert_eq!(settings.max_year, 2010);
    assert_eq!(
        settings
            .source_url_template()
            .unwrap()
            .render(Season::new(2001)),
        "https://stats.example.com/2001.csv"
    );
}

#[test]
fn test_from_toml_rejects_reversed_years() {
    let err = Settings::from_toml("min_year = 2000\nmax_year = 1990").unwrap_err();
    match err {
        TriplesError::Config { message, .. } => assert!(message.contains("min_year")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_from_toml_rejects_template_without_placeholder() {
    let err = Settings::from_toml("file_name_template = \"baseball.csv\"").unwrap_err();
    match err {
        TriplesError::InvalidTemplate { template } => assert_eq!(template, "baseball.csv"),
        _ => panic!("Expected InvalidTemplate error"),
    }
}

#[test]
fn test_from_toml_rejects_bad_syntax() {
    assert!(matches!(
        Settings::from_toml("min_year = \"soon\""),
        Err(TriplesError::Config { .. })
    ));
}

#[test]
fn test_load_explicit_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "min_year = 1900").unwrap();
    writeln!(file, "max_year = 1950").unwrap();
    writeln!(file, "log_level = \"debug\"").unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.min_year, 1900);
    assert_eq!(settings.max_year, 1950);
    assert_eq!(settings.log_level, "debug");
}

#[test]
fn test_load_missing_explicit_file() {
    let err = Settings::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
    match err {
        TriplesError::Config { path, .. } => assert!(path.contains("here.toml")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_missing_source_url_is_an_error() {
    let settings = Settings::default();
    match settings.source_url_template().unwrap_err() {
        TriplesError::Config { message, .. } => {
            assert!(message.contains(SOURCE_URL_ENV_VAR));
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_resolve_range_defaults_to_bounds() {
    let settings = Settings::default();
    let range = settings.resolve_range(None, None).unwrap();
    assert_eq!(range.from(), Season::new(1871));
    assert_eq!(range.to(), Season::new(2014));

    let range = settings.resolve_range(Some(Season::new(2000)), None).unwrap();
    assert_eq!(range.from(), Season::new(2000));
    assert_eq!(range.to(), Season::new(2014));
}

#[test]
fn test_resolve_range_validation() {
    let settings = Settings::default();

    assert!(matches!(
        settings.resolve_range(Some(Season::new(1910)), Some(Season::new(1900))),
        Err(TriplesError::InvalidSeasonRange { .. })
    ));
    assert!(matches!(
        settings.resolve_range(Some(Season::new(1850)), Some(Season::new(1900))),
        Err(TriplesError::SeasonOutOfBounds { season: 1850, .. })
    ));
    assert!(matches!(
        settings.resolve_range(None, Some(Season::new(2020))),
        Err(TriplesError::SeasonOutOfBounds { season: 2020, .. })
    ));
}
