//! Tests for marker matching.

use super::*;
use crate::config::{Config, Labels, MarkerPatterns};

fn spec(language: &str) -> MarkerSpec {
    MarkerTable::builtin()
        .unwrap()
        .resolve(language)
        .unwrap()
        .clone()
}

#[test]
fn test_builtin_languages_resolve() {
    let table = MarkerTable::builtin().unwrap();
    for language in [
        "javascript",
        "typescript",
        "html",
        "scss",
        "css",
        "markdown",
        "php",
    ] {
        assert!(table.supports(language), "{} should be supported", language);
    }
    assert!(table.resolve("cobol").is_none());
}

#[test]
fn test_language_lookup_is_case_sensitive() {
    let table = MarkerTable::builtin().unwrap();
    assert!(table.resolve("JavaScript").is_none());
}

#[test]
fn test_javascript_start_with_name() {
    let js = spec("javascript");
    assert_eq!(
        classify("// #region Alpha", &js),
        LineClass::Start(RegionName::Named("Alpha".to_string()))
    );
    assert_eq!(
        classify("    //region   Spaced out   ", &js),
        LineClass::Start(RegionName::Named("Spaced out".to_string()))
    );
}

#[test]
fn test_javascript_end_and_plain() {
    let js = spec("javascript");
    assert_eq!(classify("// #endregion", &js), LineClass::End);
    assert_eq!(classify("  //endregion trailing", &js), LineClass::End);
    assert_eq!(classify("const region = 1;", &js), LineClass::Plain);
    assert_eq!(classify("// #regional thing", &js), LineClass::Plain);
}

#[test]
fn test_non_ascii_name_may_follow_keyword_directly() {
    let js = spec("javascript");
    assert_eq!(
        classify("// #region한글", &js),
        LineClass::Start(RegionName::Named("한글".to_string()))
    );
    assert_eq!(classify("// #endregion끝", &js), LineClass::End);

    let css = spec("css");
    assert_eq!(
        classify("/* #regionÜbersicht */", &css),
        LineClass::Start(RegionName::Named("Übersicht".to_string()))
    );

    let php = spec("php");
    assert_eq!(classify("#endregion終", &php), LineClass::End);
}

#[test]
fn test_marker_must_start_the_line() {
    let js = spec("javascript");
    assert_eq!(classify("foo(); // #region Late", &js), LineClass::Plain);
}

#[test]
fn test_unnamed_start_uses_placeholder() {
    let js = spec("javascript");
    let name = extract_name("// #region   ", &js).unwrap();
    assert_eq!(name, RegionName::Unnamed);
    assert_eq!(name.resolve(&Labels::default(), 1), "# region");
}

#[test]
fn test_html_and_markdown_markers() {
    let html = spec("html");
    assert_eq!(
        classify("<!-- #region Header -->", &html),
        LineClass::Start(RegionName::Named("Header".to_string()))
    );
    assert_eq!(classify("<!-- #endregion -->", &html), LineClass::End);

    let md = spec("markdown");
    assert_eq!(
        classify("<!-- region Intro -->", &md),
        LineClass::Start(RegionName::Named("Intro".to_string()))
    );
    assert_eq!(classify("<!-- endregion -->", &md), LineClass::End);
}

#[test]
fn test_css_block_comment_markers() {
    let css = spec("css");
    assert_eq!(
        classify("/* #region Buttons */", &css),
        LineClass::Start(RegionName::Named("Buttons".to_string()))
    );
    assert_eq!(classify("/* #endregion */", &css), LineClass::End);
    assert_eq!(classify("// #region Buttons", &css), LineClass::Plain);
}

#[test]
fn test_php_accepts_hash_and_slashes() {
    let php = spec("php");
    assert_eq!(
        classify("#region Models", &php),
        LineClass::Start(RegionName::Named("Models".to_string()))
    );
    assert_eq!(
        classify("//region Views", &php),
        LineClass::Start(RegionName::Named("Views".to_string()))
    );
    assert_eq!(classify("#endregion", &php), LineClass::End);
}

#[test]
fn test_alternate_name_group_is_used_when_primary_is_empty() {
    let mut table = MarkerTable::default();
    table
        .insert(
            "dual",
            &MarkerPatterns::new(
                r"^\s*(?://\s*#region\b(?<name>.*)|/\*\s*#region\b(?<nameAlt>.*?)\s*\*/)",
                r"^\s*(?://\s*#endregion\b|/\*\s*#endregion\b.*\*/)",
            ),
        )
        .unwrap();
    let dual = table.resolve("dual").unwrap();

    assert_eq!(
        extract_name("// #region Line style", dual),
        Some(RegionName::Named("Line style".to_string()))
    );
    assert_eq!(
        extract_name("/* #region Block style */", dual),
        Some(RegionName::Named("Block style".to_string()))
    );
    assert_eq!(classify("/* #endregion */", dual), LineClass::End);
}

#[test]
fn test_legacy_pattern_without_groups_uses_matched_text() {
    let mut table = MarkerTable::default();
    table
        .insert("plain", &MarkerPatterns::new(r"#region\s+\S+", r"#endregion"))
        .unwrap();
    let plain = table.resolve("plain").unwrap();
    assert!(!plain.has_named_groups());

    let name = extract_name("  // #region Setup code", plain).unwrap();
    assert_eq!(name, RegionName::Matched("#region Setup".to_string()));
}

#[test]
fn test_legacy_empty_match_synthesises_ordinal_label() {
    let name = RegionName::Matched(String::new());
    assert_eq!(name.resolve(&Labels::default(), 3), "Region 3");
}

#[test]
fn test_start_wins_when_both_patterns_match() {
    let mut table = MarkerTable::default();
    table
        .insert("greedy", &MarkerPatterns::new(r"^@(?<name>.*)", r"^@"))
        .unwrap();
    let greedy = table.resolve("greedy").unwrap();
    assert_eq!(
        classify("@both", greedy),
        LineClass::Start(RegionName::Named("both".to_string()))
    );
}

#[test]
fn test_config_overrides_and_extends_builtin() {
    let mut config = Config::default();
    config.markers.insert(
        "python".to_string(),
        MarkerPatterns::new(r"^\s*#\s*region\b(?<name>.*)", r"^\s*#\s*endregion\b"),
    );
    config.markers.insert(
        "javascript".to_string(),
        MarkerPatterns::new(r"^\s*//\s*@region\b(?<name>.*)", r"^\s*//\s*@endregion\b"),
    );

    let table = MarkerTable::from_config(&config).unwrap();

    assert!(table.supports("python"));
    assert!(table.supports("css"));
    let js = table.resolve("javascript").unwrap();
    assert_eq!(classify("// #region Old", js), LineClass::Plain);
    assert_eq!(
        classify("// @region New", js),
        LineClass::Start(RegionName::Named("New".to_string()))
    );
}

#[test]
fn test_invalid_pattern_is_config_error() {
    let mut config = Config::default();
    config.markers.insert(
        "broken".to_string(),
        MarkerPatterns::new(r"^(unclosed", r"^end"),
    );

    let err = MarkerTable::from_config(&config).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("invalid start pattern"));
    assert!(msg.contains("broken"));
}
