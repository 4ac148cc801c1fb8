//! Tests for the translation coverage report.

use std::collections::BTreeMap;
use std::fs;

use glossa::bundle::{MessageFile, check_dir, check_messages};
use glossa::{Engine, LintIssue};
use tempfile::TempDir;

fn file(language: &str, messages: &[(&str, &str)]) -> MessageFile {
    MessageFile {
        language: language.to_string(),
        messages: messages
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn without_source_every_language_is_compared_to_the_union() {
    let files = [
        file("en", &[("a", "A"), ("b", "B")]),
        file("fr", &[("a", "A"), ("c", "C")]),
    ];
    let report = check_messages(&files, None, &Engine::new());

    assert_eq!(report.languages, ["en", "fr"]);
    assert_eq!(report.all_keys, ["a", "b", "c"]);
    assert_eq!(report.source_language, None);
    assert_eq!(report.reference_keys, 3);
    assert_eq!(report.missing["en"], ["c"]);
    assert_eq!(report.missing["fr"], ["b"]);
    assert!(report.redundant.is_empty());
    assert!(report.has_issues());
}

#[test]
fn source_language_defines_reference_and_redundancy() {
    let files = [
        file("en", &[("a", "A"), ("b", "B")]),
        file("fr", &[("a", "A"), ("c", "C")]),
        file("de", &[("a", "A"), ("b", "B")]),
    ];
    let report = check_messages(&files, Some("en"), &Engine::new());

    assert_eq!(report.source_language.as_deref(), Some("en"));
    assert_eq!(report.reference_keys, 2);
    assert_eq!(report.missing.get("en"), None);
    assert_eq!(report.missing.get("de"), None);
    assert_eq!(report.missing["fr"], ["b"]);
    assert_eq!(report.redundant["fr"], ["c"]);
    assert_eq!(report.translated_count("fr"), 1);
    assert_eq!(report.translated_count("de"), 2);
}

#[test]
fn unknown_source_language_falls_back_to_union() {
    let files = [file("en", &[("a", "A")]), file("fr", &[("b", "B")])];
    let report = check_messages(&files, Some("ja"), &Engine::new());
    assert_eq!(report.source_language, None);
    assert_eq!(report.missing["en"], ["b"]);
    assert!(report.redundant.is_empty());
}

#[test]
fn files_for_one_language_merge() {
    let files = [
        file("en", &[("a", "A")]),
        file("en", &[("b", "B")]),
        file("fr", &[("a", "A"), ("b", "B")]),
    ];
    let report = check_messages(&files, Some("en"), &Engine::new());
    assert_eq!(report.languages, ["en", "fr"]);
    assert!(!report.has_issues());
}

#[test]
fn syntax_errors_collect_all_issues_per_message() {
    let files = [file(
        "en",
        &[("ok", "Hi {name}"), ("bad", "} {x|bogus}"), ("cond", "{x|eq:1?:}")],
    )];
    let report = check_messages(&files, None, &Engine::new());
    let errors = &report.syntax_errors["en"];

    assert_eq!(errors.len(), 2);
    assert!(!errors.contains_key("ok"));
    assert_eq!(
        errors["bad"],
        vec![
            LintIssue::UnexpectedClosingBrace { position: 0 },
            LintIssue::UnknownFormatter {
                name: "bogus".into(),
                suggestions: Vec::new(),
            },
        ]
    );
    assert_eq!(errors["cond"], vec![LintIssue::EmptyBranch { path: "x".into() }]);
}

#[test]
fn custom_formatters_count_as_known() {
    let engine = Engine::new();
    engine.register_formatter("slug", |value, _| Ok(value.clone()));
    let files = [file("en", &[("a", "{x|slug}")])];
    assert!(!check_messages(&files, None, &engine).has_issues());
}

#[test]
fn check_dir_loads_then_checks() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("en.yaml"),
        "language: en\nmessages:\n  a: A\n  b: B\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("ja.yaml"),
        "language: ja\nmessages:\n  a: エー\n",
    )
    .unwrap();

    let report = check_dir(dir.path(), Some("en"), &Engine::new()).unwrap();
    assert_eq!(report.missing["ja"], ["b"]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["missing"]["ja"][0], "b");
    assert_eq!(json["source_language"], "en");
}
