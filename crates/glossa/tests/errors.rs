//! Tests for error types and error message formatting.

use std::path::PathBuf;

use glossa::bundle::{LoadError, TranslateError};
use glossa::interpreter::FormatError;
use glossa::{EvalError, LintIssue, compute_suggestions};
use insta::assert_snapshot;

#[test]
fn compute_suggestions_finds_similar_keys() {
    let available = vec![
        "upper".to_string(),
        "lower".to_string(),
        "title".to_string(),
        "number".to_string(),
    ];

    assert_eq!(compute_suggestions("uper", &available), vec!["upper"]);
    assert_eq!(compute_suggestions("lowr", &available), vec!["lower"]);
    assert!(compute_suggestions("xyz", &available).is_empty());
}

#[test]
fn compute_suggestions_limits_to_three() {
    let available: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
    let suggestions = compute_suggestions("item", &available);
    assert_eq!(suggestions.len(), 3);
}

#[test]
fn short_keys_allow_one_edit() {
    let available = vec!["abc".to_string(), "a".to_string()];
    assert_eq!(compute_suggestions("ab", &available), vec!["a", "abc"]);
    assert!(compute_suggestions("xy", &available).is_empty());
}

#[test]
fn eval_error_messages() {
    assert_snapshot!(
        EvalError::ValueNotFound { path: "user.name".into() },
        @"value not found: 'user.name'"
    );
    assert_snapshot!(
        EvalError::UnknownFormatter {
            name: "uper".into(),
            suggestions: vec!["upper".into()],
        },
        @"unknown formatter 'uper', did you mean: upper?"
    );
    assert_snapshot!(
        EvalError::UnknownFormatter { name: "zzz".into(), suggestions: Vec::new() },
        @"unknown formatter 'zzz'"
    );
    assert_snapshot!(
        EvalError::MaxDepthExceeded { max_depth: 64 },
        @"maximum recursion depth of 64 exceeded"
    );
    assert_snapshot!(
        EvalError::UnsupportedOperation { op: "gt".into(), type_name: "string" },
        @"unsupported operation 'gt' for string values"
    );
}

#[test]
fn formatter_error_wraps_cause() {
    let err = EvalError::Formatter {
        name: "number".into(),
        source: FormatError::Type {
            expected: "number or numeric string",
            found: "bool",
        },
    };
    assert_snapshot!(err, @"formatter 'number' failed: expected number or numeric string, got bool");
}

#[test]
fn lint_issue_messages() {
    assert_snapshot!(
        LintIssue::UnexpectedClosingBrace { position: 3 },
        @"extra closing '}' at position 3"
    );
    assert_snapshot!(
        LintIssue::EmptyBranch { path: "x".into() },
        @"invalid conditional on 'x': true/false branch must not be empty"
    );
}

#[test]
fn load_error_messages_name_the_file() {
    let err = LoadError::MissingLanguage {
        path: PathBuf::from("locales/en.yaml"),
    };
    assert_snapshot!(err, @"locales/en.yaml: missing 'language' field");
}

#[test]
fn translate_error_lists_the_chain() {
    let err = TranslateError::MissingKey {
        key: "greeting".into(),
        languages: vec!["fr".into(), "en".into()],
    };
    assert_snapshot!(err, @"no message for 'greeting' in fr, en");
}
