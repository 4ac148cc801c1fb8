//! Error types for the glossa interpreter.

use serde::Serialize;
use strsim::levenshtein;
use thiserror::Error;

/// An error that occurred while rendering a template.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A placeholder path did not resolve against the arguments.
    #[error("value not found: '{path}'")]
    ValueNotFound { path: String },

    /// A formatter name is not registered.
    #[error("unknown formatter '{name}'{}", format_suggestions(.suggestions))]
    UnknownFormatter {
        name: String,
        suggestions: Vec<String>,
    },

    /// A registered formatter rejected its input or argument.
    #[error("formatter '{name}' failed: {source}")]
    Formatter {
        name: String,
        #[source]
        source: FormatError,
    },

    /// The conditional operator is not valid for the value's type.
    #[error("unsupported operation '{op}' for {type_name} values")]
    UnsupportedOperation { op: String, type_name: &'static str },

    /// The value's type cannot be compared at all.
    #[error("cannot compare {type_name} values in a conditional")]
    UnsupportedType { type_name: &'static str },

    /// A numeric comparison's test value is not a number.
    #[error("invalid test value '{value}': expected a number")]
    InvalidTestValue { value: String },

    /// Conditional branches nested deeper than the engine allows.
    #[error("maximum recursion depth of {max_depth} exceeded")]
    MaxDepthExceeded { max_depth: usize },
}

/// An error returned by a formatter function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The formatter argument is malformed (e.g., a non-integer precision).
    #[error("invalid argument '{arg}': {reason}")]
    InvalidArgument { arg: String, reason: String },

    /// The input value has a type the formatter does not accept.
    #[error("expected {expected}, got {found}")]
    Type {
        expected: &'static str,
        found: &'static str,
    },

    /// The input string could not be parsed.
    #[error("cannot parse '{input}' as {expected}")]
    Parse {
        input: String,
        expected: &'static str,
    },

    /// A custom error raised by a caller-registered formatter.
    #[error("{0}")]
    Custom(String),
}

/// A problem found by static template validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintIssue {
    /// A '}' with no open placeholder. Position counts characters.
    #[error("extra closing '}}' at position {position}")]
    UnexpectedClosingBrace { position: usize },

    /// A '{' that is never closed. Position counts characters.
    #[error("unclosed placeholder starting at position {position}")]
    UnclosedPlaceholder { position: usize },

    /// A placeholder without a value path.
    #[error("placeholder has empty path")]
    EmptyPath,

    /// An empty segment between two '|', or a trailing '|'.
    #[error("placeholder '{path}' has an empty segment")]
    EmptySegment { path: String },

    /// A formatter segment with nothing before its ':'.
    #[error("empty formatter name in segment '{segment}'")]
    EmptyFormatterName { segment: String },

    /// A formatter that is not registered.
    #[error("unknown formatter '{name}'{}", format_suggestions(.suggestions))]
    UnknownFormatter {
        name: String,
        suggestions: Vec<String>,
    },

    /// A `number` formatter whose argument is not an integer in range.
    #[error("invalid precision for number formatter: '{arg}'")]
    InvalidPrecision { arg: String },

    /// A conditional operator other than `eq`, `gt`, or `lt`.
    #[error("unknown conditional operator '{op}'")]
    UnknownOperator { op: String },

    /// A conditional whose operator has no ':' test value.
    #[error("conditional on '{path}' is missing its test value: expected 'op:value'")]
    MissingTestValue { path: String },

    /// A conditional with an empty true or false branch.
    #[error("invalid conditional on '{path}': true/false branch must not be empty")]
    EmptyBranch { path: String },
}

/// Format the "did you mean" tail of an error message.
fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute up to three close matches for `key` among `available`, closest first.
///
/// Keys of three characters or fewer allow an edit distance of 1; longer keys
/// allow 2.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
