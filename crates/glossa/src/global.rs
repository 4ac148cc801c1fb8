//! Process-wide template engine.
//!
//! Provides shared access to a lazily created [`Engine`], for applications
//! that do not want to pass an engine to every call site. Formatters
//! registered here are visible to every later render in the process.

use std::sync::LazyLock;

use crate::interpreter::{Engine, EvalError, FormatError, LintIssue};
use crate::types::{Map, Value};

static GLOBAL_ENGINE: LazyLock<Engine> = LazyLock::new(Engine::new);

/// The shared engine.
pub fn engine() -> &'static Engine {
    &GLOBAL_ENGINE
}

/// Render a template with the shared engine.
///
/// ```
/// use glossa::{args, global};
///
/// let text = global::render("{n|upper}", &args! { "n" => "tom" }).unwrap();
/// assert_eq!(text, "TOM");
/// ```
pub fn render(text: &str, args: &Map) -> Result<String, EvalError> {
    GLOBAL_ENGINE.render(text, args)
}

/// Register a formatter on the shared engine.
pub fn register_formatter<F>(name: impl Into<String>, formatter: F)
where
    F: Fn(&Value, &str) -> Result<Value, FormatError> + Send + Sync + 'static,
{
    GLOBAL_ENGINE.register_formatter(name, formatter);
}

/// Check a template against the shared engine's formatters, returning the
/// first issue.
pub fn validate(text: &str) -> Result<(), LintIssue> {
    GLOBAL_ENGINE.validate(text)
}

/// Every lint issue in a template, using the shared engine's formatters.
pub fn lint(text: &str) -> Vec<LintIssue> {
    GLOBAL_ENGINE.lint(text)
}
