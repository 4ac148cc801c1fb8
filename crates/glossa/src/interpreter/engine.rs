//! The template engine: formatter registry, parse cache, and render entry points.

use std::sync::Arc;

use bon::Builder;

use crate::interpreter::cache::TemplateCache;
use crate::interpreter::context::{Args, DEFAULT_MAX_DEPTH, EvalContext};
use crate::interpreter::evaluator::eval_template;
use crate::interpreter::lint::lint_template;
use crate::interpreter::{EvalError, FormatError, FormatterRegistry, LintIssue};
use crate::parser::Template;
use crate::types::{Map, Value};

/// A self-contained template engine.
///
/// Each engine owns its formatter registry and its parsed template cache, so
/// independent engines can expose different formatters. `Engine` is
/// `Send + Sync`; share it behind an `Arc` or use the process-wide instance
/// in [`crate::global`].
///
/// # Example
///
/// ```
/// use glossa::{Engine, args};
///
/// let engine = Engine::new();
/// let text = engine
///     .render("{count|eq:0?No items:{count} items}", &args! { "count" => 5 })
///     .unwrap();
/// assert_eq!(text, "5 items");
///
/// let strict = Engine::builder().max_depth(4).build();
/// assert_eq!(strict.max_depth(), 4);
/// ```
#[derive(Debug, Builder)]
pub struct Engine {
    /// Formatters available to templates. Defaults to the built-ins.
    #[builder(default)]
    formatters: FormatterRegistry,

    /// Limit on nested conditional branch renders.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[builder(skip)]
    cache: TemplateCache,
}

impl Engine {
    /// Create an engine with the built-in formatters and default settings.
    pub fn new() -> Self {
        Engine::builder().build()
    }

    /// Parse `text`, reusing the cached tree when the same text was seen before.
    pub fn parse(&self, text: &str) -> Arc<Template> {
        self.cache.get_or_parse(text)
    }

    /// Render a template against a string-keyed argument bag.
    ///
    /// # Errors
    ///
    /// Returns the first evaluation failure; see [`EvalError`].
    pub fn render(&self, text: &str, args: &Map) -> Result<String, EvalError> {
        self.render_args(text, Args::Map(args))
    }

    /// Render a template against any value.
    ///
    /// Paths are resolved from `root`: a record's fields or a map's keys.
    /// Useful together with [`crate::to_value`] for application structs.
    pub fn render_value(&self, text: &str, root: &Value) -> Result<String, EvalError> {
        self.render_args(text, Args::Value(root))
    }

    fn render_args(&self, text: &str, args: Args<'_>) -> Result<String, EvalError> {
        let template = self.parse(text);
        let mut ctx = EvalContext::with_max_depth(args, self.max_depth);
        eval_template(&template, &mut ctx, &self.formatters, &self.cache)
    }

    /// Register a formatter, replacing any existing one with the same name.
    pub fn register_formatter<F>(&self, name: impl Into<String>, formatter: F)
    where
        F: Fn(&Value, &str) -> Result<Value, FormatError> + Send + Sync + 'static,
    {
        self.formatters.register(name, formatter);
    }

    /// The formatter registry.
    pub fn formatters(&self) -> &FormatterRegistry {
        &self.formatters
    }

    /// Every lint issue found in `text`.
    pub fn lint(&self, text: &str) -> Vec<LintIssue> {
        lint_template(text, &self.formatters)
    }

    /// Check `text`, returning the first lint issue.
    pub fn validate(&self, text: &str) -> Result<(), LintIssue> {
        match self.lint(text).into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }

    /// Number of distinct template strings parsed so far.
    pub fn template_cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Limit on nested conditional branch renders.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
