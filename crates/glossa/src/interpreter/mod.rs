//! glossa interpreter for rendering templates.
//!
//! This module provides the engine that takes parsed templates and produces
//! formatted strings. It resolves value paths, applies formatter chains,
//! selects conditional branches, and caches parsed trees.

mod cache;
mod context;
mod engine;
mod error;
mod evaluator;
pub mod formatters;
mod lint;
mod registry;
mod resolver;

pub use cache::TemplateCache;
pub use context::{Args, DEFAULT_MAX_DEPTH, EvalContext};
pub use engine::Engine;
pub use error::{EvalError, FormatError, LintIssue, compute_suggestions};
pub use evaluator::{compare, eval_template};
pub use lint::lint_template;
pub use registry::{FormatterFn, FormatterRegistry};
pub use resolver::resolve_path;
