//! Formatter registry for value transformations.
//!
//! Formatters are named functions that transform a resolved value (e.g.,
//! `upper`, `number`, `date`). Each engine owns its own registry, so
//! different engines can expose different formatter sets.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::interpreter::error::compute_suggestions;
use crate::interpreter::formatters::register_builtins;
use crate::interpreter::{EvalError, FormatError};
use crate::types::Value;

/// Formatter function signature.
///
/// Takes:
/// - `value`: The value to transform
/// - `arg`: The text after `:` in `name:arg`, or `""` when absent
///
/// Returns the transformed value or an error.
pub type FormatterFn = Arc<dyn Fn(&Value, &str) -> Result<Value, FormatError> + Send + Sync>;

/// Registry for formatter functions.
///
/// Reads and registrations are guarded by a reader/writer lock. Registration
/// is expected during initialization; a render that already failed with
/// `UnknownFormatter` is not retried when the name is registered later.
pub struct FormatterRegistry {
    formatters: RwLock<BTreeMap<String, FormatterFn>>,
}

impl FormatterRegistry {
    /// Create a registry with no formatters.
    pub fn empty() -> Self {
        Self {
            formatters: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a registry with the built-in formatters
    /// (`upper`, `lower`, `title`, `number`, `currency`, `date`).
    pub fn with_builtins() -> Self {
        let registry = Self::empty();
        register_builtins(&registry);
        registry
    }

    /// Register a formatter, replacing any existing one with the same name.
    pub fn register<F>(&self, name: impl Into<String>, formatter: F)
    where
        F: Fn(&Value, &str) -> Result<Value, FormatError> + Send + Sync + 'static,
    {
        self.formatters
            .write()
            .insert(name.into(), Arc::new(formatter));
    }

    /// Get a formatter by name.
    pub fn get(&self, name: &str) -> Option<FormatterFn> {
        self.formatters.read().get(name).cloned()
    }

    /// Check if a formatter is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.formatters.read().contains_key(name)
    }

    /// Names of all registered formatters, sorted.
    pub fn names(&self) -> Vec<String> {
        self.formatters.read().keys().cloned().collect()
    }

    /// Apply a formatter by name.
    ///
    /// The lock is released before the formatter runs, so formatters may
    /// themselves use the registry.
    pub fn apply(&self, name: &str, value: &Value, arg: &str) -> Result<Value, EvalError> {
        let formatter = self.get(name).ok_or_else(|| EvalError::UnknownFormatter {
            name: name.to_string(),
            suggestions: compute_suggestions(name, &self.names()),
        })?;
        formatter(value, arg).map_err(|source| EvalError::Formatter {
            name: name.to_string(),
            source,
        })
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl Debug for FormatterRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.names())
            .finish()
    }
}
