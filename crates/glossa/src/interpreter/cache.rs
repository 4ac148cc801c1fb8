//! Parsed template cache.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::parser::{Template, parse_template};

/// Memoizes raw template text to its parsed [`Template`].
///
/// Keys are the verbatim template text. Entries are created on first use
/// and never evicted, so an unbounded number of distinct template strings
/// (for example, text built from user input) grows the cache without bound.
/// Render stored messages rather than dynamically assembled strings.
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: RwLock<HashMap<String, Arc<Template>>>,
}

impl TemplateCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously parsed template.
    pub fn get(&self, text: &str) -> Option<Arc<Template>> {
        self.entries.read().get(text).cloned()
    }

    /// Store a parsed template, replacing any existing entry for `text`.
    pub fn insert(&self, text: impl Into<String>, template: Arc<Template>) {
        self.entries.write().insert(text.into(), template);
    }

    /// Return the cached template for `text`, parsing and storing it on a miss.
    ///
    /// Concurrent misses for the same text may each parse; the last insert
    /// wins and every caller gets an equal tree.
    pub fn get_or_parse(&self, text: &str) -> Arc<Template> {
        if let Some(template) = self.get(text) {
            return template;
        }
        debug!(len = text.len(), "template cache miss");
        let template = Arc::new(parse_template(text));
        self.insert(text, Arc::clone(&template));
        template
    }

    /// Number of cached templates.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
