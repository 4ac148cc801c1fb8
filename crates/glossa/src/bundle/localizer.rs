//! Translation through a language fallback chain.

use tracing::{trace, warn};

use crate::bundle::{Bundle, TranslateError};
use crate::types::Map;

/// A view of a [`Bundle`] bound to an ordered chain of languages.
///
/// The first language in the chain that has a message for a key wins.
#[derive(Debug, Clone)]
pub struct Localizer<'a> {
    bundle: &'a Bundle,
    languages: Vec<String>,
}

impl<'a> Localizer<'a> {
    pub(crate) fn new(bundle: &'a Bundle, languages: Vec<String>) -> Self {
        Self { bundle, languages }
    }

    /// The fallback chain, most preferred first.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Find the message for `key`, returning the language it came from.
    pub fn lookup(&self, key: &str) -> Option<(String, String)> {
        self.languages.iter().find_map(|language| {
            let text = self.bundle.message(language, key);
            trace!(key, %language, found = text.is_some(), "probing fallback chain");
            text.map(|text| (language.clone(), text))
        })
    }

    /// Translate `key`, reporting a missing message or render failure.
    pub fn try_translate(&self, key: &str, args: &Map) -> Result<String, TranslateError> {
        let (language, text) = self.lookup(key).ok_or_else(|| TranslateError::MissingKey {
            key: key.to_string(),
            languages: self.languages.clone(),
        })?;
        self.bundle
            .engine()
            .render(&text, args)
            .map_err(|source| TranslateError::Render {
                key: key.to_string(),
                language,
                source,
            })
    }

    /// Translate `key`, never failing.
    ///
    /// Returns the key itself when no language has a message for it, and the
    /// raw template text when rendering fails.
    pub fn translate(&self, key: &str, args: &Map) -> String {
        let Some((language, text)) = self.lookup(key) else {
            warn!(key, languages = ?self.languages, "missing translation, using key");
            return key.to_string();
        };
        match self.bundle.engine().render(&text, args) {
            Ok(rendered) => rendered,
            Err(error) => {
                warn!(key, %language, %error, "render failed, using raw message");
                text
            }
        }
    }
}
