//! Bundle configuration.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bon::Builder;
use serde::Deserialize;
use tracing::trace;

use crate::bundle::LoadError;
use crate::interpreter::DEFAULT_MAX_DEPTH;

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Configuration for a [`Bundle`](super::Bundle).
///
/// Built in code with [`BundleConfig::builder`] or read from TOML:
///
/// ```
/// use glossa::bundle::BundleConfig;
///
/// let config = BundleConfig::from_toml_str(r#"
///     default_language = "en"
///
///     [fallbacks]
///     zh-CN = ["zh-CN", "zh", "en"]
/// "#).unwrap();
///
/// assert_eq!(config.fallback_chain("zh-CN"), ["zh-CN", "zh", "en"]);
/// assert_eq!(config.fallback_chain("fr"), ["fr", "en"]);
/// assert_eq!(config.fallback_chain(""), ["en"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    /// Language tried last, and first when no language is requested.
    #[builder(into, default = DEFAULT_LANGUAGE.to_string())]
    pub default_language: String,

    /// Explicit fallback chains, keyed by requested language.
    #[builder(default)]
    pub fallbacks: HashMap<String, Vec<String>>,

    /// Limit on nested conditional branch renders.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

impl Default for BundleConfig {
    fn default() -> Self {
        BundleConfig::builder().build()
    }
}

impl BundleConfig {
    /// Parse a configuration from TOML text. Missing fields take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let mut config: BundleConfig = toml::from_str(content)?;
        if config.default_language.is_empty() {
            config.default_language = DEFAULT_LANGUAGE.to_string();
        }
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Languages to try, in order, when translating for `language`.
    ///
    /// - A configured, non-empty fallback list for `language` is used as is
    /// - Otherwise `language` followed by the default language, without duplicates
    /// - An empty `language` yields only the default language
    pub fn fallback_chain(&self, language: &str) -> Vec<String> {
        if language.is_empty() {
            return vec![self.default_language.clone()];
        }

        if let Some(chain) = self.fallbacks.get(language).filter(|chain| !chain.is_empty()) {
            trace!(language, ?chain, "using configured fallback chain");
            return chain.clone();
        }

        let mut chain = vec![language.to_string()];
        if !self.default_language.is_empty() && self.default_language != language {
            chain.push(self.default_language.clone());
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BundleConfig::default();
        assert_eq!(config.default_language, "en");
        assert!(config.fallbacks.is_empty());
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn requested_default_language_is_not_repeated() {
        let config = BundleConfig::builder().default_language("de").build();
        assert_eq!(config.fallback_chain("de"), ["de"]);
        assert_eq!(config.fallback_chain("fr"), ["fr", "de"]);
    }

    #[test]
    fn empty_configured_chain_is_ignored() {
        let config = BundleConfig::builder()
            .fallbacks(HashMap::from([("pt".to_string(), Vec::new())]))
            .build();
        assert_eq!(config.fallback_chain("pt"), ["pt", "en"]);
    }

    #[test]
    fn toml_rejects_unknown_fields() {
        assert!(matches!(
            BundleConfig::from_toml_str("default_lang = \"en\""),
            Err(LoadError::Config(_))
        ));
    }

    #[test]
    fn toml_fills_missing_fields() {
        let config = BundleConfig::from_toml_str("max_depth = 8").unwrap();
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.default_language, "en");
    }
}
