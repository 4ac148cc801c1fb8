//! The message bundle: every language's messages plus a rendering engine.

use std::collections::BTreeMap;
use std::path::Path;

use parking_lot::RwLock;
use tracing::debug;

use crate::bundle::loader::{self, MessageFile};
use crate::bundle::{BundleConfig, LoadError, Localizer};
use crate::interpreter::Engine;

type Messages = BTreeMap<String, BTreeMap<String, String>>;

/// Holds the messages of every language, keyed `language -> key -> template`.
///
/// Registration merges: later values overwrite earlier ones and nothing is
/// ever removed. A bundle is `Send + Sync`; loading and translating may
/// happen concurrently.
///
/// # Example
///
/// ```
/// use glossa::args;
/// use glossa::bundle::{Bundle, BundleConfig};
///
/// let bundle = Bundle::new(BundleConfig::default());
/// bundle.register_messages("en", [("greeting", "Hello, {name}!")]);
/// bundle.register_messages("fr", [("greeting", "Bonjour, {name} !")]);
///
/// let fr = bundle.locale("fr");
/// assert_eq!(fr.translate("greeting", &args! { "name" => "Tom" }), "Bonjour, Tom !");
/// ```
#[derive(Debug)]
pub struct Bundle {
    messages: RwLock<Messages>,
    config: BundleConfig,
    engine: Engine,
}

impl Bundle {
    /// Create an empty bundle with an engine built from `config`.
    pub fn new(config: BundleConfig) -> Self {
        let engine = Engine::builder().max_depth(config.max_depth).build();
        Self::with_engine(config, engine)
    }

    /// Create an empty bundle that renders with `engine`.
    pub fn with_engine(config: BundleConfig, engine: Engine) -> Self {
        Self {
            messages: RwLock::new(BTreeMap::new()),
            config,
            engine,
        }
    }

    /// Merge messages into `language`.
    pub fn register_messages<K, V>(&self, language: &str, messages: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut store = self.messages.write();
        let table = store.entry(language.to_string()).or_default();
        for (key, text) in messages {
            table.insert(key.into(), text.into());
        }
    }

    /// Register the contents of a parsed message file, returning its message count.
    ///
    /// A file with no messages registers nothing, not even its language.
    pub fn register_file(&self, file: MessageFile) -> usize {
        let count = file.messages.len();
        if count > 0 {
            self.register_messages(&file.language, file.messages);
        }
        count
    }

    /// Load and register one message file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let file = loader::load_file(path)?;
        Ok(self.register_file(file))
    }

    /// Load and register every message file under `dir`.
    ///
    /// Returns the total number of messages read. Files loaded before a
    /// failing file stay registered.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> Result<usize, LoadError> {
        let dir = dir.as_ref();
        let mut total = 0;
        for (_, file) in loader::load_dir(dir)? {
            total += self.register_file(file);
        }
        debug!(dir = %dir.display(), messages = total, "loaded message directory");
        Ok(total)
    }

    /// Languages with at least one message, sorted.
    pub fn languages(&self) -> Vec<String> {
        self.messages.read().keys().cloned().collect()
    }

    /// The raw template registered for `key` in `language`.
    pub fn message(&self, language: &str, key: &str) -> Option<String> {
        self.messages
            .read()
            .get(language)
            .and_then(|table| table.get(key))
            .cloned()
    }

    /// Keys registered for `language`, sorted.
    pub fn keys(&self, language: &str) -> Vec<String> {
        self.messages
            .read()
            .get(language)
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// A translation view for `language` using the configured fallback chain.
    pub fn locale(&self, language: &str) -> Localizer<'_> {
        Localizer::new(self, self.config.fallback_chain(language))
    }

    /// A translation view with an explicit chain, bypassing configuration.
    pub fn locale_with_chain(&self, languages: Vec<String>) -> Localizer<'_> {
        Localizer::new(self, languages)
    }

    /// The engine used for rendering; register custom formatters here.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The bundle configuration.
    pub fn config(&self) -> &BundleConfig {
        &self.config
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Self::new(BundleConfig::default())
    }
}
