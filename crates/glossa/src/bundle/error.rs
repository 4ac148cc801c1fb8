//! Error types for message loading and translation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de::Error as TomlError;

use crate::interpreter::EvalError;

/// An error that occurred while loading message files or configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a message or config file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A YAML message file is malformed.
    #[error("{path}: invalid YAML: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A JSON message file is malformed.
    #[error("{path}: invalid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A message file has no `language` field, or it is empty.
    #[error("{path}: missing 'language' field")]
    MissingLanguage { path: PathBuf },

    /// The file extension is not one of `yaml`, `yml`, or `json`.
    #[error("{path}: unsupported message file format")]
    UnsupportedFormat { path: PathBuf },

    /// A TOML configuration file is malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] TomlError),
}

/// An error returned by [`Localizer::try_translate`](super::Localizer::try_translate).
#[derive(Debug, Error)]
pub enum TranslateError {
    /// No language in the fallback chain has a message for the key.
    #[error("no message for '{key}' in {}", languages.join(", "))]
    MissingKey { key: String, languages: Vec<String> },

    /// The message was found but could not be rendered.
    #[error("failed to render '{key}' ({language}): {source}")]
    Render {
        key: String,
        language: String,
        #[source]
        source: EvalError,
    },
}
