//! Message file loading.
//!
//! A message file declares its language and a flat key to template table:
//!
//! ```yaml
//! language: zh-CN
//! messages:
//!   user.login.success: "欢迎回来，{name}"
//! ```
//!
//! YAML (`.yaml`, `.yml`) and JSON (`.json`) files are supported.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::bundle::LoadError;

/// The contents of one message file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageFile {
    /// Language tag the messages belong to (e.g., "zh-CN").
    #[serde(default)]
    pub language: String,

    /// Message templates keyed by translation key.
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}

/// The serialization format of a message file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    Yaml,
    Json,
}

impl MessageFormat {
    /// Detect the format from a file extension, if supported.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(MessageFormat::Yaml),
            "json" => Some(MessageFormat::Json),
            _ => None,
        }
    }
}

/// Parse a message file from memory.
///
/// `path` is used only for error messages.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use glossa::bundle::{MessageFormat, parse_str};
///
/// let file = parse_str(
///     "language: en\nmessages:\n  hello: \"Hello, {name}\"\n",
///     MessageFormat::Yaml,
///     Path::new("en.yaml"),
/// ).unwrap();
/// assert_eq!(file.language, "en");
/// assert_eq!(file.messages["hello"], "Hello, {name}");
/// ```
pub fn parse_str(
    content: &str,
    format: MessageFormat,
    path: &Path,
) -> Result<MessageFile, LoadError> {
    let file: MessageFile = match format {
        MessageFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|source| LoadError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
        MessageFormat::Json => {
            serde_json::from_str(content).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    if file.language.trim().is_empty() {
        return Err(LoadError::MissingLanguage {
            path: path.to_path_buf(),
        });
    }
    Ok(file)
}

/// Read and parse one message file, choosing the format by extension.
pub fn load_file(path: impl AsRef<Path>) -> Result<MessageFile, LoadError> {
    let path = path.as_ref();
    let format = MessageFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = parse_str(&content, format, path)?;
    debug!(
        path = %path.display(),
        language = %file.language,
        messages = file.messages.len(),
        "loaded message file"
    );
    Ok(file)
}

/// Load every message file under `dir`, recursively, in sorted path order.
///
/// Files with other extensions are ignored. The first malformed file aborts
/// the load.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<(PathBuf, MessageFile)>, LoadError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || MessageFormat::from_path(entry.path()).is_none() {
            continue;
        }
        let file = load_file(entry.path())?;
        files.push((entry.into_path(), file));
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_detected_from_extension() {
        assert_eq!(
            MessageFormat::from_path(Path::new("a/en.yml")),
            Some(MessageFormat::Yaml)
        );
        assert_eq!(
            MessageFormat::from_path(Path::new("en.json")),
            Some(MessageFormat::Json)
        );
        assert_eq!(MessageFormat::from_path(Path::new("en.toml")), None);
        assert_eq!(MessageFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn json_files_parse() {
        let file = parse_str(
            r#"{"language": "fr", "messages": {"bye": "Au revoir"}}"#,
            MessageFormat::Json,
            Path::new("fr.json"),
        )
        .unwrap();
        assert_eq!(file.language, "fr");
        assert_eq!(file.messages["bye"], "Au revoir");
    }

    #[test]
    fn missing_language_is_an_error() {
        let err = parse_str("messages:\n  a: b\n", MessageFormat::Yaml, Path::new("x.yaml"))
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingLanguage { .. }));
    }

    #[test]
    fn missing_messages_is_empty() {
        let file = parse_str("language: en\n", MessageFormat::Yaml, Path::new("en.yaml")).unwrap();
        assert!(file.messages.is_empty());
    }
}
