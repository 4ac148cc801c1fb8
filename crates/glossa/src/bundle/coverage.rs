//! Translation coverage: key alignment across languages and template lint.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Serialize;

use crate::bundle::loader::{self, MessageFile};
use crate::bundle::LoadError;
use crate::interpreter::{Engine, LintIssue};

/// The result of checking a set of message files.
///
/// Every map only has entries for languages with at least one finding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Languages seen, sorted.
    pub languages: Vec<String>,
    /// Union of every language's keys, sorted.
    pub all_keys: Vec<String>,
    /// The language other languages were compared against, if any.
    pub source_language: Option<String>,
    /// Number of keys each language was compared against.
    pub reference_keys: usize,
    /// Per language, reference keys it lacks.
    pub missing: BTreeMap<String, Vec<String>>,
    /// Per language, keys the source language does not have.
    pub redundant: BTreeMap<String, Vec<String>>,
    /// Per language and key, the lint issues of that message.
    pub syntax_errors: BTreeMap<String, BTreeMap<String, Vec<LintIssue>>>,
}

impl CoverageReport {
    /// Returns true if any language has missing keys, redundant keys, or
    /// syntax errors.
    pub fn has_issues(&self) -> bool {
        !self.missing.is_empty() || !self.redundant.is_empty() || !self.syntax_errors.is_empty()
    }

    /// Number of reference keys present in `language`.
    pub fn translated_count(&self, language: &str) -> usize {
        let missing = self.missing.get(language).map_or(0, Vec::len);
        self.reference_keys.saturating_sub(missing)
    }
}

/// Check message files for key alignment and template problems.
///
/// Files declaring the same language are merged. When `source_language` is
/// given and present, each language is compared against its keys, and keys
/// it lacks are reported as redundant. Otherwise every language is compared
/// against the union of all keys and nothing is redundant.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use glossa::Engine;
/// use glossa::bundle::{MessageFile, check_messages};
///
/// let en = MessageFile {
///     language: "en".into(),
///     messages: BTreeMap::from([("a".into(), "A".into()), ("b".into(), "{x|bogus}".into())]),
/// };
/// let fr = MessageFile {
///     language: "fr".into(),
///     messages: BTreeMap::from([("a".into(), "A".into()), ("c".into(), "C".into())]),
/// };
///
/// let report = check_messages(&[en, fr], Some("en"), &Engine::new());
/// assert_eq!(report.missing["fr"], ["b"]);
/// assert_eq!(report.redundant["fr"], ["c"]);
/// assert!(report.syntax_errors["en"].contains_key("b"));
/// ```
pub fn check_messages(
    files: &[MessageFile],
    source_language: Option<&str>,
    engine: &Engine,
) -> CoverageReport {
    let mut by_language: BTreeMap<&str, BTreeMap<&str, &str>> = BTreeMap::new();
    for file in files {
        let table = by_language.entry(file.language.as_str()).or_default();
        for (key, text) in &file.messages {
            table.insert(key.as_str(), text.as_str());
        }
    }

    let all_keys: BTreeSet<&str> = by_language
        .values()
        .flat_map(|table| table.keys().copied())
        .collect();

    let source = source_language.and_then(|language| {
        by_language
            .get(language)
            .map(|table| (language, table.keys().copied().collect::<BTreeSet<&str>>()))
    });
    let reference = source.as_ref().map_or(&all_keys, |(_, keys)| keys);

    let mut report = CoverageReport {
        languages: by_language.keys().map(ToString::to_string).collect(),
        all_keys: all_keys.iter().map(ToString::to_string).collect(),
        source_language: source.as_ref().map(|(language, _)| language.to_string()),
        reference_keys: reference.len(),
        ..CoverageReport::default()
    };

    for (&language, table) in &by_language {
        let missing: Vec<String> = reference
            .iter()
            .filter(|key| !table.contains_key(*key))
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            report.missing.insert(language.to_string(), missing);
        }

        if let Some((_, source_keys)) = &source {
            let redundant: Vec<String> = table
                .keys()
                .filter(|key| !source_keys.contains(*key))
                .map(ToString::to_string)
                .collect();
            if !redundant.is_empty() {
                report.redundant.insert(language.to_string(), redundant);
            }
        }

        let errors: BTreeMap<String, Vec<LintIssue>> = table
            .iter()
            .map(|(&key, &text)| (key.to_string(), engine.lint(text)))
            .filter(|(_, issues)| !issues.is_empty())
            .collect();
        if !errors.is_empty() {
            report.syntax_errors.insert(language.to_string(), errors);
        }
    }

    report
}

/// Load every message file under `dir` and check it.
pub fn check_dir(
    dir: impl AsRef<Path>,
    source_language: Option<&str>,
    engine: &Engine,
) -> Result<CoverageReport, LoadError> {
    let files: Vec<MessageFile> = loader::load_dir(dir)?
        .into_iter()
        .map(|(_, file)| file)
        .collect();
    Ok(check_messages(&files, source_language, engine))
}
