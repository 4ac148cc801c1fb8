//! Miette diagnostic wrapper for template lint issues.

use glossa::LintIssue;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for one lint issue in a template.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{issue}")]
#[diagnostic(code(glossa::lint), severity(Warning))]
pub struct LintDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: Option<SourceSpan>,

    issue: LintIssue,

    #[help]
    help: Option<String>,
}

impl LintDiagnostic {
    /// Create a diagnostic for `issue` found in `template`.
    pub fn new(name: &str, template: &str, issue: LintIssue) -> Self {
        let span = match &issue {
            LintIssue::UnexpectedClosingBrace { position }
            | LintIssue::UnclosedPlaceholder { position } => {
                Some((byte_offset(template, *position), 1).into())
            }
            _ => None,
        };
        let help = match &issue {
            LintIssue::UnknownOperator { .. } => Some("use one of: eq, gt, lt".to_string()),
            LintIssue::InvalidPrecision { .. } => {
                Some("the number formatter takes a decimal count, e.g. number:2".to_string())
            }
            LintIssue::EmptyBranch { .. } => {
                Some("write both branches: op:value?when true:when false".to_string())
            }
            _ => None,
        };

        LintDiagnostic {
            src: NamedSource::new(name, template.to_string()),
            span,
            issue,
            help,
        }
    }
}

/// Convert a character position to a byte offset, clamped to the text.
fn byte_offset(text: &str, position: usize) -> usize {
    text.char_indices()
        .nth(position)
        .map_or(text.len(), |(offset, _)| offset)
}
