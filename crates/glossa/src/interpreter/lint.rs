//! Static lint rules for template text.
//!
//! Checks brace balance and the structure of every placeholder without
//! resolving values or running formatters. Placeholders are inspected from
//! their raw source, so problems the lenient parser would silently turn into
//! literal text (such as `{|upper}`) are still reported.

use crate::interpreter::error::compute_suggestions;
use crate::interpreter::formatters::parse_decimals;
use crate::interpreter::{FormatterRegistry, LintIssue};
use crate::parser::{CompareOp, placeholder_sources};

/// Runs every lint rule over `text`, returning all issues in source order.
///
/// Brace issues come first, then placeholder issues. Conditional branch
/// templates are not linted recursively.
///
/// # Example
///
/// ```
/// use glossa::interpreter::{FormatterRegistry, LintIssue, lint_template};
///
/// let registry = FormatterRegistry::with_builtins();
/// let issues = lint_template("{x|bogus} }", &registry);
/// assert_eq!(issues[0], LintIssue::UnexpectedClosingBrace { position: 10 });
/// assert!(matches!(issues[1], LintIssue::UnknownFormatter { .. }));
/// ```
pub fn lint_template(text: &str, registry: &FormatterRegistry) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    lint_braces(text, &mut issues);
    for source in placeholder_sources(text) {
        lint_placeholder(source, registry, &mut issues);
    }
    issues
}

/// Reports each stray `}` and, once, an unclosed outermost `{`.
///
/// Positions count characters, not bytes.
fn lint_braces(text: &str, issues: &mut Vec<LintIssue>) {
    let mut depth = 0usize;
    let mut outermost_open = 0usize;
    for (position, c) in text.chars().enumerate() {
        match c {
            '{' => {
                if depth == 0 {
                    outermost_open = position;
                }
                depth += 1;
            }
            '}' => {
                if depth == 0 {
                    issues.push(LintIssue::UnexpectedClosingBrace { position });
                } else {
                    depth -= 1;
                }
            }
            _ => {}
        }
    }
    if depth > 0 {
        issues.push(LintIssue::UnclosedPlaceholder {
            position: outermost_open,
        });
    }
}

fn lint_placeholder(source: &str, registry: &FormatterRegistry, issues: &mut Vec<LintIssue>) {
    let mut segments = source.split('|').map(str::trim);
    let path = segments.next().unwrap_or_default();
    if path.is_empty() {
        issues.push(LintIssue::EmptyPath);
    }

    for segment in segments {
        if segment.is_empty() {
            issues.push(LintIssue::EmptySegment {
                path: path.to_string(),
            });
        } else if let Some((condition, branches)) = segment.split_once('?') {
            lint_conditional(path, condition, branches, issues);
        } else {
            lint_formatter(segment, registry, issues);
        }
    }
}

fn lint_formatter(segment: &str, registry: &FormatterRegistry, issues: &mut Vec<LintIssue>) {
    let (name, arg) = segment.split_once(':').unwrap_or((segment, ""));
    let (name, arg) = (name.trim(), arg.trim());

    if name.is_empty() {
        issues.push(LintIssue::EmptyFormatterName {
            segment: segment.to_string(),
        });
        return;
    }

    if !registry.contains(name) {
        issues.push(LintIssue::UnknownFormatter {
            name: name.to_string(),
            suggestions: compute_suggestions(name, &registry.names()),
        });
        return;
    }

    if name == "number" && parse_decimals(arg).is_err() {
        issues.push(LintIssue::InvalidPrecision {
            arg: arg.to_string(),
        });
    }
}

fn lint_conditional(path: &str, condition: &str, branches: &str, issues: &mut Vec<LintIssue>) {
    let op = match condition.split_once(':') {
        Some((op, _)) => op.trim(),
        None => {
            issues.push(LintIssue::MissingTestValue {
                path: path.to_string(),
            });
            condition.trim()
        }
    };
    if CompareOp::parse(op).is_none() {
        issues.push(LintIssue::UnknownOperator { op: op.to_string() });
    }

    let branches_filled = branches
        .split_once(':')
        .is_some_and(|(t, f)| !t.trim().is_empty() && !f.trim().is_empty());
    if !branches_filled {
        issues.push(LintIssue::EmptyBranch {
            path: path.to_string(),
        });
    }
}
