//! Template string parser.
//!
//! Splits a template into literal text and `{…}` placeholders. Parsing is
//! lenient and never fails:
//! - An unmatched `{` is literal text
//! - Nested braces belong to the enclosing placeholder span
//! - A placeholder whose expression is malformed is emitted verbatim
//!
//! Placeholder expressions are parsed with winnow.

use std::mem;

use winnow::combinator::{opt, preceded, repeat, separated_pair};
use winnow::prelude::*;
use winnow::token::{rest, take_till};

use super::ast::*;
use super::error::SyntaxError;

/// Parse a template string into an AST.
///
/// # Example
///
/// ```
/// use glossa::parser::{Node, parse_template};
///
/// let t = parse_template("Hi {name|upper}! {unclosed");
/// assert_eq!(t.nodes.len(), 3);
/// assert_eq!(t.nodes[2], Node::Text("! {unclosed".into()));
/// ```
pub fn parse_template(input: &str) -> Template {
    let mut nodes = Vec::new();
    let mut literal = String::new();
    let mut remaining = input;

    while let Some(open) = remaining.find('{') {
        literal.push_str(&remaining[..open]);
        let after_open = &remaining[open + 1..];

        let Some(close) = matching_close(after_open) else {
            // No matching '}': the brace is literal, resume right after it.
            literal.push('{');
            remaining = after_open;
            continue;
        };

        let inner = &after_open[..close];
        match parse_placeholder(inner) {
            Ok(placeholder) => {
                flush_literal(&mut nodes, &mut literal);
                nodes.push(Node::Placeholder(placeholder));
            }
            Err(_) => {
                literal.push('{');
                literal.push_str(inner);
                literal.push('}');
            }
        }
        remaining = &after_open[close + 1..];
    }

    literal.push_str(remaining);
    flush_literal(&mut nodes, &mut literal);
    Template { nodes }
}

/// Inner text of every balanced `{…}` span, in source order.
///
/// Spans are found exactly as [`parse_template`] finds them, but nothing is
/// parsed, so malformed expressions are returned too.
pub fn placeholder_sources(input: &str) -> Vec<&str> {
    let mut sources = Vec::new();
    let mut remaining = input;
    while let Some(open) = remaining.find('{') {
        let after_open = &remaining[open + 1..];
        match matching_close(after_open) {
            Some(close) => {
                sources.push(&after_open[..close]);
                remaining = &after_open[close + 1..];
            }
            None => remaining = after_open,
        }
    }
    sources
}

/// Find the byte offset of the '}' closing a span whose '{' was just consumed.
fn matching_close(input: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in input.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Push accumulated literal text as a node, if any.
fn flush_literal(nodes: &mut Vec<Node>, literal: &mut String) {
    if !literal.is_empty() {
        nodes.push(Node::Text(mem::take(literal)));
    }
}

/// Parse the expression inside `{ … }`.
///
/// The expression is split on every `|`: the first segment is the value
/// path, a segment containing `?` is a conditional, and any other segment is
/// a formatter call. When several conditionals appear the last one wins.
///
/// Splitting does not track braces, so a `|` inside a conditional branch
/// splits the branch.
///
/// # Example
///
/// ```
/// use glossa::parser::parse_placeholder;
///
/// let p = parse_placeholder("price | number:2 | currency:¥").unwrap();
/// assert_eq!(p.path, "price");
/// assert_eq!(p.formatters[0].name, "number");
/// assert_eq!(p.formatters[1].arg, "¥");
/// ```
pub fn parse_placeholder(expr: &str) -> Result<Placeholder, SyntaxError> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }

    let mut input = trimmed;
    let (path, segments) = split_segments(&mut input).map_err(|_| SyntaxError::EmptyPath {
        expr: trimmed.to_string(),
    })?;

    let path = path.trim();
    if path.is_empty() {
        return Err(SyntaxError::EmptyPath {
            expr: trimmed.to_string(),
        });
    }

    let mut placeholder = Placeholder {
        path: path.to_string(),
        formatters: Vec::new(),
        conditional: None,
    };

    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            return Err(SyntaxError::EmptySegment {
                expr: trimmed.to_string(),
            });
        }

        if segment.contains('?') {
            placeholder.conditional = Some(conditional(segment)?);
            continue;
        }

        placeholder.formatters.push(formatter_call(segment)?);
    }

    Ok(placeholder)
}

/// Split `path|seg|seg…` into the path and the raw segments.
fn split_segments<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Vec<&'i str>)> {
    let path = take_till(0.., '|').parse_next(input)?;
    let segments: Vec<&str> = repeat(0.., preceded('|', take_till(0.., '|'))).parse_next(input)?;
    Ok((path, segments))
}

/// Split once on `sep`: everything before the first `sep`, and everything after.
fn split_once_on<'i>(input: &mut &'i str, sep: char) -> ModalResult<(&'i str, &'i str)> {
    separated_pair(take_till(0.., sep), sep, rest).parse_next(input)
}

/// Parse a formatter segment: `name` or `name:arg`.
fn formatter_call(segment: &str) -> Result<FormatterCall, SyntaxError> {
    let mut input = segment;
    let parsed: ModalResult<(&str, Option<&str>)> =
        (take_till(0.., ':'), opt(preceded(':', rest))).parse_next(&mut input);
    let (name, arg) = parsed.map_err(|_| SyntaxError::EmptyFormatterName {
        segment: segment.to_string(),
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(SyntaxError::EmptyFormatterName {
            segment: segment.to_string(),
        });
    }

    Ok(FormatterCall {
        name: name.to_string(),
        arg: arg.map(str::trim).unwrap_or_default().to_string(),
    })
}

/// Parse a conditional segment: `op:value?true:false`.
fn conditional(segment: &str) -> Result<Conditional, SyntaxError> {
    let invalid = || SyntaxError::InvalidConditional {
        segment: segment.to_string(),
    };

    let mut input = segment;
    let (condition, branches) = split_once_on(&mut input, '?').map_err(|_| invalid())?;

    let mut branches = branches;
    let (true_template, false_template) =
        split_once_on(&mut branches, ':').map_err(|_| invalid())?;

    let mut condition = condition;
    let (op, test_value) = split_once_on(&mut condition, ':').map_err(|_| invalid())?;

    Ok(Conditional {
        op: op.trim().to_string(),
        test_value: test_value.trim().to_string(),
        true_template: true_template.trim().to_string(),
        false_template: false_template.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_close_skips_nested_spans() {
        assert_eq!(matching_close("a{b}c}d"), Some(5));
        assert_eq!(matching_close("a{b}c"), None);
        assert_eq!(matching_close("}"), Some(0));
    }

    #[test]
    fn placeholder_sources_include_malformed_spans() {
        assert_eq!(
            placeholder_sources("{a} {} {|upper} {b|eq:1?{c}:d} {open"),
            vec!["a", "", "|upper", "b|eq:1?{c}:d"]
        );
    }

    #[test]
    fn split_once_on_requires_separator() {
        let mut input = "eq:0";
        assert_eq!(split_once_on(&mut input, ':').unwrap(), ("eq", "0"));

        let mut input = "eq";
        assert!(split_once_on(&mut input, ':').is_err());
    }

    #[test]
    fn split_once_on_keeps_later_separators() {
        let mut input = "a:b:c";
        assert_eq!(split_once_on(&mut input, ':').unwrap(), ("a", "b:c"));
    }

    #[test]
    fn split_segments_keeps_empty_segments() {
        let mut input = "x||upper|";
        let (path, segments) = split_segments(&mut input).unwrap();
        assert_eq!(path, "x");
        assert_eq!(segments, vec!["", "upper", ""]);
    }
}
