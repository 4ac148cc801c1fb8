//! Template evaluation.
//!
//! Walks a parsed template, resolving each placeholder's path, applying its
//! formatter chain, and either stringifying the result or rendering the
//! branch its conditional selects.

use crate::interpreter::cache::TemplateCache;
use crate::interpreter::resolver::resolve_path;
use crate::interpreter::{EvalContext, EvalError, FormatterRegistry};
use crate::parser::{CompareOp, Node, Placeholder, Template};
use crate::types::Value;

/// Evaluate a template AST, producing a formatted string.
///
/// Nodes are rendered in order and concatenated. The first failing
/// placeholder aborts the whole render.
///
/// # Errors
///
/// Returns an error if:
/// - A placeholder path does not resolve
/// - A formatter is unknown or rejects its input
/// - A conditional cannot compare the value against its test value
/// - Conditional branches nest deeper than the context allows
pub fn eval_template(
    template: &Template,
    ctx: &mut EvalContext<'_>,
    registry: &FormatterRegistry,
    cache: &TemplateCache,
) -> Result<String, EvalError> {
    let mut output = String::new();
    for node in &template.nodes {
        match node {
            Node::Text(text) => output.push_str(text),
            Node::Placeholder(placeholder) => {
                let rendered = eval_placeholder(placeholder, ctx, registry, cache)?;
                output.push_str(&rendered);
            }
        }
    }
    Ok(output)
}

/// Render a single placeholder.
fn eval_placeholder(
    placeholder: &Placeholder,
    ctx: &mut EvalContext<'_>,
    registry: &FormatterRegistry,
    cache: &TemplateCache,
) -> Result<String, EvalError> {
    let resolved =
        resolve_path(ctx.args(), &placeholder.path).ok_or_else(|| EvalError::ValueNotFound {
            path: placeholder.path.clone(),
        })?;

    let mut value = resolved.clone();
    for call in &placeholder.formatters {
        value = registry.apply(&call.name, &value, &call.arg)?;
    }

    let Some(conditional) = &placeholder.conditional else {
        return Ok(value.to_string());
    };

    let branch = if compare(&value, &conditional.op, &conditional.test_value)? {
        &conditional.true_template
    } else {
        &conditional.false_template
    };
    render_branch(branch, ctx, registry, cache)
}

/// Render a conditional branch with the same arguments, one level deeper.
fn render_branch(
    text: &str,
    ctx: &mut EvalContext<'_>,
    registry: &FormatterRegistry,
    cache: &TemplateCache,
) -> Result<String, EvalError> {
    ctx.enter_branch()?;
    let template = cache.get_or_parse(text);
    let result = eval_template(&template, ctx, registry, cache);
    ctx.exit_branch();
    result
}

/// Evaluate a conditional's comparison.
///
/// Numbers compare as `f64` against the test value parsed as `f64`, with
/// `eq`, `gt`, and `lt`. Strings support only exact `eq`. Every other value
/// type is rejected.
///
/// # Example
///
/// ```
/// use glossa::Value;
/// use glossa::interpreter::compare;
///
/// assert!(compare(&Value::from(5), "gt", "3").unwrap());
/// assert!(compare(&Value::from("admin"), "eq", "admin").unwrap());
/// assert!(compare(&Value::from("admin"), "gt", "a").is_err());
/// ```
pub fn compare(value: &Value, op: &str, test_value: &str) -> Result<bool, EvalError> {
    let unsupported = || EvalError::UnsupportedOperation {
        op: op.to_string(),
        type_name: value.type_name(),
    };

    match value {
        Value::Number(_) | Value::Float(_) => {
            let lhs = value.as_float().ok_or_else(unsupported)?;
            let rhs: f64 = test_value
                .parse()
                .map_err(|_| EvalError::InvalidTestValue {
                    value: test_value.to_string(),
                })?;
            match CompareOp::parse(op) {
                Some(CompareOp::Eq) => Ok(lhs == rhs),
                Some(CompareOp::Gt) => Ok(lhs > rhs),
                Some(CompareOp::Lt) => Ok(lhs < rhs),
                None => Err(unsupported()),
            }
        }
        Value::String(s) => match CompareOp::parse(op) {
            Some(CompareOp::Eq) => Ok(s == test_value),
            Some(CompareOp::Gt | CompareOp::Lt) | None => Err(unsupported()),
        },
        other => Err(EvalError::UnsupportedType {
            type_name: other.type_name(),
        }),
    }
}
