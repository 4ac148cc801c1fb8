//! Parse error types for glossa placeholders.

use thiserror::Error;

/// A malformed placeholder expression.
///
/// The template parser recovers from these locally by emitting the
/// placeholder source as literal text; they are only observable through
/// [`parse_placeholder`](super::parse_placeholder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The placeholder contains only whitespace.
    #[error("empty placeholder expression")]
    EmptyExpression,

    /// The value path before the first '|' is empty.
    #[error("empty value path in '{expr}'")]
    EmptyPath { expr: String },

    /// A segment between two '|' is empty.
    #[error("empty formatter segment in '{expr}'")]
    EmptySegment { expr: String },

    /// A formatter segment has no name before its ':'.
    #[error("empty formatter name in segment '{segment}'")]
    EmptyFormatterName { segment: String },

    /// A conditional segment is missing its '?' or one of its ':' separators.
    #[error("invalid conditional '{segment}': expected 'op:value?true:false'")]
    InvalidConditional { segment: String },
}
