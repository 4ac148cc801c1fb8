//! Evaluation context for tracking state during recursive evaluation.

use crate::interpreter::EvalError;
use crate::types::{Map, Value};

/// Default limit on nested conditional branch renders.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// The argument bag a render resolves paths against.
#[derive(Debug, Clone, Copy)]
pub enum Args<'a> {
    /// A string-keyed bag, looked up by exact key.
    Map(&'a Map),
    /// Any value; maps and records are searched, other values have no children.
    Value(&'a Value),
}

impl<'a> Args<'a> {
    /// Look up the first path segment.
    pub fn lookup(&self, segment: &str) -> Option<&'a Value> {
        match *self {
            Args::Map(map) => map.get(segment),
            Args::Value(value) => value.lookup(segment),
        }
    }
}

/// Evaluation context carrying state through recursive evaluation.
///
/// The context tracks:
/// - The original arguments, shared by every branch of a render
/// - Branch depth for limiting runaway self-referential templates
pub struct EvalContext<'a> {
    /// Arguments available during evaluation.
    args: Args<'a>,
    /// Current branch depth.
    depth: usize,
    /// Maximum allowed depth.
    max_depth: usize,
}

impl<'a> EvalContext<'a> {
    /// Create new context with arguments and the default depth limit.
    pub fn new(args: Args<'a>) -> Self {
        Self::with_max_depth(args, DEFAULT_MAX_DEPTH)
    }

    /// Create context with a custom max depth.
    pub fn with_max_depth(args: Args<'a>, max_depth: usize) -> Self {
        Self {
            args,
            depth: 0,
            max_depth,
        }
    }

    /// Get the arguments.
    pub fn args(&self) -> Args<'a> {
        self.args
    }

    /// Enter a conditional branch.
    ///
    /// Returns an error if the maximum depth would be exceeded.
    pub fn enter_branch(&mut self) -> Result<(), EvalError> {
        if self.depth >= self.max_depth {
            return Err(EvalError::MaxDepthExceeded {
                max_depth: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a conditional branch.
    pub fn exit_branch(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Get current branch depth.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
