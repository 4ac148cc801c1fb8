//! Public AST types for glossa templates.
//!
//! These types are public to enable external tooling (linters, formatters, etc.).

/// A parsed template string: an ordered sequence of nodes in render order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    pub nodes: Vec<Node>,
}

impl Template {
    /// Iterate over the placeholders of this template in source order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Placeholder(p) => Some(p),
            Node::Text(_) => None,
        })
    }
}

/// A node within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text, emitted verbatim.
    Text(String),
    /// A placeholder: {path | formatter:arg | ... | op:value?true:false}
    Placeholder(Placeholder),
}

/// A placeholder referencing a value path plus optional formatting and
/// conditional logic.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// Dotted path into the arguments (e.g., "user.name"). Never empty.
    pub path: String,
    /// Formatters applied left to right.
    pub formatters: Vec<FormatterCall>,
    /// Optional ternary selecting between two sub-templates.
    pub conditional: Option<Conditional>,
}

/// A single formatter in the chain (e.g., "number:2").
#[derive(Debug, Clone, PartialEq)]
pub struct FormatterCall {
    /// Formatter name (e.g., "number").
    pub name: String,
    /// Argument after the first ':' (e.g., "2"); empty when absent.
    pub arg: String,
}

/// A ternary condition: `op:test_value?true_template:false_template`.
///
/// Branches are raw template source, parsed only when selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    /// Operator as written (e.g., "eq", "gt", "lt").
    pub op: String,
    /// Right-hand side of the comparison.
    pub test_value: String,
    /// Template rendered when the comparison holds.
    pub true_template: String,
    /// Template rendered otherwise.
    pub false_template: String,
}

impl Conditional {
    /// The comparison operator, or `None` if `op` is not a known operator.
    pub fn compare_op(&self) -> Option<CompareOp> {
        CompareOp::parse(&self.op)
    }
}

/// A comparison supported by conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `eq`: exact equality.
    Eq,
    /// `gt`: numeric greater-than.
    Gt,
    /// `lt`: numeric less-than.
    Lt,
}

impl CompareOp {
    /// Parse an operator name as written in a template.
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "eq" => Some(CompareOp::Eq),
            "gt" => Some(CompareOp::Gt),
            "lt" => Some(CompareOp::Lt),
            _ => None,
        }
    }

    /// The operator name as written in a template.
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Gt => "gt",
            CompareOp::Lt => "lt",
        }
    }
}
