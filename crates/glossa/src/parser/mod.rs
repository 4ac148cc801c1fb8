//! glossa template parser.
//!
//! This module turns raw template strings into an AST that can be evaluated,
//! cached, or inspected by external tooling such as linters.

pub mod ast;
pub mod error;
mod template;

pub use ast::*;
pub use error::SyntaxError;
pub use template::{parse_placeholder, parse_template, placeholder_sources};
