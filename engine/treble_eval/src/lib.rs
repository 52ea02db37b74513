//! Treble Eval - interpolation expression parser and evaluator.
//!
//! Given the source text of one `${...}` interpolation span and a
//! binding [`Environment`], this crate produces the span's string
//! value. The expression language is deliberately closed:
//!
//! - identifier lookup (`name`)
//! - record property access (`user.name`)
//! - zero-argument method calls from a fixed set
//!   (`title.toUpperCase()`)
//! - quoted string constants (`' '`)
//! - left-to-right concatenation (`a + ' ' + b`)
//!
//! Nothing outside this grammar is representable, so evaluation never
//! dispatches into arbitrary host code. Malformed sources fail with
//! [`EvalErrorKind::InvalidExpressionSyntax`]; unknown names and
//! methods fail with their own typed kinds.

mod environment;
pub mod errors;
mod eval;
mod methods;
mod parser;
mod value;

pub use environment::Environment;
pub use errors::{
    invalid_syntax, unbound_identifier, unsupported_method, EvalError, EvalErrorKind, EvalResult,
};
pub use eval::{evaluate, evaluate_source};
pub use methods::{dispatch_method, STR_METHODS};
pub use parser::parse_expression;
pub use value::Value;
