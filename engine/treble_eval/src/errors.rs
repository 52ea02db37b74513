//! Error types for expression parsing and evaluation.
//!
//! `EvalErrorKind` provides typed error categories. Factory functions
//! (e.g. `unbound_identifier()`) are the public constructors; they
//! populate both `kind` and `message`.

use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category for evaluation failures.
///
/// Each variant carries the structured data for its condition,
/// enabling programmatic matching without string parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// An interpolation referenced a name absent from the environment.
    UnboundIdentifier { name: String },
    /// A method outside the fixed recognized set was invoked, or a
    /// member was accessed on a value that has none.
    UnsupportedMethod { type_name: String, method: String },
    /// The interpolation source does not match the supported grammar.
    InvalidExpressionSyntax { detail: String, offset: u32 },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundIdentifier { name } => write!(f, "unbound identifier: {name}"),
            Self::UnsupportedMethod { type_name, method } => {
                write!(f, "no method '{method}' on type {type_name}")
            }
            Self::InvalidExpressionSyntax { detail, offset } => {
                write!(f, "invalid expression syntax: {detail} (at byte {offset})")
            }
        }
    }
}

/// Evaluation failure.
///
/// For factory-created errors `message` equals `kind.to_string()`;
/// it is kept as a field so callers can surface the text without
/// re-formatting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// An interpolation referenced a name with no binding.
#[cold]
pub fn unbound_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundIdentifier {
        name: name.to_string(),
    })
}

/// A method outside the recognized set was invoked.
#[cold]
pub fn unsupported_method(type_name: &str, method: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedMethod {
        type_name: type_name.to_string(),
        method: method.to_string(),
    })
}

/// The interpolation source does not match the supported grammar.
#[cold]
pub fn invalid_syntax(detail: impl Into<String>, offset: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidExpressionSyntax {
        detail: detail.into(),
        offset,
    })
}
