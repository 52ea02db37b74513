//! Built-in method dispatch.
//!
//! The recognized set is fixed and closed: zero-argument string
//! transforms only. Method names are the template surface language's
//! (camelCase), not Rust's.

use crate::errors::{unsupported_method, EvalResult};
use crate::value::Value;

/// The recognized zero-argument methods on string values.
pub const STR_METHODS: &[&str] = &["toLowerCase", "toUpperCase", "trim"];

/// Dispatch a zero-argument method call on a receiver value.
///
/// Anything outside the recognized set fails with
/// [`EvalErrorKind::UnsupportedMethod`](crate::EvalErrorKind::UnsupportedMethod).
pub fn dispatch_method(receiver: &Value, method: &str) -> EvalResult {
    match receiver {
        Value::Str(s) => match method {
            "toUpperCase" => Ok(Value::string(s.to_uppercase())),
            "toLowerCase" => Ok(Value::string(s.to_lowercase())),
            "trim" => Ok(Value::string(s.trim())),
            _ => Err(unsupported_method("str", method)),
        },
        other => Err(unsupported_method(other.type_name(), method)),
    }
}
