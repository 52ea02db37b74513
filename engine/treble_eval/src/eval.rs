//! Expression evaluation against a binding environment.

use treble_ir::Expr;

use crate::environment::Environment;
use crate::errors::{unbound_identifier, unsupported_method, EvalResult};
use crate::methods::dispatch_method;
use crate::parser::parse_expression;
use crate::value::Value;

/// Evaluate a parsed interpolation expression.
///
/// Pure: the environment is read-only and evaluation has no side
/// effects. Concatenation stringifies each operand before joining.
#[tracing::instrument(level = "trace", skip(env))]
pub fn evaluate(expr: &Expr, env: &Environment) -> EvalResult {
    match expr {
        Expr::Ident(name) => env.lookup(name).ok_or_else(|| unbound_identifier(name)),
        Expr::StrLit(value) => Ok(Value::string(value)),
        Expr::Property { recv, name } => {
            let value = evaluate(recv, env)?;
            match &value {
                Value::Record(_) => value
                    .field(name)
                    .ok_or_else(|| unbound_identifier(&property_path(recv, name))),
                other => Err(unsupported_method(other.type_name(), name)),
            }
        }
        Expr::MethodCall { recv, name } => {
            let value = evaluate(recv, env)?;
            dispatch_method(&value, name)
        }
        Expr::Concat(operands) => {
            let mut out = String::new();
            for operand in operands {
                let value = evaluate(operand, env)?;
                out.push_str(&value.to_string());
            }
            Ok(Value::string(out))
        }
    }
}

/// Parse and evaluate an interpolation source in one step.
#[tracing::instrument(level = "debug", skip(env))]
pub fn evaluate_source(source: &str, env: &Environment) -> EvalResult {
    let expr = parse_expression(source)?;
    evaluate(&expr, env)
}

/// Dotted path for field-lookup errors, e.g. `user.name`.
fn property_path(recv: &Expr, name: &str) -> String {
    match recv {
        Expr::Ident(base) => format!("{base}.{name}"),
        _ => name.to_string(),
    }
}
