//! Runtime values for interpolation evaluation.
//!
//! Heap values (`Str`, `Record`) go through factory methods and are
//! reference-counted, so cloning a value out of the environment is
//! cheap.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Runtime value bound in a render environment.
///
/// The set is closed: template expressions can only look bindings up,
/// access record fields, call the fixed string methods, and
/// concatenate. Every value has a string representation, used both for
/// concatenation operands and for final substitution into the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// String value.
    Str(Arc<str>),
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// String-keyed composite supporting property access.
    ///
    /// Fields are ordered by key so the string representation is
    /// deterministic.
    Record(Arc<BTreeMap<String, Value>>),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Arc::from(s.as_ref()))
    }

    /// Create a record value from field pairs.
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let map = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect::<BTreeMap<_, _>>();
        Value::Record(Arc::new(map))
    }

    /// Name of this value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "str",
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Record(_) => "record",
        }
    }

    /// Field lookup; `None` for missing fields and non-record values.
    pub fn field(&self, name: &str) -> Option<Value> {
        match self {
            Value::Record(fields) => fields.get(name).cloned(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Record(fields) => {
                write!(f, "{{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
