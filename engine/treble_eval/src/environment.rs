//! Binding environment for render calls.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Named values available to interpolation expressions.
///
/// Constructed per render call and discarded afterwards. Bindings are
/// supplied entirely by the caller: template code can only read them,
/// so there is no scoping or assignment machinery.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    /// Bindings (`FxHashMap` for faster hashing with string keys).
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a binding. Redefining a name replaces the old value.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no bindings are defined.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let bindings = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect::<FxHashMap<_, _>>();
        Environment { bindings }
    }
}
