use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maps variable names to host values.
///
/// Names are case-sensitive. Values are JSON values; strings, numbers and
/// (nested) arrays of them can be used in expressions, anything else fails
/// when a variable holding it is evaluated.
///
/// A context deserializes from a JSON object.
///
/// # Example
/// ```
/// use phrase::interpreter::context::Context;
///
/// let mut context = Context::from_json(r#"{ "tags": ["beta", "eu"] }"#).unwrap();
/// context.insert("age", 42);
///
/// assert_eq!(context.len(), 2);
/// assert!(context.get("Age").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    values: HashMap<String, Value>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a context from a JSON object.
    ///
    /// # Errors
    /// Returns the `serde_json` error if `json` is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Binds `name` to `value`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// Removes `name`, returning its value if it was bound.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut context = Self::new();
        context.extend(iter);
        context
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Context {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.values
            .extend(iter.into_iter().map(|(name, value)| (name.into(), value.into())));
    }
}
