//! Per-query options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Option key that enables the automatic `LIMIT 1000` on SQL data sources.
pub const APPLY_AUTO_LIMIT: &str = "apply_auto_limit";

/// Options stored with a query.
///
/// Options are a free-form JSON object; the editor stores UI state here next
/// to flags that change how the query runs. Only [`APPLY_AUTO_LIMIT`] has
/// meaning to this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryOptions(Map<String, Value>);

impl QueryOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the auto limit flag is set. Absent keys are false.
    pub fn apply_auto_limit(&self) -> bool {
        self.0.get(APPLY_AUTO_LIMIT).is_some_and(is_truthy)
    }

    /// Set the auto limit flag.
    pub fn set_apply_auto_limit(&mut self, enabled: bool) {
        self.0
            .insert(APPLY_AUTO_LIMIT.to_string(), Value::Bool(enabled));
    }

    /// Look up an option.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set an option, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Remove an option, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns true if no options are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying JSON object.
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for QueryOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for QueryOptions {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// JSON truthiness: `null`, `false`, zero, and empty strings, arrays and
/// objects are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
