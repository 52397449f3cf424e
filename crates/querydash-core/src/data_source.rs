//! Data sources.

use serde::{Deserialize, Serialize};

/// A configured connection that queries run against.
///
/// Only the identity and the dialect matter here; connection settings are
/// owned by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    /// Database id, if persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Engine family identifier, e.g. `pg`, `databricks` or `druid`.
    #[serde(rename = "type")]
    pub dialect: String,
}

impl DataSource {
    /// Create an unsaved data source.
    pub fn new(name: impl Into<String>, dialect: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            dialect: dialect.into(),
        }
    }

    /// Set the database id.
    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
