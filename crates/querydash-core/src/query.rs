//! Saved queries.

use crate::data_source::DataSource;
use crate::hash::{gen_query_hash, update_query_hash};
use crate::options::QueryOptions;
use crate::registry::QueryRunnerRegistry;
use crate::QueryError;
use serde::{Deserialize, Serialize};

/// A saved query.
///
/// The hash is derived state. It is computed from the text when the query
/// is created or its text is replaced, and recomputed with the options taken
/// into account by [`update_query_hash`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Database id, if persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "query")]
    text: String,
    /// Query options.
    #[serde(default)]
    pub options: QueryOptions,
    /// The data source the query runs against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,
    #[serde(rename = "query_hash")]
    pub(crate) hash: String,
}

impl Query {
    /// Create a query with empty options.
    pub fn new(text: impl Into<String>, data_source: Option<DataSource>) -> Self {
        let text = text.into();
        let hash = gen_query_hash(&text);
        Self {
            id: None,
            name: String::new(),
            text,
            options: QueryOptions::new(),
            data_source,
            hash,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the options. The hash is not recomputed.
    #[must_use]
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    /// The query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the query text and rehash it.
    ///
    /// Like creation, this hashes the text alone; call
    /// [`Query::update_hash`] afterwards to fold the options back in.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.hash = gen_query_hash(&self.text);
    }

    /// The cached query hash.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The data source dialect, if the query has a data source.
    pub fn dialect(&self) -> Option<&str> {
        self.data_source.as_ref().map(|ds| ds.dialect.as_str())
    }

    /// Recompute the hash in place. See [`update_query_hash`].
    pub fn update_hash(&mut self, registry: &QueryRunnerRegistry) -> Result<(), QueryError> {
        update_query_hash(self, registry)
    }
}
