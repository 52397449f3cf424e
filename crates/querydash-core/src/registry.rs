//! Dialect to query runner mapping.
//!
//! Which dialects count as base-SQL is configuration, not code: the
//! built-in table below can be extended or replaced with a JSON document.
//!
//! ```json
//! {
//!   "replace_defaults": false,
//!   "dialects": { "duckdb": "base_sql", "druid": "base" }
//! }
//! ```

use crate::error::{QueryError, RegistryError};
use crate::runner::{QueryRunner, RunnerKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Dialects whose runners share the SQL options schema.
const BASE_SQL_DIALECTS: &[&str] = &[
    "athena",
    "azure_kusto",
    "big_query",
    "clickhouse",
    "cockroach",
    "databricks",
    "db2",
    "hive",
    "hive_http",
    "impala",
    "memsql",
    "mssql",
    "mssql_odbc",
    "mysql",
    "oracle",
    "pg",
    "presto",
    "rds_mysql",
    "redshift",
    "redshift_iam",
    "snowflake",
    "sqlite",
    "trino",
    "vertica",
];

/// Dialects whose runners ignore query options.
const BASE_DIALECTS: &[&str] = &[
    "cass",
    "csv",
    "druid",
    "dynamodb_sql",
    "elasticsearch",
    "elasticsearch2",
    "excel",
    "google_analytics",
    "google_spreadsheets",
    "graphite",
    "influxdb",
    "json",
    "mongodb",
    "prometheus",
    "python",
    "results",
    "url",
];

/// A dialect table as read from configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DialectTable {
    /// Drop the built-in table before applying `dialects`.
    #[serde(default)]
    replace_defaults: bool,
    /// Dialect name to runner kind.
    #[serde(default)]
    dialects: BTreeMap<String, RunnerKind>,
}

/// Maps data source dialects to query runners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRunnerRegistry {
    dialects: BTreeMap<String, RunnerKind>,
}

impl Default for QueryRunnerRegistry {
    fn default() -> Self {
        let dialects = BASE_SQL_DIALECTS
            .iter()
            .map(|d| ((*d).to_string(), RunnerKind::BaseSql))
            .chain(BASE_DIALECTS.iter().map(|d| ((*d).to_string(), RunnerKind::Base)))
            .collect();
        Self { dialects }
    }
}

impl QueryRunnerRegistry {
    /// Create a registry with no dialects.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            dialects: BTreeMap::new(),
        }
    }

    /// Parse a JSON dialect table on top of the built-in defaults.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let table: DialectTable = serde_json::from_str(json)?;
        let mut registry = if table.replace_defaults {
            Self::empty()
        } else {
            Self::default()
        };
        for (dialect, kind) in table.dialects {
            if dialect.trim().is_empty() {
                return Err(RegistryError::EmptyDialect);
            }
            registry.register(&dialect, kind);
        }
        Ok(registry)
    }

    /// Load a JSON dialect table from a file.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let json = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            dialects = registry.len(),
            "loaded dialect table"
        );
        Ok(registry)
    }

    /// Register (or re-register) a dialect. Names are case-insensitive.
    pub fn register(&mut self, dialect: &str, kind: RunnerKind) -> Option<RunnerKind> {
        self.dialects.insert(normalize(dialect), kind)
    }

    /// The runner kind of a dialect, if known.
    pub fn kind(&self, dialect: &str) -> Option<RunnerKind> {
        self.dialects.get(&normalize(dialect)).copied()
    }

    /// Whether a dialect shares the base-SQL options schema.
    pub fn is_base_sql(&self, dialect: &str) -> bool {
        self.kind(dialect) == Some(RunnerKind::BaseSql)
    }

    /// The query runner for a dialect.
    pub fn runner_for(&self, dialect: &str) -> Result<&'static dyn QueryRunner, QueryError> {
        self.kind(dialect)
            .map(RunnerKind::runner)
            .ok_or_else(|| QueryError::UnknownDialect(dialect.to_string()))
    }

    /// Iterate over registered dialects in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RunnerKind)> {
        self.dialects.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Number of registered dialects.
    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    /// Returns true if no dialects are registered.
    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }
}

fn normalize(dialect: &str) -> String {
    dialect.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_sorted_and_disjoint() {
        let mut sorted = BASE_SQL_DIALECTS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, BASE_SQL_DIALECTS);
        assert!(BASE_DIALECTS
            .iter()
            .all(|d| BASE_SQL_DIALECTS.binary_search(d).is_err()));
    }

    #[test]
    fn test_default_registry() {
        let registry = QueryRunnerRegistry::default();
        assert!(registry.is_base_sql("databricks"));
        assert!(registry.is_base_sql("pg"));
        assert!(!registry.is_base_sql("druid"));
        assert_eq!(registry.kind("druid"), Some(RunnerKind::Base));
        assert_eq!(registry.kind("nope"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = QueryRunnerRegistry::default();
        assert!(registry.is_base_sql("Databricks"));
        assert!(registry.runner_for(" PG ").is_ok());
    }

    #[test]
    fn test_unknown_dialect_errors() {
        let registry = QueryRunnerRegistry::default();
        let err = registry.runner_for("teradata").err().unwrap();
        assert!(matches!(err, QueryError::UnknownDialect(ref d) if d == "teradata"));
        assert_eq!(err.to_string(), "unknown data source dialect: teradata");
    }

    #[test]
    fn test_json_extends_defaults() {
        let registry = QueryRunnerRegistry::from_json_str(
            r#"{"dialects": {"duckdb": "base_sql", "druid": "base_sql"}}"#,
        )
        .unwrap();
        assert!(registry.is_base_sql("duckdb"));
        assert!(registry.is_base_sql("druid"));
        assert!(registry.is_base_sql("pg"));
    }

    #[test]
    fn test_json_replaces_defaults() {
        let registry = QueryRunnerRegistry::from_json_str(
            r#"{"replace_defaults": true, "dialects": {"duckdb": "base_sql"}}"#,
        )
        .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.kind("pg"), None);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            QueryRunnerRegistry::from_json_str(r#"{"dialects": {"x": "sqlish"}}"#),
            Err(RegistryError::Json(_))
        ));
        assert!(matches!(
            QueryRunnerRegistry::from_json_str(r#"{"dialect": {}}"#),
            Err(RegistryError::Json(_))
        ));
        assert!(matches!(
            QueryRunnerRegistry::from_json_str(r#"{"dialects": {" ": "base"}}"#),
            Err(RegistryError::EmptyDialect)
        ));
    }
}
