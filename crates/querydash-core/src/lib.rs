//! Core types for querydash
//!
//! This crate provides the query model of the dashboard and the rules for
//! computing a query's cache hash:
//!
//! - [`DataSource`] - A connection identified by its dialect
//! - [`Query`] - Query text, options and the cached hash
//! - [`QueryOptions`] - Free-form options, including `apply_auto_limit`
//! - [`QueryRunner`] - Per-dialect behaviour that shapes the hash
//! - [`QueryRunnerRegistry`] - Which dialects are base-SQL
//! - [`update_query_hash`] - Recompute a query's hash in place
//!
//! # Example
//!
//! ```
//! use querydash_core::{DataSource, Query, QueryRunnerRegistry, update_query_hash};
//!
//! let registry = QueryRunnerRegistry::default();
//! let mut query = Query::new("SELECT 2", Some(DataSource::new("warehouse", "databricks")));
//! let original = query.hash().to_string();
//!
//! query.options.set_apply_auto_limit(true);
//! update_query_hash(&mut query, &registry).unwrap();
//! assert_ne!(query.hash(), original);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod data_source;
pub mod error;
pub mod hash;
pub mod options;
pub mod query;
pub mod registry;
pub mod runner;

pub use data_source::DataSource;
pub use error::{QueryError, RegistryError};
pub use hash::{gen_query_hash, update_query_hash};
pub use options::{is_truthy, QueryOptions, APPLY_AUTO_LIMIT};
pub use query::Query;
pub use registry::QueryRunnerRegistry;
pub use runner::{BaseQueryRunner, BaseSqlQueryRunner, QueryRunner, RunnerKind};
