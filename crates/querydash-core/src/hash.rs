//! Query hashing.
//!
//! The query hash identifies cached results: two queries that differ only
//! in whitespace or `/* ... */` comments share a hash.

use crate::query::Query;
use crate::registry::QueryRunnerRegistry;
use crate::runner::{BaseQueryRunner, QueryRunner};
use crate::QueryError;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::OnceLock;
use tracing::debug;

fn comments_regex() -> &'static Regex {
    static COMMENTS: OnceLock<Regex> = OnceLock::new();
    // `.` does not cross newlines, so only single-line block comments go.
    COMMENTS.get_or_init(|| Regex::new(r"/\*.*?\*/").expect("comment pattern is valid"))
}

/// Compute the hash of a query text.
///
/// Single-line block comments and all whitespace are removed before the
/// SHA-256 digest is taken. The result is 64 lowercase hex characters.
pub fn gen_query_hash(sql: &str) -> String {
    let without_comments = comments_regex().replace_all(sql, "");
    let normalized: String = without_comments
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recompute `query.hash` from its text, options and data source.
///
/// The data source's dialect selects the query runner. Runners for base-SQL
/// dialects fold the `apply_auto_limit` option into the hash; all other
/// runners hash the text alone. A query without a data source is hashed by
/// the base runner.
///
/// The query is updated in place and not persisted.
///
/// # Errors
///
/// Returns [`QueryError::UnknownDialect`] if the data source's dialect is not
/// in `registry`. `query.hash` is left unchanged in that case.
pub fn update_query_hash(
    query: &mut Query,
    registry: &QueryRunnerRegistry,
) -> Result<(), QueryError> {
    let should_apply_auto_limit = query.options.apply_auto_limit();
    let runner: &dyn QueryRunner = match &query.data_source {
        Some(data_source) => registry.runner_for(&data_source.dialect)?,
        None => &BaseQueryRunner,
    };

    let hash = runner.gen_query_hash(query.text(), should_apply_auto_limit);
    if hash != query.hash {
        debug!(
            query_id = ?query.id,
            runner = runner.name(),
            auto_limit = should_apply_auto_limit,
            "query hash changed"
        );
    }
    query.hash = hash;
    Ok(())
}
