//! Query runners.
//!
//! A query runner stands for the family of engines behind a data source
//! dialect. Only the parts that affect query text and hashing live here;
//! executing queries is someone else's job.

use crate::hash::gen_query_hash;
use serde::{Deserialize, Serialize};

/// Behaviour shared by every query runner.
pub trait QueryRunner {
    /// Short runner name for logs.
    fn name(&self) -> &'static str;

    /// Whether the runner understands the `apply_auto_limit` option.
    fn supports_auto_limit(&self) -> bool {
        false
    }

    /// Rewrite `query_text` for the auto limit option.
    ///
    /// Runners without auto limit support return the text unchanged.
    fn apply_auto_limit(&self, query_text: &str, _should_apply_auto_limit: bool) -> String {
        query_text.to_string()
    }

    /// Hash `query_text` as this runner would execute it.
    fn gen_query_hash(&self, query_text: &str, set_auto_limit: bool) -> String {
        gen_query_hash(&self.apply_auto_limit(query_text, set_auto_limit))
    }
}

/// Runner for non-SQL or SQL-like engines that ignore query options.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseQueryRunner;

impl QueryRunner for BaseQueryRunner {
    fn name(&self) -> &'static str {
        "base"
    }
}

/// Runner for SQL engines sharing the common options schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseSqlQueryRunner;

impl QueryRunner for BaseSqlQueryRunner {
    fn name(&self) -> &'static str {
        "base_sql"
    }

    fn supports_auto_limit(&self) -> bool {
        true
    }

    fn apply_auto_limit(&self, query_text: &str, should_apply_auto_limit: bool) -> String {
        querydash_sql::apply_auto_limit(query_text, should_apply_auto_limit)
    }
}

/// The runner family a dialect belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnerKind {
    /// Options never influence the hash.
    Base,
    /// Supports `apply_auto_limit`.
    BaseSql,
}

impl RunnerKind {
    /// The runner implementing this kind.
    pub fn runner(self) -> &'static dyn QueryRunner {
        match self {
            Self::Base => &BaseQueryRunner,
            Self::BaseSql => &BaseSqlQueryRunner,
        }
    }
}

impl std::fmt::Display for RunnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::BaseSql => write!(f, "base_sql"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_runner_ignores_auto_limit() {
        let runner = BaseQueryRunner;
        assert!(!runner.supports_auto_limit());
        assert_eq!(runner.apply_auto_limit("SELECT 2", true), "SELECT 2");
        assert_eq!(
            runner.gen_query_hash("SELECT 2", true),
            runner.gen_query_hash("SELECT 2", false)
        );
    }

    #[test]
    fn test_sql_runner_applies_auto_limit() {
        let runner = BaseSqlQueryRunner;
        assert!(runner.supports_auto_limit());
        assert_eq!(
            runner.apply_auto_limit("SELECT 2", true),
            "SELECT 2 LIMIT 1000"
        );
        assert_eq!(
            runner.gen_query_hash("SELECT 2", true),
            gen_query_hash("SELECT 2 LIMIT 1000")
        );
        assert_eq!(
            runner.gen_query_hash("SELECT 2", false),
            gen_query_hash("SELECT 2")
        );
    }

    #[test]
    fn test_kind_runner() {
        assert_eq!(RunnerKind::Base.runner().name(), "base");
        assert!(RunnerKind::BaseSql.runner().supports_auto_limit());
        assert_eq!(RunnerKind::BaseSql.to_string(), "base_sql");
    }
}
