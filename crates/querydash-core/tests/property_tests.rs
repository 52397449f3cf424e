//! Property-based tests for query hashing.
//!
//! Run with: cargo test -p querydash-core --test `property_tests`

use proptest::prelude::*;
use querydash_core::{gen_query_hash, update_query_hash, DataSource, Query, QueryRunnerRegistry};

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_base_sql_dialect() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("databricks".to_string()),
        Just("pg".to_string()),
        Just("mysql".to_string()),
        Just("big_query".to_string()),
        Just("snowflake".to_string()),
    ]
}

fn arb_base_dialect() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("druid".to_string()),
        Just("mongodb".to_string()),
        Just("prometheus".to_string()),
        Just("json".to_string()),
    ]
}

fn arb_query_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| format!("SELECT {n}")),
        ("[a-z]{1,10}", "[a-z]{1,10}")
            .prop_map(|(col, table)| format!("SELECT {col} FROM {table} WHERE {col} > 0")),
        "[a-z]{1,10}".prop_map(|table| format!("SELECT * FROM t_{table} LIMIT 10")),
        "[a-z]{1,10}".prop_map(|table| format!("DELETE FROM t_{table}")),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_update_is_idempotent(
        text in arb_query_text(),
        dialect in prop_oneof![arb_base_sql_dialect(), arb_base_dialect()],
        flag in any::<bool>(),
    ) {
        let registry = QueryRunnerRegistry::default();
        let mut query = Query::new(text, Some(DataSource::new("ds", dialect)));
        query.options.set_apply_auto_limit(flag);

        update_query_hash(&mut query, &registry).unwrap();
        let first = query.hash().to_string();
        update_query_hash(&mut query, &registry).unwrap();

        prop_assert_eq!(first, query.hash());
    }

    #[test]
    fn prop_options_never_affect_non_sql_dialects(
        text in arb_query_text(),
        dialect in arb_base_dialect(),
        flag in any::<bool>(),
    ) {
        let registry = QueryRunnerRegistry::default();
        let mut query = Query::new(text.clone(), Some(DataSource::new("ds", dialect)));
        query.options.set_apply_auto_limit(flag);
        query.options.insert("other", serde_json::json!({"nested": flag}));

        update_query_hash(&mut query, &registry).unwrap();

        prop_assert_eq!(query.hash(), gen_query_hash(&text));
    }

    #[test]
    fn prop_flag_off_matches_creation_hash(
        text in arb_query_text(),
        dialect in arb_base_sql_dialect(),
    ) {
        let registry = QueryRunnerRegistry::default();
        let mut query = Query::new(text, Some(DataSource::new("ds", dialect)));
        let created = query.hash().to_string();
        query.options.set_apply_auto_limit(false);

        update_query_hash(&mut query, &registry).unwrap();

        prop_assert_eq!(created, query.hash());
    }

    #[test]
    fn prop_hash_ignores_whitespace(
        words in prop::collection::vec("[a-z0-9*]{1,8}", 1..8),
        sep in "[ \t\n]{1,4}",
    ) {
        prop_assert_eq!(
            gen_query_hash(&words.join(" ")),
            gen_query_hash(&words.join(&sep))
        );
    }
}
