//! Automatic row limits for interactive queries.
//!
//! When a user enables "limit 1000" on a SQL data source, the last
//! statement of the query gets a `LIMIT` clause unless it already has one
//! or is not a `SELECT`.

use crate::lexer::{tokenize, Token};
use crate::statement::{
    combine_sql_statements, last_top_level_keyword, split_sql_statements, statement_kind,
    StatementKind,
};
use tracing::debug;

/// Row limit appended by [`apply_auto_limit`].
pub const AUTO_LIMIT_ROWS: u64 = 1000;

/// Returns true if the statement is a `SELECT` whose last top-level keyword
/// is neither `LIMIT` nor `OFFSET`.
///
/// A statement without any top-level keyword is treated as not selectable,
/// as is one that ends inside an unclosed comment or literal.
pub fn query_is_select_no_limit(statement: &str) -> bool {
    if ends_unterminated(statement) {
        return false;
    }
    let Some(last_keyword) = last_top_level_keyword(statement) else {
        return false;
    };
    let no_limit = last_keyword != "LIMIT" && last_keyword != "OFFSET";
    no_limit && statement_kind(statement) == StatementKind::Select
}

fn ends_unterminated(statement: &str) -> bool {
    tokenize(statement)
        .last()
        .is_some_and(|(token, _)| *token == Token::Error)
}

/// Append ` LIMIT {limit}` to a statement, keeping a trailing `;` last.
pub fn add_limit_to_query(statement: &str, limit: u64) -> String {
    match statement.trim_end().strip_suffix(';') {
        Some(body) => format!("{body} LIMIT {limit};"),
        None => format!("{statement} LIMIT {limit}"),
    }
}

/// Rewrite a query so that its last statement returns at most
/// [`AUTO_LIMIT_ROWS`] rows.
///
/// With `should_apply` false the text is returned untouched. Otherwise see
/// [`apply_limit`].
pub fn apply_auto_limit(query_text: &str, should_apply: bool) -> String {
    if !should_apply {
        return query_text.to_string();
    }
    apply_limit(query_text, AUTO_LIMIT_ROWS)
}

/// Add `LIMIT {limit}` to the last statement if it is a `SELECT` without one.
///
/// The query is always normalised through [`split_sql_statements`] and
/// [`combine_sql_statements`], even when no limit needs to be added.
pub fn apply_limit(query_text: &str, limit: u64) -> String {
    let mut statements = split_sql_statements(query_text);
    if let Some(last) = statements.last_mut() {
        if query_is_select_no_limit(last) {
            debug!(statement = %last, limit, "adding row limit");
            *last = add_limit_to_query(last, limit);
        }
    }
    combine_sql_statements(&statements)
}
