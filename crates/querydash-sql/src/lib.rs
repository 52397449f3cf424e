//! SQL text utilities for querydash.
//!
//! This crate knows just enough SQL to work with query text the way the
//! dashboard needs it:
//!
//! - [`tokenize`] - A Logos-based tokenizer that understands comments and quoting
//! - [`split_sql_statements`] / [`combine_sql_statements`] - Script handling
//! - [`statement_kind`] - Classify a statement by its leading keyword
//! - [`apply_auto_limit`] - Add `LIMIT 1000` to a trailing `SELECT`
//!
//! # Example
//!
//! ```
//! use querydash_sql::apply_auto_limit;
//!
//! assert_eq!(apply_auto_limit("SELECT 2", true), "SELECT 2 LIMIT 1000");
//! assert_eq!(apply_auto_limit("SELECT 2", false), "SELECT 2");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod lexer;
pub mod limit;
pub mod statement;

pub use lexer::{tokenize, Span, Token};
pub use limit::{
    add_limit_to_query, apply_auto_limit, apply_limit, query_is_select_no_limit, AUTO_LIMIT_ROWS,
};
pub use statement::{
    combine_sql_statements, last_top_level_keyword, split_sql_statements, statement_kind,
    StatementKind,
};
