//! Querydash CLI tools.
//!
//! This crate provides command-line tools over the querydash libraries:
//!
//! - `querydash-hash`: Print the cache hash a query would be saved with
//! - `querydash-limit`: Apply the automatic `LIMIT` to a query
//! - `querydash-token`: Generate random API tokens
//!
//! # Example Usage
//!
//! ```bash
//! querydash-hash --dialect databricks --auto-limit "SELECT 2"
//! querydash-limit -F report.sql
//! querydash-token --count 3
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
