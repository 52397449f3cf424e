//! Tests for the querydash command-line tools.

use clap::Parser;
use querydash::cmd::{hash, limit, token};
use querydash_core::gen_query_hash;
use std::io::{self, Write};
use std::process::Command;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Clone, Default)]
struct SharedLog(Arc<Mutex<Vec<u8>>>);

impl Write for SharedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn run_hash(argv: &[&str]) -> anyhow::Result<String> {
    let args = hash::Args::try_parse_from(argv)?;
    let mut out = Vec::new();
    hash::run(&args, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_hash_without_data_source() {
    let out = run_hash(&["querydash-hash", "SELECT", "2"]).unwrap();
    assert_eq!(out.trim(), gen_query_hash("SELECT 2"));
}

#[test]
fn test_hash_auto_limit_on_sql_dialect() {
    let plain = run_hash(&["querydash-hash", "-d", "databricks", "SELECT 2"]).unwrap();
    let limited =
        run_hash(&["querydash-hash", "-d", "databricks", "--auto-limit", "SELECT 2"]).unwrap();

    assert_eq!(plain.trim(), gen_query_hash("SELECT 2"));
    assert_eq!(limited.trim(), gen_query_hash("SELECT 2 LIMIT 1000"));
}

#[test]
fn test_hash_auto_limit_ignored_for_druid() {
    let out = run_hash(&["querydash-hash", "-d", "druid", "--auto-limit", "SELECT 2"]).unwrap();
    assert_eq!(out.trim(), gen_query_hash("SELECT 2"));
}

#[test]
fn test_hash_options_json() {
    let out = run_hash(&[
        "querydash-hash",
        "-d",
        "pg",
        "--options",
        r#"{"apply_auto_limit": true, "refresh": 60}"#,
        "SELECT 2",
    ])
    .unwrap();
    assert_eq!(out.trim(), gen_query_hash("SELECT 2 LIMIT 1000"));
}

#[test]
fn test_hash_options_must_be_object() {
    let err = run_hash(&["querydash-hash", "--options", "[1, 2]", "SELECT 2"]).unwrap_err();
    assert!(err.to_string().contains("--options"));
}

#[test]
fn test_hash_unknown_dialect_fails() {
    let err = run_hash(&["querydash-hash", "-d", "nosuchdb", "SELECT 2"]).unwrap_err();
    assert!(format!("{err:#}").contains("nosuchdb"));
}

#[test]
fn test_hash_json_report() {
    let out = run_hash(&[
        "querydash-hash",
        "-d",
        "databricks",
        "--auto-limit",
        "-f",
        "json",
        "SELECT 2",
    ])
    .unwrap();
    let report: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(report["hash"], gen_query_hash("SELECT 2 LIMIT 1000"));
    assert_eq!(report["dialect"], "databricks");
    assert_eq!(report["runner"], "base_sql");
    assert_eq!(report["auto_limit"], true);
    assert_eq!(report["hashed_text"], "SELECT 2 LIMIT 1000");
}

#[test]
fn test_hash_reads_query_file_and_dialect_table() {
    let dir = tempfile::tempdir().unwrap();
    let query_path = dir.path().join("query.sql");
    let table_path = dir.path().join("dialects.json");
    std::fs::write(&query_path, "SELECT 2\n").unwrap();
    let mut table = std::fs::File::create(&table_path).unwrap();
    write!(table, r#"{{"dialects": {{"druid": "base_sql"}}}}"#).unwrap();

    let out = run_hash(&[
        "querydash-hash",
        "-d",
        "druid",
        "--auto-limit",
        "--dialects",
        table_path.to_str().unwrap(),
        "-F",
        query_path.to_str().unwrap(),
    ])
    .unwrap();
    assert_eq!(out.trim(), gen_query_hash("SELECT 2 LIMIT 1000"));
}

#[test]
fn test_hash_missing_dialect_table() {
    let err = run_hash(&[
        "querydash-hash",
        "--dialects",
        "/nonexistent/dialects.json",
        "SELECT 2",
    ])
    .unwrap_err();
    assert!(format!("{err:#}").contains("invalid dialect table"));
}

#[test]
fn test_hash_query_and_file_conflict() {
    let result = hash::Args::try_parse_from(["querydash-hash", "-F", "q.sql", "SELECT 2"]);
    assert!(result.is_err());
}

#[test]
fn test_limit_command() {
    let args = limit::Args::try_parse_from(["querydash-limit", "SELECT 1; SELECT 2"]).unwrap();
    let mut out = Vec::new();
    limit::run(&args, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "SELECT 1;\nSELECT 2 LIMIT 1000\n"
    );
}

#[test]
fn test_limit_command_keeps_dollar_quoted_literal() {
    let args = limit::Args::try_parse_from(["querydash-limit", "SELECT $$a;b$$ AS body"]).unwrap();
    let mut out = Vec::new();
    limit::run(&args, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "SELECT $$a;b$$ AS body LIMIT 1000\n"
    );
}

#[test]
fn test_limit_command_custom_rows() {
    let args =
        limit::Args::try_parse_from(["querydash-limit", "--limit", "5", "SELECT 2"]).unwrap();
    assert_eq!(args.limit, 5);
    let mut out = Vec::new();
    limit::run(&args, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "SELECT 2 LIMIT 5\n");
}

#[test]
fn test_token_command() {
    let args = token::Args::try_parse_from(["querydash-token", "-c", "3", "-n", "12"]).unwrap();
    let mut out = Vec::new();
    token::run(&args, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let tokens: Vec<&str> = text.lines().collect();
    assert_eq!(tokens.len(), 3);
    assert!(tokens
        .iter()
        .all(|t| t.len() == 12 && t.chars().all(|c| c.is_ascii_alphanumeric())));
}

#[test]
fn test_token_command_rejects_zero_length() {
    let args = token::Args::try_parse_from(["querydash-token", "--length", "0"]).unwrap();
    let mut out = Vec::new();
    assert!(token::run(&args, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_hash_binary_exit_codes() {
    let ok = Command::new(env!("CARGO_BIN_EXE_querydash-hash"))
        .args(["-d", "pg", "SELECT 2"])
        .output()
        .expect("failed to run querydash-hash");
    assert!(ok.status.success());
    assert_eq!(
        String::from_utf8_lossy(&ok.stdout).trim(),
        gen_query_hash("SELECT 2")
    );

    let failed = Command::new(env!("CARGO_BIN_EXE_querydash-hash"))
        .args(["-d", "nosuchdb", "SELECT 2"])
        .output()
        .expect("failed to run querydash-hash");
    assert_eq!(failed.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&failed.stderr).starts_with("error:"));
}

#[test]
fn test_commands_report_span_timing() {
    let log = SharedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let args = limit::Args::try_parse_from(["querydash-limit", "SELECT 2"]).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        let mut out = Vec::new();
        limit::run(&args, &mut out).unwrap();
    });

    let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("limit_query"));
    assert!(output.contains("close"));
}
