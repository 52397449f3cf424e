//! Command implementations for CLI tools.
//!
//! Each module contains the full implementation for a command,
//! which can be invoked by thin wrapper binaries.

pub mod completions;
pub mod hash;
pub mod limit;
pub mod token;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` decides and
/// defaults to warnings only.
pub(crate) fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when commands run in-process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}

/// Read query text from the command line, a file, or stdin, in that order.
pub(crate) fn read_query_text(words: &[String], query_file: Option<&Path>) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    if let Some(path) = query_file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read query file {}", path.display()));
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read query from stdin")?;
    Ok(text)
}
