//! Implementation of the querydash-limit command.

use crate::cmd::completions::ShellType;
use crate::cmd::{init_tracing, read_query_text};
use anyhow::Result;
use clap::Parser;
use querydash_sql::{apply_limit, AUTO_LIMIT_ROWS};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info_span;

/// Print a query with a row limit added to its last SELECT statement.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Query text (read from stdin when neither this nor --file is given)
    #[arg(value_name = "QUERY", conflicts_with = "file")]
    pub query: Vec<String>,

    /// Read the query text from a file
    #[arg(short = 'F', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Number of rows to limit to
    #[arg(short = 'n', long, value_name = "ROWS", default_value_t = AUTO_LIMIT_ROWS)]
    pub limit: u64,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub generate_completions: Option<ShellType>,
}

/// Rewrite the query and write it to `writer`.
pub fn run<W: Write>(args: &Args, writer: &mut W) -> Result<()> {
    let _span = info_span!("limit_query").entered();
    let text = read_query_text(&args.query, args.file.as_deref())?;
    writeln!(writer, "{}", apply_limit(&text, args.limit))?;
    Ok(())
}

/// Main entry point for the limit command.
pub fn main() -> ExitCode {
    main_with_name("querydash-limit")
}

/// Main entry point with custom binary name.
pub fn main_with_name(bin_name: &str) -> ExitCode {
    let args = Args::parse();

    if let Some(shell) = args.generate_completions {
        crate::cmd::completions::generate_completions::<Args>(shell, bin_name);
        return ExitCode::SUCCESS;
    }

    init_tracing(args.verbose);

    let mut stdout = io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
