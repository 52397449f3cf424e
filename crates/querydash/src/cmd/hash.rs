//! Implementation of the querydash-hash command.

use crate::cmd::completions::ShellType;
use crate::cmd::{init_tracing, read_query_text};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use querydash_core::{
    update_query_hash, BaseQueryRunner, DataSource, Query, QueryOptions, QueryRunner,
    QueryRunnerRegistry,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info_span};

/// Output format for the hash report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Just the hash
    #[default]
    Text,
    /// JSON object with the hash and how it was computed
    Json,
}

/// Print the cache hash a query would be saved with.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Query text (read from stdin when neither this nor --file is given)
    #[arg(value_name = "QUERY", conflicts_with = "file")]
    pub query: Vec<String>,

    /// Read the query text from a file
    #[arg(short = 'F', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Data source dialect, e.g. `pg` or `druid`; omit for no data source
    #[arg(short, long, value_name = "DIALECT")]
    pub dialect: Option<String>,

    /// Turn on the `apply_auto_limit` option
    #[arg(short = 'l', long)]
    pub auto_limit: bool,

    /// Query options as a JSON object
    #[arg(short, long, value_name = "JSON")]
    pub options: Option<String>,

    /// JSON dialect table extending the built-in one
    #[arg(long, value_name = "FILE")]
    pub dialects: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub generate_completions: Option<ShellType>,
}

/// JSON report printed with `--format json`.
#[derive(Debug, Serialize)]
pub struct HashReport {
    /// The query hash
    pub hash: String,
    /// Data source dialect, if any
    pub dialect: Option<String>,
    /// Name of the runner that shaped the hash
    pub runner: &'static str,
    /// Whether the auto limit option was on
    pub auto_limit: bool,
    /// The text that was actually hashed
    pub hashed_text: String,
}

/// Load the dialect registry named by `--dialects`, or the built-in one.
fn load_registry(args: &Args) -> Result<QueryRunnerRegistry> {
    match &args.dialects {
        Some(path) => QueryRunnerRegistry::load(path)
            .with_context(|| format!("invalid dialect table {}", path.display())),
        None => Ok(QueryRunnerRegistry::default()),
    }
}

fn parse_options(args: &Args) -> Result<QueryOptions> {
    let mut options = match &args.options {
        Some(json) => serde_json::from_str::<QueryOptions>(json)
            .context("--options must be a JSON object")?,
        None => QueryOptions::new(),
    };
    if args.auto_limit {
        options.set_apply_auto_limit(true);
    }
    Ok(options)
}

/// Compute the hash of a query and write it to `writer`.
pub fn run<W: Write>(args: &Args, writer: &mut W) -> Result<()> {
    let _span = info_span!("hash_query").entered();
    let registry = load_registry(args)?;
    let options = parse_options(args)?;
    let text = read_query_text(&args.query, args.file.as_deref())?;

    let data_source = args
        .dialect
        .as_deref()
        .map(|dialect| DataSource::new(dialect, dialect));
    let mut query = Query::new(text, data_source).with_options(options);
    update_query_hash(&mut query, &registry).context("failed to hash query")?;

    let runner: &dyn QueryRunner = match query.dialect() {
        Some(dialect) => registry.runner_for(dialect)?,
        None => &BaseQueryRunner,
    };
    debug!(runner = runner.name(), hash = query.hash(), "hashed query");

    match args.format {
        OutputFormat::Text => writeln!(writer, "{}", query.hash())?,
        OutputFormat::Json => {
            let auto_limit = query.options.apply_auto_limit();
            let report = HashReport {
                hash: query.hash().to_string(),
                dialect: args.dialect.clone(),
                runner: runner.name(),
                auto_limit,
                hashed_text: runner.apply_auto_limit(query.text(), auto_limit),
            };
            serde_json::to_writer_pretty(&mut *writer, &report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Main entry point for the hash command.
pub fn main() -> ExitCode {
    main_with_name("querydash-hash")
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
