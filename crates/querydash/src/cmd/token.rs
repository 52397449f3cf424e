//! Implementation of the querydash-token command.

use crate::cmd::completions::ShellType;
use crate::cmd::init_tracing;
use anyhow::{ensure, Result};
use clap::Parser;
use querydash_http::{generate_token, DEFAULT_TOKEN_LENGTH};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info_span};

/// Generate random alphanumeric API tokens.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Characters per token
    #[arg(short = 'n', long, value_name = "CHARS", default_value_t = DEFAULT_TOKEN_LENGTH)]
    pub length: usize,

    /// Number of tokens to print, one per line
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub generate_completions: Option<ShellType>,
}

/// Write `args.count` tokens to `writer`.
pub fn run<W: Write>(args: &Args, writer: &mut W) -> Result<()> {
    let _span = info_span!("generate_tokens").entered();
    ensure!(args.length > 0, "token length must be at least 1");
    debug!(length = args.length, count = args.count, "generating tokens");
    for _ in 0..args.count {
        writeln!(writer, "{}", generate_token(args.length))?;
    }
    Ok(())
}

/// Main entry point for the token command.
pub fn main() -> ExitCode {
    main_with_name("querydash-token")
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
