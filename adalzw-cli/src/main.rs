//! adalzw CLI - adaptive-width LZW compression
//!
//! Compresses standard input (or a file) into a self-describing LZW stream,
//! or expands such a stream back.

mod commands;
mod error;
mod io;

use adalzw::ResetPolicy;
use clap::Parser;
use commands::{Summary, cmd_compress, cmd_expand};
use error::{CliError, CliResult};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "adalzw")]
#[command(
    author,
    version,
    about = "Adaptive-width LZW compression with selectable dictionary reset policies"
)]
#[command(long_about = "
Compress with '-' and a reset policy, expand with '+'. The policy is stored
in the compressed stream, so expansion needs no mode.

Policies:
  n  frozen     keep the full dictionary, never reset
  r  saturate   reset every time the 16-bit code space fills
  m  monitored  reset when the compression ratio degrades by more than 10%

Examples:
  adalzw - r < input.txt > input.lzw
  adalzw + < input.lzw > input.txt
  adalzw - m -i data.bin -o data.lzw --stats
")]
struct Cli {
    /// '-' to compress, '+' to expand
    direction: String,

    /// Reset policy for compression: n, r or m
    mode: Option<String>,

    /// Read from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable log output (honours RUST_LOG)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print a summary to standard error
    #[arg(long)]
    stats: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

/// What the positional arguments ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Compress(ResetPolicy),
    Expand,
}

impl Cli {
    fn action(&self) -> CliResult<Action> {
        match (self.direction.as_str(), self.mode.as_deref()) {
            ("-", Some(mode @ ("n" | "r" | "m"))) => mode
                .parse()
                .map(Action::Compress)
                .map_err(CliError::from),
            ("+", None) => Ok(Action::Expand),
            (direction, mode) => Err(CliError::InvalidArgument(match mode {
                Some(mode) => format!("'{direction} {mode}'"),
                None => format!("'{direction}'"),
            })),
        }
    }
}

fn init_tracing(cli: &Cli) {
    // --quiet and the default are both silent so log lines never mix with
    // the summary; --verbose honours RUST_LOG and falls back to info.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn report(cli: &Cli, summary: &Summary) -> CliResult<()> {
    if cli.json {
        eprintln!("{}", serde_json::to_string_pretty(summary)?);
    } else if cli.stats {
        eprintln!("{}", summary.render());
    }
    Ok(())
}

fn run(cli: &Cli) -> CliResult<()> {
    let input = cli.input.as_deref();
    let output = cli.output.as_deref();

    let summary = match cli.action()? {
        Action::Compress(policy) => cmd_compress(input, output, policy)?,
        Action::Expand => cmd_expand(input, output)?,
    };
    report(cli, &summary)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
