//! docweave: generate Markdown API documentation from JSDoc'd TypeScript.
//!
//! ```text
//! docweave                       # document ./src into ./docs (or per docweave.toml)
//! docweave lib -o site/api       # document ./lib into ./site/api
//! docweave src/math.ts --stdout  # print one file's documentation
//! ```
//!
//! Environment:
//! - `DOCWEAVE_LOG` - Log filter (default: "info", or "debug" with `-v`)

mod docs;

use anyhow::Result;
use clap::Parser;
use docweave::config::OutputFormat;
use docweave::DocError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "docweave",
    version,
    about = "Generate Markdown API documentation from JSDoc'd TypeScript"
)]
pub struct Cli {
    /// Source directory or file. Defaults to `source` from the configuration.
    pub source: Option<PathBuf>,

    /// Output directory
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Configuration file. Defaults to ./docweave.toml when present.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Table of contents depth; 1 lists top-level items only
    #[arg(long)]
    pub toc_depth: Option<usize>,

    /// Leave `: Type` out of parameter and property signatures
    #[arg(long)]
    pub no_types: bool,

    /// Output format: markdown (default) or json
    #[arg(short = 'f', long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Do not write an index document
    #[arg(long)]
    pub no_index: bool,

    /// Print a single file's documentation to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, DocError> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    docs::run(&cli)
}

/// Initialize tracing with env-filter support. Logs go to stderr so
/// `--stdout` output stays clean.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("DOCWEAVE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
