//! Documentation generation command
//!
//! Resolves the configuration (file, then flags) and either runs the
//! project generator or prints a single file's document.

use crate::Cli;
use anyhow::{bail, Context, Result};
use docweave::config::DocweaveConfig;
use docweave::generator::{document_file, Generator};
use docweave::printer::SummaryPrinter;
use std::path::Path;

/// Run the command
pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    if cli.stdout {
        return print_single(&config);
    }

    tracing::debug!(
        source = %config.source.display(),
        output = %config.output.display(),
        "generating documentation"
    );
    let report = Generator::new(config)
        .run()
        .context("documentation generation failed")?;
    SummaryPrinter::new(&report, !cli.no_color).print_to_stderr();

    if report.diagnostics.has_errors() {
        bail!("documentation generated with errors");
    }
    Ok(())
}

/// Configuration from `--config` or `./docweave.toml`, with flags applied
fn resolve_config(cli: &Cli) -> Result<DocweaveConfig> {
    let mut config = match &cli.config {
        Some(path) => DocweaveConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => DocweaveConfig::discover(Path::new("."))
            .context("failed to load configuration")?,
    };

    if let Some(source) = &cli.source {
        config.source = source.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(depth) = cli.toc_depth {
        config.markdown.toc_depth = depth;
    }
    if cli.no_types {
        config.markdown.include_types = false;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_index {
        config.index = false;
    }

    config.markdown = config.markdown.validated();
    Ok(config)
}

fn print_single(config: &DocweaveConfig) -> Result<()> {
    if !config.source.is_file() {
        bail!(
            "--stdout needs a single source file, got {}",
            config.source.display()
        );
    }
    let document = document_file(&config.source, &config.markdown, config.format)
        .with_context(|| format!("failed to document {}", config.source.display()))?;
    print!("{}", document);
    Ok(())
}
