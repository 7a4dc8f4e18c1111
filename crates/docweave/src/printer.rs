//! Terminal summary of a generation run
//!
//! # Example
//!
//! ```no_run
//! use docweave::config::DocweaveConfig;
//! use docweave::generator::Generator;
//! use docweave::printer::SummaryPrinter;
//!
//! let report = Generator::new(DocweaveConfig::default()).run().unwrap();
//! SummaryPrinter::new(&report, true).print_to_stderr();
//! ```

use crate::diagnostics::{Diagnostic, DiagnosticSeverity};
use crate::generator::GenerationReport;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Prints a [`GenerationReport`] for humans
pub struct SummaryPrinter<'a> {
    report: &'a GenerationReport,
    use_color: bool,
}

impl<'a> SummaryPrinter<'a> {
    /// Create a new printer
    pub fn new(report: &'a GenerationReport, use_color: bool) -> Self {
        Self { report, use_color }
    }

    /// Print to stderr, colored when the terminal supports it
    pub fn print_to_stderr(&self) {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stderr = StandardStream::stderr(choice);
        if let Err(e) = self.write_colored(&mut stderr) {
            tracing::error!(error = %e, "failed to print summary");
        }
    }

    /// Write the summary to any [`WriteColor`]
    pub fn write_colored<W: WriteColor>(&self, w: &mut W) -> io::Result<()> {
        for diagnostic in self.report.diagnostics.diagnostics() {
            self.write_diagnostic(w, diagnostic)?;
        }

        w.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(w, "Documented")?;
        w.reset()?;
        writeln!(w, " {}", self.headline())?;

        for path in &self.report.files_written {
            w.set_color(ColorSpec::new().set_dimmed(true))?;
            write!(w, "  wrote")?;
            w.reset()?;
            writeln!(w, " {}", path.display())?;
        }

        Ok(())
    }

    fn write_diagnostic<W: WriteColor>(&self, w: &mut W, diagnostic: &Diagnostic) -> io::Result<()> {
        let color = match diagnostic.severity {
            DiagnosticSeverity::Error => Color::Red,
            DiagnosticSeverity::Warning => Color::Yellow,
            DiagnosticSeverity::Info => Color::Cyan,
        };
        w.set_color(ColorSpec::new().set_fg(Some(color)))?;
        writeln!(w, "{}", diagnostic.format())?;
        w.reset()
    }

    fn headline(&self) -> String {
        let report = self.report;
        let mut line = format!(
            "{} item{} from {} source file{}",
            report.item_count,
            plural(report.item_count),
            report.sources_scanned,
            plural(report.sources_scanned)
        );
        if !report.kind_counts.is_empty() {
            let kinds: Vec<String> = report
                .kind_counts
                .iter()
                .map(|(kind, count)| {
                    let label = if *count == 1 {
                        kind.display_name()
                    } else {
                        kind.group_title()
                    };
                    format!("{} {}", count, label.to_lowercase())
                })
                .collect();
            line.push_str(&format!(" ({})", kinds.join(", ")));
        }
        line
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

impl Display for SummaryPrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for diagnostic in self.report.diagnostics.diagnostics() {
            writeln!(f, "{}", diagnostic.format())?;
        }
        writeln!(f, "Documented {}", self.headline())?;
        for path in &self.report.files_written {
            writeln!(f, "  wrote {}", path.display())?;
        }
        Ok(())
    }
}
