//! Documentation generator
//!
//! Drives a whole project: discover sources, parse and extract each file
//! independently, render one document per source file and write an index.
//! A file that fails to parse is reported as a diagnostic and skipped, and
//! so is a document that cannot be written. The run itself only fails on
//! problems with the source or output directories.

use crate::config::{DocweaveConfig, OutputFormat, RenderOptions};
use crate::diagnostics::{Diagnostic, DiagnosticsCollector, DocError, DocResult};
use crate::extractor::extract_documentation;
use crate::markdown::format_markdown;
use crate::node::{DocItem, DocKind};
use crate::utils::swc::parse_typescript_file;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name of the index document, without extension
pub const INDEX_NAME: &str = "README";

/// Items extracted from every documented file, keyed by path relative to
/// the source root, in discovery order
pub type FileItems = IndexMap<PathBuf, Vec<DocItem>>;

/// Document path for each source path, both relative
pub type DocumentPaths = IndexMap<PathBuf, PathBuf>;

/// Result of a generator run
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Output directory
    pub output_dir: PathBuf,
    /// Source files that were parsed
    pub sources_scanned: usize,
    /// Every document written, index included, in write order
    pub files_written: Vec<PathBuf>,
    /// Number of top-level items documented
    pub item_count: usize,
    /// Item counts per kind, in rendering order
    pub kind_counts: IndexMap<DocKind, usize>,
    /// Problems encountered along the way
    pub diagnostics: DiagnosticsCollector,
}

/// Documentation generator for a project
#[derive(Debug, Clone)]
pub struct Generator {
    config: DocweaveConfig,
}

impl Generator {
    /// Create a generator for a configuration
    pub fn new(config: DocweaveConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &DocweaveConfig {
        &self.config
    }

    /// Source files to document, sorted by path.
    ///
    /// `source` may also name a single file, which is returned as is.
    pub fn discover(&self) -> DocResult<Vec<PathBuf>> {
        let source = &self.config.source;
        if !source.exists() {
            return Err(DocError::InvalidPath(format!(
                "source not found: {}",
                source.display()
            )));
        }
        if source.is_file() {
            return Ok(vec![source.clone()]);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = entry.map_err(|e| DocError::Io(e.into()))?;
            if entry.file_type().is_file() && self.config.accepts(entry.path()) {
                files.push(entry.into_path());
            }
        }
        tracing::debug!(source = %source.display(), files = files.len(), "discovered sources");
        Ok(files)
    }

    /// Parse and extract every discovered source file
    pub fn collect(&self, diagnostics: &mut DiagnosticsCollector) -> DocResult<FileItems> {
        let sources = self.discover()?;
        Ok(self.extract_all(&sources, diagnostics))
    }

    fn extract_all(&self, sources: &[PathBuf], diagnostics: &mut DiagnosticsCollector) -> FileItems {
        let mut documents = FileItems::new();

        for path in sources {
            let parsed = match parse_typescript_file(path) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "skipping file");
                    diagnostics.add(Diagnostic::warning(e.to_string()).in_file(path));
                    continue;
                }
            };

            let items = extract_documentation(&parsed.source_file());
            if items.is_empty() {
                diagnostics.add(Diagnostic::info("no declarations to document").in_file(path));
                continue;
            }
            documents.insert(self.relative_path(path), items);
        }

        documents
    }

    /// Run the whole pipeline and write documents to the output directory
    pub fn run(&self) -> DocResult<GenerationReport> {
        let mut report = GenerationReport {
            output_dir: self.config.output.clone(),
            ..Default::default()
        };

        let sources = self.discover()?;
        report.sources_scanned = sources.len();
        let documents = self.extract_all(&sources, &mut report.diagnostics);

        std::fs::create_dir_all(&self.config.output)?;

        let format = self.config.format;
        let paths = document_paths(documents.keys(), format);
        let mut written = FileItems::new();

        for (relative, items) in documents {
            let document = &paths[&relative];
            if *document != document_path(&relative, format) {
                report.diagnostics.add(
                    Diagnostic::info(format!(
                        "another source shares this name, writing {}",
                        link_path(document)
                    ))
                    .in_file(&relative),
                );
            }

            let target = self.config.output.join(document);
            if let Err(e) = self.write_document(&target, &items) {
                tracing::error!(document = %target.display(), error = %e, "failed to write document");
                report.diagnostics.add(Diagnostic::error(e.to_string()).in_file(&target));
                continue;
            }
            tracing::info!(document = %target.display(), items = items.len(), "wrote document");

            report.item_count += items.len();
            for item in &items {
                *report.kind_counts.entry(item.kind()).or_default() += 1;
            }
            report.files_written.push(target);
            written.insert(relative, items);
        }
        report.kind_counts.sort_by(|a, _, b, _| a.priority().cmp(&b.priority()));

        if self.config.index {
            let target = self
                .config
                .output
                .join(format!("{}.{}", INDEX_NAME, format.extension()));
            std::fs::write(&target, render_index(&written, &paths, format)?)?;
            tracing::info!(document = %target.display(), "wrote index");
            report.files_written.push(target);
        }

        Ok(report)
    }

    fn write_document(&self, target: &Path, items: &[DocItem]) -> DocResult<()> {
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = render_document(items, &self.config.markdown, self.config.format)?;
        std::fs::write(target, content)?;
        Ok(())
    }

    fn relative_path(&self, path: &Path) -> PathBuf {
        match path.strip_prefix(&self.config.source) {
            Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
            _ => path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| path.to_path_buf()),
        }
    }
}

/// Where the document for a source file goes, relative to the output
/// directory: the source path with its extension replaced
pub fn document_path(relative: &Path, format: OutputFormat) -> PathBuf {
    relative.with_extension(format.extension())
}

/// Document paths for a set of sources.
///
/// Sources that would share a document because they differ only in
/// extension (`x.ts`, `x.tsx`) keep their full file name instead
/// (`x.ts.md`, `x.tsx.md`).
pub fn document_paths<'a>(
    sources: impl IntoIterator<Item = &'a PathBuf>,
    format: OutputFormat,
) -> DocumentPaths {
    let sources: Vec<&PathBuf> = sources.into_iter().collect();

    let mut claims: IndexMap<PathBuf, usize> = IndexMap::new();
    for source in &sources {
        *claims.entry(document_path(source, format)).or_default() += 1;
    }

    sources
        .into_iter()
        .map(|source| {
            let plain = document_path(source, format);
            let document = if claims[&plain] > 1 {
                let mut name = source.clone().into_os_string();
                name.push(".");
                name.push(format.extension());
                PathBuf::from(name)
            } else {
                plain
            };
            (source.clone(), document)
        })
        .collect()
}

/// Render the items of one source file
pub fn render_document(
    items: &[DocItem],
    options: &RenderOptions,
    format: OutputFormat,
) -> DocResult<String> {
    match format {
        OutputFormat::Markdown => Ok(format_markdown(items, options)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
    }
}

/// Parse one file and render it, without touching the output directory
pub fn document_file(
    path: impl AsRef<Path>,
    options: &RenderOptions,
    format: OutputFormat,
) -> DocResult<String> {
    let parsed = parse_typescript_file(path)?;
    let items = extract_documentation(&parsed.source_file());
    render_document(&items, options, format)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexEntry {
    source: String,
    document: String,
    items: usize,
    kinds: IndexMap<DocKind, usize>,
}

fn index_entries(
    documents: &FileItems,
    paths: &DocumentPaths,
    format: OutputFormat,
) -> Vec<IndexEntry> {
    documents
        .iter()
        .map(|(relative, items)| {
            let document = paths
                .get(relative)
                .cloned()
                .unwrap_or_else(|| document_path(relative, format));
            let mut kinds: IndexMap<DocKind, usize> = IndexMap::new();
            for kind in DocKind::ALL {
                let count = items.iter().filter(|item| item.kind() == kind).count();
                if count > 0 {
                    kinds.insert(kind, count);
                }
            }
            IndexEntry {
                source: link_path(relative),
                document: link_path(&document),
                items: items.len(),
                kinds,
            }
        })
        .collect()
}

/// Render the index of all generated documents.
///
/// Sources missing from `paths` link to their [`document_path`].
pub fn render_index(
    documents: &FileItems,
    paths: &DocumentPaths,
    format: OutputFormat,
) -> DocResult<String> {
    let entries = index_entries(documents, paths, format);
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let mut md = String::from("# API Reference\n\n");
    for entry in &entries {
        let counts: Vec<String> = entry
            .kinds
            .iter()
            .map(|(kind, count)| {
                let label = if *count == 1 {
                    kind.display_name()
                } else {
                    kind.group_title()
                };
                format!("{} {}", count, label)
            })
            .collect();
        md.push_str(&format!(
            "- [{}]({}) - {}\n",
            entry.source,
            entry.document,
            counts.join(", ")
        ));
    }
    Ok(md)
}

/// Path with forward slashes, for links
fn link_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticSeverity;
    use pretty_assertions::assert_eq;

    fn project(files: &[(&str, &str)]) -> (tempfile::TempDir, DocweaveConfig) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            let path = dir.path().join("src").join(name);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        let config = DocweaveConfig::discover(dir.path()).unwrap();
        (dir, config)
    }

    #[test]
    fn test_document_path() {
        assert_eq!(
            document_path(Path::new("a/b.ts"), OutputFormat::Markdown),
            PathBuf::from("a/b.md")
        );
        assert_eq!(
            document_path(Path::new("c.tsx"), OutputFormat::Json),
            PathBuf::from("c.json")
        );
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let (_dir, config) = project(&[
            ("b.ts", ""),
            ("a.ts", ""),
            ("notes.md", ""),
            ("nested/c.tsx", ""),
        ]);
        let generator = Generator::new(config.clone());
        let files: Vec<PathBuf> = generator
            .discover()
            .unwrap()
            .iter()
            .map(|p| p.strip_prefix(&config.source).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            files,
            vec![
                PathBuf::from("a.ts"),
                PathBuf::from("b.ts"),
                PathBuf::from("nested/c.tsx")
            ]
        );
    }

    #[test]
    fn test_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(DocweaveConfig::discover(dir.path()).unwrap());
        assert!(matches!(generator.run(), Err(DocError::InvalidPath(_))));
    }

    #[test]
    fn test_run_writes_documents_and_index() {
        let (_dir, config) = project(&[
            (
                "math.ts",
                "/** Adds two numbers */\nexport function add(a: number, b: number): number { return a + b; }\n",
            ),
            ("shapes/circle.ts", "export class Circle {}\nexport interface Round {}\n"),
            ("broken.ts", "export function (\n"),
            ("empty.ts", "// nothing here\n"),
        ]);
        let output = config.output.clone();

        let report = Generator::new(config).run().unwrap();

        assert_eq!(report.item_count, 3);
        assert_eq!(report.sources_scanned, 4);
        assert_eq!(
            report
                .diagnostics
                .diagnostics()
                .iter()
                .map(|d| d.severity)
                .collect::<Vec<_>>(),
            vec![DiagnosticSeverity::Warning, DiagnosticSeverity::Info]
        );
        assert_eq!(
            report.kind_counts.keys().copied().collect::<Vec<_>>(),
            vec![DocKind::Class, DocKind::Interface, DocKind::Function]
        );
        assert_eq!(
            report.files_written,
            vec![
                output.join("math.md"),
                output.join("shapes/circle.md"),
                output.join("README.md")
            ]
        );

        let math = std::fs::read_to_string(output.join("math.md")).unwrap();
        assert!(math.starts_with("# Table of Contents\n\n## Functions\n\n- [add](#add)\n"));
        assert!(math.contains("Adds two numbers"));

        let index = std::fs::read_to_string(output.join("README.md")).unwrap();
        assert_eq!(
            index,
            "# API Reference\n\n\
             - [math.ts](math.md) - 1 Function\n\
             - [shapes/circle.ts](shapes/circle.md) - 1 Class, 1 Interface\n"
        );
    }

    #[test]
    fn test_document_paths_keep_extension_on_shared_stem() {
        let sources = vec![
            PathBuf::from("x.ts"),
            PathBuf::from("x.tsx"),
            PathBuf::from("y.ts"),
            PathBuf::from("lib/x.ts"),
        ];
        let paths = document_paths(&sources, OutputFormat::Markdown);
        assert_eq!(
            paths.values().cloned().collect::<Vec<_>>(),
            vec![
                PathBuf::from("x.ts.md"),
                PathBuf::from("x.tsx.md"),
                PathBuf::from("y.md"),
                PathBuf::from("lib/x.md")
            ]
        );
    }

    #[test]
    fn test_run_sources_sharing_a_stem() {
        let (_dir, config) = project(&[
            ("x.ts", "export function fromTs(): void {}\n"),
            ("x.tsx", "export function fromTsx(): void {}\n"),
        ]);
        let output = config.output.clone();

        let report = Generator::new(config).run().unwrap();

        assert_eq!(
            report.files_written,
            vec![
                output.join("x.ts.md"),
                output.join("x.tsx.md"),
                output.join("README.md")
            ]
        );
        assert!(!output.join("x.md").exists());
        assert!(std::fs::read_to_string(output.join("x.ts.md")).unwrap().contains("fromTs"));
        assert!(std::fs::read_to_string(output.join("x.tsx.md")).unwrap().contains("fromTsx"));
        assert_eq!(report.diagnostics.diagnostics().len(), 2);

        let index = std::fs::read_to_string(output.join("README.md")).unwrap();
        assert_eq!(
            index,
            "# API Reference\n\n\
             - [x.ts](x.ts.md) - 1 Function\n\
             - [x.tsx](x.tsx.md) - 1 Function\n"
        );
    }

    #[test]
    fn test_run_records_write_failures() {
        let (_dir, config) = project(&[
            ("a.ts", "export function a(): void {}\n"),
            ("b.ts", "export function b(): void {}\n"),
        ]);
        let output = config.output.clone();
        // a directory where the document should go
        std::fs::create_dir_all(output.join("a.md")).unwrap();

        let report = Generator::new(config).run().unwrap();

        assert!(report.diagnostics.has_errors());
        let error = &report.diagnostics.diagnostics()[0];
        assert_eq!(error.severity, DiagnosticSeverity::Error);
        assert_eq!(error.file.as_deref(), Some(output.join("a.md").as_path()));

        assert_eq!(report.item_count, 1);
        assert_eq!(
            report.files_written,
            vec![output.join("b.md"), output.join("README.md")]
        );
        let index = std::fs::read_to_string(output.join("README.md")).unwrap();
        assert_eq!(index, "# API Reference\n\n- [b.ts](b.md) - 1 Function\n");
    }

    #[test]
    fn test_run_json_without_index() {
        let (_dir, mut config) = project(&[("alias.ts", "export type Id = string;\n")]);
        config.format = OutputFormat::Json;
        config.index = false;
        let output = config.output.clone();

        let report = Generator::new(config).run().unwrap();
        assert_eq!(report.files_written, vec![output.join("alias.json")]);

        let json = std::fs::read_to_string(output.join("alias.json")).unwrap();
        let items: Vec<DocItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind(), DocKind::TypeAlias);
        assert_eq!(items[0].as_type_alias().unwrap().type_text, "string");
    }
}
