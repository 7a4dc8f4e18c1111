//! Configuration
//!
//! [`RenderOptions`] is what the Markdown renderer consumes.
//! [`DocweaveConfig`] is the project-level `docweave.toml` the generator and
//! CLI read; its `[markdown]` table holds the render options.

use crate::diagnostics::{DocError, DocResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "docweave.toml";

/// Options for Markdown rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// 1 lists top-level items only; deeper also lists class and
    /// interface members
    #[serde(alias = "toc_depth")]
    pub toc_depth: usize,

    /// Accepted but not yet consumed by the renderer
    #[serde(alias = "link_references")]
    pub link_references: bool,

    /// Whether parameter and property signatures carry `: Type`
    #[serde(alias = "include_types")]
    pub include_types: bool,

    /// Accepted but not yet consumed by the renderer
    #[serde(alias = "include_examples")]
    pub include_examples: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            toc_depth: 2,
            link_references: true,
            include_types: true,
            include_examples: true,
        }
    }
}

impl RenderOptions {
    /// Clamp values into their valid ranges
    pub fn validated(mut self) -> Self {
        self.toc_depth = self.toc_depth.max(1);
        self
    }

    /// Whether the table of contents lists members
    pub fn lists_members(&self) -> bool {
        self.toc_depth > 1
    }
}

/// Format of generated documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One Markdown document per source file
    #[default]
    Markdown,
    /// The extracted items as pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// File extension of generated documents
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(DocError::config(format!("unknown output format `{}`", other))),
        }
    }
}

/// Project configuration, usually loaded from `docweave.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocweaveConfig {
    /// Directory scanned for TypeScript sources
    pub source: PathBuf,

    /// Directory Markdown is written to
    pub output: PathBuf,

    /// File extensions to document, without the dot
    pub include: Vec<String>,

    /// Skip `.d.ts` declaration files
    pub exclude_declarations: bool,

    /// Write an index next to the generated documents
    pub index: bool,

    /// Format of generated documents
    pub format: OutputFormat,

    /// Markdown rendering options
    pub markdown: RenderOptions,
}

impl Default for DocweaveConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("src"),
            output: PathBuf::from("docs"),
            include: ["ts", "tsx", "mts", "cts"].map(String::from).to_vec(),
            exclude_declarations: false,
            index: true,
            format: OutputFormat::Markdown,
            markdown: RenderOptions::default(),
        }
    }
}

impl DocweaveConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> DocResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validated()
    }

    /// Load configuration from a file
    ///
    /// Relative `source` and `output` paths are resolved against the
    /// directory containing the file.
    pub fn load(path: impl AsRef<Path>) -> DocResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DocError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;
        let mut config = Self::from_toml(&content)?;

        if let Some(base) = path.parent() {
            config.source = base.join(&config.source);
            config.output = base.join(&config.output);
        }
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `docweave.toml` from a directory, or defaults rooted there when
    /// the file does not exist
    pub fn discover(dir: impl AsRef<Path>) -> DocResult<Self> {
        let dir = dir.as_ref();
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            return Self::load(path);
        }

        let defaults = Self::default();
        Ok(Self {
            source: dir.join(&defaults.source),
            output: dir.join(&defaults.output),
            ..defaults
        })
    }

    /// Check the configuration and clamp render options
    pub fn validated(mut self) -> DocResult<Self> {
        if self.include.is_empty() {
            return Err(DocError::config("`include` must list at least one extension"));
        }
        for ext in &mut self.include {
            let trimmed = ext.trim().trim_start_matches('.').to_ascii_lowercase();
            if trimmed.is_empty() {
                return Err(DocError::config("`include` contains an empty extension"));
            }
            *ext = trimmed;
        }
        self.markdown = self.markdown.validated();
        Ok(self)
    }

    /// Whether a file should be documented under this configuration
    pub fn accepts(&self, path: &Path) -> bool {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if self.exclude_declarations && is_declaration_file(&file_name) {
            return false;
        }
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.include.iter().any(|inc| *inc == ext))
    }
}

/// `.d.ts`, `.d.mts` and `.d.cts` files
fn is_declaration_file(file_name: &str) -> bool {
    [".d.ts", ".d.mts", ".d.cts"]
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.toc_depth, 2);
        assert!(options.link_references && options.include_types && options.include_examples);
        assert!(options.lists_members());
    }

    #[test]
    fn test_toc_depth_clamped() {
        let options = RenderOptions {
            toc_depth: 0,
            ..Default::default()
        }
        .validated();
        assert_eq!(options.toc_depth, 1);
        assert!(!options.lists_members());
    }

    #[test]
    fn test_from_toml() {
        let config = DocweaveConfig::from_toml(
            r#"
source = "lib"
include = [".TS"]
exclude_declarations = true

[markdown]
tocDepth = 1
include_types = false
"#,
        )
        .unwrap();

        assert_eq!(config.source, PathBuf::from("lib"));
        assert_eq!(config.output, PathBuf::from("docs"));
        assert_eq!(config.include, vec!["ts"]);
        assert!(config.index);
        assert_eq!(config.format, OutputFormat::Markdown);
        assert_eq!(config.markdown.toc_depth, 1);
        assert!(!config.markdown.include_types);
        assert!(config.markdown.include_examples);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            DocweaveConfig::from_toml("include = []"),
            Err(DocError::Config(_))
        ));
        assert!(matches!(
            DocweaveConfig::from_toml("index = \"yes\""),
            Err(DocError::TomlDe(_))
        ));
    }

    #[test]
    fn test_output_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap().extension(), "md");
        assert!("html".parse::<OutputFormat>().is_err());

        let config = DocweaveConfig::from_toml("format = \"json\"").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_accepts() {
        let mut config = DocweaveConfig::default();
        assert!(config.accepts(Path::new("src/a.ts")));
        assert!(config.accepts(Path::new("src/view.TSX")));
        assert!(config.accepts(Path::new("src/types.d.ts")));
        assert!(!config.accepts(Path::new("src/a.js")));
        assert!(!config.accepts(Path::new("README")));

        config.exclude_declarations = true;
        assert!(!config.accepts(Path::new("src/types.d.ts")));
    }

    #[test]
    fn test_discover_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let discovered = DocweaveConfig::discover(dir.path()).unwrap();
        assert_eq!(discovered.source, dir.path().join("src"));

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "output = \"site\"\n").unwrap();
        let loaded = DocweaveConfig::discover(dir.path()).unwrap();
        assert_eq!(loaded.output, dir.path().join("site"));
        assert_eq!(loaded.source, dir.path().join("src"));
    }
}
