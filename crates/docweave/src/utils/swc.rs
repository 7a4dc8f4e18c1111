//! SWC/deno_ast TypeScript parsing utilities
//!
//! Parsing, comment lookup and span-to-text/line conversion for a single
//! source file. The capability adapters in [`crate::parser`] are built on
//! top of [`ParsedModule`].

use crate::diagnostics::{DocError, DocResult};
use crate::js_doc::RawDocBlock;
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::comments::{Comment, CommentKind};
use deno_ast::swc::common::{BytePos, Span, Spanned};
use deno_ast::{MediaType, ParseParams, ParsedSource, SourcePos, SourceRange, SourceTextInfo};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Type text used when a declaration carries no annotation
pub const IMPLICIT_TYPE: &str = "any";

/// Information about the source file
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// The file path, as given by the caller
    pub path: PathBuf,
    /// Source text info for location lookups
    pub text_info: SourceTextInfo,
}

impl SourceInfo {
    /// Create source info from a file path and content
    pub fn new(path: impl Into<PathBuf>, text: impl Into<Arc<str>>) -> Self {
        Self {
            path: path.into(),
            text_info: SourceTextInfo::new(text.into()),
        }
    }

    /// 1-indexed line of a byte position
    pub fn line_of(&self, pos: BytePos) -> usize {
        let source_pos = SourcePos::unsafely_from_byte_pos(pos);
        self.text_info.line_and_column_index(source_pos).line_index + 1
    }

    /// Extract source text for a span
    pub fn text_of(&self, span: Span) -> &str {
        let range = SourceRange::new(
            SourcePos::unsafely_from_byte_pos(span.lo),
            SourcePos::unsafely_from_byte_pos(span.hi),
        );
        self.text_info.range_text(&range)
    }
}

/// A parsed TypeScript module with source information
pub struct ParsedModule {
    /// The parsed source from deno_ast
    pub source: ParsedSource,
    /// Source information for location lookups
    pub source_info: SourceInfo,
}

impl std::fmt::Debug for ParsedModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedModule")
            .field("path", &self.source_info.path)
            .finish_non_exhaustive()
    }
}

impl ParsedModule {
    /// Get the module AST, if the source parsed as a module
    pub fn module(&self) -> Option<&swc_ast::Module> {
        match self.source.program_ref() {
            deno_ast::ProgramRef::Module(m) => Some(m),
            deno_ast::ProgramRef::Script(_) => None,
        }
    }

    /// File path as recorded in item locations
    pub fn path_string(&self) -> String {
        self.source_info.path.display().to_string()
    }

    /// 1-indexed line where a span starts
    pub fn line_of(&self, span: Span) -> usize {
        self.source_info.line_of(span.lo)
    }

    /// Extract source text for a span
    pub fn text_of(&self, span: Span) -> &str {
        self.source_info.text_of(span)
    }

    /// Get leading comments for a position
    pub fn leading_comments(&self, pos: BytePos) -> Vec<Comment> {
        let source_pos = SourcePos::unsafely_from_byte_pos(pos);
        self.source
            .comments()
            .get_leading(source_pos)
            .map(|v| v.to_vec())
            .unwrap_or_default()
    }

    /// JSDoc blocks (`/** ... */`) directly preceding a span, in source order
    pub fn doc_blocks(&self, span: Span) -> Vec<RawDocBlock> {
        self.leading_comments(span.lo)
            .iter()
            .filter(|c| c.kind == CommentKind::Block && c.text.starts_with('*'))
            .map(|c| RawDocBlock::parse(&c.text))
            .collect()
    }

    /// Source text of a type annotation, or the implicit type
    pub fn type_ann_text(&self, type_ann: Option<&swc_ast::TsTypeAnn>) -> String {
        type_ann
            .map(|ann| self.text_of(ann.type_ann.span()).to_string())
            .unwrap_or_else(|| IMPLICIT_TYPE.to_string())
    }

    /// Names of declared type parameters
    pub fn type_param_names(&self, params: Option<&swc_ast::TsTypeParamDecl>) -> Vec<String> {
        params
            .map(|decl| decl.params.iter().map(|p| p.name.sym.to_string()).collect())
            .unwrap_or_default()
    }

    /// Get the name of a property key; computed keys keep their source text
    pub fn prop_name(&self, name: &swc_ast::PropName) -> String {
        match name {
            swc_ast::PropName::Ident(i) => i.sym.to_string(),
            swc_ast::PropName::Str(s) => wtf8_to_string(s),
            swc_ast::PropName::Num(n) => n.value.to_string(),
            swc_ast::PropName::BigInt(b) => b.value.to_string(),
            swc_ast::PropName::Computed(c) => self.text_of(c.span).to_string(),
        }
    }

    /// Get the name of an interface member key
    pub fn key_name(&self, key: &swc_ast::Expr, computed: bool) -> String {
        if computed {
            return format!("[{}]", self.text_of(key.span()));
        }
        match key {
            swc_ast::Expr::Ident(i) => i.sym.to_string(),
            swc_ast::Expr::Lit(swc_ast::Lit::Str(s)) => wtf8_to_string(s),
            other => self.text_of(other.span()).to_string(),
        }
    }
}

/// Parse a TypeScript file from disk
pub fn parse_typescript_file(path: impl AsRef<Path>) -> DocResult<ParsedModule> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        DocError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })?;

    parse_typescript_source(path, text)
}

/// Parse TypeScript source code from a string
///
/// `path` only needs to name the file; it does not have to exist. Its
/// extension selects the dialect (`.tsx`, `.d.ts`, ...), defaulting to
/// plain TypeScript.
pub fn parse_typescript_source(
    path: impl AsRef<Path>,
    source: impl Into<Arc<str>>,
) -> DocResult<ParsedModule> {
    let path = path.as_ref();
    let source: Arc<str> = source.into();

    let media_type = match MediaType::from_path(path) {
        MediaType::Unknown => MediaType::TypeScript,
        other => other,
    };

    // deno_ast requires absolute paths for file specifiers
    let absolute = std::path::absolute(path)
        .map_err(|_| DocError::InvalidPath(path.display().to_string()))?;
    let specifier = deno_ast::ModuleSpecifier::from_file_path(&absolute)
        .map_err(|_| DocError::InvalidPath(path.display().to_string()))?;

    let parsed = deno_ast::parse_module(ParseParams {
        specifier,
        text: source.clone(),
        media_type,
        capture_tokens: true,
        scope_analysis: false,
        maybe_syntax: None,
    })
    .map_err(|e| DocError::parse(path, e.to_string()))?;

    Ok(ParsedModule {
        source: parsed,
        source_info: SourceInfo::new(path, source),
    })
}

/// Helper to convert Wtf8Atom to String
pub fn wtf8_to_string(s: &swc_ast::Str) -> String {
    String::from_utf8_lossy(s.value.as_bytes()).into_owned()
}
