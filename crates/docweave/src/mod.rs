//! docweave: TypeScript API documentation as Markdown
//!
//! This crate turns JSDoc'd TypeScript declarations into cross-linked
//! Markdown:
//! - Parsing TypeScript source files using deno_ast/SWC
//! - Extracting functions, classes, interfaces, enums and type aliases into
//!   a kind-tagged [`DocItem`] model, with JSDoc descriptions and `@param`
//!   documentation attached
//! - Rendering items as a Markdown document with a table of contents,
//!   synthesized signatures and anchored members
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │ *.ts (SWC parse)│     │ mock nodes (test)│
//! └────────┬────────┘     └────────┬─────────┘
//!          │   syntax capability   │
//!          └──────────┬────────────┘
//!                     ▼
//!           extract_documentation
//!                     │
//!                     ▼
//!              ┌─────────────┐
//!              │   DocItem   │
//!              └──────┬──────┘
//!          ┌──────────┴──────────┐
//!          ▼                     ▼
//!    ┌──────────┐         ┌──────────┐
//!    │ Markdown │         │   JSON   │
//!    └──────────┘         └──────────┘
//! ```
//!
//! The extractor only depends on the traits in [`syntax`]; [`parser`]
//! implements them over deno_ast and [`test`] over hand-built mocks.
//!
//! # Usage
//!
//! ```no_run
//! use docweave::{format_markdown, parse_typescript, RenderOptions};
//!
//! let items = parse_typescript("src/math.ts").expect("Failed to parse");
//! println!("{}", format_markdown(&items, &RenderOptions::default()));
//! ```

// Core types
pub mod js_doc;
pub mod node;
pub mod params;
pub mod syntax;

// TypeScript construct types
pub mod class;
pub mod r#enum;
pub mod function;
pub mod interface;
pub mod type_alias;

// Parsing and extraction
pub mod diagnostics;
pub mod extractor;
pub mod parser;
pub mod utils;

// Output
pub mod config;
pub mod generator;
pub mod markdown;
pub mod printer;

// Re-exports for convenience
pub use class::{ClassDef, ClassDoc, MethodDef, MethodDoc, PropertyDef, PropertyDoc};
pub use diagnostics::{Diagnostic, DiagnosticsCollector, DocError, DocResult};
pub use function::{FunctionDef, FunctionDoc};
pub use interface::{InterfaceDef, InterfaceDoc};
pub use js_doc::{JsDocInfo, JsDocTagInfo};
pub use node::{DocItem, DocItemDef, DocKind, DocNode, Location};
pub use params::{ParameterDef, ParameterDoc};
pub use r#enum::{EnumDef, EnumDoc, EnumMemberDef};
pub use type_alias::{TypeAliasDef, TypeAliasDoc};

// Extraction
pub use extractor::extract_documentation;
pub use js_doc::extract_js_doc_info;
pub use params::{extract_parameter, extract_parameter_description};
pub use parser::{parse_typescript, parse_typescript_str};

// Rendering
pub use config::{DocweaveConfig, OutputFormat, RenderOptions};
pub use markdown::{format_markdown, slug};

// Project generation
pub use generator::{GenerationReport, Generator};
pub use printer::SummaryPrinter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
