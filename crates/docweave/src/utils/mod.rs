//! Utilities for docweave
//!
//! - SWC/deno_ast TypeScript parsing

pub mod swc;

pub use swc::{parse_typescript_file, parse_typescript_source, ParsedModule, SourceInfo};
