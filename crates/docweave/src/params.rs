//! Parameter documentation
//!
//! Parameters take their description from the `@param` tags of the
//! enclosing declaration's documentation, not from comments of their own.

use crate::js_doc::{extract_js_doc_info, is_param_tag, param_body, tag_comment, JsDocInfo};
use crate::node::{DocNode, Location};
use crate::syntax::{DocBlockSource, DocTagSource, ParameterNode};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Parameter definition for functions, methods and constructors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDef {
    /// Declared type as source text
    #[serde(rename = "type")]
    pub type_text: String,

    /// Declared with `?` or with a default value.
    ///
    /// Rendered labels and signatures show `?` only when there is no
    /// default; `times = 1` already reads as optional.
    #[serde(default)]
    pub is_optional: bool,

    /// Default value as source text
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<String>,
}

/// A documented parameter
pub type ParameterDoc = DocNode<ParameterDef>;

/// Build a [`ParameterDoc`] for a parameter of a documented declaration.
///
/// `blocks` are the enclosing declaration's comment blocks and `js_doc` its
/// already parsed JSDoc, if any.
pub fn extract_parameter<P, B>(parameter: &P, blocks: &[B], js_doc: Option<&JsDocInfo>) -> ParameterDoc
where
    P: ParameterNode,
    B: DocBlockSource,
{
    let name = parameter.name().unwrap_or_default();
    let description = resolve_parameter_description(&name, blocks, js_doc);

    let mut doc = DocNode::new(
        name,
        Location::new(parameter.file_path(), parameter.start_line()),
        None,
        ParameterDef {
            type_text: parameter.type_text(),
            is_optional: parameter.is_optional(),
            default_value: parameter.default_value(),
        },
    );
    if !description.is_empty() {
        doc.description = Some(description);
    }
    doc
}

/// Resolve a parameter's description from comment blocks.
///
/// Returns an empty string when no `@param` tag documents the parameter.
pub fn extract_parameter_description<B: DocBlockSource>(parameter_name: &str, blocks: &[B]) -> String {
    resolve_parameter_description(parameter_name, blocks, None)
}

pub(crate) fn resolve_parameter_description<B: DocBlockSource>(
    parameter_name: &str,
    blocks: &[B],
    js_doc: Option<&JsDocInfo>,
) -> String {
    if parameter_name.is_empty() {
        return String::new();
    }

    if let Some(description) = match_param_tags(parameter_name, blocks) {
        return description;
    }

    let parsed;
    let js_doc = match js_doc {
        Some(doc) => Some(doc),
        None => {
            parsed = extract_js_doc_info(blocks);
            parsed.as_ref()
        }
    };

    js_doc
        .and_then(|doc| doc.param(parameter_name))
        .and_then(|tag| tag.description.clone())
        .unwrap_or_default()
}

/// Scan every `@param` tag of every block for one naming the parameter.
fn match_param_tags<B: DocBlockSource>(parameter_name: &str, blocks: &[B]) -> Option<String> {
    let pattern = param_pattern(parameter_name)?;

    for block in blocks {
        for tag in block.tags().iter().filter(|t| is_param_tag(t.tag_name())) {
            let Some(found) = pattern.captures(param_body(tag.tag_name(), tag.text())) else {
                continue;
            };
            let description = match tag_comment(tag) {
                Some(comment) => comment,
                None => found
                    .name("rest")
                    .map(|m| m.as_str().trim().trim_start_matches('-').trim().to_string())
                    .unwrap_or_default(),
            };
            if !description.is_empty() {
                return Some(description);
            }
        }
    }
    None
}

/// Pattern for a `@param` body (see [`param_body`]) naming exactly `name`,
/// with optional `[name=default]` brackets.
fn param_pattern(name: &str) -> Option<Regex> {
    let pattern = format!(
        r"^\[?{}(?:\s*=[^\]]*)?\]?(?:\s+(?P<rest>(?s:.*))|$)",
        regex::escape(name)
    );
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::debug!(parameter = name, error = %err, "skipping @param pattern match");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js_doc::RawDocBlock;
    use crate::test::{MockBlock, MockParam, MockTag};

    fn blocks(comment: &str) -> Vec<RawDocBlock> {
        vec![RawDocBlock::parse(comment)]
    }

    #[test]
    fn test_description_by_name() {
        let docs = blocks("/** Adds\n * @param a First\n * @param b Second */");
        assert_eq!(extract_parameter_description("a", &docs), "First");
        assert_eq!(extract_parameter_description("b", &docs), "Second");
    }

    #[test]
    fn test_description_with_type_and_dash() {
        let docs = blocks("/** @param {string} path - The file path */");
        assert_eq!(extract_parameter_description("path", &docs), "The file path");
    }

    #[test]
    fn test_description_whole_word_only() {
        let docs = blocks("/** @param ab Longer\n * @param a Short */");
        assert_eq!(extract_parameter_description("a", &docs), "Short");
        assert_eq!(extract_parameter_description("ab", &docs), "Longer");
    }

    #[test]
    fn test_description_missing_is_empty() {
        let docs = blocks("/** Nothing about params */");
        assert_eq!(extract_parameter_description("x", &docs), "");

        let none: Vec<RawDocBlock> = vec![];
        assert_eq!(extract_parameter_description("x", &none), "");
    }

    #[test]
    fn test_tag_scan_agrees_with_parsed_tags() {
        let cases = [
            ("/** @param a First */", "a"),
            ("/** @param {string} path - The file path */", "path"),
            ("/** @param {number} [step=1] - Step size */", "step"),
            ("/** @param [label] Optional label */", "label"),
            ("/** @param {Array<{id: number}>} a First */", "a"),
            ("/** @param {{x: number, y: number}} point - Where */", "point"),
            ("/**\n * @param rows Rows to write,\n *   one per line\n */", "rows"),
        ];

        for (comment, name) in cases {
            let docs = blocks(comment);
            let scanned = match_param_tags(name, &docs);
            let parsed = extract_js_doc_info(&docs)
                .and_then(|doc| doc.param(name).and_then(|tag| tag.description.clone()));
            assert!(scanned.is_some(), "no @param match in {comment:?}");
            assert_eq!(scanned, parsed, "{comment:?}");
        }
    }

    #[test]
    fn test_description_searches_all_blocks() {
        let docs = vec![
            RawDocBlock::parse("/** Overview */"),
            RawDocBlock::parse("/** @param late Found later */"),
        ];
        assert_eq!(extract_parameter_description("late", &docs), "Found later");
    }

    #[test]
    fn test_description_with_regex_metacharacters() {
        let docs = blocks("/** @param $el The element */");
        assert_eq!(extract_parameter_description("$el", &docs), "The element");
    }

    #[test]
    fn test_description_when_accessor_fails() {
        let docs = vec![MockBlock::new("").with_tag(MockTag::failing("param", "@param size - Byte size"))];
        assert_eq!(extract_parameter_description("size", &docs), "Byte size");
    }

    #[test]
    fn test_extract_parameter() {
        let docs = blocks("/** @param [retries=3] How often to retry */");
        let param = MockParam::new("retries", "number").with_default("3");
        let doc = extract_parameter(&param, &docs, None);

        assert_eq!(doc.name, "retries");
        assert_eq!(doc.def.type_text, "number");
        assert!(doc.def.is_optional);
        assert_eq!(doc.def.default_value.as_deref(), Some("3"));
        assert_eq!(doc.description.as_deref(), Some("How often to retry"));
        assert_eq!(doc.js_doc, None);
    }

    #[test]
    fn test_extract_undocumented_parameter() {
        let docs: Vec<RawDocBlock> = vec![];
        let doc = extract_parameter(&MockParam::new("x", "any"), &docs, None);
        assert_eq!(doc.description, None);
        assert!(!doc.def.is_optional);
    }
}
