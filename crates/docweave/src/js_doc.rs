//! JSDoc parsing and representation
//!
//! Two layers live here:
//!
//! - [`RawDocBlock`]/[`RawDocTag`]: a documentation comment split into its
//!   untagged description and its `@tags`, as a parser adapter hands them to
//!   the extractor. A raw tag carries a structured comment accessor that may
//!   fail on malformed tag syntax.
//! - [`JsDocInfo`]: the normalized form stored on every documented item,
//!   produced by [`extract_js_doc_info`], which never fails.

use crate::diagnostics::{DocError, DocResult};
use crate::syntax::{DocBlockSource, DocTagSource};
use serde::{Deserialize, Serialize};

/// Parsed JSDoc documentation for a declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsDocInfo {
    /// Untagged comment body
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// Tags in source order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<JsDocTagInfo>,
}

/// A single `@tag` from a documentation comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsDocTagInfo {
    /// Tag name without the `@` marker (e.g. "param", "returns")
    pub tag: String,

    /// Parameter identifier, only set for `@param` tags
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Tag comment text
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl JsDocInfo {
    /// Check if this doc carries neither description nor tags
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.tags.is_empty()
    }

    /// Get the main description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// All tags with the given name, in source order
    pub fn tags_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a JsDocTagInfo> {
        self.tags.iter().filter(move |t| t.tag == tag)
    }

    /// Get all @param tags
    pub fn params(&self) -> impl Iterator<Item = &JsDocTagInfo> {
        self.tags_named(PARAM_TAG)
    }

    /// Get param doc by name
    pub fn param(&self, name: &str) -> Option<&JsDocTagInfo> {
        self.params().find(|t| t.name.as_deref() == Some(name))
    }

    /// Get the @returns tag (or its @return alias)
    pub fn returns(&self) -> Option<&JsDocTagInfo> {
        self.tags
            .iter()
            .find(|t| t.tag == "returns" || t.tag == "return")
    }
}

const PARAM_TAG: &str = "param";

/// Check whether a tag name denotes a parameter tag
pub fn is_param_tag(tag_name: &str) -> bool {
    tag_name == PARAM_TAG
}

/// Convert a declaration's documentation comment blocks into [`JsDocInfo`].
///
/// Returns `None` when there are no blocks. Only the first block is
/// considered; later blocks are ignored.
pub fn extract_js_doc_info<B: DocBlockSource>(blocks: &[B]) -> Option<JsDocInfo> {
    let block = blocks.first()?;

    let tags = block
        .tags()
        .iter()
        .map(|tag| {
            let tag_name = tag.tag_name().to_string();
            let name = if is_param_tag(&tag_name) {
                param_name_from_text(tag.text())
            } else {
                None
            };
            JsDocTagInfo {
                description: tag_comment(tag),
                tag: tag_name,
                name,
            }
        })
        .collect();

    Some(JsDocInfo {
        description: non_empty(block.description()),
        tags,
    })
}

/// Resolve a tag's comment text, falling back to literal text splitting
/// when the structured accessor fails.
pub(crate) fn tag_comment<T: DocTagSource>(tag: &T) -> Option<String> {
    match structured_comment(tag) {
        Ok(comment) => comment,
        Err(err) => {
            tracing::debug!(tag = tag.tag_name(), error = %err, "using literal tag text");
            non_empty(&literal_comment(tag.tag_name(), tag.text()))
        }
    }
}

/// Primary branch: the adapter's structured comment accessor.
fn structured_comment<T: DocTagSource>(tag: &T) -> DocResult<Option<String>> {
    Ok(tag.comment()?.as_deref().and_then(non_empty))
}

/// Secondary branch: strip the tag marker (and, for `@param`, the leading
/// identifier token) from the raw text. Never fails.
pub(crate) fn literal_comment(tag_name: &str, raw: &str) -> String {
    let body = strip_tag_marker(tag_name, raw);
    if !is_param_tag(tag_name) {
        return body.trim().to_string();
    }

    let rest = match split_type_expression(body) {
        Ok((_, rest)) => rest,
        // Unterminated `{type`: treat it as one more token to skip
        Err(_) => skip_token(body),
    };
    strip_description_dash(skip_token(rest)).to_string()
}

/// Extract the parameter identifier from a `@param` tag's raw text.
pub(crate) fn param_name_from_text(raw: &str) -> Option<String> {
    let body = strip_tag_marker(PARAM_TAG, raw);
    let rest = match split_type_expression(body) {
        Ok((_, rest)) => rest,
        Err(_) => skip_token(body),
    };
    let token = rest.split_whitespace().next()?;
    let name = token
        .trim_start_matches('[')
        .split('=')
        .next()
        .unwrap_or_default()
        .trim_end_matches(']');
    non_empty(name)
}

/// A `@param` tag body after its marker and `{type}` expression.
///
/// Type expressions are brace matched, so `{Array<{id: number}>}` is
/// skipped whole. An unterminated one is left in place.
pub(crate) fn param_body<'a>(tag_name: &str, raw: &'a str) -> &'a str {
    let body = strip_tag_marker(tag_name, raw);
    match split_type_expression(body) {
        Ok((_, rest)) => rest,
        Err(_) => body,
    }
}

/// Remove a leading `@tag` marker if present
fn strip_tag_marker<'a>(tag_name: &str, raw: &'a str) -> &'a str {
    let trimmed = raw.trim_start();
    trimmed
        .strip_prefix('@')
        .and_then(|s| s.strip_prefix(tag_name))
        .unwrap_or(trimmed)
        .trim_start()
}

/// Drop the first whitespace-delimited token
fn skip_token(s: &str) -> &str {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => s[pos..].trim_start(),
        None => "",
    }
}

/// Strip the `-` conventionally separating a parameter name from its text
fn strip_description_dash(s: &str) -> &str {
    let s = s.trim();
    match s.strip_prefix('-') {
        Some(rest) => rest.trim(),
        None => s,
    }
}

/// Split a leading `{type}` expression from the rest of the tag body.
///
/// Returns `(None, body)` when there is no type expression and an error
/// when the braces never close.
fn split_type_expression(body: &str) -> DocResult<(Option<&str>, &str)> {
    let body = body.trim_start();
    if !body.starts_with('{') {
        return Ok((None, body));
    }
    match find_matching_brace(body) {
        Some(close) => Ok((Some(&body[1..close]), body[close + 1..].trim_start())),
        None => Err(DocError::malformed_tag(
            "type",
            format!("unterminated type expression in `{}`", body),
        )),
    }
}

/// Find matching closing brace, handling nested braces
fn find_matching_brace(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// Raw comment blocks
// ============================================================================

/// One documentation comment split into description and tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocBlock {
    /// Text before the first tag, with comment decoration removed
    pub description: String,
    /// Tags in source order
    pub tags: Vec<RawDocTag>,
}

/// A tag as written in a documentation comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocTag {
    /// Tag name without `@`
    pub tag_name: String,
    /// Full tag text starting at the `@` marker, continuation lines included
    pub text: String,
}

impl RawDocBlock {
    /// Parse a `/** ... */` comment.
    ///
    /// Accepts the comment with or without its `/**`/`*/` delimiters, so both
    /// raw source text and the body SWC hands out (`* ...`) work.
    pub fn parse(comment: &str) -> Self {
        let lines = clean_comment_lines(comment);

        let mut description = Vec::new();
        let mut tags: Vec<RawDocTag> = Vec::new();

        for line in lines {
            let trimmed = line.trim_start();
            if let Some(after_at) = trimmed.strip_prefix('@') {
                let tag_name: String = after_at
                    .chars()
                    .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
                    .collect();
                if !tag_name.is_empty() {
                    tags.push(RawDocTag {
                        tag_name,
                        text: trimmed.trim_end().to_string(),
                    });
                    continue;
                }
            }

            match tags.last_mut() {
                Some(tag) => {
                    tag.text.push('\n');
                    tag.text.push_str(line.trim_end());
                }
                None => description.push(line.trim()),
            }
        }

        for tag in &mut tags {
            tag.text = tag.text.trim_end().to_string();
        }

        Self {
            description: description.join("\n").trim().to_string(),
            tags,
        }
    }
}

/// Remove comment delimiters and the leading `*` decoration of every line
fn clean_comment_lines(comment: &str) -> Vec<&str> {
    let mut body = comment.trim();
    body = body.strip_prefix("/*").unwrap_or(body);
    body = body.strip_suffix("*/").unwrap_or(body);

    body.lines()
        .map(|line| {
            let content = line.trim_start();
            let content = content
                .strip_prefix("**")
                .or_else(|| content.strip_prefix('*'))
                .unwrap_or(content);
            content.strip_prefix(' ').unwrap_or(content)
        })
        .collect()
}

impl DocBlockSource for RawDocBlock {
    type Tag = RawDocTag;

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[RawDocTag] {
        &self.tags
    }
}

impl DocTagSource for RawDocTag {
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn text(&self) -> &str {
        &self.text
    }

    /// Structured comment: the tag body without its `{type}` expression
    /// and, for `@param`, without the parameter name.
    fn comment(&self) -> DocResult<Option<String>> {
        let body = strip_tag_marker(&self.tag_name, &self.text);
        let (_, rest) = split_type_expression(body)
            .map_err(|_| DocError::malformed_tag(&self.tag_name, "unterminated type expression"))?;

        if !is_param_tag(&self.tag_name) {
            return Ok(non_empty(rest));
        }

        let rest = rest.trim_start();
        let after_name = if let Some(optional) = rest.strip_prefix('[') {
            let close = optional.find(']').ok_or_else(|| {
                DocError::malformed_tag(&self.tag_name, "unterminated optional parameter name")
            })?;
            &optional[close + 1..]
        } else if rest.is_empty() {
            return Err(DocError::malformed_tag(
                &self.tag_name,
                "missing parameter name",
            ));
        } else {
            skip_token(rest)
        };

        Ok(non_empty(strip_description_dash(after_name)))
    }
}
