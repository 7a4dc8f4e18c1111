//! Enum documentation

use crate::function::ANONYMOUS;
use crate::js_doc::extract_js_doc_info;
use crate::node::{DocNode, Location};
use crate::syntax::{Documented, EnumMemberNode, EnumNode, Named};
use serde::{Deserialize, Serialize};

/// Enum definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    /// Members in declaration order
    #[serde(default)]
    pub members: Vec<EnumMemberDef>,
}

/// Enum member definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMemberDef {
    pub name: String,

    /// Initializer as source text (e.g. `1`, `"red"`, `1 << 2`)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

/// A documented enum
pub type EnumDoc = DocNode<EnumDef>;

/// Extract documentation for an enum declaration
pub fn extract_enum<N: EnumNode>(node: &N) -> EnumDoc {
    let members = node
        .members()
        .iter()
        .map(|member| EnumMemberDef {
            name: member.name().unwrap_or_default(),
            value: member.initializer_text(),
            description: extract_js_doc_info(&member.js_docs()).and_then(|doc| doc.description),
        })
        .collect();

    DocNode::new(
        node.name().unwrap_or_else(|| ANONYMOUS.to_string()),
        Location::new(node.file_path(), node.start_line()),
        extract_js_doc_info(&node.js_docs()),
        EnumDef { members },
    )
}
