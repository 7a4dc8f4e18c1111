//! Function documentation

use crate::js_doc::{extract_js_doc_info, JsDocInfo};
use crate::node::{DocNode, Location};
use crate::params::{extract_parameter, ParameterDoc};
use crate::syntax::{DocBlockSource, FunctionNode, HasParameters};
use serde::{Deserialize, Serialize};

/// Name used for functions declared without one (`export default function () {}`)
pub const ANONYMOUS: &str = "anonymous";

/// Function definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDef {
    /// Parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<ParameterDoc>,

    /// Return type as source text
    pub return_type: String,

    /// Generic type parameter names
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_parameters: Vec<String>,
}

/// A documented function
pub type FunctionDoc = DocNode<FunctionDef>;

/// Extract documentation for a function declaration
pub fn extract_function<N: FunctionNode>(node: &N) -> FunctionDoc {
    let blocks = node.js_docs();
    let js_doc = extract_js_doc_info(&blocks);

    let def = FunctionDef {
        parameters: extract_parameters(node, &blocks, js_doc.as_ref()),
        return_type: node.return_type(),
        type_parameters: node.type_parameters(),
    };

    DocNode::new(
        node.name().unwrap_or_else(|| ANONYMOUS.to_string()),
        Location::new(node.file_path(), node.start_line()),
        js_doc,
        def,
    )
}

/// Parameters of a callable, described from its own comment blocks
pub(crate) fn extract_parameters<N, B>(node: &N, blocks: &[B], js_doc: Option<&JsDocInfo>) -> Vec<ParameterDoc>
where
    N: HasParameters,
    B: DocBlockSource,
{
    node.parameters()
        .iter()
        .map(|param| extract_parameter(param, blocks, js_doc))
        .collect()
}
