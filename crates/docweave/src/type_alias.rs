//! Type alias documentation

use crate::function::ANONYMOUS;
use crate::js_doc::extract_js_doc_info;
use crate::node::{DocNode, Location};
use crate::syntax::TypeAliasNode;
use serde::{Deserialize, Serialize};

/// Type alias definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasDef {
    /// Aliased type as source text
    #[serde(rename = "type")]
    pub type_text: String,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_parameters: Vec<String>,
}

/// A documented type alias
pub type TypeAliasDoc = DocNode<TypeAliasDef>;

/// Extract documentation for a type alias
pub fn extract_type_alias<N: TypeAliasNode>(node: &N) -> TypeAliasDoc {
    DocNode::new(
        node.name().unwrap_or_else(|| ANONYMOUS.to_string()),
        Location::new(node.file_path(), node.start_line()),
        extract_js_doc_info(&node.js_docs()),
        TypeAliasDef {
            type_text: node.type_text(),
            type_parameters: node.type_parameters(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::MockTypeAlias;

    #[test]
    fn test_extract_type_alias() {
        let node = MockTypeAlias::new("Result", "{ ok: true; value: T } | { ok: false; error: E }")
            .type_param("T")
            .type_param("E")
            .doc("/** Outcome of an operation */");

        let doc = extract_type_alias(&node);
        assert_eq!(doc.name, "Result");
        assert_eq!(doc.description.as_deref(), Some("Outcome of an operation"));
        assert_eq!(doc.def.type_parameters, vec!["T", "E"]);
        assert!(doc.def.type_text.starts_with("{ ok: true"));
    }
}
