//! Interface documentation

use crate::class::{extract_method_signature, extract_property, MethodDoc, PropertyDoc};
use crate::function::ANONYMOUS;
use crate::js_doc::extract_js_doc_info;
use crate::node::{DocNode, Location};
use crate::syntax::InterfaceNode;
use serde::{Deserialize, Serialize};

/// Interface definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDef {
    #[serde(default)]
    pub properties: Vec<PropertyDoc>,

    #[serde(default)]
    pub methods: Vec<MethodDoc>,

    /// Extended interfaces
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub extends: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_parameters: Vec<String>,
}

impl InterfaceDef {
    /// Whether the interface declares any members
    pub fn has_members(&self) -> bool {
        !(self.properties.is_empty() && self.methods.is_empty())
    }
}

/// A documented interface
pub type InterfaceDoc = DocNode<InterfaceDef>;

/// Extract documentation for an interface declaration
pub fn extract_interface<N: InterfaceNode>(node: &N) -> InterfaceDoc {
    let def = InterfaceDef {
        properties: node.properties().iter().map(extract_property).collect(),
        methods: node.methods().iter().map(extract_method_signature).collect(),
        extends: node.extends(),
        type_parameters: node.type_parameters(),
    };

    DocNode::new(
        node.name().unwrap_or_else(|| ANONYMOUS.to_string()),
        Location::new(node.file_path(), node.start_line()),
        extract_js_doc_info(&node.js_docs()),
        def,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{MockFunction, MockInterface, MockParam, MockProperty};

    #[test]
    fn test_extract_interface() {
        let node = MockInterface::new("Reader")
            .doc("/** Reads bytes */")
            .type_param("T")
            .extends("Closer")
            .extends("Seeker<T>")
            .property(MockProperty::new("size", "number").as_readonly())
            .method(
                MockFunction::new("read")
                    .doc("/** @param buf Target buffer */")
                    .param(MockParam::new("buf", "Uint8Array"))
                    .returns("Promise<number>")
                    // Modifiers never survive on interface methods
                    .as_async()
                    .as_static(),
            );

        let doc = extract_interface(&node);
        assert_eq!(doc.name, "Reader");
        assert_eq!(doc.def.extends, vec!["Closer", "Seeker<T>"]);
        assert_eq!(doc.def.type_parameters, vec!["T"]);
        assert!(doc.def.properties[0].def.is_readonly);

        let read = &doc.def.methods[0];
        assert!(!read.def.is_async);
        assert!(!read.def.is_static);
        assert_eq!(read.def.parameters[0].description.as_deref(), Some("Target buffer"));
    }

    #[test]
    fn test_empty_interface() {
        let doc = extract_interface(&MockInterface::new("Marker"));
        assert!(!doc.def.has_members());
        assert_eq!(doc.js_doc, None);
    }
}
