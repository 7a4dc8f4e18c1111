//! Class documentation, plus the member types classes share with interfaces

use crate::function::{extract_parameters, ANONYMOUS};
use crate::js_doc::extract_js_doc_info;
use crate::node::{DocNode, Location};
use crate::params::ParameterDoc;
use crate::syntax::{ClassNode, ConstructorNode, FunctionNode, MethodNode, PropertyNode};
use serde::{Deserialize, Serialize};

/// Return type recorded for constructors of a class without a name
pub const UNKNOWN_CLASS: &str = "Unknown";

/// Name given to constructor members
pub const CONSTRUCTOR: &str = "constructor";

/// Class definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDef {
    #[serde(default)]
    pub properties: Vec<PropertyDoc>,

    #[serde(default)]
    pub methods: Vec<MethodDoc>,

    /// Constructors, modelled as methods named `constructor`
    #[serde(default)]
    pub constructors: Vec<MethodDoc>,

    /// Base class expression
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extends: Option<String>,

    /// Implemented interfaces
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub implements: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_parameters: Vec<String>,
}

impl ClassDef {
    /// Whether the class declares any members
    pub fn has_members(&self) -> bool {
        !(self.properties.is_empty() && self.methods.is_empty() && self.constructors.is_empty())
    }
}

/// A documented class
pub type ClassDoc = DocNode<ClassDef>;

/// Property of a class or interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
    /// Declared type as source text
    #[serde(rename = "type")]
    pub type_text: String,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub is_readonly: bool,

    /// Declared with `?`
    #[serde(default)]
    pub is_optional: bool,
}

/// A documented property
pub type PropertyDoc = DocNode<PropertyDef>;

/// Method of a class or interface; also used for constructors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDef {
    #[serde(default)]
    pub parameters: Vec<ParameterDoc>,

    pub return_type: String,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub is_async: bool,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub type_parameters: Vec<String>,
}

/// A documented method
pub type MethodDoc = DocNode<MethodDef>;

/// Extract documentation for a class declaration
pub fn extract_class<N: ClassNode>(node: &N) -> ClassDoc {
    let class_name = node.name();
    let constructor_returns = class_name.as_deref().unwrap_or(UNKNOWN_CLASS);

    let def = ClassDef {
        properties: node.properties().iter().map(extract_property).collect(),
        methods: node.methods().iter().map(extract_method).collect(),
        constructors: node
            .constructors()
            .iter()
            .map(|ctor| extract_constructor(ctor, constructor_returns))
            .collect(),
        extends: node.extends(),
        implements: node.implements(),
        type_parameters: node.type_parameters(),
    };

    let js_doc = extract_js_doc_info(&node.js_docs());
    DocNode::new(
        class_name.unwrap_or_else(|| ANONYMOUS.to_string()),
        Location::new(node.file_path(), node.start_line()),
        js_doc,
        def,
    )
}

/// Extract documentation for a property
pub fn extract_property<N: PropertyNode>(node: &N) -> PropertyDoc {
    let js_doc = extract_js_doc_info(&node.js_docs());
    DocNode::new(
        node.name().unwrap_or_default(),
        Location::new(node.file_path(), node.start_line()),
        js_doc,
        PropertyDef {
            type_text: node.type_text(),
            is_static: node.is_static(),
            is_readonly: node.is_readonly(),
            is_optional: node.has_question_token(),
        },
    )
}

/// Extract documentation for a class method
pub fn extract_method<N: MethodNode>(node: &N) -> MethodDoc {
    callable_member(node, node.is_static(), node.is_async())
}

/// Extract documentation for an interface method, which is never static
/// or async
pub fn extract_method_signature<N: FunctionNode>(node: &N) -> MethodDoc {
    callable_member(node, false, false)
}

fn callable_member<N: FunctionNode>(node: &N, is_static: bool, is_async: bool) -> MethodDoc {
    let blocks = node.js_docs();
    let js_doc = extract_js_doc_info(&blocks);

    let def = MethodDef {
        parameters: extract_parameters(node, &blocks, js_doc.as_ref()),
        return_type: node.return_type(),
        is_static,
        is_async,
        type_parameters: node.type_parameters(),
    };

    DocNode::new(
        node.name().unwrap_or_else(|| ANONYMOUS.to_string()),
        Location::new(node.file_path(), node.start_line()),
        js_doc,
        def,
    )
}

/// Extract documentation for a constructor. Its return type is the name of
/// the class it constructs.
pub fn extract_constructor<N: ConstructorNode>(node: &N, class_name: &str) -> MethodDoc {
    let blocks = node.js_docs();
    let js_doc = extract_js_doc_info(&blocks);

    let def = MethodDef {
        parameters: extract_parameters(node, &blocks, js_doc.as_ref()),
        return_type: class_name.to_string(),
        ..Default::default()
    };

    DocNode::new(
        CONSTRUCTOR,
        Location::new(node.file_path(), node.start_line()),
        js_doc,
        def,
    )
}
