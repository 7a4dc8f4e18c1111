//! Core documentation node types
//!
//! [`DocNode`] carries what every documented thing shares (name,
//! description, location, parsed JSDoc) plus a kind-specific definition.
//! Top-level items are `DocNode<DocItemDef>` ([`DocItem`]); class and
//! interface members keep their precise definition types so renderers never
//! have to re-check what kind a member is.

use crate::class::{ClassDef, MethodDef, PropertyDef};
use crate::function::FunctionDef;
use crate::interface::InterfaceDef;
use crate::js_doc::JsDocInfo;
use crate::params::ParameterDef;
use crate::r#enum::EnumDef;
use crate::type_alias::TypeAliasDef;
use serde::{Deserialize, Serialize};

/// Source location for a documented item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Source file path as given to the parser
    pub file_path: String,
    /// 1-indexed line number
    pub line: usize,
}

impl Location {
    /// Create a new location
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }

    /// Final path component of the file path
    pub fn file_name(&self) -> &str {
        self.file_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.file_path)
    }
}

/// Kind of documented node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocKind {
    Class,
    Interface,
    Function,
    TypeAlias,
    Enum,
    Property,
    Method,
    Parameter,
}

impl DocKind {
    /// Every kind, in rendering order
    pub const ALL: [DocKind; 8] = [
        DocKind::Class,
        DocKind::Interface,
        DocKind::Function,
        DocKind::TypeAlias,
        DocKind::Enum,
        DocKind::Property,
        DocKind::Method,
        DocKind::Parameter,
    ];

    /// Get display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            DocKind::Class => "Class",
            DocKind::Interface => "Interface",
            DocKind::Function => "Function",
            DocKind::TypeAlias => "Type Alias",
            DocKind::Enum => "Enum",
            DocKind::Property => "Property",
            DocKind::Method => "Method",
            DocKind::Parameter => "Parameter",
        }
    }

    /// Heading used for this kind's group in a table of contents
    pub fn group_title(&self) -> &'static str {
        match self {
            DocKind::Class => "Classes",
            DocKind::Interface => "Interfaces",
            DocKind::Function => "Functions",
            DocKind::TypeAlias => "Type Aliases",
            DocKind::Enum => "Enums",
            DocKind::Property => "Properties",
            DocKind::Method => "Methods",
            DocKind::Parameter => "Parameters",
        }
    }

    /// Sort priority; lower renders first
    pub fn priority(&self) -> u8 {
        match self {
            DocKind::Class => 0,
            DocKind::Interface => 1,
            DocKind::Function => 2,
            DocKind::TypeAlias => 3,
            DocKind::Enum => 4,
            DocKind::Property => 5,
            DocKind::Method => 6,
            DocKind::Parameter => 7,
        }
    }
}

impl std::fmt::Display for DocKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A documented node with a kind-specific definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocNode<D> {
    /// Symbol name, never empty
    pub name: String,

    /// Description from the first JSDoc block
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// Source location
    pub location: Location,

    /// Parsed JSDoc of the first documentation block
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub js_doc: Option<JsDocInfo>,

    /// Node-specific definition
    #[serde(flatten)]
    pub def: D,
}

impl<D> DocNode<D> {
    /// Create a node from its shared fields and definition
    pub fn new(
        name: impl Into<String>,
        location: Location,
        js_doc: Option<JsDocInfo>,
        def: D,
    ) -> Self {
        let description = js_doc.as_ref().and_then(|doc| doc.description.clone());
        Self {
            name: name.into(),
            description,
            location,
            js_doc,
            def,
        }
    }

    /// Swap the definition, keeping the shared fields
    pub fn map_def<E>(self, f: impl FnOnce(D) -> E) -> DocNode<E> {
        DocNode {
            name: self.name,
            description: self.description,
            location: self.location,
            js_doc: self.js_doc,
            def: f(self.def),
        }
    }
}

/// Specific definition for each item kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DocItemDef {
    #[serde(rename_all = "camelCase")]
    Function { function_def: FunctionDef },

    #[serde(rename_all = "camelCase")]
    Class { class_def: ClassDef },

    #[serde(rename_all = "camelCase")]
    Interface { interface_def: InterfaceDef },

    #[serde(rename_all = "camelCase")]
    Enum { enum_def: EnumDef },

    #[serde(rename_all = "camelCase")]
    TypeAlias { type_alias_def: TypeAliasDef },

    #[serde(rename_all = "camelCase")]
    Property { property_def: PropertyDef },

    #[serde(rename_all = "camelCase")]
    Method { method_def: MethodDef },

    #[serde(rename_all = "camelCase")]
    Parameter { parameter_def: ParameterDef },
}

/// Any documented item
pub type DocItem = DocNode<DocItemDef>;

impl DocItem {
    /// Get the kind of this item
    pub fn kind(&self) -> DocKind {
        match &self.def {
            DocItemDef::Function { .. } => DocKind::Function,
            DocItemDef::Class { .. } => DocKind::Class,
            DocItemDef::Interface { .. } => DocKind::Interface,
            DocItemDef::Enum { .. } => DocKind::Enum,
            DocItemDef::TypeAlias { .. } => DocKind::TypeAlias,
            DocItemDef::Property { .. } => DocKind::Property,
            DocItemDef::Method { .. } => DocKind::Method,
            DocItemDef::Parameter { .. } => DocKind::Parameter,
        }
    }

    /// Get function definition if this is a function
    pub fn as_function(&self) -> Option<&FunctionDef> {
        match &self.def {
            DocItemDef::Function { function_def } => Some(function_def),
            _ => None,
        }
    }

    /// Get class definition if this is a class
    pub fn as_class(&self) -> Option<&ClassDef> {
        match &self.def {
            DocItemDef::Class { class_def } => Some(class_def),
            _ => None,
        }
    }

    /// Get interface definition if this is an interface
    pub fn as_interface(&self) -> Option<&InterfaceDef> {
        match &self.def {
            DocItemDef::Interface { interface_def } => Some(interface_def),
            _ => None,
        }
    }

    /// Get enum definition if this is an enum
    pub fn as_enum(&self) -> Option<&EnumDef> {
        match &self.def {
            DocItemDef::Enum { enum_def } => Some(enum_def),
            _ => None,
        }
    }

    /// Get type alias definition if this is a type alias
    pub fn as_type_alias(&self) -> Option<&TypeAliasDef> {
        match &self.def {
            DocItemDef::TypeAlias { type_alias_def } => Some(type_alias_def),
            _ => None,
        }
    }
}

macro_rules! impl_into_item {
    ($def:ty, $variant:ident, $field:ident) => {
        impl From<DocNode<$def>> for DocItem {
            fn from(node: DocNode<$def>) -> Self {
                node.map_def(|$field| DocItemDef::$variant { $field })
            }
        }
    };
}

impl_into_item!(FunctionDef, Function, function_def);
impl_into_item!(ClassDef, Class, class_def);
impl_into_item!(InterfaceDef, Interface, interface_def);
impl_into_item!(EnumDef, Enum, enum_def);
impl_into_item!(TypeAliasDef, TypeAlias, type_alias_def);
impl_into_item!(PropertyDef, Property, property_def);
impl_into_item!(MethodDef, Method, method_def);
impl_into_item!(ParameterDef, Parameter, parameter_def);
