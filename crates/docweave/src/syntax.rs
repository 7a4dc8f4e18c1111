//! Capability traits for syntax nodes
//!
//! The extractor does not care which TypeScript front-end produced the tree.
//! It only asks nodes for capabilities: a name, documentation blocks, a
//! source location, parameters and so on. [`crate::parser`] implements these
//! traits over `deno_ast`; [`crate::test`] implements them with plain structs.

use crate::diagnostics::DocResult;

/// A `@tag` inside a documentation comment
pub trait DocTagSource {
    /// Tag name without the `@` marker
    fn tag_name(&self) -> &str;

    /// Raw tag text as written, starting at the `@` marker
    fn text(&self) -> &str;

    /// Structured comment text of the tag.
    ///
    /// Fails when the tag syntax cannot be interpreted; callers fall back to
    /// splitting [`DocTagSource::text`] themselves.
    fn comment(&self) -> DocResult<Option<String>>;
}

/// A single `/** ... */` comment block
pub trait DocBlockSource {
    type Tag: DocTagSource;

    /// Untagged body text
    fn description(&self) -> &str;

    /// Tags in source order
    fn tags(&self) -> &[Self::Tag];
}

/// Something that may carry a name
pub trait Named {
    fn name(&self) -> Option<String>;
}

/// Something with documentation comments attached, in source order
pub trait Documented {
    type Block: DocBlockSource;

    fn js_docs(&self) -> Vec<Self::Block>;
}

/// Something with a position in a source file
pub trait Located {
    /// 1-based line of the node's start
    fn start_line(&self) -> usize;

    fn file_path(&self) -> String;
}

/// Something with a declared or inferred type, as source text
pub trait Typed {
    fn type_text(&self) -> String;
}

/// Something that declares generic type parameters
pub trait HasTypeParameters {
    /// Type parameter names, without constraints or defaults
    fn type_parameters(&self) -> Vec<String>;
}

/// Something that declares call parameters
pub trait HasParameters {
    type Parameter: ParameterNode;

    fn parameters(&self) -> Vec<Self::Parameter>;
}

pub trait ParameterNode: Named + Located + Typed {
    /// Declared with `?`, a default value, or as a rest parameter
    fn is_optional(&self) -> bool;

    /// Default value initializer as source text
    fn default_value(&self) -> Option<String>;
}

pub trait FunctionNode:
    Named + Documented + Located + HasParameters + HasTypeParameters
{
    /// Declared return type, or the inferred fallback
    fn return_type(&self) -> String;
}

pub trait MethodNode: FunctionNode {
    fn is_static(&self) -> bool;
    fn is_async(&self) -> bool;
}

pub trait ConstructorNode: Documented + Located + HasParameters {}

pub trait PropertyNode: Named + Documented + Located + Typed {
    fn is_static(&self) -> bool;
    fn is_readonly(&self) -> bool;
    fn has_question_token(&self) -> bool;
}

pub trait ClassNode: Named + Documented + Located + HasTypeParameters {
    type Property: PropertyNode;
    type Method: MethodNode;
    type Constructor: ConstructorNode;

    fn properties(&self) -> Vec<Self::Property>;
    fn methods(&self) -> Vec<Self::Method>;
    fn constructors(&self) -> Vec<Self::Constructor>;

    /// Base class expression as source text
    fn extends(&self) -> Option<String>;

    /// Implemented types as source text
    fn implements(&self) -> Vec<String>;
}

/// Interface declaration. Interface methods are never static or async, so
/// they only need [`FunctionNode`].
pub trait InterfaceNode: Named + Documented + Located + HasTypeParameters {
    type Property: PropertyNode;
    type Method: FunctionNode;

    fn properties(&self) -> Vec<Self::Property>;
    fn methods(&self) -> Vec<Self::Method>;

    /// Extended interfaces as source text
    fn extends(&self) -> Vec<String>;
}

pub trait EnumMemberNode: Named + Documented {
    /// Initializer as source text
    fn initializer_text(&self) -> Option<String>;
}

pub trait EnumNode: Named + Documented + Located {
    type Member: EnumMemberNode;

    fn members(&self) -> Vec<Self::Member>;
}

pub trait TypeAliasNode: Named + Documented + Located + HasTypeParameters + Typed {}

/// A parsed source file, exposing its declarations by kind in file order
pub trait SourceFileNode {
    type Function: FunctionNode;
    type Class: ClassNode;
    type Interface: InterfaceNode;
    type Enum: EnumNode;
    type TypeAlias: TypeAliasNode;

    fn file_path(&self) -> String;
    fn functions(&self) -> Vec<Self::Function>;
    fn classes(&self) -> Vec<Self::Class>;
    fn interfaces(&self) -> Vec<Self::Interface>;
    fn enums(&self) -> Vec<Self::Enum>;
    fn type_aliases(&self) -> Vec<Self::TypeAlias>;
}
