//! TypeScript front-end built on deno_ast
//!
//! Wraps SWC AST nodes in small borrowed views that implement the
//! capability traits from [`crate::syntax`], so the generic extractor can
//! run over real source files. Everything the extractor reads from a
//! declaration (types, initializers, heritage clauses) is taken verbatim
//! from the source text; there is no type checker behind it, so
//! unannotated types read as `any`.

use crate::diagnostics::DocResult;
use crate::extractor::extract_documentation;
use crate::js_doc::RawDocBlock;
use crate::node::DocItem;
use crate::syntax::*;
use crate::utils::swc::{parse_typescript_file, parse_typescript_source, wtf8_to_string, ParsedModule};
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::{Span, Spanned};
use std::collections::HashSet;
use std::path::Path;

/// Parse a TypeScript file and extract its documentation
pub fn parse_typescript(path: impl AsRef<Path>) -> DocResult<Vec<DocItem>> {
    let parsed = parse_typescript_file(path)?;
    Ok(extract_documentation(&parsed.source_file()))
}

/// Parse TypeScript source text and extract its documentation
pub fn parse_typescript_str(path: impl AsRef<Path>, source: &str) -> DocResult<Vec<DocItem>> {
    let parsed = parse_typescript_source(path, source)?;
    Ok(extract_documentation(&parsed.source_file()))
}

impl ParsedModule {
    /// View this module as a [`SourceFileNode`]
    pub fn source_file(&self) -> SourceFile<'_> {
        SourceFile { module: self }
    }
}

/// Shared capabilities of every view: a name fixed at construction, the
/// JSDoc blocks preceding `span` and the line `span` starts on.
macro_rules! impl_view_common {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Named for $ty<'_> {
                fn name(&self) -> Option<String> {
                    self.name.clone()
                }
            }

            impl Documented for $ty<'_> {
                type Block = RawDocBlock;

                fn js_docs(&self) -> Vec<RawDocBlock> {
                    self.module.doc_blocks(self.span)
                }
            }

            impl Located for $ty<'_> {
                fn start_line(&self) -> usize {
                    self.module.line_of(self.span)
                }

                fn file_path(&self) -> String {
                    self.module.path_string()
                }
            }
        )*
    };
}

impl_view_common!(Callable, Property, Class, Interface, Enum, EnumMember, TypeAlias);

// ============================================================================
// Source file
// ============================================================================

/// A parsed file as a [`SourceFileNode`]
#[derive(Debug, Clone, Copy)]
pub struct SourceFile<'a> {
    module: &'a ParsedModule,
}

/// A top-level declaration with the span its documentation attaches to
enum TopLevel<'a> {
    Decl(&'a swc_ast::Decl, Span),
    DefaultClass(&'a swc_ast::ClassExpr, Span),
    DefaultFn(&'a swc_ast::FnExpr, Span),
    DefaultInterface(&'a swc_ast::TsInterfaceDecl, Span),
}

impl<'a> SourceFile<'a> {
    fn top_level(&self) -> Vec<TopLevel<'a>> {
        let Some(module) = self.module.module() else {
            return vec![];
        };

        module
            .body
            .iter()
            .filter_map(|item| match item {
                swc_ast::ModuleItem::ModuleDecl(swc_ast::ModuleDecl::ExportDecl(export)) => {
                    Some(TopLevel::Decl(&export.decl, export.span))
                }
                swc_ast::ModuleItem::ModuleDecl(swc_ast::ModuleDecl::ExportDefaultDecl(export)) => {
                    Some(match &export.decl {
                        swc_ast::DefaultDecl::Class(class) => TopLevel::DefaultClass(class, export.span),
                        swc_ast::DefaultDecl::Fn(function) => TopLevel::DefaultFn(function, export.span),
                        swc_ast::DefaultDecl::TsInterfaceDecl(iface) => {
                            TopLevel::DefaultInterface(iface, export.span)
                        }
                    })
                }
                swc_ast::ModuleItem::Stmt(swc_ast::Stmt::Decl(decl)) => {
                    Some(TopLevel::Decl(decl, decl.span()))
                }
                _ => None,
            })
            .collect()
    }

    fn decls(&self) -> impl Iterator<Item = (&'a swc_ast::Decl, Span)> {
        self.top_level().into_iter().filter_map(|item| match item {
            TopLevel::Decl(decl, span) => Some((decl, span)),
            _ => None,
        })
    }
}

impl<'a> SourceFileNode for SourceFile<'a> {
    type Function = Callable<'a>;
    type Class = Class<'a>;
    type Interface = Interface<'a>;
    type Enum = Enum<'a>;
    type TypeAlias = TypeAlias<'a>;

    fn file_path(&self) -> String {
        self.module.path_string()
    }

    fn functions(&self) -> Vec<Callable<'a>> {
        let functions = self
            .top_level()
            .into_iter()
            .filter_map(|item| match item {
                TopLevel::Decl(swc_ast::Decl::Fn(decl), span) => Some(Callable::function(
                    self.module,
                    Some(decl.ident.sym.to_string()),
                    span,
                    &decl.function,
                    false,
                )),
                TopLevel::DefaultFn(expr, span) => Some(Callable::function(
                    self.module,
                    expr.ident.as_ref().map(|i| i.sym.to_string()),
                    span,
                    &expr.function,
                    false,
                )),
                _ => None,
            })
            .collect();
        drop_overload_signatures(functions)
    }

    fn classes(&self) -> Vec<Class<'a>> {
        self.top_level()
            .into_iter()
            .filter_map(|item| match item {
                TopLevel::Decl(swc_ast::Decl::Class(decl), span) => Some(Class {
                    module: self.module,
                    name: Some(decl.ident.sym.to_string()),
                    span,
                    class: &decl.class,
                }),
                TopLevel::DefaultClass(expr, span) => Some(Class {
                    module: self.module,
                    name: expr.ident.as_ref().map(|i| i.sym.to_string()),
                    span,
                    class: &expr.class,
                }),
                _ => None,
            })
            .collect()
    }

    fn interfaces(&self) -> Vec<Interface<'a>> {
        self.top_level()
            .into_iter()
            .filter_map(|item| match item {
                TopLevel::Decl(swc_ast::Decl::TsInterface(decl), span) => Some((&**decl, span)),
                TopLevel::DefaultInterface(decl, span) => Some((decl, span)),
                _ => None,
            })
            .map(|(decl, span)| Interface {
                module: self.module,
                name: Some(decl.id.sym.to_string()),
                span,
                decl,
            })
            .collect()
    }

    fn enums(&self) -> Vec<Enum<'a>> {
        self.decls()
            .filter_map(|(decl, span)| match decl {
                swc_ast::Decl::TsEnum(decl) => Some(Enum {
                    module: self.module,
                    name: Some(decl.id.sym.to_string()),
                    span,
                    decl,
                }),
                _ => None,
            })
            .collect()
    }

    fn type_aliases(&self) -> Vec<TypeAlias<'a>> {
        self.decls()
            .filter_map(|(decl, span)| match decl {
                swc_ast::Decl::TsTypeAlias(decl) => Some(TypeAlias {
                    module: self.module,
                    name: Some(decl.id.sym.to_string()),
                    span,
                    decl,
                }),
                _ => None,
            })
            .collect()
    }
}

/// Drop bodyless overload signatures of callables that have an
/// implementation. Ambient declarations (no implementation anywhere) stay.
fn drop_overload_signatures(callables: Vec<Callable<'_>>) -> Vec<Callable<'_>> {
    let implemented: HashSet<(Option<String>, bool)> = callables
        .iter()
        .filter(|c| c.has_body)
        .map(|c| (c.name.clone(), c.is_static))
        .collect();

    callables
        .into_iter()
        .filter(|c| c.has_body || !implemented.contains(&(c.name.clone(), c.is_static)))
        .collect()
}

// ============================================================================
// Callables and parameters
// ============================================================================

enum ParamList<'a> {
    Function(&'a [swc_ast::Param]),
    Constructor(&'a [swc_ast::ParamOrTsParamProp]),
    Signature(&'a [swc_ast::TsFnParam]),
}

/// A function, method, method signature or constructor
pub struct Callable<'a> {
    module: &'a ParsedModule,
    name: Option<String>,
    span: Span,
    params: ParamList<'a>,
    return_type: Option<&'a swc_ast::TsTypeAnn>,
    type_params: Option<&'a swc_ast::TsTypeParamDecl>,
    is_async: bool,
    is_static: bool,
    has_body: bool,
}

impl<'a> Callable<'a> {
    fn function(
        module: &'a ParsedModule,
        name: Option<String>,
        span: Span,
        function: &'a swc_ast::Function,
        is_static: bool,
    ) -> Self {
        Self {
            module,
            name,
            span,
            params: ParamList::Function(&function.params),
            return_type: function.return_type.as_deref(),
            type_params: function.type_params.as_deref(),
            is_async: function.is_async,
            is_static,
            has_body: function.body.is_some(),
        }
    }

    fn constructor(module: &'a ParsedModule, ctor: &'a swc_ast::Constructor) -> Self {
        Self {
            module,
            name: None,
            span: ctor.span,
            params: ParamList::Constructor(&ctor.params),
            return_type: None,
            type_params: None,
            is_async: false,
            is_static: false,
            has_body: ctor.body.is_some(),
        }
    }

    fn method_signature(module: &'a ParsedModule, sig: &'a swc_ast::TsMethodSignature) -> Self {
        Self {
            module,
            name: Some(module.key_name(&sig.key, sig.computed)),
            span: sig.span,
            params: ParamList::Signature(&sig.params),
            return_type: sig.type_ann.as_deref(),
            type_params: sig.type_params.as_deref(),
            is_async: false,
            is_static: false,
            has_body: false,
        }
    }
}

impl HasParameters for Callable<'_> {
    type Parameter = Parameter;

    fn parameters(&self) -> Vec<Parameter> {
        let m = self.module;
        match self.params {
            ParamList::Function(params) => params.iter().map(|p| pat_parameter(m, &p.pat)).collect(),
            ParamList::Constructor(params) => params
                .iter()
                .map(|p| match p {
                    swc_ast::ParamOrTsParamProp::Param(param) => pat_parameter(m, &param.pat),
                    swc_ast::ParamOrTsParamProp::TsParamProp(prop) => match &prop.param {
                        swc_ast::TsParamPropParam::Ident(ident) => ident_parameter(m, ident),
                        swc_ast::TsParamPropParam::Assign(assign) => assign_parameter(m, assign),
                    },
                })
                .collect(),
            ParamList::Signature(params) => params
                .iter()
                .map(|p| match p {
                    swc_ast::TsFnParam::Ident(ident) => ident_parameter(m, ident),
                    swc_ast::TsFnParam::Array(array) => {
                        pattern_parameter(m, array.span, array.type_ann.as_deref(), array.optional)
                    }
                    swc_ast::TsFnParam::Object(object) => {
                        pattern_parameter(m, object.span, object.type_ann.as_deref(), object.optional)
                    }
                    swc_ast::TsFnParam::Rest(rest) => rest_parameter(m, rest),
                })
                .collect(),
        }
    }
}

impl HasTypeParameters for Callable<'_> {
    fn type_parameters(&self) -> Vec<String> {
        self.module.type_param_names(self.type_params)
    }
}

impl FunctionNode for Callable<'_> {
    fn return_type(&self) -> String {
        self.module.type_ann_text(self.return_type)
    }
}

impl MethodNode for Callable<'_> {
    fn is_static(&self) -> bool {
        self.is_static
    }

    fn is_async(&self) -> bool {
        self.is_async
    }
}

impl ConstructorNode for Callable<'_> {}

/// A call parameter, resolved from its binding pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: Option<String>,
    type_text: String,
    question: bool,
    default: Option<String>,
    file_path: String,
    line: usize,
}

impl Named for Parameter {
    fn name(&self) -> Option<String> {
        self.name.clone()
    }
}

impl Located for Parameter {
    fn start_line(&self) -> usize {
        self.line
    }

    fn file_path(&self) -> String {
        self.file_path.clone()
    }
}

impl Typed for Parameter {
    fn type_text(&self) -> String {
        self.type_text.clone()
    }
}

impl ParameterNode for Parameter {
    fn is_optional(&self) -> bool {
        self.question || self.default.is_some()
    }

    fn default_value(&self) -> Option<String> {
        self.default.clone()
    }
}

fn empty_parameter(m: &ParsedModule, span: Span) -> Parameter {
    Parameter {
        name: None,
        type_text: m.type_ann_text(None),
        question: false,
        default: None,
        file_path: m.path_string(),
        line: m.line_of(span),
    }
}

fn pat_parameter(m: &ParsedModule, pat: &swc_ast::Pat) -> Parameter {
    match pat {
        swc_ast::Pat::Ident(ident) => ident_parameter(m, ident),
        swc_ast::Pat::Assign(assign) => assign_parameter(m, assign),
        swc_ast::Pat::Rest(rest) => rest_parameter(m, rest),
        swc_ast::Pat::Array(array) => {
            pattern_parameter(m, array.span, array.type_ann.as_deref(), array.optional)
        }
        swc_ast::Pat::Object(object) => {
            pattern_parameter(m, object.span, object.type_ann.as_deref(), object.optional)
        }
        swc_ast::Pat::Expr(_) | swc_ast::Pat::Invalid(_) => empty_parameter(m, pat.span()),
    }
}

fn ident_parameter(m: &ParsedModule, ident: &swc_ast::BindingIdent) -> Parameter {
    Parameter {
        name: Some(ident.id.sym.to_string()),
        type_text: m.type_ann_text(ident.type_ann.as_deref()),
        question: ident.id.optional,
        ..empty_parameter(m, ident.span())
    }
}

fn assign_parameter(m: &ParsedModule, assign: &swc_ast::AssignPat) -> Parameter {
    Parameter {
        default: Some(m.text_of(assign.right.span()).to_string()),
        ..pat_parameter(m, &assign.left)
    }
}

/// `...args: T[]`: named after the bound identifier
fn rest_parameter(m: &ParsedModule, rest: &swc_ast::RestPat) -> Parameter {
    let bound = pat_parameter(m, &rest.arg);
    let type_text = match rest.type_ann.as_deref() {
        Some(ann) => m.type_ann_text(Some(ann)),
        None => bound.type_text,
    };
    Parameter {
        name: bound.name,
        type_text,
        ..empty_parameter(m, rest.span)
    }
}

/// Destructured parameter, named by its pattern text (`{ a, b }`)
fn pattern_parameter(
    m: &ParsedModule,
    span: Span,
    type_ann: Option<&swc_ast::TsTypeAnn>,
    question: bool,
) -> Parameter {
    let pattern_end = type_ann.map(|ann| ann.span.lo).unwrap_or(span.hi).max(span.lo);
    let text = m.text_of(Span::new(span.lo, pattern_end));
    let name = text.trim_end().trim_end_matches(':').trim_end().trim_end_matches('?').trim_end();

    Parameter {
        name: Some(name.to_string()).filter(|n| !n.is_empty()),
        type_text: m.type_ann_text(type_ann),
        question,
        ..empty_parameter(m, span)
    }
}

// ============================================================================
// Properties
// ============================================================================

/// A class property or interface property signature
pub struct Property<'a> {
    module: &'a ParsedModule,
    name: Option<String>,
    span: Span,
    type_ann: Option<&'a swc_ast::TsTypeAnn>,
    is_static: bool,
    is_readonly: bool,
    question: bool,
}

impl Typed for Property<'_> {
    fn type_text(&self) -> String {
        self.module.type_ann_text(self.type_ann)
    }
}

impl PropertyNode for Property<'_> {
    fn is_static(&self) -> bool {
        self.is_static
    }

    fn is_readonly(&self) -> bool {
        self.is_readonly
    }

    fn has_question_token(&self) -> bool {
        self.question
    }
}

// ============================================================================
// Classes and interfaces
// ============================================================================

pub struct Class<'a> {
    module: &'a ParsedModule,
    name: Option<String>,
    span: Span,
    class: &'a swc_ast::Class,
}

impl HasTypeParameters for Class<'_> {
    fn type_parameters(&self) -> Vec<String> {
        self.module.type_param_names(self.class.type_params.as_deref())
    }
}

impl<'a> ClassNode for Class<'a> {
    type Property = Property<'a>;
    type Method = Callable<'a>;
    type Constructor = Callable<'a>;

    fn properties(&self) -> Vec<Property<'a>> {
        let m = self.module;
        self.class
            .body
            .iter()
            .filter_map(|member| match member {
                swc_ast::ClassMember::ClassProp(prop) => Some(Property {
                    module: m,
                    name: Some(m.prop_name(&prop.key)),
                    span: prop.span,
                    type_ann: prop.type_ann.as_deref(),
                    is_static: prop.is_static,
                    is_readonly: prop.readonly,
                    question: prop.is_optional,
                }),
                swc_ast::ClassMember::PrivateProp(prop) => Some(Property {
                    module: m,
                    name: Some(format!("#{}", prop.key.name)),
                    span: prop.span,
                    type_ann: prop.type_ann.as_deref(),
                    is_static: prop.is_static,
                    is_readonly: prop.readonly,
                    question: prop.is_optional,
                }),
                _ => None,
            })
            .collect()
    }

    /// Methods in declaration order; accessors are not methods
    fn methods(&self) -> Vec<Callable<'a>> {
        let m = self.module;
        let methods = self
            .class
            .body
            .iter()
            .filter_map(|member| match member {
                swc_ast::ClassMember::Method(method) if method.kind == swc_ast::MethodKind::Method => {
                    Some(Callable::function(
                        m,
                        Some(m.prop_name(&method.key)),
                        method.span,
                        &method.function,
                        method.is_static,
                    ))
                }
                swc_ast::ClassMember::PrivateMethod(method)
                    if method.kind == swc_ast::MethodKind::Method =>
                {
                    Some(Callable::function(
                        m,
                        Some(format!("#{}", method.key.name)),
                        method.span,
                        &method.function,
                        method.is_static,
                    ))
                }
                _ => None,
            })
            .collect();
        drop_overload_signatures(methods)
    }

    fn constructors(&self) -> Vec<Callable<'a>> {
        let constructors = self
            .class
            .body
            .iter()
            .filter_map(|member| match member {
                swc_ast::ClassMember::Constructor(ctor) => Some(Callable::constructor(self.module, ctor)),
                _ => None,
            })
            .collect();
        drop_overload_signatures(constructors)
    }

    fn extends(&self) -> Option<String> {
        let base = self.class.super_class.as_ref()?.span();
        let end = self
            .class
            .super_type_params
            .as_ref()
            .map(|params| params.span.hi)
            .unwrap_or(base.hi);
        Some(self.module.text_of(Span::new(base.lo, end)).to_string())
    }

    fn implements(&self) -> Vec<String> {
        self.class
            .implements
            .iter()
            .map(|i| self.module.text_of(i.span).to_string())
            .collect()
    }
}

pub struct Interface<'a> {
    module: &'a ParsedModule,
    name: Option<String>,
    span: Span,
    decl: &'a swc_ast::TsInterfaceDecl,
}

impl HasTypeParameters for Interface<'_> {
    fn type_parameters(&self) -> Vec<String> {
        self.module.type_param_names(self.decl.type_params.as_deref())
    }
}

impl<'a> InterfaceNode for Interface<'a> {
    type Property = Property<'a>;
    type Method = Callable<'a>;

    fn properties(&self) -> Vec<Property<'a>> {
        let m = self.module;
        self.decl
            .body
            .body
            .iter()
            .filter_map(|element| match element {
                swc_ast::TsTypeElement::TsPropertySignature(prop) => Some(Property {
                    module: m,
                    name: Some(m.key_name(&prop.key, prop.computed)),
                    span: prop.span,
                    type_ann: prop.type_ann.as_deref(),
                    is_static: false,
                    is_readonly: prop.readonly,
                    question: prop.optional,
                }),
                _ => None,
            })
            .collect()
    }

    fn methods(&self) -> Vec<Callable<'a>> {
        self.decl
            .body
            .body
            .iter()
            .filter_map(|element| match element {
                swc_ast::TsTypeElement::TsMethodSignature(sig) => {
                    Some(Callable::method_signature(self.module, sig))
                }
                _ => None,
            })
            .collect()
    }

    fn extends(&self) -> Vec<String> {
        self.decl
            .extends
            .iter()
            .map(|e| self.module.text_of(e.span).to_string())
            .collect()
    }
}

// ============================================================================
// Enums and type aliases
// ============================================================================

pub struct Enum<'a> {
    module: &'a ParsedModule,
    name: Option<String>,
    span: Span,
    decl: &'a swc_ast::TsEnumDecl,
}

impl<'a> EnumNode for Enum<'a> {
    type Member = EnumMember<'a>;

    fn members(&self) -> Vec<EnumMember<'a>> {
        self.decl
            .members
            .iter()
            .map(|member| EnumMember {
                module: self.module,
                name: Some(match &member.id {
                    swc_ast::TsEnumMemberId::Ident(ident) => ident.sym.to_string(),
                    swc_ast::TsEnumMemberId::Str(s) => wtf8_to_string(s),
                }),
                span: member.span,
                member,
            })
            .collect()
    }
}

pub struct EnumMember<'a> {
    module: &'a ParsedModule,
    name: Option<String>,
    span: Span,
    member: &'a swc_ast::TsEnumMember,
}

impl EnumMemberNode for EnumMember<'_> {
    fn initializer_text(&self) -> Option<String> {
        self.member
            .init
            .as_ref()
            .map(|init| self.module.text_of(init.span()).to_string())
    }
}

pub struct TypeAlias<'a> {
    module: &'a ParsedModule,
    name: Option<String>,
    span: Span,
    decl: &'a swc_ast::TsTypeAliasDecl,
}

impl HasTypeParameters for TypeAlias<'_> {
    fn type_parameters(&self) -> Vec<String> {
        self.module.type_param_names(self.decl.type_params.as_deref())
    }
}

impl Typed for TypeAlias<'_> {
    fn type_text(&self) -> String {
        self.module.text_of(self.decl.type_ann.span()).to_string()
    }
}

impl TypeAliasNode for TypeAlias<'_> {}
