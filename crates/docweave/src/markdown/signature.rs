//! Declaration signatures synthesized from the model
//!
//! Signatures are rebuilt from item fields, never copied from source, so
//! two items with equal models always render identically.

use crate::class::{ClassDef, MethodDef, PropertyDef};
use crate::function::FunctionDef;
use crate::interface::InterfaceDef;
use crate::params::{ParameterDef, ParameterDoc};
use crate::r#enum::EnumDef;
use crate::type_alias::TypeAliasDef;

/// `<T, U>`, or nothing without type parameters
fn generics(type_parameters: &[String]) -> String {
    if type_parameters.is_empty() {
        String::new()
    } else {
        format!("<{}>", type_parameters.join(", "))
    }
}

/// Parameter as written in a signature: `name[?][: Type][ = default]`
pub fn parameter_signature(name: &str, def: &ParameterDef, include_types: bool) -> String {
    let mut sig = parameter_label(name, def, include_types);
    if let Some(default) = &def.default_value {
        sig.push_str(" = ");
        sig.push_str(default);
    }
    sig
}

/// Parameter as listed in a Parameters section: `name[?][: Type]`.
///
/// A parameter with a default is already optional, so it only gets `?`
/// when declared with one.
pub fn parameter_label(name: &str, def: &ParameterDef, include_types: bool) -> String {
    let mut label = name.to_string();
    if def.is_optional && def.default_value.is_none() {
        label.push('?');
    }
    if include_types {
        label.push_str(": ");
        label.push_str(&def.type_text);
    }
    label
}

fn callable_signature(
    modifiers: &str,
    name: &str,
    type_parameters: &[String],
    parameters: &[ParameterDoc],
    return_type: &str,
    include_types: bool,
) -> String {
    let mut sig = format!("{}{}{}(", modifiers, name, generics(type_parameters));
    if !parameters.is_empty() {
        let lines: Vec<String> = parameters
            .iter()
            .map(|p| format!("  {}", parameter_signature(&p.name, &p.def, include_types)))
            .collect();
        sig.push('\n');
        sig.push_str(&lines.join(",\n"));
        sig.push('\n');
    }
    sig.push_str("): ");
    sig.push_str(return_type);
    sig
}

/// Function signature
pub fn function_signature(name: &str, def: &FunctionDef, include_types: bool) -> String {
    callable_signature(
        "",
        name,
        &def.type_parameters,
        &def.parameters,
        &def.return_type,
        include_types,
    )
}

/// Method or constructor signature, with `static`/`async` modifiers
pub fn method_signature(name: &str, def: &MethodDef, include_types: bool) -> String {
    let mut modifiers = String::new();
    if def.is_static {
        modifiers.push_str("static ");
    }
    if def.is_async {
        modifiers.push_str("async ");
    }
    callable_signature(
        &modifiers,
        name,
        &def.type_parameters,
        &def.parameters,
        &def.return_type,
        include_types,
    )
}

/// Property signature: `[static ][readonly ]name[?][: Type];`
pub fn property_signature(name: &str, def: &PropertyDef, include_types: bool) -> String {
    let mut sig = String::new();
    if def.is_static {
        sig.push_str("static ");
    }
    if def.is_readonly {
        sig.push_str("readonly ");
    }
    sig.push_str(name);
    if def.is_optional {
        sig.push('?');
    }
    if include_types {
        sig.push_str(": ");
        sig.push_str(&def.type_text);
    }
    sig.push(';');
    sig
}

/// Class signature with a placeholder body
pub fn class_signature(name: &str, def: &ClassDef) -> String {
    let mut sig = format!("class {}{}", name, generics(&def.type_parameters));
    if let Some(base) = &def.extends {
        sig.push_str(" extends ");
        sig.push_str(base);
    }
    if !def.implements.is_empty() {
        sig.push_str(" implements ");
        sig.push_str(&def.implements.join(", "));
    }
    sig.push_str(" {\n");
    if def.has_members() {
        sig.push_str("  // Properties, methods, and constructors\n");
    }
    sig.push('}');
    sig
}

/// Interface signature with a placeholder body
pub fn interface_signature(name: &str, def: &InterfaceDef) -> String {
    let mut sig = format!("interface {}{}", name, generics(&def.type_parameters));
    if !def.extends.is_empty() {
        sig.push_str(" extends ");
        sig.push_str(&def.extends.join(", "));
    }
    sig.push_str(" {\n");
    if def.has_members() {
        sig.push_str("  // Properties and methods\n");
    }
    sig.push('}');
    sig
}

/// Enum signature listing every member
pub fn enum_signature(name: &str, def: &EnumDef) -> String {
    let mut sig = format!("enum {} {{\n", name);
    for member in &def.members {
        sig.push_str("  ");
        sig.push_str(&member.name);
        if let Some(value) = &member.value {
            sig.push_str(" = ");
            sig.push_str(value);
        }
        sig.push_str(",\n");
    }
    sig.push('}');
    sig
}

/// Type alias signature; the aliased type text is kept verbatim
pub fn type_alias_signature(name: &str, def: &TypeAliasDef) -> String {
    format!(
        "type {}{} = {};",
        name,
        generics(&def.type_parameters),
        def.type_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{extract_class, extract_property};
    use crate::function::{extract_function, FunctionDoc};
    use crate::interface::extract_interface;
    use crate::r#enum::extract_enum;
    use crate::test::{
        MockClass, MockEnum, MockEnumMember, MockFunction, MockInterface, MockParam, MockProperty,
    };
    use crate::type_alias::extract_type_alias;

    fn add() -> FunctionDoc {
        extract_function(
            &MockFunction::new("add")
                .type_param("T")
                .param(MockParam::new("a", "number"))
                .param(MockParam::new("b", "number").with_default("0"))
                .param(MockParam::new("label", "string").optional())
                .returns("number"),
        )
    }

    #[test]
    fn test_function_signature() {
        let f = add();
        insta::assert_snapshot!(function_signature(&f.name, &f.def, true), @r###"
add<T>(
  a: number,
  b: number = 0,
  label?: string
): number
"###);
    }

    #[test]
    fn test_function_signature_without_types() {
        let f = add();
        insta::assert_snapshot!(function_signature(&f.name, &f.def, false), @r###"
add<T>(
  a,
  b = 0,
  label?
): number
"###);
    }

    #[test]
    fn test_function_signature_without_parameters() {
        let f = extract_function(&MockFunction::new("now").returns("Date"));
        insta::assert_snapshot!(function_signature(&f.name, &f.def, true), @"now(): Date");
    }

    #[test]
    fn test_method_modifiers() {
        let class = extract_class(
            &MockClass::new("Jobs").method(
                MockFunction::new("drain")
                    .as_static()
                    .as_async()
                    .returns("Promise<void>"),
            ),
        );
        let drain = &class.def.methods[0];
        insta::assert_snapshot!(
            method_signature(&drain.name, &drain.def, true),
            @"static async drain(): Promise<void>"
        );
    }

    #[test]
    fn test_property_signature() {
        let prop = extract_property(
            &MockProperty::new("value", "string")
                .as_static()
                .as_readonly()
                .optional(),
        );
        assert_eq!(property_signature(&prop.name, &prop.def, true), "static readonly value?: string;");
        assert_eq!(property_signature(&prop.name, &prop.def, false), "static readonly value?;");
    }

    #[test]
    fn test_class_signature() {
        let class = extract_class(
            &MockClass::new("Counter")
                .type_param("T")
                .extends("Base<T>")
                .implements("Countable")
                .implements("Resettable")
                .property(MockProperty::new("count", "number")),
        );
        insta::assert_snapshot!(class_signature(&class.name, &class.def), @r###"
class Counter<T> extends Base<T> implements Countable, Resettable {
  // Properties, methods, and constructors
}
"###);

        let empty = extract_class(&MockClass::new("Empty"));
        assert_eq!(class_signature(&empty.name, &empty.def), "class Empty {\n}");
    }

    #[test]
    fn test_interface_signature() {
        let iface = extract_interface(
            &MockInterface::new("Reader")
                .extends("Closer")
                .extends("Seeker")
                .method(MockFunction::new("read").returns("number")),
        );
        insta::assert_snapshot!(interface_signature(&iface.name, &iface.def), @r###"
interface Reader extends Closer, Seeker {
  // Properties and methods
}
"###);
    }

    #[test]
    fn test_enum_signature() {
        let e = extract_enum(
            &MockEnum::new("Color")
                .member(MockEnumMember::new("Red").value("\"red\""))
                .member(MockEnumMember::new("Green")),
        );
        insta::assert_snapshot!(enum_signature(&e.name, &e.def), @r###"
enum Color {
  Red = "red",
  Green,
}
"###);
    }

    #[test]
    fn test_type_alias_keeps_text_verbatim() {
        let text = "{ [K in keyof T]?: T[K] } & `tmpl-${string}`";
        let alias = extract_type_alias(&crate::test::MockTypeAlias::new("Partialish", text).type_param("T"));
        let sig = type_alias_signature(&alias.name, &alias.def);
        assert!(sig.contains(&format!("= {};", text)));
        assert!(sig.starts_with("type Partialish<T> = "));
    }
}
