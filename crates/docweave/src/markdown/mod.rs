//! Markdown rendering
//!
//! [`format_markdown`] turns a sequence of documented items into a single
//! document: a table of contents followed by one block per item. Items are
//! sorted once and both parts walk that same order, so every TOC link points
//! at an anchor further down in the same relative position.
//!
//! Output depends only on the items and options; rendering the same input
//! twice yields byte-identical text.

pub mod signature;
pub mod slug;
pub mod toc;

use crate::class::{ClassDef, MethodDef, MethodDoc, PropertyDoc};
use crate::config::RenderOptions;
use crate::interface::InterfaceDef;
use crate::node::{DocItem, DocItemDef, Location};
use crate::params::ParameterDoc;
use crate::r#enum::EnumDef;
use signature::{
    class_signature, enum_signature, function_signature, interface_signature, method_signature,
    parameter_label, parameter_signature, property_signature, type_alias_signature,
};
use slug::{item_anchor, member_anchor};
use std::cmp::Ordering;

pub use slug::slug;
pub use toc::render_toc;

/// Render items as a Markdown document
pub fn format_markdown(items: &[DocItem], options: &RenderOptions) -> String {
    let sorted = sort_items(items);

    let mut md = render_toc(&sorted, options);
    for item in &sorted {
        md.push_str(&render_item(item, options));
        md.push('\n');
    }

    tracing::trace!(items = sorted.len(), bytes = md.len(), "rendered markdown");
    md
}

/// Sort items for rendering: by kind priority, then by name.
///
/// Names compare case-insensitively first and byte-wise second, so distinct
/// names never tie. The byte-wise step puts `Add` before `add`, unlike
/// locale collation. The sort is stable.
pub fn sort_items(items: &[DocItem]) -> Vec<&DocItem> {
    let mut sorted: Vec<&DocItem> = items.iter().collect();
    sorted.sort_by(|a, b| compare_items(a, b));
    sorted
}

fn compare_items(a: &DocItem, b: &DocItem) -> Ordering {
    a.kind()
        .priority()
        .cmp(&b.kind().priority())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Render a single item block, anchor through Source section
pub fn render_item(item: &DocItem, options: &RenderOptions) -> String {
    let mut md = String::new();

    anchor(&mut md, &item_anchor(&item.name));
    md.push_str(&format!("## {}\n\n", item.name));
    description(&mut md, item.description.as_deref());

    let include_types = options.include_types;
    match &item.def {
        DocItemDef::Function { function_def } => {
            code_block(
                &mut md,
                &function_signature(&item.name, function_def, include_types),
            );
            parameters_section(&mut md, 3, &function_def.parameters, include_types);
            returns_section(&mut md, 3, &function_def.return_type);
        }
        DocItemDef::Method { method_def } => {
            code_block(&mut md, &method_signature(&item.name, method_def, include_types));
            parameters_section(&mut md, 3, &method_def.parameters, include_types);
            returns_section(&mut md, 3, &method_def.return_type);
        }
        DocItemDef::Class { class_def } => {
            code_block(&mut md, &class_signature(&item.name, class_def));
            class_members(&mut md, &item.name, class_def, include_types);
        }
        DocItemDef::Interface { interface_def } => {
            code_block(&mut md, &interface_signature(&item.name, interface_def));
            interface_members(&mut md, &item.name, interface_def, include_types);
        }
        DocItemDef::Enum { enum_def } => {
            code_block(&mut md, &enum_signature(&item.name, enum_def));
            enum_members(&mut md, enum_def);
        }
        DocItemDef::TypeAlias { type_alias_def } => {
            code_block(&mut md, &type_alias_signature(&item.name, type_alias_def));
        }
        DocItemDef::Property { property_def } => {
            code_block(
                &mut md,
                &property_signature(&item.name, property_def, include_types),
            );
        }
        DocItemDef::Parameter { parameter_def } => {
            code_block(
                &mut md,
                &parameter_signature(&item.name, parameter_def, include_types),
            );
        }
    }

    source_section(&mut md, &item.location);
    md
}

fn anchor(md: &mut String, id: &str) {
    md.push_str(&format!("<a id=\"{}\"></a>\n", id));
}

fn description(md: &mut String, text: Option<&str>) {
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        md.push_str(text);
        md.push_str("\n\n");
    }
}

fn code_block(md: &mut String, code: &str) {
    md.push_str("```typescript\n");
    md.push_str(code);
    md.push_str("\n```\n\n");
}

fn heading(md: &mut String, level: usize, text: &str) {
    md.push_str(&"#".repeat(level));
    md.push(' ');
    md.push_str(text);
    md.push_str("\n\n");
}

fn parameters_section(md: &mut String, level: usize, parameters: &[ParameterDoc], include_types: bool) {
    if parameters.is_empty() {
        return;
    }
    heading(md, level, "Parameters");
    for parameter in parameters {
        let label = parameter_label(&parameter.name, &parameter.def, include_types);
        md.push_str(&format!("- `{}`", label));
        if let Some(default) = &parameter.def.default_value {
            md.push_str(&format!(" (default: `{}`)", default));
        }
        if let Some(desc) = parameter.description.as_deref().filter(|d| !d.is_empty()) {
            md.push_str(" - ");
            md.push_str(desc);
        }
        md.push('\n');
    }
    md.push('\n');
}

fn returns_section(md: &mut String, level: usize, return_type: &str) {
    heading(md, level, "Returns");
    md.push_str(&format!("`{}`\n\n", return_type));
}

fn source_section(md: &mut String, location: &Location) {
    heading(md, 3, "Source");
    md.push_str(&format!(
        "[{}:{}]({}#L{})\n",
        location.file_name(),
        location.line,
        location.file_path,
        location.line
    ));
}

fn class_members(md: &mut String, class_name: &str, def: &ClassDef, include_types: bool) {
    method_group(md, "Constructors", class_name, &def.constructors, include_types);
    property_group(md, class_name, &def.properties, include_types);
    method_group(md, "Methods", class_name, &def.methods, include_types);
}

fn interface_members(md: &mut String, interface_name: &str, def: &InterfaceDef, include_types: bool) {
    property_group(md, interface_name, &def.properties, include_types);
    method_group(md, "Methods", interface_name, &def.methods, include_types);
}

fn property_group(md: &mut String, parent: &str, properties: &[PropertyDoc], include_types: bool) {
    if properties.is_empty() {
        return;
    }
    heading(md, 3, "Properties");
    for property in properties {
        member_heading(md, parent, &property.name);
        description(md, property.description.as_deref());
        code_block(
            md,
            &property_signature(&property.name, &property.def, include_types),
        );
    }
}

fn method_group(md: &mut String, title: &str, parent: &str, methods: &[MethodDoc], include_types: bool) {
    if methods.is_empty() {
        return;
    }
    heading(md, 3, title);
    for method in methods {
        member_heading(md, parent, &method.name);
        description(md, method.description.as_deref());
        method_block(md, &method.name, &method.def, include_types);
    }
}

fn method_block(md: &mut String, name: &str, def: &MethodDef, include_types: bool) {
    code_block(md, &method_signature(name, def, include_types));
    parameters_section(md, 5, &def.parameters, include_types);
    returns_section(md, 5, &def.return_type);
}

fn member_heading(md: &mut String, parent: &str, member: &str) {
    anchor(md, &member_anchor(parent, member));
    heading(md, 4, member);
}

fn enum_members(md: &mut String, def: &EnumDef) {
    if def.members.is_empty() {
        return;
    }
    heading(md, 3, "Members");
    for member in &def.members {
        heading(md, 4, &member.name);
        if let Some(value) = &member.value {
            md.push_str(&format!("Value: `{}`\n\n", value));
        }
        description(md, member.description.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::extract_class;
    use crate::function::extract_function;
    use crate::r#enum::extract_enum;
    use crate::test::{
        MockClass, MockEnum, MockEnumMember, MockFunction, MockParam, MockProperty, MockTypeAlias,
    };
    use crate::type_alias::extract_type_alias;
    use pretty_assertions::assert_eq;

    fn add() -> DocItem {
        extract_function(
            &MockFunction::new("add")
                .doc("/**\n * Adds two numbers\n * @param a First\n * @param b Second\n */")
                .at(3)
                .param(MockParam::new("a", "number"))
                .param(MockParam::new("b", "number"))
                .returns("number"),
        )
        .into()
    }

    fn anchors_in(text: &str, prefix: &str, suffix: char) -> Vec<String> {
        text.match_indices(prefix)
            .map(|(i, _)| {
                let rest = &text[i + prefix.len()..];
                rest[..rest.find(suffix).unwrap_or(rest.len())].to_string()
            })
            .collect()
    }

    #[test]
    fn test_empty_document() {
        let md = format_markdown(&[], &RenderOptions::default());
        assert_eq!(md, "# Table of Contents\n\n");
    }

    #[test]
    fn test_function_document() {
        let md = format_markdown(&[add()], &RenderOptions::default());
        assert_eq!(
            md,
            r#"# Table of Contents

## Functions

- [add](#add)

<a id="add"></a>
## add

Adds two numbers

```typescript
add(
  a: number,
  b: number
): number
```

### Parameters

- `a: number` - First
- `b: number` - Second

### Returns

`number`

### Source

[test.ts:3](test.ts#L3)

"#
        );
    }

    #[test]
    fn test_parameter_bullets() {
        let item: DocItem = extract_function(
            &MockFunction::new("greet")
                .param(MockParam::new("name", "string").optional())
                .param(MockParam::new("times", "number").with_default("1")),
        )
        .into();
        assert!(item.as_function().unwrap().parameters[1].def.is_optional);
        let options = RenderOptions {
            include_types: false,
            ..Default::default()
        };
        let md = render_item(&item, &options);
        assert!(md.contains("- `name?`\n"));
        assert!(md.contains("- `times` (default: `1`)\n"));
        assert!(md.contains("greet(\n  name?,\n  times = 1\n): any"));
    }

    #[test]
    fn test_static_readonly_optional_property() {
        let item: DocItem = extract_class(
            &MockClass::new("Holder").property(
                MockProperty::new("value", "string")
                    .as_static()
                    .as_readonly()
                    .optional(),
            ),
        )
        .into();
        let md = render_item(&item, &RenderOptions::default());
        assert!(md.contains("```typescript\nstatic readonly value?: string;\n```"));
        assert!(md.contains("<a id=\"holder-value\"></a>\n#### value\n"));
    }

    #[test]
    fn test_class_sections() {
        let item: DocItem = extract_class(
            &MockClass::new("Counter")
                .constructor(MockFunction::constructor().param(MockParam::new("start", "number")))
                .property(MockProperty::new("count", "number"))
                .method(MockFunction::new("increment").returns("void")),
        )
        .into();
        let md = render_item(&item, &RenderOptions::default());

        let constructors = md.find("### Constructors").unwrap();
        let properties = md.find("### Properties").unwrap();
        let methods = md.find("### Methods").unwrap();
        assert!(constructors < properties && properties < methods);
        assert!(md.contains("##### Parameters\n\n- `start: number`\n"));
        assert!(md.contains("##### Returns\n\n`Counter`\n"));
        assert!(md.contains("##### Returns\n\n`void`\n"));
    }

    #[test]
    fn test_enum_members() {
        let item: DocItem = extract_enum(
            &MockEnum::new("Level")
                .member(MockEnumMember::new("Low").value("1").doc("/** Quiet */"))
                .member(MockEnumMember::new("High")),
        )
        .into();
        let md = render_item(&item, &RenderOptions::default());
        assert!(md.contains("### Members\n\n#### Low\n\nValue: `1`\n\nQuiet\n\n#### High\n\n### Source"));
    }

    #[test]
    fn test_type_alias_text_verbatim() {
        let text = "Record<string, `a|b` & { \"x\": 1 }>";
        let item: DocItem = extract_type_alias(&MockTypeAlias::new("Odd", text)).into();
        let md = format_markdown(&[item], &RenderOptions::default());
        assert!(md.contains(&format!("= {};", text)));
    }

    #[test]
    fn test_sort_by_kind_then_name() {
        let items: Vec<DocItem> = vec![
            extract_function(&MockFunction::new("B")).into(),
            extract_function(&MockFunction::new("a")).into(),
            extract_type_alias(&MockTypeAlias::new("Alias", "string")).into(),
            extract_class(&MockClass::new("Zed")).into(),
            extract_function(&MockFunction::new("A")).into(),
        ];
        let names: Vec<&str> = sort_items(&items).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "A", "a", "B", "Alias"]);

        let again: Vec<&str> = sort_items(&items).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn test_body_order_follows_toc() {
        let items: Vec<DocItem> = vec![
            extract_function(&MockFunction::new("B")).into(),
            extract_function(&MockFunction::new("A")).into(),
            extract_class(
                &MockClass::new("Store")
                    .property(MockProperty::new("size", "number"))
                    .method(MockFunction::new("get")),
            )
            .into(),
        ];
        let md = format_markdown(&items, &RenderOptions::default());

        let (toc, body) = md.split_at(md.find("<a id=").unwrap());
        let links = anchors_in(toc, "](#", ')');
        let ids = anchors_in(body, "<a id=\"", '"');
        assert_eq!(links, vec!["store", "store-size", "store-get", "a", "b"]);
        assert_eq!(ids, links);
    }

    #[test]
    fn test_deterministic() {
        let items = vec![add(), extract_class(&MockClass::new("C")).into()];
        let options = RenderOptions::default();
        assert_eq!(format_markdown(&items, &options), format_markdown(&items, &options));
    }
}
