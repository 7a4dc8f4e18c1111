//! Table of contents

use super::slug::{item_anchor, member_anchor};
use crate::config::RenderOptions;
use crate::node::{DocItem, DocKind};
use indexmap::IndexMap;

/// Heading every rendered document starts with
pub const TOC_HEADING: &str = "# Table of Contents";

/// Render the table of contents for already sorted items.
///
/// Items are grouped by kind in the order they arrive; kinds without items
/// get no heading. With `toc_depth > 1` classes and interfaces also list
/// their properties and methods.
pub fn render_toc(items: &[&DocItem], options: &RenderOptions) -> String {
    let mut md = String::new();
    md.push_str(TOC_HEADING);
    md.push_str("\n\n");

    for (kind, group) in group_by_kind(items) {
        md.push_str(&format!("## {}\n\n", kind.group_title()));
        for item in group {
            md.push_str(&format!("- [{}](#{})\n", item.name, item_anchor(&item.name)));
            if options.lists_members() {
                render_members(&mut md, item);
            }
        }
        md.push('\n');
    }

    md
}

fn group_by_kind<'a>(items: &[&'a DocItem]) -> IndexMap<DocKind, Vec<&'a DocItem>> {
    let mut groups: IndexMap<DocKind, Vec<&'a DocItem>> = IndexMap::new();
    for item in items {
        groups.entry(item.kind()).or_default().push(*item);
    }
    groups
}

fn render_members(md: &mut String, item: &DocItem) {
    let (properties, methods): (Vec<&str>, Vec<&str>) = if let Some(class) = item.as_class() {
        (
            class.properties.iter().map(|p| p.name.as_str()).collect(),
            class.methods.iter().map(|m| m.name.as_str()).collect(),
        )
    } else if let Some(interface) = item.as_interface() {
        (
            interface.properties.iter().map(|p| p.name.as_str()).collect(),
            interface.methods.iter().map(|m| m.name.as_str()).collect(),
        )
    } else {
        return;
    };

    for (title, names) in [("Properties", properties), ("Methods", methods)] {
        if names.is_empty() {
            continue;
        }
        md.push_str(&format!("  - {}\n", title));
        for name in names {
            md.push_str(&format!(
                "    - [{}](#{})\n",
                name,
                member_anchor(&item.name, name)
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::extract_class;
    use crate::function::extract_function;
    use crate::test::{MockClass, MockFunction, MockProperty};
    use pretty_assertions::assert_eq;

    fn counter() -> DocItem {
        extract_class(
            &MockClass::new("Counter")
                .property(MockProperty::new("count", "number"))
                .method(MockFunction::new("increment").returns("void"))
                .constructor(MockFunction::constructor()),
        )
        .into()
    }

    #[test]
    fn test_empty_toc() {
        assert_eq!(render_toc(&[], &RenderOptions::default()), "# Table of Contents\n\n");
    }

    #[test]
    fn test_toc_with_members() {
        let class = counter();
        let add: DocItem = extract_function(&MockFunction::new("add")).into();

        let toc = render_toc(&[&class, &add], &RenderOptions::default());
        assert_eq!(
            toc,
            "# Table of Contents\n\
             \n\
             ## Classes\n\
             \n\
             - [Counter](#counter)\n  \
             - Properties\n    \
             - [count](#counter-count)\n  \
             - Methods\n    \
             - [increment](#counter-increment)\n\
             \n\
             ## Functions\n\
             \n\
             - [add](#add)\n\
             \n"
        );
    }

    #[test]
    fn test_toc_depth_one_lists_items_only() {
        let class = counter();
        let options = RenderOptions {
            toc_depth: 1,
            ..Default::default()
        };
        let toc = render_toc(&[&class], &options);
        assert!(toc.contains("- [Counter](#counter)\n"));
        assert!(!toc.contains("Properties"));
        assert!(!toc.contains("#counter-count"));
    }

    #[test]
    fn test_member_group_omitted_when_empty() {
        let class: DocItem = extract_class(
            &MockClass::new("Bag").property(MockProperty::new("size", "number")),
        )
        .into();
        let toc = render_toc(&[&class], &RenderOptions::default());
        assert!(toc.contains("  - Properties\n"));
        assert!(!toc.contains("Methods"));
    }
}
