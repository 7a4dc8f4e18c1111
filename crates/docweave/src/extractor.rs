//! Documentation extraction for a whole source file

use crate::class::extract_class;
use crate::function::extract_function;
use crate::interface::extract_interface;
use crate::node::DocItem;
use crate::r#enum::extract_enum;
use crate::syntax::SourceFileNode;
use crate::type_alias::extract_type_alias;

/// Extract every top-level declaration of a source file.
///
/// Items come out grouped by kind (functions, classes, interfaces, enums,
/// type aliases), each group in file order. Only the first documentation
/// block of a declaration is used. Never fails.
pub fn extract_documentation<F: SourceFileNode>(file: &F) -> Vec<DocItem> {
    let mut items: Vec<DocItem> = Vec::new();

    items.extend(file.functions().iter().map(|f| DocItem::from(extract_function(f))));
    items.extend(file.classes().iter().map(|c| DocItem::from(extract_class(c))));
    items.extend(file.interfaces().iter().map(|i| DocItem::from(extract_interface(i))));
    items.extend(file.enums().iter().map(|e| DocItem::from(extract_enum(e))));
    items.extend(file.type_aliases().iter().map(|t| DocItem::from(extract_type_alias(t))));

    tracing::debug!(file = %file.file_path(), items = items.len(), "extracted documentation");
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::DocKind;
    use crate::test::{MockClass, MockEnum, MockFunction, MockInterface, MockSourceFile, MockTypeAlias};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file() {
        assert!(extract_documentation(&MockSourceFile::new("empty.ts")).is_empty());
    }

    #[test]
    fn test_kind_group_order() {
        let file = MockSourceFile::new("mixed.ts")
            .type_alias(MockTypeAlias::new("Id", "string").at(1))
            .enum_(MockEnum::new("Mode").at(2))
            .interface(MockInterface::new("Shape").at(3))
            .class(MockClass::new("Circle").at(4))
            .function(MockFunction::new("area").returns("number").at(5))
            .function(MockFunction::new("perimeter").returns("number").at(9));

        let items = extract_documentation(&file);
        let summary: Vec<_> = items.iter().map(|i| (i.kind(), i.name.as_str())).collect();
        assert_eq!(
            summary,
            vec![
                (DocKind::Function, "area"),
                (DocKind::Function, "perimeter"),
                (DocKind::Class, "Circle"),
                (DocKind::Interface, "Shape"),
                (DocKind::Enum, "Mode"),
                (DocKind::TypeAlias, "Id"),
            ]
        );
    }

    #[test]
    fn test_undocumented_items_have_no_js_doc() {
        let file = MockSourceFile::new("plain.ts").function(MockFunction::new("f").returns("void"));
        let items = extract_documentation(&file);
        assert_eq!(items[0].js_doc, None);
        assert_eq!(items[0].description, None);
    }
}
