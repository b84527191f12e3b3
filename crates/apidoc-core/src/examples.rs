//! Example naming, ordering and rendering

use std::collections::HashSet;

use crate::error::{RenderError, Result};
use crate::model::{Example, Package};
use crate::tree::{Element, Kind, Node};

/// Display name used for examples that belong to the package itself
pub const PACKAGE_DISPLAY_NAME: &str = "Package";

/// Display name of an example, as shown in the examples index
///
/// `"Package"` for the package's primary example, otherwise the owner name
/// with an optional `" (Suffix)"`.
pub fn display_name(example: &Example) -> String {
    let owner = if example.owner.is_empty() {
        PACKAGE_DISPLAY_NAME
    } else {
        example.owner.as_str()
    };
    match display_suffix(&example.suffix) {
        Some(suffix) => format!("{} ({})", owner, suffix),
        None => owner.to_string(),
    }
}

/// Anchor key of an example: owner + `_` + suffix
pub fn anchor_key(example: &Example) -> String {
    format!("{}_{}", example.owner, example.suffix)
}

/// Title shown above the example source
pub fn title(example: &Example) -> String {
    match display_suffix(&example.suffix) {
        Some(suffix) => format!("Example ({})", suffix),
        None => "Example".to_string(),
    }
}

fn display_suffix(suffix: &str) -> Option<String> {
    let mut chars = suffix.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

/// An example together with its derived names
#[derive(Debug, Clone)]
pub struct IndexedExample<'a> {
    pub example: &'a Example,
    pub display_name: String,
    pub anchor_key: String,
}

/// Collect every example in the package, sorted for the examples index
///
/// Fails on the first owner+suffix pair seen twice.
pub fn index(package: &Package) -> Result<Vec<IndexedExample<'_>>> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for example in package.all_examples() {
        let key = anchor_key(example);
        if !seen.insert(key.clone()) {
            return Err(RenderError::DuplicateExample(key));
        }
        entries.push(IndexedExample {
            example,
            display_name: display_name(example),
            anchor_key: key,
        });
    }

    entries.sort_by(|a, b| {
        a.display_name
            .cmp(&b.display_name)
            .then_with(|| a.anchor_key.cmp(&b.anchor_key))
    });
    Ok(entries)
}

/// Render one example: anchor, title, source and, when present, expected output
pub fn render(example: &Example) -> Element {
    let mut block = Element::new(Kind::Section)
        .with_class("example")
        .with_child(Element::anchor(anchor_key(example)))
        .with_child(Element::label("example-title", title(example)))
        .with_child(Element::label("caption", "Code:"))
        .with_child(Element::code_block(example.code.as_str()));

    if !example.output.is_empty() {
        block.push(Element::label("caption", "Output:"));
        block.push(Element::code_block(example.output.as_str()));
    }

    block
}

/// Render a list of examples in declaration order
pub fn render_all(examples: &[Example]) -> impl Iterator<Item = Node> + '_ {
    examples.iter().map(|e| render(e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Func, Type};

    #[test]
    fn test_display_names() {
        assert_eq!(display_name(&Example::new("", "")), "Package");
        assert_eq!(display_name(&Example::new("New", "")), "New");
        assert_eq!(display_name(&Example::new("Stack", "").with_suffix("basic")), "Stack (Basic)");
        assert_eq!(display_name(&Example::new("", "").with_suffix("tour")), "Package (Tour)");
    }

    #[test]
    fn test_anchor_keys() {
        assert_eq!(anchor_key(&Example::new("", "")), "_");
        assert_eq!(anchor_key(&Example::new("Stack", "").with_suffix("basic")), "Stack_basic");
        assert_eq!(anchor_key(&Example::new("", "").with_suffix("tour")), "_tour");
    }

    #[test]
    fn test_index_sorted_by_display_name() {
        let pkg = Package::new("greek", "example.com/greek")
            .with_func(Func::new("Zeta", "func Zeta()").with_example(Example::new("Zeta", "z")))
            .with_func(Func::new("Alpha", "func Alpha()").with_example(Example::new("Alpha", "a")));

        let names: Vec<_> = index(&pkg).unwrap().into_iter().map(|e| e.display_name).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let pkg = Package::new("dup", "example.com/dup").with_type(
            Type::new("T", "type T int")
                .with_example(Example::new("T", "one"))
                .with_example(Example::new("T", "two")),
        );

        match index(&pkg) {
            Err(RenderError::DuplicateExample(key)) => assert_eq!(key, "T_"),
            other => panic!("expected duplicate example error, got {:?}", other),
        }
    }

    #[test]
    fn test_output_section_only_when_present() {
        let silent = render(&Example::new("", "fmt.Println()"));
        assert!(!silent.text_content().contains("Output:"));

        let loud = render(&Example::new("", "fmt.Println(1)").with_output("1"));
        let text = loud.text_content();
        assert!(text.contains("Output:"));
        assert!(text.ends_with("Output:1"));

        let blank = render(&Example::new("", "fmt.Print(\" \")").with_output(" "));
        let text = blank.text_content();
        assert!(text.ends_with("Output: "));
        assert_eq!(blank.child_elements().filter(|e| e.kind == Kind::CodeBlock).count(), 2);
    }

    #[test]
    fn test_render_carries_anchor_key() {
        let block = render(&Example::new("New", "x").with_suffix("empty"));
        let anchor = block.child_elements().next().unwrap();
        assert_eq!(anchor.kind, Kind::Anchor);
        assert_eq!(anchor.anchor_key.as_deref(), Some("New_empty"));
    }
}
