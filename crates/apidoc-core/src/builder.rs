//! Document tree construction
//!
//! Lays out one package as an article: title, import line, quick links,
//! overview, index and the per-symbol documentation. Functions, types and
//! methods appear exactly in model order; only the examples index is sorted.

use crate::comment;
use crate::error::{RenderError, Result};
use crate::examples::{self, IndexedExample};
use crate::model::{Func, Package, Type};
use crate::tree::{Element, HeadingLevel, Kind, Node};

/// Anchor of the package title
pub const TOP_ANCHOR: &str = "pkg-top";
/// Anchor of the overview section
pub const OVERVIEW_ANCHOR: &str = "pkg-overview";
/// Anchor of the index section
pub const INDEX_ANCHOR: &str = "pkg-index";
/// Anchor of the examples index
pub const EXAMPLES_ANCHOR: &str = "pkg-examples";

/// Build the document tree for a package
pub fn build(package: &Package) -> Result<Element> {
    validate_names(package)?;
    let examples_index = examples::index(package)?;

    let mut article = Element::new(Kind::Article).with_child(Element::heading(
        HeadingLevel::H1,
        format!("Package {}", package.name),
        TOP_ANCHOR,
    ));
    if !package.import_path.is_empty() {
        article.push(
            Element::new(Kind::DefinitionList).with_child(
                Element::new(Kind::Definition)
                    .with_text(format!("import \"{}\"", package.import_path)),
            ),
        );
    }
    article.push(quick_links(!examples_index.is_empty()));

    article.push(overview_section(package));
    article.push(index_section(package, &examples_index));
    article.push(documentation_section(package));

    Ok(article)
}

fn validate_names(package: &Package) -> Result<()> {
    if package.name.is_empty() {
        return Err(RenderError::EmptyName("package"));
    }
    if package.funcs.iter().any(|f| f.name.is_empty()) {
        return Err(RenderError::EmptyName("function"));
    }
    for ty in &package.types {
        if ty.name.is_empty() {
            return Err(RenderError::EmptyName("type"));
        }
        if ty.constructors.iter().any(|f| f.name.is_empty()) {
            return Err(RenderError::EmptyName("constructor"));
        }
        if ty.methods.iter().any(|f| f.name.is_empty()) {
            return Err(RenderError::EmptyName("method"));
        }
    }
    Ok(())
}

fn quick_links(has_examples: bool) -> Element {
    let mut dl = Element::new(Kind::DefinitionList)
        .with_class("quick-links")
        .with_child(definition(Element::link(format!("#{}", OVERVIEW_ANCHOR), "Overview")))
        .with_child(definition(Element::link(format!("#{}", INDEX_ANCHOR), "Index")));
    if has_examples {
        dl.push(definition(Element::link(format!("#{}", EXAMPLES_ANCHOR), "Examples")));
    }
    dl
}

fn definition(content: Element) -> Element {
    Element::new(Kind::Definition).with_child(content)
}

fn overview_section(package: &Package) -> Element {
    Element::new(Kind::Section)
        .with_class("overview")
        .with_child(Element::heading(HeadingLevel::H2, "Overview", OVERVIEW_ANCHOR))
        .with_children(comment::render(&package.doc))
        .with_children(examples::render_all(&package.examples))
}

fn index_section(package: &Package, examples_index: &[IndexedExample<'_>]) -> Element {
    let mut dl = Element::new(Kind::DefinitionList);
    for func in &package.funcs {
        dl.push(definition(symbol_link(&func.name, func.signature())));
    }
    for ty in &package.types {
        dl.push(definition(symbol_link(&ty.name, &format!("type {}", ty.name))));
        for func in ty.constructors.iter().chain(&ty.methods) {
            dl.push(definition(symbol_link(&func.name, func.signature())).with_class("method"));
        }
    }

    let mut section = Element::new(Kind::Section)
        .with_class("index")
        .with_child(Element::heading(HeadingLevel::H2, "Index", INDEX_ANCHOR))
        .with_child(dl);

    if !examples_index.is_empty() {
        let listing = examples_index.iter().map(|entry| {
            Node::from(definition(Element::link(
                format!("#{}", entry.anchor_key),
                entry.display_name.as_str(),
            )))
        });
        section.push(
            Element::new(Kind::Section)
                .with_class("examples-index")
                .with_child(Element::heading(HeadingLevel::H3, "Examples", EXAMPLES_ANCHOR))
                .with_child(Element::new(Kind::DefinitionList).with_children(listing)),
        );
    }

    section
}

fn symbol_link(name: &str, label: &str) -> Element {
    Element::link(format!("#{}", name), label)
}

fn documentation_section(package: &Package) -> Element {
    let mut section = Element::new(Kind::Section).with_class("documentation");
    for func in &package.funcs {
        section.push(func_block(func, HeadingLevel::H2));
    }
    for ty in &package.types {
        section.push(type_block(ty));
    }
    section
}

fn func_block(func: &Func, level: HeadingLevel) -> Element {
    Element::new(Kind::Section)
        .with_class("func")
        .with_child(Element::heading(level, format!("func {}", func.name), func.name.as_str()))
        .with_children(decl_block(&func.decl))
        .with_children(comment::render(&func.doc))
        .with_children(examples::render_all(&func.examples))
}

fn type_block(ty: &Type) -> Element {
    let mut block = Element::new(Kind::Section)
        .with_class("type")
        .with_child(Element::heading(
            HeadingLevel::H2,
            format!("type {}", ty.name),
            ty.name.as_str(),
        ))
        .with_children(comment::render(&ty.doc))
        .with_children(decl_block(&ty.decl))
        .with_children(examples::render_all(&ty.examples));

    for func in ty.constructors.iter().chain(&ty.methods) {
        block.push(func_block(func, HeadingLevel::H3));
    }
    block
}

/// Declaration shown verbatim, omitted when the model has none
fn decl_block(decl: &str) -> Option<Node> {
    (!decl.is_empty()).then(|| Element::code_block(decl).into())
}
