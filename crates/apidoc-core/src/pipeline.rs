//! Staged render pipeline
//!
//! Each stage is its own type and each transition consumes the previous
//! stage, so the order `build → anchor → link → index → render` is enforced
//! by the compiler. Nothing escapes a render before [`RenderedDocument`].

use std::io::Write;

use rayon::prelude::*;

use crate::anchor;
use crate::builder;
use crate::config::RenderConfig;
use crate::crosslink::CrossLinker;
use crate::error::{RenderError, Result};
use crate::html;
use crate::model::Package;
use crate::toc::TableOfContents;
use crate::tree::Element;

/// Source of symbol models, implemented outside the core
pub trait SourceInspector {
    /// Produce the symbol model for a package identifier
    fn inspect(&self, package: &str)
        -> std::result::Result<Package, Box<dyn std::error::Error + Send + Sync>>;
}

/// Tree assembled from the model, no ids yet
#[derive(Debug)]
pub struct Built<'m> {
    package: &'m Package,
    tree: Element,
}

/// Every anchor-bearing node has its id
#[derive(Debug)]
pub struct Anchored<'m> {
    package: &'m Package,
    tree: Element,
}

/// Type names in code blocks link to their definitions
#[derive(Debug)]
pub struct Linked<'m> {
    package: &'m Package,
    tree: Element,
}

/// Table of contents collected
#[derive(Debug)]
pub struct Indexed<'m> {
    package: &'m Package,
    tree: Element,
    toc: TableOfContents,
}

impl<'m> Built<'m> {
    /// Build the document tree for `package`
    #[tracing::instrument(skip_all, fields(package = %package.name))]
    pub fn new(package: &'m Package) -> Result<Self> {
        let tree = builder::build(package)?;
        tracing::debug!(
            funcs = package.funcs.len(),
            types = package.types.len(),
            "built document tree"
        );
        Ok(Self { package, tree })
    }

    /// Assign ids to every anchor-bearing node
    pub fn anchor(mut self) -> Result<Anchored<'m>> {
        anchor::assign_ids(&mut self.tree)?;
        Ok(Anchored {
            package: self.package,
            tree: self.tree,
        })
    }
}

impl<'m> Anchored<'m> {
    /// Link type names inside code blocks
    pub fn link(mut self) -> Linked<'m> {
        CrossLinker::for_package(self.package).link_tree(&mut self.tree);
        Linked {
            package: self.package,
            tree: self.tree,
        }
    }

    /// The anchored tree
    pub fn tree(&self) -> &Element {
        &self.tree
    }
}

impl<'m> Linked<'m> {
    /// Collect the table of contents
    pub fn index(self) -> Indexed<'m> {
        let toc = TableOfContents::from_tree(&self.tree);
        Indexed {
            package: self.package,
            tree: self.tree,
            toc,
        }
    }
}

impl Indexed<'_> {
    pub fn toc(&self) -> &TableOfContents {
        &self.toc
    }

    pub fn tree(&self) -> &Element {
        &self.tree
    }

    /// Serialize the page; the tree is dropped here
    pub fn render(self, config: &RenderConfig) -> RenderedDocument {
        let html = html::render_page(&self.package.name, &self.toc, &self.tree, config);
        RenderedDocument {
            package: self.package.name.clone(),
            html,
        }
    }
}

/// Final, immutable output of a render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    package: String,
    html: String,
}

impl RenderedDocument {
    /// Name of the rendered package
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.html.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Write the document to a sink, returning the number of bytes written
    ///
    /// Failures are returned as-is; there is no retry.
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<usize> {
        sink.write_all(self.as_bytes())?;
        sink.flush()?;
        Ok(self.html.len())
    }
}

/// Render a package through every stage
#[tracing::instrument(skip_all, fields(package = %package.name))]
pub fn generate(package: &Package, config: &RenderConfig) -> Result<RenderedDocument> {
    let document = Built::new(package)?.anchor()?.link().index();
    tracing::debug!(toc_entries = document.toc().len(), "indexed document");
    Ok(document.render(config))
}

/// Resolve a package through an inspector, then render it
///
/// An inspector failure is returned as [`RenderError::Unresolvable`] and
/// nothing is rendered.
pub fn generate_from(
    inspector: &dyn SourceInspector,
    package: &str,
    config: &RenderConfig,
) -> Result<RenderedDocument> {
    let model = inspector
        .inspect(package)
        .map_err(|source| RenderError::Unresolvable {
            package: package.to_string(),
            source,
        })?;
    generate(&model, config)
}

/// Render several packages in parallel
///
/// Each render is independent; results keep the input order.
pub fn render_all(packages: &[Package], config: &RenderConfig) -> Vec<Result<RenderedDocument>> {
    packages
        .par_iter()
        .map(|package| generate(package, config))
        .collect()
}
