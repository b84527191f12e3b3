//! apidoc core - renders a package symbol model into a linked HTML document
//!
//! This crate provides the rendering pipeline:
//! - Model: the read-only description of a package's exported API
//! - Comment: doc-comment to paragraph/code-block conversion
//! - Builder: document tree assembly (overview, index, per-symbol docs)
//! - Anchor: unique id assignment
//! - Crosslink: type name linking inside code blocks
//! - TOC: navigation list built from headings
//! - HTML: serialization and the page shell
//!
//! The crate never touches the filesystem. Symbol models come from a
//! [`SourceInspector`] supplied by the caller, and the rendered document is
//! handed back as a [`RenderedDocument`].

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Symbol model - packages, functions, types and examples
pub mod model;

/// Document tree - tagged nodes, attributes and walkers
pub mod tree;

/// Doc-comment rendering
pub mod comment;

/// Example naming, ordering and rendering
pub mod examples;

/// Document tree construction
pub mod builder;

/// Anchor id assignment
pub mod anchor;

/// Cross-reference linking in code blocks
pub mod crosslink;

/// Table of contents
pub mod toc;

/// HTML serialization and page shell
pub mod html;

/// Render configuration
pub mod config;

/// Staged render pipeline
pub mod pipeline;

mod error;

pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use model::{Example, Func, Package, Type};
pub use pipeline::{generate, generate_from, render_all, RenderedDocument, SourceInspector};
