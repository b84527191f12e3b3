//! Cross-linking for documentation
//!
//! Type names appearing inside code blocks are wrapped in links to the
//! type's anchor. Only whole identifier tokens match; text inside string,
//! rune and raw-string literals and text already inside a link is left
//! alone. An apostrophe that does not close a rune literal is plain text.

use std::collections::HashMap;

use crate::model::Package;
use crate::tree::{Element, Kind, Node};

/// Cross-linker for resolving type references to links
#[derive(Debug, Clone, Default)]
pub struct CrossLinker {
    /// Type name -> href
    targets: HashMap<String, String>,
}

impl CrossLinker {
    /// Create a linker for every type declared in the package
    pub fn for_package(package: &Package) -> Self {
        Self::new(package.types.iter().map(|t| t.name.as_str()))
    }

    /// Create a linker for the given type names, each linking to `#name`
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let targets = names
            .into_iter()
            .map(|name| (name.to_string(), format!("#{}", name)))
            .collect();
        Self { targets }
    }

    /// Link every code block in the tree, returning the number of links added
    #[tracing::instrument(skip_all, fields(targets = self.targets.len()))]
    pub fn link_tree(&self, root: &mut Element) -> usize {
        let count = self.link_element(root, false);
        tracing::debug!(count, "added cross-reference links");
        count
    }

    fn link_element(&self, element: &mut Element, in_code: bool) -> usize {
        if element.kind == Kind::Link {
            return 0;
        }
        let in_code = in_code || element.kind == Kind::CodeBlock;

        let mut count = 0;
        let children = std::mem::take(&mut element.children);
        for child in children {
            match child {
                Node::Text(text) if in_code => {
                    let (nodes, links) = self.link_text(&text);
                    count += links;
                    element.children.extend(nodes);
                }
                Node::Element(mut child) => {
                    count += self.link_element(&mut child, in_code);
                    element.children.push(child.into());
                }
                text @ Node::Text(_) => element.children.push(text),
            }
        }
        count
    }

    /// Split a run of code text into text and link nodes
    pub fn link_text(&self, text: &str) -> (Vec<Node>, usize) {
        let mut nodes = Vec::new();
        let mut links = 0;
        let mut last = 0;
        let mut quote: Option<char> = None;
        let mut chars = text.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if let Some(q) = quote {
                if c == q || (c == '\n' && q != '`') {
                    quote = None;
                } else if c == '\\' && q != '`' {
                    chars.next();
                }
                continue;
            }

            if matches!(c, '"' | '`') {
                quote = Some(c);
                continue;
            }
            if c == '\'' {
                // A lone apostrophe (prose, lifetimes) is an ordinary character
                if let Some(len) = rune_literal_len(&text[start + 1..]) {
                    let end = start + 1 + len;
                    while chars.peek().is_some_and(|&(i, _)| i < end) {
                        chars.next();
                    }
                }
                continue;
            }
            if !is_word_char(c) {
                continue;
            }

            // Maximal run of word characters
            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if !is_word_char(next) {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }

            let token = &text[start..end];
            if !is_ident_start(c) {
                continue;
            }
            if let Some(href) = self.targets.get(token) {
                if start > last {
                    nodes.push(Node::text(&text[last..start]));
                }
                nodes.push(
                    Element::link(href.as_str(), token)
                        .with_class("type-link")
                        .into(),
                );
                last = end;
                links += 1;
            }
        }

        if last < text.len() || nodes.is_empty() {
            nodes.push(Node::text(&text[last..]));
        }
        (nodes, links)
    }
}

/// Length of a complete rune literal's body and closing quote, if `rest` starts one
///
/// `rest` begins just after the opening `'`. Accepts `x'` and `\…'` on a
/// single line.
fn rune_literal_len(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    match chars.next()? {
        (_, '\\') => {
            chars.next()?;
            chars
                .take_while(|&(_, c)| c != '\n')
                .find(|&(_, c)| c == '\'')
                .map(|(i, _)| i + 1)
        }
        (_, '\'' | '\n') => None,
        (_, _) => match chars.next()? {
            (i, '\'') => Some(i + 1),
            _ => None,
        },
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
