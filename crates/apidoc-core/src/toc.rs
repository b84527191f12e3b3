//! Table of contents
//!
//! Built from the anchored tree: every heading becomes an entry linking to
//! the id the anchor assigner gave it, nested by heading level.

use crate::tree::{walk_elements, Element, Kind, Node};

/// One navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub label: String,
    /// `#id` of the heading, absent for headings that were never anchored
    pub href: Option<String>,
    pub level: u8,
    pub children: Vec<TocEntry>,
}

/// Nested navigation list mirroring the heading hierarchy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOfContents {
    pub entries: Vec<TocEntry>,
}

impl TableOfContents {
    /// Collect headings from an anchored tree
    #[tracing::instrument(skip_all)]
    pub fn from_tree(root: &Element) -> Self {
        let mut flat = Vec::new();
        walk_elements(root, &mut |e| {
            if let Kind::Heading(level) = e.kind {
                flat.push(TocEntry {
                    label: heading_label(e),
                    href: e.id().map(|id| format!("#{}", id)),
                    level: level.number(),
                    children: Vec::new(),
                });
            }
        });
        tracing::debug!(headings = flat.len(), "collected headings");

        Self {
            entries: nest(flat),
        }
    }

    /// Total number of entries at every depth
    pub fn len(&self) -> usize {
        fn count(entries: &[TocEntry]) -> usize {
            entries.iter().map(|e| 1 + count(&e.children)).sum()
        }
        count(&self.entries)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a nested list
    pub fn to_element(&self) -> Element {
        list(&self.entries)
    }
}

fn heading_label(heading: &Element) -> String {
    let text = heading.text_content();
    let label = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !label.is_empty() {
        return label;
    }
    heading
        .anchor_key
        .clone()
        .or_else(|| heading.id().map(str::to_string))
        .unwrap_or_default()
}

/// Nest a flat, document-ordered list under the nearest preceding lower level
fn nest(flat: Vec<TocEntry>) -> Vec<TocEntry> {
    let mut roots: Vec<TocEntry> = Vec::new();
    let mut stack: Vec<TocEntry> = Vec::new();

    for entry in flat {
        while stack.last().is_some_and(|top| top.level >= entry.level) {
            close_top(&mut stack, &mut roots);
        }
        stack.push(entry);
    }
    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

fn close_top(stack: &mut Vec<TocEntry>, roots: &mut Vec<TocEntry>) {
    if let Some(done) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(done),
            None => roots.push(done),
        }
    }
}

fn list(entries: &[TocEntry]) -> Element {
    let mut ul = Element::new(Kind::List);
    for entry in entries {
        let class = format!("h{}", entry.level);
        let mut li = Element::new(Kind::ListItem).with_class(&class);
        match &entry.href {
            Some(href) => li.push(Element::link(href.as_str(), entry.label.as_str())),
            None => li.push(Node::text(entry.label.as_str())),
        }
        if !entry.children.is_empty() {
            li.push(list(&entry.children));
        }
        ul.push(li);
    }
    ul
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::assign_ids;
    use crate::tree::HeadingLevel;

    fn anchored(mut root: Element) -> Element {
        assign_ids(&mut root).unwrap();
        root
    }

    fn labels(entries: &[TocEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn test_nesting_by_level() {
        let root = anchored(
            Element::new(Kind::Article)
                .with_child(Element::heading(HeadingLevel::H1, "Package stack", "pkg-top"))
                .with_child(Element::heading(HeadingLevel::H2, "func New", "New"))
                .with_child(Element::heading(HeadingLevel::H2, "type Stack", "Stack"))
                .with_child(Element::heading(HeadingLevel::H3, "func Push", "Push"))
                .with_child(Element::heading(HeadingLevel::H3, "func Pop", "Pop")),
        );

        let toc = TableOfContents::from_tree(&root);
        assert_eq!(toc.len(), 5);
        assert_eq!(labels(&toc.entries), vec!["Package stack"]);

        let top = &toc.entries[0].children;
        assert_eq!(labels(top), vec!["func New", "type Stack"]);
        assert_eq!(labels(&top[1].children), vec!["func Push", "func Pop"]);
        assert_eq!(top[1].children[0].href.as_deref(), Some("#Push"));
    }

    #[test]
    fn test_orphan_headings_are_roots() {
        let root = anchored(
            Element::new(Kind::Article)
                .with_child(Element::heading(HeadingLevel::H3, "deep", "deep"))
                .with_child(Element::heading(HeadingLevel::H2, "mid", "mid")),
        );
        let toc = TableOfContents::from_tree(&root);
        assert_eq!(labels(&toc.entries), vec!["deep", "mid"]);
    }

    #[test]
    fn test_href_reuses_assigned_id() {
        let mut heading = Element::heading(HeadingLevel::H2, "type Stack", "Stack");
        heading.set_attr("id", "custom");
        let root = Element::new(Kind::Article).with_child(heading);

        let toc = TableOfContents::from_tree(&root);
        assert_eq!(toc.entries[0].href.as_deref(), Some("#custom"));
    }

    #[test]
    fn test_empty_heading_uses_anchor_key() {
        let root = anchored(
            Element::new(Kind::Article)
                .with_child(Element::new(Kind::Heading(HeadingLevel::H2)).with_anchor_key("Anon")),
        );
        let toc = TableOfContents::from_tree(&root);
        assert_eq!(toc.entries[0].label, "Anon");
        assert_eq!(toc.entries[0].href.as_deref(), Some("#Anon"));
    }

    #[test]
    fn test_unanchored_heading_has_no_link() {
        let root = Element::new(Kind::Article)
            .with_child(Element::new(Kind::Heading(HeadingLevel::H2)).with_text("Notes"));
        let toc = TableOfContents::from_tree(&root);
        assert_eq!(toc.entries[0].href, None);

        let ul = toc.to_element();
        let li = ul.child_elements().next().unwrap();
        assert!(li.child_elements().next().is_none());
        assert_eq!(li.text_content(), "Notes");
    }
}
