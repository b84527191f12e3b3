//! Document tree
//!
//! The tree is built once per render and mutated in place by the later
//! stages: the anchor assigner adds `id` attributes and the cross-linker
//! wraps text spans in links. Walkers match on [`Kind`] rather than on tag
//! names.

/// Heading levels recognized by the table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric level, 1 through 3
    pub fn number(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// Kind discriminator of an element node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Article,
    Section,
    Nav,
    Heading(HeadingLevel),
    Paragraph,
    /// Preformatted text: declarations, example sources, indented doc blocks
    CodeBlock,
    DefinitionList,
    Definition,
    List,
    ListItem,
    Link,
    /// Jump target with no content of its own
    Anchor,
    /// Short inline caption such as "Output:"
    Label,
}

impl Kind {
    /// HTML tag used when serializing this kind
    pub fn tag(self) -> &'static str {
        match self {
            Kind::Article => "article",
            Kind::Section => "section",
            Kind::Nav => "nav",
            Kind::Heading(HeadingLevel::H1) => "h1",
            Kind::Heading(HeadingLevel::H2) => "h2",
            Kind::Heading(HeadingLevel::H3) => "h3",
            Kind::Paragraph => "p",
            Kind::CodeBlock => "pre",
            Kind::DefinitionList => "dl",
            Kind::Definition => "dd",
            Kind::List => "ul",
            Kind::ListItem => "li",
            Kind::Link | Kind::Anchor => "a",
            Kind::Label => "span",
        }
    }
}

/// A node: either an element or literal text
///
/// Text is stored unescaped; escaping happens once, at serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Borrow the element, if this is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: Kind,
    attrs: Vec<(String, String)>,
    /// Identifier this node should receive from the anchor assigner
    pub anchor_key: Option<String>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            attrs: Vec::new(),
            anchor_key: None,
            children: Vec::new(),
        }
    }

    /// Heading with text content and an anchor key
    pub fn heading(level: HeadingLevel, text: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(Kind::Heading(level))
            .with_text(text)
            .with_anchor_key(key)
    }

    /// Link to `href` with text content
    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Kind::Link).with_attr("href", href).with_text(text)
    }

    /// Empty jump target for `key`
    pub fn anchor(key: impl Into<String>) -> Self {
        Self::new(Kind::Anchor).with_anchor_key(key)
    }

    /// Preformatted block holding `text` verbatim
    pub fn code_block(text: impl Into<String>) -> Self {
        Self::new(Kind::CodeBlock).with_text(text)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(Kind::Paragraph).with_text(text)
    }

    /// Label with a class and text
    pub fn label(class: &str, text: impl Into<String>) -> Self {
        Self::new(Kind::Label).with_class(class).with_text(text)
    }

    /// Set an attribute, builder style
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_anchor_key(mut self, key: impl Into<String>) -> Self {
        self.anchor_key = Some(key.into());
        self
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children, builder style
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::text(text))
    }

    /// Append a child
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Set an attribute, replacing any existing value for `key`
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Look up an attribute value
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The assigned `id`, if any
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Iterate over element children only
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
        }
    }
}

/// Visit every element in pre-order
pub fn walk_elements<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(root);
    for child in root.child_elements() {
        walk_elements(child, visit);
    }
}

/// Visit every element in pre-order with mutable access, stopping at the first error
pub fn try_walk_elements_mut<E>(
    root: &mut Element,
    visit: &mut impl FnMut(&mut Element) -> Result<(), E>,
) -> Result<(), E> {
    visit(root)?;
    for child in &mut root.children {
        if let Node::Element(e) = child {
            try_walk_elements_mut(e, visit)?;
        }
    }
    Ok(())
}
