//! Owned element tree for a generated report definition.

use crate::template::Namespaces;

/// Namespace an element belongs to. Prefixes are resolved at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Report-definition schema, written as the default namespace.
    Report,
    /// Designer extensions (`rd`).
    Designer,
    /// Default font family extension (`df`).
    FontFamily,
    /// Authoring metadata extension (`am`).
    Authoring,
}

impl Namespace {
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Namespace::Report => None,
            Namespace::Designer => Some("rd"),
            Namespace::FontFamily => Some("df"),
            Namespace::Authoring => Some("am"),
        }
    }

    pub fn uri(self, namespaces: &Namespaces) -> &str {
        match self {
            Namespace::Report => &namespaces.report,
            Namespace::Designer => &namespaces.designer,
            Namespace::FontFamily => &namespaces.font_family,
            Namespace::Authoring => &namespaces.authoring,
        }
    }

    /// Prefixed namespaces in the order they are declared on the root.
    pub const DECLARED: [Namespace; 3] = [
        Namespace::FontFamily,
        Namespace::Designer,
        Namespace::Authoring,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub namespace: Namespace,
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self::in_namespace(Namespace::Report, name)
    }

    pub fn in_namespace(namespace: Namespace, name: &'static str) -> Self {
        Self {
            namespace,
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// `<name>text</name>` in the report namespace.
    pub fn text_element(name: &'static str, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    /// Qualified name as written, e.g. `rd:DefaultName`.
    pub fn qualified_name(&self) -> String {
        match self.namespace.prefix() {
            Some(prefix) => format!("{prefix}:{}", self.name),
            None => self.name.to_string(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated direct text content, if any.
    pub fn text(&self) -> Option<String> {
        let mut out = String::new();
        let mut found = false;
        for node in &self.children {
            if let Node::Text(text) = node {
                out.push_str(text);
                found = true;
            }
        }
        found.then_some(out)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First direct child with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements().filter(move |element| element.name == name)
    }

    /// Follow a path of local names through first matching children.
    pub fn path(&self, names: &[&str]) -> Option<&Element> {
        names
            .iter()
            .try_fold(self, |current, name| current.child(name))
    }

    /// All descendants (depth-first, document order) with the given local name.
    pub fn descendants_named(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_named(self, name, &mut found);
        found
    }
}

fn collect_named<'a>(element: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
    for child in element.elements() {
        if child.name == name {
            found.push(child);
        }
        collect_named(child, name, found);
    }
}

/// A complete report definition ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub namespaces: Namespaces,
    pub root: Element,
}

impl Document {
    pub fn new(namespaces: Namespaces, root: Element) -> Self {
        Self { namespaces, root }
    }

    /// The generated table, if present.
    pub fn tablix(&self) -> Option<&Element> {
        self.root
            .path(&["ReportSections", "ReportSection", "Body", "ReportItems"])
            .and_then(|items| items.child("Tablix"))
    }

    /// Names of every textbox in document order.
    pub fn textbox_names(&self) -> Vec<&str> {
        self.root
            .descendants_named("Textbox")
            .into_iter()
            .filter_map(|textbox| textbox.attribute("Name"))
            .collect()
    }
}
