//! Generic XML element tree plus the parse/serialize boundary.
//!
//! The tree is deliberately schema-agnostic: it knows elements, attributes
//! and text, nothing about Kodi. Readers walk it, writers build it.

mod parse;
mod write;

pub use parse::parse;
pub use write::{serialize, SerializeOptions, XML_DECLARATION};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Leaf element holding `text` (an empty string still yields a leaf)
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        let text = text.into();
        if !text.is_empty() {
            element.children.push(Node::Text(text));
        }
        element
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of this element and all of its descendants
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// All descendant elements named `name` in document order, self excluded
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    pub fn first_descendant(&self, name: &str) -> Option<&Element> {
        self.child_elements().find_map(|child| {
            if child.name == name {
                Some(child)
            } else {
                child.first_descendant(name)
            }
        })
    }

    /// Whether the element has element children (as opposed to text only)
    pub fn has_child_elements(&self) -> bool {
        self.child_elements().next().is_some()
    }
}

/// A parsed document: exactly one root element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTree {
    pub root: Element,
}

impl ElementTree {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Every element named `name` in the document, root included
    pub fn elements_by_tag_name(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        if self.root.name == name {
            found.push(&self.root);
        }
        self.root.collect_descendants(name, &mut found);
        found
    }

    /// First element named `name` in document order
    pub fn first_element(&self, name: &str) -> Option<&Element> {
        if self.root.name == name {
            Some(&self.root)
        } else {
            self.root.first_descendant(name)
        }
    }

    /// Text of the first element named `name`
    pub fn first_text(&self, name: &str) -> Option<String> {
        self.first_element(name).map(Element::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ElementTree {
        let mut actor = Element::new("actor");
        actor.push_child(Element::with_text("name", "Keanu Reeves"));
        actor.push_child(Element::with_text("thumb", "http://img/keanu.jpg"));

        let mut root = Element::new("movie");
        root.push_child(Element::with_text("title", "The Matrix"));
        root.push_child(actor);
        root.push_child(Element::with_text("thumb", "http://img/poster.jpg").with_attribute("preview", "p.jpg"));
        ElementTree::new(root)
    }

    #[test]
    fn test_descendants_in_document_order() {
        let tree = sample();
        let thumbs = tree.elements_by_tag_name("thumb");
        assert_eq!(thumbs.len(), 2);
        assert_eq!(thumbs[0].text(), "http://img/keanu.jpg");
        assert_eq!(thumbs[1].attribute("preview"), Some("p.jpg"));
    }

    #[test]
    fn test_text_is_deep() {
        let tree = sample();
        let actor = tree.first_element("actor").unwrap();
        assert_eq!(actor.text(), "Keanu Reeveshttp://img/keanu.jpg");
        assert_eq!(tree.first_text("title").as_deref(), Some("The Matrix"));
        assert_eq!(tree.first_text("plot"), None);
    }

    #[test]
    fn test_root_is_searched() {
        let tree = sample();
        assert_eq!(tree.elements_by_tag_name("movie").len(), 1);
        assert!(tree.root.descendants("movie").is_empty());
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut element = Element::new("rating").with_attribute("name", "imdb");
        element.set_attribute("name", "tmdb");
        assert_eq!(element.attributes.len(), 1);
        assert_eq!(element.attribute("name"), Some("tmdb"));
    }
}
