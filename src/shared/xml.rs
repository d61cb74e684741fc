use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::{self, Write};

/// A node in an XML tree, either a nested element or text content.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// An XML element with attributes and child nodes.
///
/// Attributes keep insertion order; text is escaped when the tree is
/// written out.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn builder<S: Into<String>>(name: S) -> ElementBuilder {
        ElementBuilder {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Shorthand for an element holding a single text node.
    pub fn leaf<S: Into<String>, T: Into<String>>(name: S, text: T) -> Self {
        Self::builder(name).append(text.into()).build()
    }

    fn write_into<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        let mut start = BytesStart::new(&self.name);
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            return writer.write_event(Event::Empty(start));
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_into(writer)?,
                Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(&self.name)))
    }
}

pub struct ElementBuilder {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl ElementBuilder {
    pub fn attr<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn append<N: Into<Node>>(mut self, child: N) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append the child if present, otherwise leave the element as is.
    /// Absent optional fields must not produce empty elements.
    pub fn append_opt<N: Into<Node>>(self, child: Option<N>) -> Self {
        match child {
            Some(child) => self.append(child),
            None => self,
        }
    }

    pub fn append_all<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children
            .extend(children.into_iter().map(|child| child.into()));
        self
    }

    pub fn build(self) -> Element {
        Element {
            name: self.name,
            attributes: self.attributes,
            children: self.children,
        }
    }
}

/// Serialize a tree as a full document: XML declaration, two-space
/// indentation, leaf text kept on one line.
pub fn write_document(root: &Element) -> io::Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    root.write_into(&mut writer)?;
    let buffer = writer.into_inner();
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[test]
fn leaf_stays_on_one_line() {
    let root = Element::builder("Root")
        .append(Element::leaf("Child", "value"))
        .build();
    let document = write_document(&root).unwrap();
    assert!(document.contains("<Child>value</Child>"));
}

#[test]
fn attributes_in_order() {
    let root = Element::builder("Root")
        .attr("version", "2.0")
        .attr("xmlns", "http://example.org")
        .build();
    let document = write_document(&root).unwrap();
    assert!(document.contains(r#"<Root version="2.0" xmlns="http://example.org"/>"#));
}

#[test]
fn text_is_escaped() {
    let root = Element::builder("Root")
        .append(Element::builder("Name").append("Bull Ring & Markets").build())
        .build();
    let document = write_document(&root).unwrap();
    assert!(document.contains("Bull Ring &amp; Markets"));
}

#[test]
fn declaration_comes_first() {
    let root = Element::builder("Root").build();
    let document = write_document(&root).unwrap();
    assert!(document.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
}
