//! Immutable XML document tree
//!
//! Responses are parsed once into an arena of element and text nodes.
//! [`Element`] and [`Node`] are `Copy` handles borrowing the document, so
//! every traversal re-walks the live tree and nothing is cached per call.
//! Whitespace-only text between elements is kept, which is what makes the
//! element/non-element distinction in child traversal observable.

use std::collections::HashMap;
use std::fmt;
use std::ptr;
use std::slice;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{IsbnDbError, Result};

/// Raw attribute mapping of one element
pub type AttributeMap = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
enum NodeKind {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
struct NodeData {
    kind: NodeKind,
    children: Vec<usize>,
}

/// A parsed XML response
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    nodes: Vec<NodeData>,
    root: usize,
}

fn xml_error(err: impl fmt::Display) -> IsbnDbError {
    IsbnDbError::XmlError(err.to_string())
}

impl XmlDocument {
    /// Parse a complete XML document
    ///
    /// Comments, processing instructions and the XML declaration are dropped.
    ///
    /// # Errors
    ///
    /// * `IsbnDbError::XmlError` - If the input is not well-formed or has no root element
    ///
    /// # Example
    ///
    /// ```
    /// use isbndb_client::XmlDocument;
    ///
    /// let doc = XmlDocument::parse(r#"<ISBNdb server_time="2005-07-29T03:02:22"/>"#).unwrap();
    /// assert_eq!(doc.root().name(), "ISBNdb");
    /// ```
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut builder = TreeBuilder::default();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let id = builder.element(e)?;
                    builder.open.push(id);
                }
                Ok(Event::Empty(ref e)) => {
                    builder.element(e)?;
                }
                Ok(Event::End(_)) => {
                    builder.open.pop();
                }
                Ok(Event::Text(ref e)) => {
                    let text = e.unescape().map_err(xml_error)?;
                    builder.text(text.into_owned())?;
                }
                Ok(Event::CData(e)) => {
                    builder.text(String::from_utf8_lossy(&e).into_owned())?;
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(xml_error(e)),
            }
        }

        builder.finish()
    }

    /// The document element
    pub fn root(&self) -> Element<'_> {
        Element {
            document: self,
            id: self.root,
        }
    }

    /// Every element named `name`, in document order, the root included
    pub fn elements_by_tag_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Element<'a>> {
        Descendants {
            document: self,
            stack: vec![self.root],
        }
        .filter(move |element| element.name() == name)
    }

    pub(crate) fn element_by_id(&self, id: usize) -> Element<'_> {
        Element { document: self, id }
    }

    fn node(&self, id: usize) -> Node<'_> {
        match &self.nodes[id].kind {
            NodeKind::Element { .. } => Node::Element(Element { document: self, id }),
            NodeKind::Text(text) => Node::Text(text.as_str()),
        }
    }
}

impl fmt::Display for XmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root().fmt(f)
    }
}

#[derive(Default)]
struct TreeBuilder {
    nodes: Vec<NodeData>,
    open: Vec<usize>,
    root: Option<usize>,
}

impl TreeBuilder {
    fn element(&mut self, start: &BytesStart) -> Result<usize> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(xml_error)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(xml_error)?.into_owned();
            attributes.push((key, value));
        }

        let id = self.attach(NodeKind::Element { name, attributes });
        if self.open.is_empty() {
            if self.root.is_some() {
                return Err(IsbnDbError::XmlError(
                    "document has more than one root element".to_string(),
                ));
            }
            self.root = Some(id);
        }
        Ok(id)
    }

    fn text(&mut self, text: String) -> Result<()> {
        if self.open.is_empty() {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(IsbnDbError::XmlError(
                "text content outside the root element".to_string(),
            ));
        }
        self.attach(NodeKind::Text(text));
        Ok(())
    }

    fn attach(&mut self, kind: NodeKind) -> usize {
        let id = self.nodes.len();
        self.nodes.push(NodeData {
            kind,
            children: Vec::new(),
        });
        if let Some(&parent) = self.open.last() {
            self.nodes[parent].children.push(id);
        }
        id
    }

    fn finish(self) -> Result<XmlDocument> {
        if let Some(&unclosed) = self.open.last() {
            let name = match &self.nodes[unclosed].kind {
                NodeKind::Element { name, .. } => name.clone(),
                NodeKind::Text(_) => String::new(),
            };
            return Err(IsbnDbError::XmlError(format!("unclosed element <{name}>")));
        }
        let root = self
            .root
            .ok_or_else(|| IsbnDbError::XmlError("document has no root element".to_string()))?;
        Ok(XmlDocument {
            nodes: self.nodes,
            root,
        })
    }
}

/// A child node: either an element or a piece of character data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Element(Element<'a>),
    Text(&'a str),
}

impl<'a> Node<'a> {
    pub fn as_element(&self) -> Option<Element<'a>> {
        match self {
            Node::Element(element) => Some(*element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Node::Text(text) => Some(*text),
            Node::Element(_) => None,
        }
    }
}

/// Handle to one element of an [`XmlDocument`]
#[derive(Clone, Copy)]
pub struct Element<'a> {
    document: &'a XmlDocument,
    id: usize,
}

impl<'a> Element<'a> {
    pub(crate) fn id(&self) -> usize {
        self.id
    }

    fn data(&self) -> &'a NodeData {
        &self.document.nodes[self.id]
    }

    fn parts(&self) -> (&'a str, &'a [(String, String)]) {
        match &self.data().kind {
            NodeKind::Element { name, attributes } => (name.as_str(), attributes.as_slice()),
            NodeKind::Text(_) => ("", &[]),
        }
    }

    /// Tag name, including any namespace prefix
    pub fn name(&self) -> &'a str {
        self.parts().0
    }

    /// Attribute value as written in the document (possibly empty)
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.parts()
            .1
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in document order
    pub fn attributes(self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.parts()
            .1
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn attribute_map(&self) -> AttributeMap {
        self.parts()
            .1
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Direct child nodes, text included
    pub fn children(&self) -> Children<'a> {
        Children {
            document: self.document,
            ids: self.data().children.iter(),
        }
    }

    /// Direct child elements; character data is skipped
    pub fn child_elements(&self) -> ChildElements<'a> {
        ChildElements {
            children: self.children(),
        }
    }

    /// Direct text children, in document order
    pub fn text_children(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.children().filter_map(|node| node.as_text())
    }

    /// Descendant elements named `name` in document order, excluding `self`
    pub fn descendants_named(self, name: &str) -> impl Iterator<Item = Element<'a>> {
        let mut stack: Vec<usize> = self.data().children.clone();
        stack.reverse();
        Descendants {
            document: self.document,
            stack,
        }
        .filter(move |element| element.name() == name)
    }

    pub fn document(&self) -> &'a XmlDocument {
        self.document
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.document, other.document) && self.id == other.id
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name())
            .field("attributes", &self.parts().1)
            .finish()
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, *self)?;
        f.write_str(&String::from_utf8_lossy(&writer.into_inner()))
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: Element<'_>) -> fmt::Result {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key, value));
    }

    if element.data().children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|_| fmt::Error);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|_| fmt::Error)?;
    for child in element.children() {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|_| fmt::Error)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(|_| fmt::Error)
}

/// Iterator over the direct children of an element
#[derive(Debug, Clone)]
pub struct Children<'a> {
    document: &'a XmlDocument,
    ids: slice::Iter<'a, usize>,
}

impl<'a> Iterator for Children<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| self.document.node(id))
    }
}

/// Iterator over the direct child elements of an element
#[derive(Debug, Clone)]
pub struct ChildElements<'a> {
    children: Children<'a>,
}

impl<'a> Iterator for ChildElements<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.children.find_map(|node| node.as_element())
    }
}

// Pre-order walk over elements starting from the ids on the stack.
struct Descendants<'a> {
    document: &'a XmlDocument,
    stack: Vec<usize>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let data = &self.document.nodes[id];
            if let NodeKind::Element { .. } = data.kind {
                self.stack.extend(data.children.iter().rev());
                return Some(Element {
                    document: self.document,
                    id,
                });
            }
        }
        None
    }
}
