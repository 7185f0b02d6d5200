//! Field extraction for one XML element
//!
//! The catalog represents a value in one of three ways: missing, as an
//! attribute, or as the text of a nested element. [`Accessor`] folds all
//! three into "absent or one scalar" and refuses to guess when a
//! single-valued field is backed by more than one node.

use crate::error::{IsbnDbError, Result};
use crate::xml::{AttributeMap, ChildElements, Element, Node};

/// Read-only field accessor over one element and its descendants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accessor<'a> {
    element: Element<'a>,
}

impl<'a> Accessor<'a> {
    pub fn new(element: Element<'a>) -> Self {
        Self { element }
    }

    pub fn element(&self) -> Element<'a> {
        self.element
    }

    /// Attribute value, treating an empty string as absent
    pub fn attribute(&self, name: &str) -> Option<String> {
        non_empty(self.element.attribute(name))
    }

    /// The unique descendant element named `name`
    ///
    /// # Errors
    ///
    /// * `IsbnDbError::AmbiguousElement` - If more than one descendant matches
    pub fn unique_element(&self, name: &str) -> Result<Option<Element<'a>>> {
        let mut matches = self.element.descendants_named(name);
        let first = matches.next();
        let extra = matches.count();
        if extra > 0 {
            return Err(IsbnDbError::AmbiguousElement {
                name: name.to_string(),
                found: extra + 1,
            });
        }
        Ok(first)
    }

    /// Text of the unique descendant element named `name`
    ///
    /// Returns `Ok(None)` when no such element exists.
    ///
    /// # Errors
    ///
    /// * `IsbnDbError::AmbiguousElement` - If more than one descendant matches
    /// * `IsbnDbError::TextCardinality` - If the element is empty or has mixed content
    pub fn single_child_text(&self, name: &str) -> Result<Option<String>> {
        match self.unique_element(name)? {
            Some(element) => element_text(element).map(Some),
            None => Ok(None),
        }
    }

    /// Attribute of the unique descendant element named `element`
    pub fn child_attribute(&self, element: &str, name: &str) -> Result<Option<String>> {
        Ok(self
            .unique_element(element)?
            .and_then(|found| non_empty(found.attribute(name))))
    }

    /// Raw attribute mapping of the unique descendant element named `name`
    pub fn child_attributes(&self, name: &str) -> Result<Option<AttributeMap>> {
        Ok(self
            .unique_element(name)?
            .map(|element| element.attribute_map()))
    }

    /// Direct element children of the unique descendant named `name`
    ///
    /// An absent group yields an empty sequence. Each call walks the tree
    /// again; the returned sequence can be cloned to replay it.
    pub fn child_group(&self, name: &str) -> Result<ChildGroup<'a>> {
        Ok(ChildGroup {
            inner: self
                .unique_element(name)?
                .map(|element| element.child_elements()),
        })
    }
}

/// The single text value held by `element`
///
/// # Errors
///
/// * `IsbnDbError::TextCardinality` - Unless `element` has exactly one child node and it is text
pub fn element_text(element: Element<'_>) -> Result<String> {
    let mut children = element.children();
    if let (Some(Node::Text(text)), None) = (children.next(), children.next()) {
        return Ok(text.to_string());
    }
    Err(IsbnDbError::TextCardinality {
        name: element.name().to_string(),
        found: element.children().count(),
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Lazy sequence of the element children of a group element
#[derive(Debug, Clone)]
pub struct ChildGroup<'a> {
    inner: Option<ChildElements<'a>>,
}

impl<'a> Iterator for ChildGroup<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}
