//! Paginated result sets
//!
//! A [`ResultSet`] owns one response document and hands out records that
//! borrow it. The list container element is located on first use and
//! remembered; everything else is read from the tree on each access.

use std::cell::OnceCell;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::{IsbnDbError, Result};
use crate::models::{Model, Record};
use crate::xml::{ChildElements, Element, XmlDocument};

/// One page of records from a list resource
///
/// [`len`](Self::len) reports the total across all pages while
/// [`iter`](Self::iter) and [`at`](Self::at) only see the records present on
/// this page.
pub struct ResultSet<M: Model> {
    document: XmlDocument,
    list_element: String,
    container: OnceCell<usize>,
    model: PhantomData<fn() -> M>,
}

impl<M: Model> ResultSet<M> {
    /// Wrap a response whose records live under the element named `list_element`
    pub fn new<S: Into<String>>(document: XmlDocument, list_element: S) -> Self {
        Self {
            document,
            list_element: list_element.into(),
            container: OnceCell::new(),
            model: PhantomData,
        }
    }

    pub fn document(&self) -> &XmlDocument {
        &self.document
    }

    pub fn into_document(self) -> XmlDocument {
        self.document
    }

    pub fn list_element(&self) -> &str {
        &self.list_element
    }

    /// The list container
    ///
    /// # Errors
    ///
    /// * `IsbnDbError::ListContainer` - Unless exactly one element carries the list tag
    pub fn result_list(&self) -> Result<Element<'_>> {
        if let Some(&id) = self.container.get() {
            return Ok(self.document.element_by_id(id));
        }

        let mut lists = self.document.elements_by_tag_name(&self.list_element);
        let (first, extra) = (lists.next(), lists.count());
        match first {
            Some(list) if extra == 0 => {
                let _ = self.container.set(list.id());
                Ok(list)
            }
            _ => Err(IsbnDbError::ListContainer {
                tag: self.list_element.clone(),
                found: usize::from(first.is_some()) + extra,
            }),
        }
    }

    /// Total number of results across all pages (`total_results`)
    pub fn len(&self) -> Result<usize> {
        self.container_attribute("total_results")
    }

    /// Whether the search matched nothing at all
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// 1-based number of this page (`page_number`)
    pub fn current_page(&self) -> Result<u32> {
        self.container_attribute("page_number")
    }

    pub fn page_size(&self) -> Result<usize> {
        self.container_attribute("page_size")
    }

    /// Number of records present on this page (`shown_results`)
    pub fn shown_results(&self) -> Result<usize> {
        self.container_attribute("shown_results")
    }

    /// Records present on this page, in document order
    ///
    /// Each call starts a fresh walk over the container's children; nothing
    /// is buffered between calls.
    pub fn iter(&self) -> Result<Records<'_, M>> {
        Ok(Records {
            elements: self.result_list()?.child_elements(),
            model: PhantomData,
        })
    }

    /// The record at `position` among those present on this page
    ///
    /// # Errors
    ///
    /// * `IsbnDbError::NegativeIndex` - If `position` is negative
    /// * `IsbnDbError::IndexOutOfRange` - If this page holds `position` records or fewer;
    ///   later records may exist on the next page
    pub fn at(&self, position: isize) -> Result<M::Record<'_>> {
        let index = usize::try_from(position)
            .map_err(|_| IsbnDbError::NegativeIndex { index: position })?;

        let mut present = 0;
        for element in self.result_list()?.child_elements() {
            if present == index {
                return Ok(Record::from_element(element));
            }
            present += 1;
        }
        Err(IsbnDbError::IndexOutOfRange { index, present })
    }

    /// Server timestamp of the response (`server_time` on the document element)
    pub fn last_access(&self) -> Result<DateTime<Utc>> {
        let root = self.document.root();
        let raw = root
            .attribute("server_time")
            .ok_or_else(|| IsbnDbError::MissingAttribute {
                element: root.name().to_string(),
                name: "server_time".to_string(),
            })?;
        parse_server_time(raw).ok_or_else(|| IsbnDbError::InvalidAttribute {
            element: root.name().to_string(),
            name: "server_time".to_string(),
            value: raw.to_string(),
        })
    }

    fn container_attribute<T: FromStr>(&self, name: &str) -> Result<T> {
        let list = self.result_list()?;
        let raw = list
            .attribute(name)
            .ok_or_else(|| IsbnDbError::MissingAttribute {
                element: list.name().to_string(),
                name: name.to_string(),
            })?;
        raw.trim()
            .parse()
            .map_err(|_| IsbnDbError::InvalidAttribute {
                element: list.name().to_string(),
                name: name.to_string(),
                value: raw.to_string(),
            })
    }
}

impl<M: Model> fmt::Debug for ResultSet<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultSet")
            .field("list_element", &self.list_element)
            .field("resolved", &self.container.get().is_some())
            .finish()
    }
}

fn parse_server_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    // The service usually omits the offset; its clock is UTC.
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Iterator over the records present on one page
pub struct Records<'a, M: Model> {
    elements: ChildElements<'a>,
    model: PhantomData<fn() -> M>,
}

impl<'a, M: Model> Iterator for Records<'a, M> {
    type Item = M::Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements
            .next()
            .map(|element| <M::Record<'a> as Record<'a>>::from_element(element))
    }
}

impl<M: Model> Clone for Records<'_, M> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            model: PhantomData,
        }
    }
}
