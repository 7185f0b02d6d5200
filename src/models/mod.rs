//! Domain records
//!
//! Each record is a read-only view over one element of a response. Records
//! are `Copy`, borrow the document they were read from, and re-read the tree
//! on every field access. Scalar fields read from attributes return
//! `Option<String>`; fields read from nested text return
//! `Result<Option<String>>` because the backing element may be ambiguous.

pub mod author;
pub mod book;
pub mod category;
pub mod publisher;
pub mod subject;

use serde::{Deserialize, Serialize};

use crate::accessor::element_text;
use crate::error::Result;
use crate::xml::Element;

pub use author::Author;
pub use book::Book;
pub use category::Category;
pub use publisher::Publisher;
pub use subject::Subject;

/// A typed view over one element
pub trait Record<'a>: Sized {
    fn from_element(element: Element<'a>) -> Self;

    fn element(&self) -> Element<'a>;
}

/// Record constructor for a list resource
///
/// Implemented by the resource markers in [`crate::collections`] so a
/// [`ResultSet`](crate::ResultSet) can own its document and still hand out
/// records that borrow it.
pub trait Model {
    type Record<'a>: Record<'a>;
}

macro_rules! record {
    ($name:ident) => {
        impl<'a> $crate::models::Record<'a> for $name<'a> {
            fn from_element(element: $crate::xml::Element<'a>) -> Self {
                Self {
                    data: $crate::accessor::Accessor::new(element),
                }
            }

            fn element(&self) -> $crate::xml::Element<'a> {
                self.data.element()
            }
        }

        impl ::std::fmt::Display for $name<'_> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.data.element(), f)
            }
        }
    };
}

pub(crate) use record;

// Labeled entries carry their display text as the only child node; an empty
// entry such as `<Person person_id="x"/>` is a `TextCardinality` error.
fn id_and_text(element: Element<'_>, id_attribute: &str) -> Result<(Option<String>, String)> {
    let id = element
        .attribute(id_attribute)
        .filter(|id| !id.is_empty())
        .map(str::to_string);
    Ok((id, element_text(element)?))
}

/// A person listed in a book's `Authors` group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub person_id: Option<String>,
    pub person_text: String,
}

impl PersonRef {
    pub fn from_element(element: Element<'_>) -> Result<Self> {
        let (person_id, person_text) = id_and_text(element, "person_id")?;
        Ok(Self {
            person_id,
            person_text,
        })
    }
}

/// A subject listed in a book's `Subjects` group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRef {
    pub subject_id: Option<String>,
    pub subject_text: String,
}

impl SubjectRef {
    pub fn from_element(element: Element<'_>) -> Result<Self> {
        let (subject_id, subject_text) = id_and_text(element, "subject_id")?;
        Ok(Self {
            subject_id,
            subject_text,
        })
    }
}

/// A category listed in a `Categories` group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub category_id: Option<String>,
    pub category_text: String,
}

impl CategoryRef {
    pub fn from_element(element: Element<'_>) -> Result<Self> {
        let (category_id, category_text) = id_and_text(element, "category_id")?;
        Ok(Self {
            category_id,
            category_text,
        })
    }
}

/// A subject an author has written on, with the number of books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSubject {
    pub subject_id: Option<String>,
    pub book_count: Option<String>,
    pub subject_text: String,
}

impl AuthorSubject {
    pub fn from_element(element: Element<'_>) -> Result<Self> {
        let (subject_id, subject_text) = id_and_text(element, "subject_id")?;
        let book_count = element
            .attribute("book_count")
            .filter(|count| !count.is_empty())
            .map(str::to_string);
        Ok(Self {
            subject_id,
            book_count,
            subject_text,
        })
    }
}
