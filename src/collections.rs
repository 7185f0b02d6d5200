//! The catalog's resources and their lookup shortcuts
//!
//! Every shortcut is a direct call to [`Collection::lookup`] with a fixed
//! search index name.

use crate::catalog::{Collection, LookupOptions, Resource};
use crate::error::Result;
use crate::models::{Author, Book, Category, Model, Publisher, Subject};
use crate::query::LookupQuery;
use crate::result_set::ResultSet;
use crate::xml::XmlDocument;

/// `books.xml`, records under `BookList`
#[derive(Debug, Clone, Copy)]
pub struct Books;

impl Model for Books {
    type Record<'a> = Book<'a>;
}

impl Resource for Books {
    const PATH: &'static str = "books.xml";
    const RESULT_SHAPES: &'static [&'static str] = &[
        "details",
        "texts",
        "prices",
        "pricehistory",
        "subjects",
        "authors",
        "marc",
    ];
    const DEFAULT_SHAPE: &'static str = "authors";

    type Output = ResultSet<Books>;

    fn wrap_response(document: XmlDocument) -> Self::Output {
        ResultSet::new(document, "BookList")
    }
}

/// `subjects.xml`, records under `SubjectList`
#[derive(Debug, Clone, Copy)]
pub struct Subjects;

impl Model for Subjects {
    type Record<'a> = Subject<'a>;
}

impl Resource for Subjects {
    const PATH: &'static str = "subjects.xml";
    const RESULT_SHAPES: &'static [&'static str] = &["categories", "structure"];
    const DEFAULT_SHAPE: &'static str = "categories";

    type Output = ResultSet<Subjects>;

    fn wrap_response(document: XmlDocument) -> Self::Output {
        ResultSet::new(document, "SubjectList")
    }
}

/// `categories.xml`, records under `CategoryList`
#[derive(Debug, Clone, Copy)]
pub struct Categories;

impl Model for Categories {
    type Record<'a> = Category<'a>;
}

impl Resource for Categories {
    const PATH: &'static str = "categories.xml";
    const RESULT_SHAPES: &'static [&'static str] = &["details", "subcategories"];
    const DEFAULT_SHAPE: &'static str = "details";

    type Output = ResultSet<Categories>;

    fn wrap_response(document: XmlDocument) -> Self::Output {
        ResultSet::new(document, "CategoryList")
    }
}

/// `authors.xml`, records under `AuthorList`
#[derive(Debug, Clone, Copy)]
pub struct Authors;

impl Model for Authors {
    type Record<'a> = Author<'a>;
}

impl Resource for Authors {
    const PATH: &'static str = "authors.xml";
    const RESULT_SHAPES: &'static [&'static str] = &["details", "categories", "subjects"];
    const DEFAULT_SHAPE: &'static str = "details";

    type Output = ResultSet<Authors>;

    fn wrap_response(document: XmlDocument) -> Self::Output {
        ResultSet::new(document, "AuthorList")
    }
}

/// `publishers.xml`, records under `PublisherList`
#[derive(Debug, Clone, Copy)]
pub struct Publishers;

impl Model for Publishers {
    type Record<'a> = Publisher<'a>;
}

impl Resource for Publishers {
    const PATH: &'static str = "publishers.xml";
    const RESULT_SHAPES: &'static [&'static str] = &["details", "categories"];
    const DEFAULT_SHAPE: &'static str = "details";

    type Output = ResultSet<Publishers>;

    fn wrap_response(document: XmlDocument) -> Self::Output {
        ResultSet::new(document, "PublisherList")
    }
}

/// Access key statistics; the response is returned as a raw document
#[derive(Debug, Clone, Copy)]
pub struct KeyStats;

impl Resource for KeyStats {
    const PATH: &'static str = "books.xml";
    const RESULT_SHAPES: &'static [&'static str] = &["keystats"];
    const DEFAULT_SHAPE: &'static str = "keystats";

    type Output = XmlDocument;

    fn wrap_response(document: XmlDocument) -> Self::Output {
        document
    }
}

pub type BookCollection = Collection<Books>;
pub type SubjectCollection = Collection<Subjects>;
pub type CategoryCollection = Collection<Categories>;
pub type AuthorCollection = Collection<Authors>;
pub type PublisherCollection = Collection<Publishers>;
pub type KeyStatsCollection = Collection<KeyStats>;

impl Collection<Books> {
    /// Search on ISBN; at most one book matches
    pub fn isbn(&self, isbn: &str, options: LookupOptions) -> Result<ResultSet<Books>> {
        self.lookup("isbn", isbn, options)
    }

    /// Keyword search on title, long title and latinized title
    pub fn title(&self, title: &str, options: LookupOptions) -> Result<ResultSet<Books>> {
        self.lookup("title", title, options)
    }

    /// Search across titles, authors and publisher name
    pub fn combined(&self, term: &str, options: LookupOptions) -> Result<ResultSet<Books>> {
        self.lookup("combined", term, options)
    }

    /// Search across titles, authors, publisher, summary, notes and awards
    pub fn full(&self, term: &str, options: LookupOptions) -> Result<ResultSet<Books>> {
        self.lookup("full", term, options)
    }

    /// Retrieve a book by ISBNdb's book id; at most one match
    pub fn book_id(&self, book_id: &str, options: LookupOptions) -> Result<ResultSet<Books>> {
        self.lookup("book_id", book_id, options)
    }

    /// Books by an author, editor, etc. from the persons collection
    pub fn person_id(&self, person_id: &str, options: LookupOptions) -> Result<ResultSet<Books>> {
        self.lookup("person_id", person_id, options)
    }

    pub fn subject_id(&self, subject_id: &str, options: LookupOptions) -> Result<ResultSet<Books>> {
        self.lookup("subject_id", subject_id, options)
    }

    /// Books with the given Dewey Decimal Classification number
    pub fn dewey_decimal(&self, dewey: &str, options: LookupOptions) -> Result<ResultSet<Books>> {
        self.lookup("dewey_decimal", dewey, options)
    }

    /// Books with the given Library of Congress Classification number
    pub fn llc_number(&self, llc: &str, options: LookupOptions) -> Result<ResultSet<Books>> {
        self.lookup("llc_number", llc, options)
    }
}

impl Collection<Subjects> {
    pub fn name(&self, name: &str, options: LookupOptions) -> Result<ResultSet<Subjects>> {
        self.lookup("name", name, options)
    }

    /// Subjects listed under a category
    pub fn category_id(
        &self,
        category_id: &str,
        options: LookupOptions,
    ) -> Result<ResultSet<Subjects>> {
        self.lookup("category_id", category_id, options)
    }

    /// Retrieve a subject by ISBNdb's subject id; at most one match
    pub fn subject_id(
        &self,
        subject_id: &str,
        options: LookupOptions,
    ) -> Result<ResultSet<Subjects>> {
        self.lookup("subject_id", subject_id, options)
    }
}

impl Collection<Categories> {
    pub fn name(&self, name: &str, options: LookupOptions) -> Result<ResultSet<Categories>> {
        self.lookup("name", name, options)
    }

    /// Retrieve a category by ISBNdb's category id; at most one match
    pub fn category_id(
        &self,
        category_id: &str,
        options: LookupOptions,
    ) -> Result<ResultSet<Categories>> {
        self.lookup("category_id", category_id, options)
    }

    /// Categories contained in `parent_id`; an empty id lists the top level
    pub fn parent_id(
        &self,
        parent_id: &str,
        options: LookupOptions,
    ) -> Result<ResultSet<Categories>> {
        self.lookup("parent_id", parent_id, options)
    }
}

impl Collection<Authors> {
    pub fn name(&self, name: &str, options: LookupOptions) -> Result<ResultSet<Authors>> {
        self.lookup("name", name, options)
    }

    /// At most one author by ISBNdb's person id
    pub fn person_id(&self, person_id: &str, options: LookupOptions) -> Result<ResultSet<Authors>> {
        self.lookup("person_id", person_id, options)
    }
}

impl Collection<Publishers> {
    pub fn name(&self, name: &str, options: LookupOptions) -> Result<ResultSet<Publishers>> {
        self.lookup("name", name, options)
    }

    /// At most one publisher by ISBNdb's publisher id
    pub fn publisher_id(
        &self,
        publisher_id: &str,
        options: LookupOptions,
    ) -> Result<ResultSet<Publishers>> {
        self.lookup("publisher_id", publisher_id, options)
    }
}

impl Collection<KeyStats> {
    /// Statistics for the access key in use
    pub fn fetch(&self, options: LookupOptions) -> Result<XmlDocument> {
        self.search(&LookupQuery::new(), options)
    }
}
