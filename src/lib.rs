//! # ISBNdb Client
//!
//! A Rust client library for the ISBNdb bibliographic catalog API.
//! This crate builds positional lookup requests, wraps the paginated XML
//! responses into result sets, and exposes typed, read-only views over the
//! book, subject, category, author and publisher records they contain.
//!
//! ## Features
//!
//! - **Collections**: one per catalog resource, with named lookup shortcuts
//! - **Result Sets**: pagination metadata, lazy iteration and positional access
//! - **Typed Records**: explicit accessors that fail on ambiguous data instead of guessing
//! - **Pluggable Transport**: a blocking HTTP client is included; tests can supply their own
//!
//! ## Quick Start
//!
//! ```no_run
//! use isbndb_client::{Catalog, ClientConfig, LookupOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::new(ClientConfig::from_env())?;
//!
//!     let books = catalog.books.isbn("0061041321", LookupOptions::default())?;
//!     println!("{} result(s)", books.len()?);
//!
//!     for book in books.iter()? {
//!         println!("{:?}: {:?}", book.isbn(), book.title()?);
//!         for author in book.authors()? {
//!             println!("  by {}", author?.person_text);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod accessor;
pub mod catalog;
pub mod client;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod result_set;
pub mod transport;
pub mod xml;

use std::sync::Arc;

// Re-export main types for convenience
pub use accessor::Accessor;
pub use catalog::{Collection, LookupOptions, Resource};
pub use client::IsbnDbClient;
pub use collections::{
    AuthorCollection, Authors, BookCollection, Books, Categories, CategoryCollection, KeyStats,
    KeyStatsCollection, PublisherCollection, Publishers, SubjectCollection, Subjects,
};
pub use config::ClientConfig;
pub use error::{ErrorKind, IsbnDbError, Result};
pub use models::{
    Author, AuthorSubject, Book, Category, CategoryRef, Model, PersonRef, Publisher, Record,
    Subject, SubjectRef,
};
pub use query::{LookupQuery, RequestParams, SearchCriterion, encode_request_params};
pub use result_set::{Records, ResultSet};
pub use transport::{Method, Transport};
pub use xml::{AttributeMap, Element, Node, XmlDocument};

/// Every collection of the catalog, bound to one shared transport
#[derive(Debug, Clone)]
pub struct Catalog {
    pub books: BookCollection,
    pub subjects: SubjectCollection,
    pub categories: CategoryCollection,
    pub authors: AuthorCollection,
    pub publishers: PublisherCollection,
    pub key_stats: KeyStatsCollection,
}

impl Catalog {
    /// Build the HTTP client from `config` and bind every collection to it
    ///
    /// # Errors
    ///
    /// * `IsbnDbError::MissingAccessKey` - If `config` carries no access key
    ///
    /// # Example
    ///
    /// ```
    /// use isbndb_client::{Catalog, ClientConfig};
    ///
    /// let catalog = Catalog::new(ClientConfig::new().with_access_key("ABCDEFGH")).unwrap();
    /// assert_eq!(catalog.books.results(), "authors");
    /// ```
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = IsbnDbClient::with_config(config)?;
        Ok(Self::with_transport(Arc::new(client)))
    }

    /// Bind every collection to `transport`
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            books: Collection::bound(Arc::clone(&transport)),
            subjects: Collection::bound(Arc::clone(&transport)),
            categories: Collection::bound(Arc::clone(&transport)),
            authors: Collection::bound(Arc::clone(&transport)),
            publishers: Collection::bound(Arc::clone(&transport)),
            key_stats: Collection::bound(transport),
        }
    }

    /// Usage statistics for the access key in use, as a raw document
    pub fn keystats(&self) -> Result<XmlDocument> {
        self.key_stats.fetch(LookupOptions::default())
    }
}
