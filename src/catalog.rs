//! Collections: resources bound to a transport
//!
//! A [`Resource`] is a static descriptor (path, allowed result shapes,
//! default shape, and how a response is wrapped). A [`Collection`] pairs a
//! resource with a transport and the currently selected result shape.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use crate::error::{IsbnDbError, Result};
use crate::query::LookupQuery;
use crate::transport::{Method, Transport};
use crate::xml::XmlDocument;

/// Static description of one remote resource
pub trait Resource {
    /// Path relative to the API base URL
    const PATH: &'static str;

    /// Result shapes the resource accepts
    const RESULT_SHAPES: &'static [&'static str];

    /// Shape used until [`Collection::set_results`] picks another
    const DEFAULT_SHAPE: &'static str;

    /// What a lookup returns
    type Output;

    fn wrap_response(document: XmlDocument) -> Self::Output;
}

/// Per-call overrides for a lookup
#[derive(Clone, Default)]
pub struct LookupOptions {
    /// Result shape for this call only
    pub results: Option<String>,
    /// Transport for this call only
    pub client: Option<Arc<dyn Transport>>,
    /// HTTP method for this call only; lookups default to GET
    pub method: Option<Method>,
}

impl LookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results<S: Into<String>>(mut self, results: S) -> Self {
        self.results = Some(results.into());
        self
    }

    pub fn with_client(mut self, client: Arc<dyn Transport>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }
}

impl fmt::Debug for LookupOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupOptions")
            .field("results", &self.results)
            .field("client", &self.client.is_some())
            .field("method", &self.method)
            .finish()
    }
}

/// A resource bound to a transport
pub struct Collection<R: Resource> {
    client: Option<Arc<dyn Transport>>,
    results: &'static str,
    resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Collection<R> {
    /// Create a collection using the resource's default result shape
    pub fn new(client: Option<Arc<dyn Transport>>) -> Self {
        Self {
            client,
            results: R::DEFAULT_SHAPE,
            resource: PhantomData,
        }
    }

    /// Create a collection bound to `client`
    pub fn bound(client: Arc<dyn Transport>) -> Self {
        Self::new(Some(client))
    }

    /// Create a collection with an explicit default result shape
    ///
    /// # Errors
    ///
    /// * `IsbnDbError::UnknownResultShape` - If `results` is not one of `R::RESULT_SHAPES`
    pub fn with_results(client: Option<Arc<dyn Transport>>, results: &str) -> Result<Self> {
        let mut collection = Self::new(client);
        collection.set_results(results)?;
        Ok(collection)
    }

    pub fn path(&self) -> &'static str {
        R::PATH
    }

    pub fn result_shapes(&self) -> &'static [&'static str] {
        R::RESULT_SHAPES
    }

    /// The result shape subsequent lookups request
    pub fn results(&self) -> &str {
        self.results
    }

    /// Change the default result shape
    ///
    /// # Errors
    ///
    /// * `IsbnDbError::UnknownResultShape` - If `results` is not one of `R::RESULT_SHAPES`
    ///
    /// # Example
    ///
    /// ```
    /// use isbndb_client::{BookCollection, IsbnDbError};
    ///
    /// let mut books = BookCollection::new(None);
    /// books.set_results("prices").unwrap();
    /// assert_eq!(books.results(), "prices");
    ///
    /// assert!(matches!(
    ///     books.set_results("everything"),
    ///     Err(IsbnDbError::UnknownResultShape { .. })
    /// ));
    /// assert_eq!(books.results(), "prices");
    /// ```
    pub fn set_results(&mut self, results: &str) -> Result<()> {
        self.results = Self::resolve_shape(results)?;
        Ok(())
    }

    pub fn client(&self) -> Option<&Arc<dyn Transport>> {
        self.client.as_ref()
    }

    pub fn set_client(&mut self, client: Arc<dyn Transport>) {
        self.client = Some(client);
    }

    /// Look up records matching one search index
    ///
    /// # Errors
    ///
    /// * `IsbnDbError::UnknownResultShape` - If the `results` override is not allowed
    /// * `IsbnDbError::MissingTransport` - If neither the collection nor the options carry a client
    /// * Any failure returned by the transport, unchanged
    pub fn lookup(&self, index: &str, value: &str, options: LookupOptions) -> Result<R::Output> {
        self.search(&LookupQuery::new().criterion(index, value), options)
    }

    /// Look up records matching several search indexes at once
    ///
    /// Criteria are numbered in the order they were added to `query`.
    pub fn search(&self, query: &LookupQuery, options: LookupOptions) -> Result<R::Output> {
        let results = match options.results.as_deref() {
            Some(results) => Self::resolve_shape(results)?,
            None => self.results,
        };
        let client = options
            .client
            .as_ref()
            .or(self.client.as_ref())
            .ok_or(IsbnDbError::MissingTransport)?;

        let method = options.method.unwrap_or_default();

        debug!(
            path = R::PATH,
            results,
            %method,
            criteria = query.len(),
            "Looking up collection"
        );
        let params = query.to_params(results);
        let document = client.request(R::PATH, method, &params)?;
        Ok(R::wrap_response(document))
    }

    fn resolve_shape(results: &str) -> Result<&'static str> {
        R::RESULT_SHAPES
            .iter()
            .copied()
            .find(|shape| *shape == results)
            .ok_or_else(|| IsbnDbError::UnknownResultShape {
                shape: results.to_string(),
                path: R::PATH.to_string(),
            })
    }
}

impl<R: Resource> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            results: self.results,
            resource: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for Collection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("path", &R::PATH)
            .field("results", &self.results)
            .field("client", &self.client.is_some())
            .finish()
    }
}
