use std::result;

use thiserror::Error;

/// Error types for ISBNdb client operations
#[derive(Error, Debug)]
pub enum IsbnDbError {
    /// A collection was asked for a result shape it does not declare
    #[error("{shape} is not a recognized results set for {path}")]
    UnknownResultShape { shape: String, path: String },

    /// A lookup was attempted on a collection with no transport bound
    #[error("Cannot make a request without a client")]
    MissingTransport,

    /// No access key was configured
    #[error(
        "ISBNdb could not find your access key. Pass it in with \
         ClientConfig::new().with_access_key(\"ABCDEFGH\") or export \
         ISBNDB_ACCESS_KEY=ABCDEFGH and build the config with ClientConfig::from_env()"
    )]
    MissingAccessKey,

    /// Request path is empty
    #[error("Invalid path parameter: {path:?}")]
    InvalidPath { path: String },

    /// The response does not contain exactly one list container
    #[error("Unexpected XML data returned: expected exactly one <{tag}> element, found {found}")]
    ListContainer { tag: String, found: usize },

    /// A single-valued field is backed by more than one element
    #[error("Too many elements with name {name}: found {found}")]
    AmbiguousElement { name: String, found: usize },

    /// An element expected to hold one text value is empty or mixed content
    #[error("Unable to parse value from node with name {name}: found {found} child nodes")]
    TextCardinality { name: String, found: usize },

    /// A required attribute is missing
    #[error("Missing attribute {name} on <{element}>")]
    MissingAttribute { element: String, name: String },

    /// An attribute could not be parsed into the expected type
    #[error("Invalid value {value:?} for attribute {name} on <{element}>")]
    InvalidAttribute {
        element: String,
        name: String,
        value: String,
    },

    /// Negative positional index into a result set
    #[error("Negative indexing not supported on ResultSet (got {index})")]
    NegativeIndex { index: isize },

    /// Positional index beyond the records present on this page
    #[error(
        "List index {index} is out of range: {present} results on this page \
         (use the next page to fetch more results)"
    )]
    IndexOutOfRange { index: usize, present: usize },

    /// Non-success HTTP status from the remote service
    #[error("HTTP ERROR {status}: {message} \n {uri}")]
    Http {
        status: u16,
        uri: String,
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),
}

pub type Result<T> = result::Result<T, IsbnDbError>;

/// The closed set of failure kinds callers need to branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid client or collection setup
    Configuration,
    /// The response violates a cardinality or format invariant
    DataIntegrity,
    /// Random access outside the current page
    Bounds,
    /// The request could not be completed
    Transport,
}

impl IsbnDbError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IsbnDbError::UnknownResultShape { .. }
            | IsbnDbError::MissingTransport
            | IsbnDbError::MissingAccessKey
            | IsbnDbError::InvalidPath { .. } => ErrorKind::Configuration,

            IsbnDbError::ListContainer { .. }
            | IsbnDbError::AmbiguousElement { .. }
            | IsbnDbError::TextCardinality { .. }
            | IsbnDbError::MissingAttribute { .. }
            | IsbnDbError::InvalidAttribute { .. } => ErrorKind::DataIntegrity,

            IsbnDbError::NegativeIndex { .. } | IsbnDbError::IndexOutOfRange { .. } => {
                ErrorKind::Bounds
            }

            IsbnDbError::Http { .. } | IsbnDbError::RequestError(_) | IsbnDbError::XmlError(_) => {
                ErrorKind::Transport
            }
        }
    }

    /// HTTP status code, if the remote service answered with a failure
    pub fn status(&self) -> Option<u16> {
        match self {
            IsbnDbError::Http { status, .. } => Some(*status),
            IsbnDbError::RequestError(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
