//! The request seam between collections and the network

use std::fmt;

use crate::error::Result;
use crate::query::RequestParams;
use crate::xml::XmlDocument;

/// HTTP method used to send a request
///
/// The service is read-only; `Post` only changes where the parameters travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sends one request and returns the parsed response document
///
/// Implementations own connections, credentials and encoding. A call blocks
/// until the response is parsed or the request has failed; a non-success
/// status must surface as [`IsbnDbError::Http`](crate::IsbnDbError::Http).
pub trait Transport: Send + Sync {
    fn request(&self, path: &str, method: Method, params: &RequestParams) -> Result<XmlDocument>;
}
