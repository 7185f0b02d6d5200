//! Request parameter encoding
//!
//! The catalog takes its search criteria positionally: `index1`/`value1`,
//! `index2`/`value2`, and so on, next to a `results` key naming the result
//! shape. Encoding is a pure function of the shape and the ordered criteria.

use serde::{Deserialize, Serialize};

/// Ordered, flat request parameter mapping
///
/// Keys are unique; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// URL-encoded `key=value&...` form of the mapping
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<'a> IntoIterator for &'a RequestParams {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Encode a result shape and ordered criteria into request parameters
///
/// # Example
///
/// ```
/// use isbndb_client::encode_request_params;
///
/// let params = encode_request_params("details", [("isbn", "0061041321")]);
/// assert_eq!(params.get("results"), Some("details"));
/// assert_eq!(params.get("index1"), Some("isbn"));
/// assert_eq!(params.get("value1"), Some("0061041321"));
/// ```
pub fn encode_request_params<I, K, V>(results: &str, criteria: I) -> RequestParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut params = RequestParams::new();
    params.insert("results", results);
    for (i, (index, value)) in criteria.into_iter().enumerate() {
        let position = i + 1;
        params.insert(format!("index{position}"), index);
        params.insert(format!("value{position}"), value);
    }
    params
}

/// One search criterion: a search index name and the value to match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriterion {
    pub index: String,
    pub value: String,
}

impl SearchCriterion {
    pub fn new<I: Into<String>, V: Into<String>>(index: I, value: V) -> Self {
        Self {
            index: index.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of criteria sent in one request
///
/// # Example
///
/// ```
/// use isbndb_client::LookupQuery;
///
/// let query = LookupQuery::new()
///     .criterion("title", "flies")
///     .criterion("publisher_id", "faber");
///
/// let params = query.to_params("details");
/// assert_eq!(params.get("index2"), Some("publisher_id"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupQuery {
    criteria: Vec<SearchCriterion>,
}

impl LookupQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a criterion; position follows call order
    pub fn criterion<I: Into<String>, V: Into<String>>(mut self, index: I, value: V) -> Self {
        self.criteria.push(SearchCriterion::new(index, value));
        self
    }

    pub fn criteria(&self) -> &[SearchCriterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn to_params(&self, results: &str) -> RequestParams {
        encode_request_params(
            results,
            self.criteria
                .iter()
                .map(|c| (c.index.as_str(), c.value.as_str())),
        )
    }
}

impl From<SearchCriterion> for LookupQuery {
    fn from(criterion: SearchCriterion) -> Self {
        Self {
            criteria: vec![criterion],
        }
    }
}

impl<I: Into<String>, V: Into<String>> FromIterator<(I, V)> for LookupQuery {
    fn from_iter<T: IntoIterator<Item = (I, V)>>(iter: T) -> Self {
        Self {
            criteria: iter
                .into_iter()
                .map(|(index, value)| SearchCriterion::new(index, value))
                .collect(),
        }
    }
}
