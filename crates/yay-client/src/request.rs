//! Request descriptors and query parameter encoding.
//!
//! Optional parameters that were never set never reach the wire: [`Query::opt`]
//! skips `None`, and [`RequestDescriptor::json`] drops top-level `null`
//! members from serialized bodies.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
    Head,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
            RequestMethod::Head => reqwest::Method::HEAD,
        }
    }

    /// Upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Head => "HEAD",
        }
    }
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered URL query parameters.
///
/// List parameters are written as repeated keys, exactly as named by the
/// caller, so `ids[]` stays `ids[]` and `ids` stays `ids`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Add a parameter only when a value is present.
    pub fn opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Add one pair per element, all sharing the same key.
    pub fn list<V: ToString>(
        mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let key = key.into();
        for value in values {
            self.pairs.push((key.clone(), value.to_string()));
        }
        self
    }

    /// All pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// First value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if any pair uses this key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-urlencode the pairs, preserving order.
    pub fn to_query_string(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}

/// Everything needed to issue one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub(crate) method: RequestMethod,
    pub(crate) path: String,
    pub(crate) query: Query,
    pub(crate) body: Option<Value>,
}

impl RequestDescriptor {
    /// Create a new descriptor for a versioned path such as `/v2/posts/42`.
    pub fn new(method: RequestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::new(),
            body: None,
        }
    }

    /// Create a GET descriptor.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Get, path)
    }

    /// Create a POST descriptor.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Post, path)
    }

    /// Create a PUT descriptor.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Put, path)
    }

    /// Create a DELETE descriptor.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Delete, path)
    }

    /// Set the query parameters.
    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Serialize a JSON body, dropping top-level `null` members.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)?;
        self.body = Some(strip_nulls(value));
        Ok(self)
    }

    /// Set a prepared JSON body.
    pub fn json_value(mut self, body: Value) -> Self {
        self.body = Some(strip_nulls(body));
        self
    }

    /// HTTP method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// Versioned path, without host.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters.
    pub fn query_params(&self) -> &Query {
        &self.query
    }

    /// JSON body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Encoded query string (without the leading `?`).
    pub fn query_string(&self) -> Result<String> {
        self.query.to_query_string()
    }
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map.into_iter().filter(|(_, v)| !v.is_null()).collect()),
        other => other,
    }
}

/// Percent-encode a value for use as a single path segment.
pub fn encode_path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
