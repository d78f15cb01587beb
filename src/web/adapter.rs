//! Owned request type for hosts without their own request abstraction.

use std::collections::HashMap;

use super::RequestSource;

/// An owned, framework-agnostic request.
///
/// Holds the request URL, optional query string and headers. Header names are
/// stored lowercased, so lookups through [`RequestSource::header`] ignore case.
///
/// # Examples
///
/// ```
/// use experiment_payload::web::{RequestAdapter, RequestSource};
///
/// let mut adapter = RequestAdapter::new("https://example.com/content/page".to_string());
/// adapter.set_query_string(Some("wcmmode=disabled".to_string()));
/// adapter.add_header("Referer".to_string(), "https://example.com/".to_string());
///
/// assert_eq!(adapter.header("referer"), Some("https://example.com/"));
/// assert_eq!(adapter.full_url(), "https://example.com/content/page?wcmmode=disabled");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestAdapter {
    /// Request URL without the query string
    request_url: String,
    /// Raw query string, without `?`
    query_string: Option<String>,
    /// Headers keyed by lowercased name
    headers: HashMap<String, String>,
}

impl RequestAdapter {
    /// Creates an adapter for the given request URL with no headers or query.
    pub fn new(request_url: String) -> Self {
        Self {
            request_url,
            query_string: None,
            headers: HashMap::new(),
        }
    }

    /// Sets the raw query string.
    pub fn set_query_string(&mut self, query_string: Option<String>) {
        self.query_string = query_string;
    }

    /// Adds a header, replacing any earlier value with the same name.
    pub fn add_header(&mut self, key: String, value: String) {
        self.headers.insert(key.to_ascii_lowercase(), value);
    }
}

impl RequestSource for RequestAdapter {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    fn request_url(&self) -> &str {
        &self.request_url
    }

    fn query_string(&self) -> Option<&str> {
        self.query_string.as_deref()
    }
}
