use crate::constants::header;
use crate::headers::Headers;

/// Read-only view of an inbound request.
///
/// Resolver callbacks receive a reference to this value, so per-request
/// policy (whitelists, path-based rules) reads everything from here.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    method: String,
    uri: String,
    headers: Headers,
}

impl RequestContext {
    pub fn new<M, U>(method: M, uri: U) -> Self
    where
        M: Into<String>,
        U: Into<String>,
    {
        Self {
            method: method.into(),
            uri: uri.into(),
            headers: Headers::new(),
        }
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.set(name, value);
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The request target without its query string.
    pub fn path(&self) -> &str {
        match self.uri.split_once('?') {
            Some((path, _)) => path,
            None => &self.uri,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn origin(&self) -> Option<&str> {
        self.header(header::ORIGIN)
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
