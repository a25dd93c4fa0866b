//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;

/// A routed request with its body fully buffered.
///
/// The server collects the body before dispatch, so handlers see plain
/// bytes and never touch hyper's streaming body type.
pub struct Request {
    pub(crate) path: String,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(path: String, body: Bytes, params: HashMap<String, String>) -> Self {
        Self { path, body, params }
    }

    pub fn path(&self) -> &str { &self.path }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Returns a named path parameter.
    ///
    /// For a route `/urls/{name}`, `req.param("name")` on `/urls/google` returns `Some("google")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl Request {
    /// Builds a request the way the server would after routing.
    pub(crate) fn for_test(path: &str, body: impl Into<Bytes>) -> Self {
        Self::new(path.to_owned(), body.into(), HashMap::new())
    }
}
