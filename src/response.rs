//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it. The server converts
//! it into a hyper response on the way out.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http_body_util::Full;

use crate::status::Status;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// ```rust
/// use urlgraph::{Response, Status};
///
/// Response::json(br#"{"data":null}"#.to_vec());
/// Response::status(Status::NotFound);
///
/// Response::builder()
///     .status(Status::BadRequest)
///     .json(br#"{"error":"EOF while parsing"}"#.to_vec());
/// ```
pub struct Response {
    pub(crate) body: Vec<u8>,
    pub(crate) content_type: &'static str,
    pub(crate) status: Status,
}

impl Response {
    /// `200 OK` — `application/json`.
    pub fn json(body: Vec<u8>) -> Self {
        Self::builder().json(body)
    }

    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::builder().text(body)
    }

    /// Plain-text response whose body is the status reason phrase.
    pub fn status(code: Status) -> Self {
        Self::builder().status(code).text(code.reason())
    }

    /// Builder for responses that need a status other than `200 OK`.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { status: Status::Ok }
    }

    pub fn status_code(&self) -> Status { self.status }
    pub fn content_type(&self) -> &'static str { self.content_type }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Converts into the hyper response handed back to the connection.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(Bytes::from(self.body)));
        *res.status_mut() = self.status.into();
        res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        res
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`], terminated by a typed body method.
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
pub struct ResponseBuilder {
    status: Status,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code;
        self
    }

    /// Terminate with a JSON body (`application/json`).
    pub fn json(self, body: Vec<u8>) -> Response {
        Response { body, content_type: JSON, status: self.status }
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        Response { body: body.into().into_bytes(), content_type: TEXT, status: self.status }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implement on your own types to return them directly from handlers.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::text(self) }
}

impl IntoResponse for String {
    fn into_response(self) -> Response { Response::text(self) }
}

/// Return a [`Status`] directly from a handler: `return Status::NotFound`
impl IntoResponse for Status {
    fn into_response(self) -> Response { Response::status(self) }
}
