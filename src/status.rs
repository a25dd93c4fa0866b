//! HTTP status codes as a typed enum.
//!
//! Only the codes this service actually emits are listed. Use [`Status`]
//! anywhere a status code is accepted: `Response::status()`,
//! `Response::builder().status()`, or as a bare handler return value.
//!
//! ```rust
//! use urlgraph::{Response, Status};
//!
//! Response::status(Status::NotFound);
//!
//! Response::builder()
//!     .status(Status::BadRequest)
//!     .json(br#"{"error":"expected value"}"#.to_vec());
//! ```

/// Status codes produced by the router and the GraphQL endpoint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,                  // 200
    BadRequest,          // 400
    NotFound,            // 404
    MethodNotAllowed,    // 405
    InternalServerError, // 500
}

impl Status {
    /// Canonical reason phrase, used in plain-text error bodies.
    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok                  => "OK",
            Self::BadRequest          => "Bad Request",
            Self::NotFound            => "Not Found",
            Self::MethodNotAllowed    => "Method Not Allowed",
            Self::InternalServerError => "Internal Server Error",
        }
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::BadRequest          => 400,
            Status::NotFound            => 404,
            Status::MethodNotAllowed    => 405,
            Status::InternalServerError => 500,
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        // Every variant above is a registered code, so this never falls back.
        http::StatusCode::from_u16(s.into()).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_wire_codes() {
        assert_eq!(u16::from(Status::BadRequest), 400);
        assert_eq!(http::StatusCode::from(Status::MethodNotAllowed), http::StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(Status::NotFound.reason(), "Not Found");
    }
}
