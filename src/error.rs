//! Unified error type.

use std::fmt;
use std::net::AddrParseError;

/// The error type returned by urlgraph's fallible operations.
///
/// Request-level failures (a malformed body, an unknown route, a GraphQL
/// query that does not validate) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures: reading configuration, binding to a port, or
/// accepting a connection.
#[derive(Debug)]
pub enum Error {
    /// Socket-level failure while binding or accepting.
    Io(std::io::Error),
    /// A configured listen address is not a valid `host:port`.
    Addr(AddrParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e)   => write!(f, "io: {e}"),
            Self::Addr(e) => write!(f, "invalid listen address: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e)   => Some(e),
            Self::Addr(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<AddrParseError> for Error {
    fn from(e: AddrParseError) -> Self {
        Self::Addr(e)
    }
}
