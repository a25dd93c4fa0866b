//! Service configuration.
//!
//! Defaults match the classic setup: `127.0.0.1:8080`, endpoint `/graphql`.
//! `URLGRAPH_ADDR` overrides the listen address.

use std::net::SocketAddr;

use crate::error::Error;

/// Environment variable holding an optional `host:port` listen address.
pub const ADDR_VAR: &str = "URLGRAPH_ADDR";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            path: "/graphql".to_owned(),
        }
    }
}

impl Config {
    /// Defaults, with the listen address taken from [`ADDR_VAR`] when set.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_addr_var(std::env::var(ADDR_VAR).ok().as_deref())
    }

    fn from_addr_var(addr: Option<&str>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(addr) = addr.map(str::trim).filter(|a| !a.is_empty()) {
            config.addr = addr.parse()?;
        }
        Ok(config)
    }
}
