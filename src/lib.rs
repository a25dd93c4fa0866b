//! # urlgraph
//!
//! A small GraphQL service over an in-memory, ordered list of named URLs.
//!
//! One endpoint, `POST /graphql`, takes `{"query": "..."}` and answers with
//! the GraphQL result:
//!
//! | Field | Kind | Returns |
//! |---|---|---|
//! | `url(name: String)` | query | first record with that name, or an empty record |
//! | `urllist` | query | every record, in insertion order |
//! | `createUrl(name: String!, siteurl: String!)` | mutation | the appended record |
//! | `deleteUrl(name: String)` | mutation | the removed record, or an empty record |
//!
//! The records live in a [`UrlStore`] behind an async `RwLock`; nothing is
//! persisted across restarts.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use urlgraph::{Config, Server, UrlStore, api, schema};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), urlgraph::Error> {
//!     let config = Config::default();
//!     let schema = schema::build_schema(UrlStore::seeded());
//!
//!     Server::bind(config.addr)
//!         .serve(api::app(schema, &config.path))
//!         .await
//! }
//! ```
//!
//! The HTTP layer underneath is deliberately small: radix-tree routing via
//! [`matchit`], hyper for HTTP/1.1 and HTTP/2, and graceful shutdown on
//! SIGTERM / Ctrl-C that drains in-flight requests.

mod error;
mod handler;
mod method;
mod middleware;
mod record;
mod request;
mod response;
mod router;
mod server;
mod status;
mod store;

pub mod api;
pub mod config;
pub mod schema;

pub use config::Config;
pub use error::Error;
pub use handler::{Handler, HandlerFuture};
pub use method::Method;
pub use record::Url;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
pub use store::{SEED, UrlStore};
