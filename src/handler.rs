//! Route handlers.
//!
//! A handler is anything the router can call with a [`Request`] to get a
//! future [`Response`]. Async functions and closures get a blanket impl:
//!
//! ```rust,no_run
//! # use urlgraph::{Method, Request, Response, Router};
//! async fn ping(_req: Request) -> &'static str { "pong" }
//!
//! let greeting = String::from("hello");
//! Router::new()
//!     .on(Method::Post, "/ping", ping)
//!     .on(Method::Post, "/hello", move |_req: Request| {
//!         let greeting = greeting.clone();
//!         async move { Response::text(greeting) }
//!     });
//! ```
//!
//! Types that carry their own state can implement [`Handler`] directly.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// The future every handler call resolves through.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Something that answers routed requests.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, req: Request) -> HandlerFuture;
}

/// How the router stores handlers: one allocation per route, shared by
/// every connection task.
pub(crate) type BoxedHandler = Arc<dyn Handler>;

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    fn call(&self, req: Request) -> HandlerFuture {
        let fut = self(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
