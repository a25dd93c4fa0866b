//! Radix-tree request router.
//!
//! One matchit tree per HTTP method. A path that exists under some other
//! method answers `405`; a path that exists nowhere answers `404`.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;

/// Outcome of routing one request.
pub(crate) enum Route {
    Found(BoxedHandler, HashMap<String, String>),
    MethodNotAllowed,
    NotFound,
}

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// ```rust,no_run
    /// # use urlgraph::{Method, Request, Response, Router};
    /// # async fn graphql(_: Request) -> Response { Response::text("") }
    /// Router::new().on(Method::Post, "/graphql", graphql);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid matchit route or is already taken for
    /// `method`. Routes are fixed at startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        let handler: BoxedHandler = Arc::new(handler);
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Resolves a request. `method` is `None` for tokens outside RFC 9110.
    pub(crate) fn lookup(&self, method: Option<Method>, path: &str) -> Route {
        if let Some(method) = method {
            if let Some(matched) = self.routes.get(&method).and_then(|tree| tree.at(path).ok()) {
                let params = matched.params.iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect();
                return Route::Found(Arc::clone(matched.value), params);
            }
        }

        if self.routes.values().any(|tree| tree.at(path).is_ok()) {
            Route::MethodNotAllowed
        } else {
            Route::NotFound
        }
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
