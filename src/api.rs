//! The GraphQL HTTP endpoint.
//!
//! `POST /graphql` with a JSON body:
//!
//! ```json
//! { "query": "{ urllist { name siteurl } }", "variables": {}, "operationName": null }
//! ```
//!
//! Only `query` is expected; the other two are optional. Only the first JSON
//! value in the body is read and anything after it is ignored. A body whose
//! first value does not decode answers `400 {"error": "..."}`. Anything that
//! decodes answers `200` with the engine's result, even when that result
//! carries errors.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::schema::{self, UrlSchema};
use crate::status::Status;

/// Decoded request body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    /// Missing or `null` reads as the empty document, which the engine rejects.
    pub query: Option<String>,
    pub variables: Option<serde_json::Value>,
    pub operation_name: Option<String>,
}

impl From<PostData> for async_graphql::Request {
    fn from(data: PostData) -> Self {
        let mut req = async_graphql::Request::new(data.query.unwrap_or_default());
        if let Some(vars) = data.variables {
            req = req.variables(async_graphql::Variables::from_json(vars));
        }
        if let Some(name) = data.operation_name {
            req = req.operation_name(name);
        }
        req
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Serializes `{"error": message}`.
pub(crate) fn error_body(message: &str) -> Vec<u8> {
    serde_json::to_vec(&ErrorBody { error: message })
        .unwrap_or_else(|_| br#"{"error":"unserializable error"}"#.to_vec())
}

/// Decodes the first JSON value in `body`.
fn decode(body: &[u8]) -> serde_json::Result<PostData> {
    match serde_json::Deserializer::from_slice(body).into_iter::<PostData>().next() {
        Some(decoded) => decoded,
        // Empty or whitespace-only body; let the decoder report the EOF.
        None => serde_json::from_slice(body),
    }
}

/// Builds the router serving `schema` at `path`.
pub fn app(schema: UrlSchema, path: &str) -> Router {
    Router::new().on(Method::Post, path, move |req: Request| {
        let schema = schema.clone();
        async move { graphql(&schema, req).await }
    })
}

/// Decodes, executes and encodes one GraphQL request.
pub async fn graphql(schema: &UrlSchema, req: Request) -> Response {
    let data = match decode(req.body()) {
        Ok(data) => data,
        Err(e) => {
            warn!(path = req.path(), "rejecting request body: {e}");
            return Response::builder()
                .status(Status::BadRequest)
                .json(error_body(&e.to_string()));
        }
    };

    let result = schema::execute(schema, data).await;
    if result.is_err() {
        debug!(errors = result.errors.len(), "graphql request finished with errors");
    }

    match serde_json::to_vec(&result) {
        Ok(bytes) => Response::json(bytes),
        Err(e) => Response::builder()
            .status(Status::InternalServerError)
            .json(error_body(&e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::store::UrlStore;

    async fn post(schema: &UrlSchema, body: &str) -> (Status, Value) {
        let res = graphql(schema, Request::for_test("/graphql", body.to_owned())).await;
        let body = serde_json::from_slice(res.body()).unwrap_or(Value::Null);
        (res.status_code(), body)
    }

    fn query(q: &str) -> String {
        json!({ "query": q }).to_string()
    }

    fn seeded() -> UrlSchema {
        schema::build_schema(UrlStore::seeded())
    }

    #[tokio::test]
    async fn lists_seed() {
        let (status, body) = post(&seeded(), &query("{ urllist { name siteurl } }")).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body["data"]["urllist"], json!([{ "name": "google", "siteurl": "google.com" }]));
    }

    #[tokio::test]
    async fn malformed_json_is_400_with_error_field() {
        let (status, body) = post(&seeded(), r#"{"query": "#).await;
        assert_eq!(status, Status::BadRequest);
        assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn wrong_json_shape_is_400() {
        let (status, body) = post(&seeded(), r#"{"query": 7}"#).await;
        assert_eq!(status, Status::BadRequest);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn missing_query_is_200_with_errors() {
        let (status, body) = post(&seeded(), r#"{"other": true}"#).await;
        assert_eq!(status, Status::Ok);
        assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn null_query_is_200_with_errors() {
        let (status, body) = post(&seeded(), r#"{"query": null}"#).await;
        assert_eq!(status, Status::Ok);
        assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn trailing_data_after_body_is_ignored() {
        let (status, body) = post(&seeded(), r#"{"query":"{ urllist { name } }"} {}"#).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body["data"]["urllist"], json!([{ "name": "google" }]));

        let (status, _) = post(&seeded(), r#"{"query":"{ urllist { name } }"} garbage"#).await;
        assert_eq!(status, Status::Ok);
    }

    #[tokio::test]
    async fn empty_body_is_400() {
        let (status, body) = post(&seeded(), "  ").await;
        assert_eq!(status, Status::BadRequest);
        assert!(body["error"].as_str().is_some_and(|m| m.contains("EOF")));
    }

    #[tokio::test]
    async fn query_errors_stay_200() {
        let (status, body) = post(&seeded(), &query("{ nosuchfield }")).await;
        assert_eq!(status, Status::Ok);
        assert!(body["errors"].is_array());
    }

    #[tokio::test]
    async fn variables_and_operation_name() {
        let schema = seeded();
        let body = json!({
            "query": "query A($n: String) { url(name: $n) { siteurl } } query B { urllist { name } }",
            "variables": { "n": "google" },
            "operationName": "A",
        });

        let (status, body) = post(&schema, &body.to_string()).await;
        assert_eq!(status, Status::Ok);
        assert_eq!(body["data"], json!({ "url": { "siteurl": "google.com" } }));
    }

    #[tokio::test]
    async fn responses_are_json() {
        let res = graphql(&seeded(), Request::for_test("/graphql", query("{ urllist { name } }"))).await;
        assert_eq!(res.content_type(), "application/json");

        let res = graphql(&seeded(), Request::for_test("/graphql", "not json")).await;
        assert_eq!(res.content_type(), "application/json");
    }
}
