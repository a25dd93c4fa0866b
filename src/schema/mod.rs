//! GraphQL schema over the URL store.
//!
//! ```graphql
//! { url(name: "google") { name siteurl } }
//! { urllist { name siteurl } }
//! mutation { createUrl(name: "youtube", siteurl: "youtube.com") { name siteurl } }
//! mutation { deleteUrl(name: "youtube") { name siteurl } }
//! ```
//!
//! Lookups that find nothing resolve to the empty record instead of an
//! error. Parse, validation and coercion failures come back in the
//! response's `errors` array.

mod mutation;
mod query;

use async_graphql::{EmptySubscription, Schema};

use crate::store::UrlStore;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The service's GraphQL schema type.
pub type UrlSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with `store` attached as resolver data.
pub fn build_schema(store: UrlStore) -> UrlSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Runs one GraphQL request against `schema`.
pub async fn execute(
    schema: &UrlSchema,
    request: impl Into<async_graphql::Request>,
) -> async_graphql::Response {
    schema.execute(request).await
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    async fn run(schema: &UrlSchema, query: &str) -> Value {
        let res = execute(schema, query).await;
        serde_json::to_value(&res).expect("response serializes")
    }

    fn seeded() -> UrlSchema {
        build_schema(UrlStore::seeded())
    }

    #[tokio::test]
    async fn urllist_starts_with_seed() {
        let out = run(&seeded(), "{ urllist { name siteurl } }").await;
        assert_eq!(out, json!({ "data": { "urllist": [{ "name": "google", "siteurl": "google.com" }] } }));
    }

    #[tokio::test]
    async fn url_by_name() {
        let out = run(&seeded(), r#"{ url(name: "google") { siteurl } }"#).await;
        assert_eq!(out["data"]["url"]["siteurl"], "google.com");
    }

    #[tokio::test]
    async fn missing_url_is_empty_record() {
        let schema = seeded();

        let out = run(&schema, r#"{ url(name: "bing") { name siteurl } }"#).await;
        assert_eq!(out["data"]["url"], json!({ "name": "", "siteurl": "" }));
        assert!(out.get("errors").is_none());

        let out = run(&schema, "{ url { name } }").await;
        assert_eq!(out["data"]["url"]["name"], "");
    }

    #[tokio::test]
    async fn create_then_delete() {
        let schema = seeded();

        let out = run(&schema, r#"mutation { createUrl(name: "youtube", siteurl: "youtube.com") { name siteurl } }"#).await;
        assert_eq!(out["data"]["createUrl"], json!({ "name": "youtube", "siteurl": "youtube.com" }));

        let out = run(&schema, "{ urllist { name } }").await;
        assert_eq!(out["data"]["urllist"], json!([{ "name": "google" }, { "name": "youtube" }]));

        let out = run(&schema, r#"mutation { deleteUrl(name: "google") { name siteurl } }"#).await;
        assert_eq!(out["data"]["deleteUrl"], json!({ "name": "google", "siteurl": "google.com" }));

        let out = run(&schema, "{ urllist { name siteurl } }").await;
        assert_eq!(out["data"]["urllist"], json!([{ "name": "youtube", "siteurl": "youtube.com" }]));
    }

    #[tokio::test]
    async fn delete_missing_is_empty_record() {
        let out = run(&seeded(), r#"mutation { deleteUrl(name: "bing") { name } }"#).await;
        assert_eq!(out["data"]["deleteUrl"]["name"], "");
    }

    #[tokio::test]
    async fn delete_without_name_matches_nothing() {
        let store = UrlStore::seeded();
        let schema = build_schema(store.clone());

        let out = run(&schema, "mutation { deleteUrl { name siteurl } }").await;
        assert_eq!(out["data"]["deleteUrl"], json!({ "name": "", "siteurl": "" }));
        assert!(out.get("errors").is_none());

        let out = run(&schema, "mutation { deleteUrl(name: null) { name } }").await;
        assert_eq!(out["data"]["deleteUrl"]["name"], "");

        assert_eq!(store.list().await, vec![crate::Url::new("google", "google.com")]);
    }

    #[tokio::test]
    async fn url_fields_are_nullable_strings() {
        let out = run(&seeded(), r#"{ __type(name: "Url") { fields { name type { kind name } } } }"#).await;
        let fields = out["data"]["__type"]["fields"].as_array().cloned().unwrap_or_default();

        assert_eq!(fields.len(), 2);
        for field in &fields {
            assert_eq!(field["type"], json!({ "kind": "SCALAR", "name": "String" }), "field {}", field["name"]);
        }
    }

    #[tokio::test]
    async fn create_requires_both_arguments() {
        let schema = seeded();
        let out = run(&schema, r#"mutation { createUrl(name: "youtube") { name } }"#).await;
        assert!(out["errors"].as_array().is_some_and(|e| !e.is_empty()));

        let out = run(&schema, "{ urllist { name } }").await;
        assert_eq!(out["data"]["urllist"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn wrong_argument_type_is_reported_in_errors() {
        let out = run(&seeded(), "{ url(name: 42) { name } }").await;
        assert!(out["errors"].as_array().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn syntax_error_is_reported_in_errors() {
        let out = run(&seeded(), "{ urllist { name ").await;
        assert!(out["errors"].as_array().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn root_type_names() {
        let out = run(&seeded(), "{ __schema { queryType { name } mutationType { name } } }").await;
        assert_eq!(out["data"]["__schema"]["queryType"]["name"], "RootQuery");
        assert_eq!(out["data"]["__schema"]["mutationType"]["name"], "RootMutation");
    }
}
