//! The named-URL record.

use async_graphql::Object;

/// A named site address.
///
/// Names are not unique. The empty record (`Url::default()`, both fields
/// empty) stands in for "no such record" in lookups and deletes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Url {
    pub name: String,
    pub siteurl: String,
}

impl Url {
    pub fn new(name: impl Into<String>, siteurl: impl Into<String>) -> Self {
        Self { name: name.into(), siteurl: siteurl.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.siteurl.is_empty()
    }
}

/// GraphQL object `Url`. Both fields are published as nullable `String`.
#[Object]
impl Url {
    async fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    async fn siteurl(&self) -> Option<&str> {
        Some(&self.siteurl)
    }
}
