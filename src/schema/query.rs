use async_graphql::{Context, Object, Result};

use crate::record::Url;
use crate::store::UrlStore;

pub struct QueryRoot;

#[Object(name = "RootQuery")]
impl QueryRoot {
    /// Fetch a single URL by name
    async fn url(&self, ctx: &Context<'_>, name: Option<String>) -> Result<Url> {
        let store = ctx.data::<UrlStore>()?;
        Ok(match name {
            Some(name) => store.get(&name).await,
            None => Url::default(),
        })
    }

    /// List every URL
    async fn urllist(&self, ctx: &Context<'_>) -> Result<Vec<Url>> {
        Ok(ctx.data::<UrlStore>()?.list().await)
    }
}
