use async_graphql::{Context, Object, Result};

use crate::record::Url;
use crate::store::UrlStore;

pub struct MutationRoot;

#[Object(name = "RootMutation")]
impl MutationRoot {
    /// Create a new URL
    async fn create_url(&self, ctx: &Context<'_>, name: String, siteurl: String) -> Result<Url> {
        Ok(ctx.data::<UrlStore>()?.create(name, siteurl).await)
    }

    /// Delete a URL by name
    async fn delete_url(&self, ctx: &Context<'_>, name: Option<String>) -> Result<Url> {
        let store = ctx.data::<UrlStore>()?;
        Ok(match name {
            Some(name) => store.delete(&name).await,
            None => Url::default(),
        })
    }
}
