//! In-memory URL collection.
//!
//! The collection is ordered: [`UrlStore::create`] appends, and
//! [`UrlStore::delete`] removes the first record with a matching name while
//! the rest keep their relative order. Every operation holds the lock for
//! exactly its own duration, so concurrent requests see each one as atomic.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::record::Url;

/// Name and address of the record every fresh service starts with.
pub const SEED: (&str, &str) = ("google", "google.com");

/// Shared handle to the URL collection. Clones share the same records.
#[derive(Clone, Debug, Default)]
pub struct UrlStore {
    urls: Arc<RwLock<Vec<Url>>>,
}

impl UrlStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding only the [`SEED`] record.
    pub fn seeded() -> Self {
        Self::from_records(vec![Url::new(SEED.0, SEED.1)])
    }

    pub fn from_records(urls: Vec<Url>) -> Self {
        Self { urls: Arc::new(RwLock::new(urls)) }
    }

    /// First record named `name`, or the empty record.
    pub async fn get(&self, name: &str) -> Url {
        self.urls.read().await
            .iter()
            .find(|u| u.name == name)
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of every record in insertion order.
    pub async fn list(&self) -> Vec<Url> {
        self.urls.read().await.clone()
    }

    /// Appends a record and returns it. Duplicate names are allowed.
    pub async fn create(&self, name: String, siteurl: String) -> Url {
        let url = Url { name, siteurl };
        let mut urls = self.urls.write().await;
        urls.push(url.clone());
        debug!(name = %url.name, total = urls.len(), "url created");
        url
    }

    /// Removes the first record named `name` and returns it, or the empty
    /// record if nothing matched.
    pub async fn delete(&self, name: &str) -> Url {
        let mut urls = self.urls.write().await;
        match urls.iter().position(|u| u.name == name) {
            Some(i) => {
                let removed = urls.remove(i);
                debug!(name = %removed.name, total = urls.len(), "url deleted");
                removed
            }
            None => Url::default(),
        }
    }

    pub async fn len(&self) -> usize {
        self.urls.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.urls.read().await.is_empty()
    }
}
