use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use tokio::sync::RwLock;

use crate::{DocumentStore, Filter, Result, StoreError};

/// In-memory document store implementation for testing.
///
/// Behaves like a reachable MongoDB server until switched offline, after
/// which every operation fails with [`StoreError::Unavailable`].
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    offline: Arc<AtomicBool>,
}

impl InMemoryDocumentStore {
    /// Creates a new empty, reachable store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a document to `collection`, creating the collection if needed.
    pub async fn insert(&self, collection: &str, document: Document) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
    }

    /// Returns the number of documents stored in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Simulates the server becoming unreachable (`true`) or coming back (`false`).
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Removes every document from every collection.
    pub async fn clear(&self) {
        self.collections.write().await.clear();
    }

    fn ensure_reachable(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store is offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn ping(&self) -> Result<Document> {
        self.ensure_reachable()?;
        Ok(doc! { "ok": 1.0 })
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>> {
        self.ensure_reachable()?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)))
            .cloned())
    }
}
