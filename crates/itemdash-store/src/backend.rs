//! The collection contract the rest of the workspace programs against.

use async_trait::async_trait;

use crate::client::{RedisPool, StoreResult};
use crate::document::{NewItemDocument, StoredItem};
use crate::queries::items;

/// A collection of dashboard item documents.
///
/// Implementations assign the id and `createdAt` on insert and list
/// documents in descending `createdAt` order.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert a document and return it with its assigned id and timestamp.
    async fn add(&self, doc: NewItemDocument) -> StoreResult<StoredItem>;

    /// Every document, newest first.
    async fn list_newest_first(&self) -> StoreResult<Vec<StoredItem>>;
}

/// Redis-backed collection.
#[derive(Clone)]
pub struct RedisItemStore {
    pool: RedisPool,
    collection: String,
}

impl RedisItemStore {
    pub fn new(pool: RedisPool, collection: impl Into<String>) -> Self {
        Self {
            pool,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }
}

#[async_trait]
impl ItemStore for RedisItemStore {
    async fn add(&self, doc: NewItemDocument) -> StoreResult<StoredItem> {
        items::add_item(&self.pool, &self.collection, doc).await
    }

    async fn list_newest_first(&self) -> StoreResult<Vec<StoredItem>> {
        items::list_items(&self.pool, &self.collection).await
    }
}
