//! In-process collection with the same contract as the Redis backend.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::ItemStore;
use crate::client::{StoreError, StoreResult};
use crate::document::{ItemDocument, NewItemDocument, StoreTimestamp, StoredItem};

/// Documents kept in insertion order, which is also `createdAt` order.
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<StoredItem>>,
    offline: AtomicBool,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following operation fail with a store fault (or recover).
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.is_offline() {
            return Err(StoreError::OperationFailed("memory store is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn add(&self, doc: NewItemDocument) -> StoreResult<StoredItem> {
        self.check_online()?;
        let mut items = self.items.write().await;

        // Strictly increasing even when the wall clock stalls or steps back.
        let mut created_at = StoreTimestamp::now();
        if let Some(last) = items.last() {
            if created_at <= last.document.created_at {
                created_at = StoreTimestamp::from_micros(last.document.created_at.as_micros() + 1);
            }
        }

        let item = StoredItem {
            id: Uuid::new_v4().to_string(),
            document: ItemDocument::from_new(doc, created_at),
        };
        items.push(item.clone());
        Ok(item)
    }

    async fn list_newest_first(&self) -> StoreResult<Vec<StoredItem>> {
        self.check_online()?;
        let items = self.items.read().await;
        Ok(items.iter().rev().cloned().collect())
    }
}
