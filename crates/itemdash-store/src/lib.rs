//! itemdash Document Store
//!
//! Collection-based persistence for dashboard items. Redis is the managed
//! backend; an in-memory collection with the same contract backs tests and
//! local demos.

pub mod backend;
pub mod client;
pub mod document;
pub mod memory;
pub mod queries;

pub use backend::{ItemStore, RedisItemStore};
pub use client::{RedisPool, StoreError, StoreResult, init_pool};
pub use document::{ItemDocument, NewItemDocument, StoreTimestamp, StoredItem};
pub use memory::MemoryItemStore;
pub use queries::items;

/// Collection the dashboard reads and writes.
pub const DEFAULT_COLLECTION: &str = "dashboard_items";
