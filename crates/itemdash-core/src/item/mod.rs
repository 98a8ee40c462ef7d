//! List and create operations over the items collection.

pub mod model;

use crate::error::{DashError, DashResult};
use itemdash_store::ItemStore;
use model::{CreateItemRequest, DashboardItem};
use tracing::info;

/// Message returned when a create request lacks a title or description.
pub const MISSING_FIELDS_MESSAGE: &str = "Title and description are required";

/// Every item, newest first.
pub async fn list_items(store: &dyn ItemStore) -> DashResult<Vec<DashboardItem>> {
    let stored = store.list_newest_first().await?;
    Ok(stored.into_iter().map(DashboardItem::from_stored).collect())
}

/// Validate and insert a new item, returning its store-assigned id.
pub async fn create_item(store: &dyn ItemStore, req: CreateItemRequest) -> DashResult<String> {
    let doc = req
        .into_document()
        .ok_or_else(|| DashError::validation(MISSING_FIELDS_MESSAGE))?;

    let stored = store.add(doc).await?;
    info!(id = %stored.id, status = %stored.document.status, "Created dashboard item");
    Ok(stored.id)
}
