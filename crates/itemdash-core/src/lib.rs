//! itemdash Core Library
//!
//! The dashboard item model and the list/create operations over a store.

pub mod error;
pub mod item;

pub use error::{DashError, DashResult};
pub use item::model::{CreateItemRequest, DashboardItem, DEFAULT_STATUS};
pub use itemdash_store::StoreTimestamp;
