//! Application state.

use itemdash_store::ItemStore;
use std::sync::Arc;

use crate::client::ItemsClient;
use crate::view::{DashboardLayout, TableLayout};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub items_client: ItemsClient,
    pub layout: Arc<dyn DashboardLayout>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>, api_base: impl Into<String>) -> Self {
        Self {
            store,
            items_client: ItemsClient::new(api_base),
            layout: Arc::new(TableLayout),
        }
    }

    /// Swap the page presentation.
    pub fn with_layout(mut self, layout: Arc<dyn DashboardLayout>) -> Self {
        self.layout = layout;
        self
    }
}
