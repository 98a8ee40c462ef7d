//! Server-rendered dashboard page.
//!
//! The page model is built once from the API result; a [`DashboardLayout`]
//! turns it into HTML. The table layout is the one in use. A card grid would
//! be a second `DashboardLayout` over the same [`DashboardPage`].

pub mod format;

use askama::Template;

use crate::client::ItemView;
use format::{format_created_at, StatusTone};

/// Banner text shown whenever the item list could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load dashboard data";

/// One rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub status_class: &'static str,
    pub created_at: String,
}

impl ItemRow {
    pub fn from_view(item: ItemView) -> Self {
        let tone = StatusTone::from_status(item.status.as_deref());
        Self {
            created_at: format_created_at(item.created_at.as_ref()),
            id: item.id,
            title: item.title,
            description: item.description,
            status: item.status.unwrap_or_default(),
            status_class: tone.css_class(),
        }
    }
}

/// Everything a layout needs to draw the page.
#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    pub rows: Vec<ItemRow>,
    pub error: Option<String>,
}

impl DashboardPage {
    pub fn loaded(items: Vec<ItemView>) -> Self {
        Self {
            rows: items.into_iter().map(ItemRow::from_view).collect(),
            error: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            rows: Vec::new(),
            error: Some(LOAD_ERROR_MESSAGE.to_string()),
        }
    }

    pub fn total_items(&self) -> usize {
        self.rows.len()
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }
}

/// A presentation of the dashboard page.
pub trait DashboardLayout: Send + Sync {
    fn render(&self, page: &DashboardPage) -> Result<String, askama::Error>;
}

/// Items as rows of a table.
pub struct TableLayout;

#[derive(Template)]
#[template(path = "dashboard_table.html")]
struct TableTemplate<'a> {
    page: &'a DashboardPage,
}

impl DashboardLayout for TableLayout {
    fn render(&self, page: &DashboardPage) -> Result<String, askama::Error> {
        TableTemplate { page }.render()
    }
}
