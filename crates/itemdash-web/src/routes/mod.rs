//! Route handlers.

pub mod dashboard_api;
pub mod dashboard_page;
