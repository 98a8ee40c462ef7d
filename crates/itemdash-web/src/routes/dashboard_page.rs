//! Dashboard page handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::error;

use crate::state::AppState;
use crate::view::DashboardPage;

/// GET / - Redirect to the dashboard.
pub async fn index() -> Redirect {
    Redirect::to("/dashboard")
}

/// GET /dashboard - Fetch the item list from the API and render it.
pub async fn dashboard(State(state): State<AppState>) -> Response {
    let page = match state.items_client.fetch_items().await {
        Ok(items) => DashboardPage::loaded(items),
        Err(e) => {
            error!(
                error = %e,
                url = %state.items_client.items_url(),
                "Error fetching dashboard data"
            );
            DashboardPage::failed()
        }
    };

    match state.layout.render(&page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("Template error: {}", e)),
        )
            .into_response(),
    }
}
