//! itemdash Web Server
//!
//! Axum-based server for the items API and the dashboard page.

pub mod client;
pub mod error;
pub mod routes;
pub mod state;
pub mod view;

use axum::{routing::get, Router};
use itemdash_store::ItemStore;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Path of the items API, relative to the server root.
pub const API_PATH: &str = "/api/dashboard";

/// Where and how the server listens.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL the dashboard page fetches the API from.
    pub api_base: Option<String>,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured API base, or this server's own address.
    pub fn resolved_api_base(&self) -> String {
        if let Some(base) = &self.api_base {
            return base.trim_end_matches('/').to_string();
        }
        let host = match self.host.as_str() {
            "0.0.0.0" => "127.0.0.1",
            "::" | "[::]" => "[::1]",
            other => other,
        };
        format!("http://{}:{}", host, self.port)
    }
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/dashboard",
            get(routes::dashboard_api::list_items).post(routes::dashboard_api::create_item),
        )
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::dashboard_page::index))
        .route("/dashboard", get(routes::dashboard_page::dashboard))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(store: Arc<dyn ItemStore>, config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(store, config.resolved_api_base());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
