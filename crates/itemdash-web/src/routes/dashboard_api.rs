//! Items API handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use itemdash_core::{item, CreateItemRequest, DashboardItem};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

pub const CREATED_MESSAGE: &str = "Item created successfully";

#[derive(Debug, Serialize, Deserialize)]
pub struct ListItemsResponse {
    pub items: Vec<DashboardItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateItemResponse {
    pub id: String,
    pub message: String,
}

/// GET /api/dashboard - All items, newest first.
pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let items = item::list_items(state.store.as_ref())
        .await
        .map_err(ApiError::fetch)?;

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(ListItemsResponse { items }),
    ))
}

/// POST /api/dashboard - Create an item.
///
/// The body is read as JSON whatever its content type.
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateItemResponse>, ApiError> {
    let value: serde_json::Value =
        serde_json::from_slice(&body).map_err(ApiError::unreadable_create_body)?;
    let req = CreateItemRequest::from_json(value)
        .ok_or_else(|| ApiError::unreadable_create_body("body is null"))?;

    let id = item::create_item(state.store.as_ref(), req)
        .await
        .map_err(ApiError::create)?;

    Ok(Json(CreateItemResponse {
        id,
        message: CREATED_MESSAGE.to_string(),
    }))
}
