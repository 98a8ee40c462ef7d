//! HTTP client the dashboard page uses to read the items API.

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::API_PATH;

/// Any reason the page could not get a usable item list.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API responded with {0}")]
    Status(StatusCode),
}

/// `createdAt` as it may appear on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    /// Seconds-since-epoch wrapper.
    Seconds {
        #[serde(rename = "_seconds")]
        seconds: i64,
        #[serde(rename = "_nanoseconds", default)]
        nanoseconds: u32,
    },
    /// Milliseconds since the epoch.
    Millis(f64),
    /// A date string.
    Text(String),
}

/// One item as the page receives it. Fields are optional here so that a
/// sparse document still renders.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<CreatedAt>,
}

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Option<Vec<ItemView>>,
}

/// Reads the items API over HTTP, bypassing every cache.
#[derive(Clone)]
pub struct ItemsClient {
    http: reqwest::Client,
    api_base: String,
}

impl ItemsClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }

    pub fn items_url(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), API_PATH)
    }

    /// Fetch the current item list.
    pub async fn fetch_items(&self) -> Result<Vec<ItemView>, FetchError> {
        let res = self
            .http
            .get(self.items_url())
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(FetchError::Status(res.status()));
        }

        let body: ListResponse = res.json().await?;
        Ok(body.items.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_url() {
        assert_eq!(
            ItemsClient::new("http://localhost:3000/").items_url(),
            "http://localhost:3000/api/dashboard"
        );
    }

    #[test]
    fn test_created_at_shapes() {
        let wrapped: CreatedAt =
            serde_json::from_str(r#"{"_seconds": 10, "_nanoseconds": 5}"#).unwrap();
        assert_eq!(
            wrapped,
            CreatedAt::Seconds {
                seconds: 10,
                nanoseconds: 5
            }
        );

        let text: CreatedAt = serde_json::from_str(r#""2026-10-19T15:05:00Z""#).unwrap();
        assert_eq!(text, CreatedAt::Text("2026-10-19T15:05:00Z".to_string()));

        let millis: CreatedAt = serde_json::from_str("1760886300000").unwrap();
        assert_eq!(millis, CreatedAt::Millis(1_760_886_300_000.0));
    }

    #[test]
    fn test_sparse_item_decodes() {
        let item: ItemView =
            serde_json::from_str(r#"{"id":"a","title":"t","createdAt":null}"#).unwrap();
        assert_eq!(item.description, "");
        assert!(item.status.is_none());
        assert!(item.created_at.is_none());
    }
}
