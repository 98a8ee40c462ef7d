//! Dashboard item domain models.

use itemdash_store::{NewItemDocument, StoreTimestamp, StoredItem};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status given to items created without one.
pub const DEFAULT_STATUS: &str = "pending";

/// A dashboard item as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: StoreTimestamp,
}

impl DashboardItem {
    /// Merge the store-assigned id with the stored fields.
    pub fn from_stored(item: StoredItem) -> Self {
        let doc = item.document;
        Self {
            id: item.id,
            title: doc.title,
            description: doc.description,
            status: doc.status,
            created_at: doc.created_at,
        }
    }
}

/// Body of a create request.
///
/// Fields are kept as raw JSON so that any value can be checked for
/// presence; [`CreateItemRequest::into_document`] does the checking.
#[derive(Debug, Clone, Default)]
pub struct CreateItemRequest {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub status: Option<Value>,
}

impl CreateItemRequest {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: Some(Value::from(title)),
            description: Some(Value::from(description)),
            status: None,
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(Value::from(status));
        self
    }

    /// Read a parsed request body.
    ///
    /// Returns `None` for a `null` body. Any other non-object body has no
    /// fields at all.
    pub fn from_json(body: Value) -> Option<Self> {
        match body {
            Value::Null => None,
            Value::Object(mut fields) => Some(Self {
                title: take_field(&mut fields, "title"),
                description: take_field(&mut fields, "description"),
                status: take_field(&mut fields, "status"),
            }),
            _ => Some(Self::default()),
        }
    }

    /// Check required fields and fill in the default status.
    ///
    /// Returns `None` when `title` or `description` is missing or falsy.
    pub fn into_document(self) -> Option<NewItemDocument> {
        let title = present_text(self.title)?;
        let description = present_text(self.description)?;
        let status = present_text(self.status).unwrap_or_else(|| DEFAULT_STATUS.to_string());
        Some(NewItemDocument {
            title,
            description,
            status,
        })
    }
}

fn take_field(fields: &mut Map<String, Value>, name: &str) -> Option<Value> {
    fields.remove(name)
}

/// `null`, `false`, `0` and `""` count as absent.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Strings are stored as-is; other present values as their JSON text.
fn present_text(value: Option<Value>) -> Option<String> {
    match value? {
        v if is_falsy(&v) => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
