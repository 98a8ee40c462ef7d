//! Document shapes stored in the items collection.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned creation time, serialized as a seconds-since-epoch wrapper
/// (`{"_seconds": .., "_nanoseconds": ..}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StoreTimestamp {
    #[serde(rename = "_seconds")]
    pub seconds: i64,
    #[serde(rename = "_nanoseconds")]
    pub nanoseconds: u32,
}

impl StoreTimestamp {
    /// Build from microseconds since the Unix epoch.
    pub fn from_micros(micros: i64) -> Self {
        Self {
            seconds: micros.div_euclid(1_000_000),
            nanoseconds: (micros.rem_euclid(1_000_000) * 1_000) as u32,
        }
    }

    /// Microseconds since the Unix epoch (sub-microsecond precision is dropped).
    pub fn as_micros(&self) -> i64 {
        self.seconds * 1_000_000 + i64::from(self.nanoseconds / 1_000)
    }

    /// Current wall-clock time of this process.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp(),
            nanoseconds: dt.timestamp_subsec_nanos(),
        }
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.nanoseconds).single()
    }
}

/// Fields written by a create. The store adds the id and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItemDocument {
    pub title: String,
    pub description: String,
    pub status: String,
}

/// A stored document as read back from the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDocument {
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: StoreTimestamp,
}

impl ItemDocument {
    pub fn from_new(doc: NewItemDocument, created_at: StoreTimestamp) -> Self {
        Self {
            title: doc.title,
            description: doc.description,
            status: doc.status,
            created_at,
        }
    }
}

/// A document together with the identifier the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    pub id: String,
    pub document: ItemDocument,
}
