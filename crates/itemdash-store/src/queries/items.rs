//! Dashboard item queries, Redis implementation.
//!
//! Layout for a collection `c`:
//! - `itemdash:c:doc:{id}` hash with `data` (JSON user fields) and
//!   `created_at` (microseconds since epoch, from the Redis server clock)
//! - `itemdash:c:by_created_at` sorted set of ids scored by `created_at`
//! - `itemdash:c:clock` last assigned `created_at`, keeps it strictly increasing

use std::sync::LazyLock;

use crate::client::{RedisPool, StoreError, StoreResult};
use crate::document::{ItemDocument, NewItemDocument, StoreTimestamp, StoredItem};
use redis::{AsyncCommands, Script};
use tracing::{debug, error};
use uuid::Uuid;

const KEY_PREFIX: &str = "itemdash";

/// Assigns `created_at` from the server clock and writes document and index
/// in one atomic step.
static ADD_ITEM: LazyLock<Script> = LazyLock::new(|| {
    Script::new(
        r#"
local now = redis.call('TIME')
local created = tonumber(now[1]) * 1000000 + tonumber(now[2])
local last = tonumber(redis.call('GET', KEYS[3]) or '0')
if created <= last then
  created = last + 1
end
local stamp = string.format('%d', created)
redis.call('SET', KEYS[3], stamp)
redis.call('HSET', KEYS[1], 'data', ARGV[1], 'created_at', stamp)
redis.call('ZADD', KEYS[2], stamp, ARGV[2])
return created
"#,
    )
});

pub fn doc_key(collection: &str, id: &str) -> String {
    format!("{}:{}:doc:{}", KEY_PREFIX, collection, id)
}

pub fn index_key(collection: &str) -> String {
    format!("{}:{}:by_created_at", KEY_PREFIX, collection)
}

pub fn clock_key(collection: &str) -> String {
    format!("{}:{}:clock", KEY_PREFIX, collection)
}

/// Insert a document. The id and `createdAt` are assigned here, never by
/// the caller.
pub async fn add_item(
    pool: &RedisPool,
    collection: &str,
    doc: NewItemDocument,
) -> StoreResult<StoredItem> {
    let id = Uuid::new_v4().to_string();
    let json = serde_json::to_string(&doc)?;

    let mut conn = pool.clone();
    let created_micros: i64 = ADD_ITEM
        .key(doc_key(collection, &id))
        .key(index_key(collection))
        .key(clock_key(collection))
        .arg(json)
        .arg(&id)
        .invoke_async(&mut conn)
        .await?;

    debug!(%id, collection, created_micros, "Stored dashboard item");

    Ok(StoredItem {
        id,
        document: ItemDocument::from_new(doc, StoreTimestamp::from_micros(created_micros)),
    })
}

/// All documents in the collection, newest first.
///
/// An index entry whose document is missing or unreadable fails the whole
/// listing.
pub async fn list_items(pool: &RedisPool, collection: &str) -> StoreResult<Vec<StoredItem>> {
    let mut conn = pool.clone();
    let ids: Vec<String> = conn.zrevrange(index_key(collection), 0, -1).await?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut pipe = redis::pipe();
    for id in &ids {
        pipe.cmd("HMGET")
            .arg(doc_key(collection, id))
            .arg("data")
            .arg("created_at");
    }
    let rows: Vec<(Option<String>, Option<i64>)> = pipe.query_async(&mut conn).await?;

    ids.into_iter()
        .zip(rows)
        .map(|(id, (data, created_at))| -> StoreResult<StoredItem> {
            let document = decode_document(data.as_deref(), created_at).inspect_err(|err| {
                error!(%id, collection, error = %err, "Unreadable dashboard item");
            })?;
            Ok(StoredItem { id, document })
        })
        .collect()
}

/// Turn the raw hash fields of one document into an [`ItemDocument`].
pub fn decode_document(data: Option<&str>, created_at: Option<i64>) -> StoreResult<ItemDocument> {
    let data = data.ok_or_else(|| StoreError::OperationFailed("document missing".to_string()))?;
    let created_at = created_at
        .ok_or_else(|| StoreError::OperationFailed("created_at missing".to_string()))?;
    let doc: NewItemDocument = serde_json::from_str(data)?;
    Ok(ItemDocument::from_new(doc, StoreTimestamp::from_micros(created_at)))
}
