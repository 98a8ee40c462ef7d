//! Store connection and error types.

use redis::aio::ConnectionManager;
use thiserror::Error;
use tracing::info;

/// Anything that can go wrong talking to the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis connection error: {0}")]
    Connection(#[from] redis::RedisError),

    #[error("Document encoding error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store operation failed: {0}")]
    OperationFailed(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Shared handle to the store. Cloning is cheap; each operation works on
/// its own clone.
pub type RedisPool = ConnectionManager;

/// Connect once at startup, e.g. to `redis://127.0.0.1:6379`.
///
/// Fails when the URL is invalid or the server cannot be reached.
pub async fn init_pool(redis_url: &str) -> StoreResult<RedisPool> {
    let client = redis::Client::open(redis_url)?;
    let pool = ConnectionManager::new(client).await?;
    info!("Connected to document store");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_a_connection_error() {
        let err = init_pool("not a url").await.err().unwrap();
        assert!(matches!(err, StoreError::Connection(_)));
    }

    #[test]
    fn test_operation_failed_message() {
        let err = StoreError::OperationFailed("document missing".to_string());
        assert_eq!(err.to_string(), "Store operation failed: document missing");
    }
}
