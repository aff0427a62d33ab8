//! Persistence gateway for saved messages.
//!
//! One table, two operations: append a record, read back the newest `limit`
//! records. No transactions, no updates, no deletes.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::message::SavedMessage;

/// Cap on how many records a single list query returns.
pub const RECENT_LIMIT: i64 = 50;

/// Failure talking to the document store. Error text is surfaced to HTTP
/// callers verbatim in the `detail` field.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to save message: {0}")]
    Insert(#[source] sqlx::Error),

    #[error("Failed to retrieve messages: {0}")]
    Query(#[source] sqlx::Error),
}

/// Gateway to the saved-message collection.
/// Behind a trait object so handlers can be tested against an in-memory stub.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Appends one record.
    async fn insert(&self, message: &SavedMessage) -> Result<(), StorageError>;

    /// Returns up to `limit` records, newest first. An empty collection yields
    /// an empty vec, not an error.
    async fn recent(&self, limit: i64) -> Result<Vec<SavedMessage>, StorageError>;
}

/// Postgres-backed store over the shared connection pool.
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn insert(&self, message: &SavedMessage) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO saved_messages (id, emotion, language, text, timestamp) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(message.id)
        .bind(&message.emotion)
        .bind(&message.language)
        .bind(&message.text)
        .bind(message.timestamp)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Insert)?;

        Ok(())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<SavedMessage>, StorageError> {
        sqlx::query_as(
            "SELECT id, emotion, language, text, timestamp FROM saved_messages \
             ORDER BY timestamp DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Query)
    }
}
