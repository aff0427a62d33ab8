use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted motivational message with its emotion/language tags.
///
/// Write-once, read-many: rows are never updated or deleted, only appended and
/// read back newest-first.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedMessage {
    pub id: Uuid,
    pub emotion: String,
    pub language: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl SavedMessage {
    /// Builds a new record with a fresh v4 id and the current server time.
    /// Identical content saved twice yields two distinct records.
    pub fn new(emotion: String, language: String, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            emotion,
            language,
            text,
            timestamp: Utc::now(),
        }
    }
}
