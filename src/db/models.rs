/// Data models for stored rows
///
/// The store is a plain key/value table; values are JSON documents.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored key
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct KvEntry {
    pub key: String,
    pub value: String,
    pub updated_at: String, // ISO 8601
}
