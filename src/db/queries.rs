/// SQL query functions for the key/value store
///
/// All queries use sqlx with bound parameters.

use crate::db::models::*;
use crate::db::Database;
use crate::error::Result;
use chrono::Utc;

impl Database {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The raw stored value
    /// * `Ok(None)` - Nothing stored under that key
    pub async fn get_value(&self, key: &str) -> Result<Option<String>> {
        let entry = self.get_entry(key).await?;
        Ok(entry.map(|e| e.value))
    }

    /// Read the full row for `key`
    pub async fn get_entry(&self, key: &str) -> Result<Option<KvEntry>> {
        let entry = sqlx::query_as::<_, KvEntry>(
            "SELECT key, value, updated_at FROM kv_store WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(self.pool())
        .await?;

        Ok(entry)
    }

    /// Store `value` under `key`, replacing what was there
    pub async fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Remove `key`; returns whether it existed
    pub async fn remove_value(&self, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get_value() {
        let db = Database::new_test().await.unwrap();

        db.set_value("searchHistory", r#"["tokyo"]"#).await.unwrap();

        let value = db.get_value("searchHistory").await.unwrap();
        assert_eq!(value, Some(r#"["tokyo"]"#.to_string()));
    }

    #[tokio::test]
    async fn test_missing_key() {
        let db = Database::new_test().await.unwrap();

        assert_eq!(db.get_value("nope").await.unwrap(), None);
        assert!(!db.remove_value("nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_set_value_overwrites() {
        let db = Database::new_test().await.unwrap();

        db.set_value("k", "first").await.unwrap();
        db.set_value("k", "second").await.unwrap();

        assert_eq!(db.get_value("k").await.unwrap(), Some("second".to_string()));

        let rows: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM kv_store")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(rows.0, 1);
    }

    #[tokio::test]
    async fn test_entry_has_timestamp() {
        let db = Database::new_test().await.unwrap();

        db.set_value("k", "v").await.unwrap();
        let entry = db.get_entry("k").await.unwrap().unwrap();

        assert!(chrono::DateTime::parse_from_rfc3339(&entry.updated_at).is_ok());
    }

    #[tokio::test]
    async fn test_remove_value() {
        let db = Database::new_test().await.unwrap();

        db.set_value("k", "v").await.unwrap();
        assert!(db.remove_value("k").await.unwrap());
        assert_eq!(db.get_value("k").await.unwrap(), None);
    }
}
