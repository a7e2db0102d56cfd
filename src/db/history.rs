//! Summary history database operations
//!
//! Rows are written once per successful upload and never mutated. Audio
//! blobs are excluded from listings and fetched separately for playback.

use chrono::Utc;
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// History entry as shown in listings (audio omitted)
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct HistoryEntry {
    pub id: String,
    pub user_id: String,
    pub pdf_filename: String,
    pub summary: String,
    pub created_at: String,
}

/// History repository
pub struct HistoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> HistoryRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record one completed upload
    pub async fn create(
        &self,
        user_id: &str,
        pdf_filename: &str,
        summary: &str,
        audio: &[u8],
    ) -> Result<HistoryEntry> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO history (id, user_id, pdf_filename, summary, audio, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(pdf_filename)
        .bind(summary)
        .bind(audio)
        .bind(&now)
        .execute(self.pool)
        .await?;

        self.get(&id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to fetch created history entry".to_string()))
    }

    /// Get a specific entry
    pub async fn get(&self, id: &str) -> Result<Option<HistoryEntry>> {
        let entry = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT id, user_id, pdf_filename, summary, created_at
            FROM history
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(entry)
    }

    /// List a user's entries, newest first
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<HistoryEntry>> {
        let entries = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT id, user_id, pdf_filename, summary, created_at
            FROM history
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Fetch the audio for an entry, but only for its owner.
    /// Returns None for unknown ids and for entries owned by someone else.
    pub async fn get_audio(&self, id: &str, user_id: &str) -> Result<Option<Vec<u8>>> {
        let row: Option<(Vec<u8>,)> = sqlx::query_as(
            r#"
            SELECT audio
            FROM history
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|(audio,)| audio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{test_pool, UserRepository};

    #[tokio::test]
    async fn create_list_newest_first() {
        let pool = test_pool().await;
        let user = UserRepository::new(&pool)
            .create("alice", "hash")
            .await
            .unwrap();
        let repo = HistoryRepository::new(&pool);

        let first = repo
            .create(&user.id, "a.pdf", "First summary.", b"mp3-a")
            .await
            .unwrap();
        let second = repo
            .create(&user.id, "b.pdf", "Second summary.", b"mp3-b")
            .await
            .unwrap();

        let entries = repo.list_for_user(&user.id).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second.id);
        assert_eq!(entries[1].id, first.id);
    }

    #[tokio::test]
    async fn audio_is_owner_scoped() {
        let pool = test_pool().await;
        let users = UserRepository::new(&pool);
        let alice = users.create("alice", "hash").await.unwrap();
        let bob = users.create("bob", "hash").await.unwrap();

        let repo = HistoryRepository::new(&pool);
        let entry = repo
            .create(&alice.id, "a.pdf", "Summary.", b"mp3-bytes")
            .await
            .unwrap();

        let audio = repo.get_audio(&entry.id, &alice.id).await.unwrap();
        assert_eq!(audio.as_deref(), Some(&b"mp3-bytes"[..]));

        // Someone else's id behaves exactly like a missing row
        assert!(repo.get_audio(&entry.id, &bob.id).await.unwrap().is_none());
        assert!(repo
            .get_audio("no-such-id", &alice.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn entries_require_existing_user() {
        let pool = test_pool().await;
        let repo = HistoryRepository::new(&pool);

        let err = repo
            .create("ghost-user", "a.pdf", "Summary.", b"mp3")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
