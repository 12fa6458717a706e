//! Note store, scoped to the owning user on every operation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::Note;

/// CRUD over notes. Every method takes the authenticated `owner_id` and
/// restricts itself to that owner's rows: a note that exists but belongs to
/// someone else surfaces as [`StoreError::NotFound`], indistinguishable from
/// one that doesn't exist at all.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All of the owner's notes, most recently updated first.
    async fn list(&self, owner_id: Uuid) -> Result<Vec<Note>, StoreError>;

    async fn get(&self, owner_id: Uuid, note_id: Uuid) -> Result<Note, StoreError>;

    async fn create(&self, owner_id: Uuid, title: &str, body: &str) -> Result<Note, StoreError>;

    /// Full replace of title and body; refreshes `updated_at`.
    async fn update(
        &self,
        owner_id: Uuid,
        note_id: Uuid,
        title: &str,
        body: &str,
    ) -> Result<Note, StoreError>;

    async fn delete(&self, owner_id: Uuid, note_id: Uuid) -> Result<(), StoreError>;
}

/// PostgreSQL implementation of [`NoteStore`].
pub struct PgNoteStore {
    pool: PgPool,
}

impl PgNoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn list(&self, owner_id: Uuid) -> Result<Vec<Note>, StoreError> {
        let notes: Vec<Note> =
            sqlx::query_as("SELECT * FROM notes WHERE owner_id = $1 ORDER BY updated_at DESC")
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(notes)
    }

    async fn get(&self, owner_id: Uuid, note_id: Uuid) -> Result<Note, StoreError> {
        let note: Option<Note> =
            sqlx::query_as("SELECT * FROM notes WHERE id = $1 AND owner_id = $2")
                .bind(note_id)
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?;
        note.ok_or(StoreError::NotFound)
    }

    async fn create(&self, owner_id: Uuid, title: &str, body: &str) -> Result<Note, StoreError> {
        let note: Note = sqlx::query_as(
            "INSERT INTO notes (owner_id, title, body) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(owner_id)
        .bind(title)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;
        Ok(note)
    }

    async fn update(
        &self,
        owner_id: Uuid,
        note_id: Uuid,
        title: &str,
        body: &str,
    ) -> Result<Note, StoreError> {
        let note: Option<Note> = sqlx::query_as(
            "UPDATE notes SET title = $3, body = $4, updated_at = now()
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(note_id)
        .bind(owner_id)
        .bind(title)
        .bind(body)
        .fetch_optional(&self.pool)
        .await?;
        note.ok_or(StoreError::NotFound)
    }

    async fn delete(&self, owner_id: Uuid, note_id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND owner_id = $2")
            .bind(note_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
