use chrono::Utc;
use sqlx::PgPool;

use super::note_models::Note;
use crate::error::Result;

#[derive(Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, title: Option<&str>, content: Option<&str>) -> Result<Note> {
        // Single clock sample, so created_at equals updated_at on insert.
        let now = Utc::now();
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (title, content, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING *",
        )
        .bind(title)
        .bind(content)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    pub async fn find_all(&self, skip: i64, limit: i64) -> Result<Vec<Note>> {
        let notes =
            sqlx::query_as::<_, Note>("SELECT * FROM notes ORDER BY id OFFSET $1 LIMIT $2")
                .bind(skip)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;

        Ok(notes)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Note>> {
        let note = sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(note)
    }

    /// Removes the note and returns its last value in one statement; None if
    /// no such id exists.
    pub async fn delete(&self, id: i64) -> Result<Option<Note>> {
        let note = sqlx::query_as::<_, Note>("DELETE FROM notes WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(note)
    }
}
