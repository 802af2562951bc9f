use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::reminder_models::Reminder;
use crate::error::Result;

#[derive(Clone)]
pub struct ReminderRepository {
    pool: PgPool,
}

impl ReminderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, message: &str, due_date: DateTime<Utc>) -> Result<Reminder> {
        // completed defaults to false in the schema.
        let reminder = sqlx::query_as::<_, Reminder>(
            "INSERT INTO reminders (message, due_date, created_at)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(message)
        .bind(due_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(reminder)
    }

    pub async fn find_all(&self, skip: i64, limit: i64) -> Result<Vec<Reminder>> {
        let reminders =
            sqlx::query_as::<_, Reminder>("SELECT * FROM reminders ORDER BY id OFFSET $1 LIMIT $2")
                .bind(skip)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;

        Ok(reminders)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Reminder>> {
        let reminder = sqlx::query_as::<_, Reminder>("SELECT * FROM reminders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(reminder)
    }

    /// Removes the reminder and returns its last value in one statement;
    /// None if no such id exists.
    pub async fn delete(&self, id: i64) -> Result<Option<Reminder>> {
        let reminder =
            sqlx::query_as::<_, Reminder>("DELETE FROM reminders WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(reminder)
    }
}
