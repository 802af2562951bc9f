use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reminder {
    pub id: i64,
    pub message: String,
    pub due_date: DateTime<Utc>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
