use crate::error::{AppError, Result};
use crate::reminder::reminder_dto::CreateReminderRequest;
use crate::reminder::reminder_models::Reminder;
use crate::reminder::reminder_repository::ReminderRepository;

/// Service layer for reminder-related logic.
#[derive(Clone)]
pub struct ReminderService {
    repo: ReminderRepository,
}

impl ReminderService {
    pub fn new(repo: ReminderRepository) -> Self {
        Self { repo }
    }

    pub async fn list_reminders(&self, skip: i64, limit: i64) -> Result<Vec<Reminder>> {
        self.repo.find_all(skip, limit).await
    }

    pub async fn get_reminder(&self, reminder_id: i64) -> Result<Reminder> {
        self.repo
            .find_by_id(reminder_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reminder not found".into()))
    }

    pub async fn create_reminder(&self, payload: CreateReminderRequest) -> Result<Reminder> {
        self.repo.create(&payload.message, payload.due_date).await
    }

    pub async fn delete_reminder(&self, reminder_id: i64) -> Result<Reminder> {
        self.repo
            .delete(reminder_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reminder not found".into()))
    }
}
