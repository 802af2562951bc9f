pub mod reminder_dto;
pub mod reminder_handlers;
pub mod reminder_models;
pub mod reminder_repository;
pub mod reminder_service;

pub use reminder_dto::CreateReminderRequest;
pub use reminder_handlers::{create_reminder, delete_reminder, get_reminder, get_reminders};
pub use reminder_models::Reminder;
pub use reminder_repository::ReminderRepository;
pub use reminder_service::ReminderService;
