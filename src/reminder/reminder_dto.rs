use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Fields a client may supply when creating a reminder. The id, creation
/// timestamp, and completed flag are server-assigned and never accepted
/// from the client.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReminderRequest {
    #[validate(length(min = 1, max = 255))]
    pub message: String,
    pub due_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_payload() {
        let payload: CreateReminderRequest = serde_json::from_str(
            r#"{"message":"water the plants","due_date":"2026-01-01T09:00:00Z"}"#,
        )
        .unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_missing_message_is_rejected() {
        let result: std::result::Result<CreateReminderRequest, _> =
            serde_json::from_str(r#"{"due_date":"2026-01-01T09:00:00Z"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_due_date_is_rejected() {
        let result: std::result::Result<CreateReminderRequest, _> =
            serde_json::from_str(r#"{"message":"water the plants"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_message_fails_validation() {
        let payload = CreateReminderRequest {
            message: String::new(),
            due_date: Utc::now(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_message_over_limit_fails_validation() {
        let payload = CreateReminderRequest {
            message: "a".repeat(256),
            due_date: Utc::now(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_completed_in_payload_is_ignored() {
        let payload: CreateReminderRequest = serde_json::from_str(
            r#"{"message":"m","due_date":"2026-01-01T09:00:00Z","completed":true,"id":7}"#,
        )
        .unwrap();
        assert_eq!(payload.message, "m");
    }
}
