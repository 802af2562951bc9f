use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Fields a client may supply when creating a note. The id and both
/// timestamps are server-assigned and never accepted from the client.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNoteRequest {
    #[validate(length(max = 200))]
    pub title: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_is_valid() {
        let payload: CreateNoteRequest = serde_json::from_str("{}").unwrap();
        assert!(payload.title.is_none());
        assert!(payload.content.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_title_at_limit_is_valid() {
        let payload = CreateNoteRequest {
            title: Some("a".repeat(200)),
            content: None,
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_title_over_limit_is_rejected() {
        let payload = CreateNoteRequest {
            title: Some("a".repeat(201)),
            content: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_server_assigned_fields_are_ignored() {
        let payload: CreateNoteRequest = serde_json::from_str(
            r#"{"title":"A","content":"B","id":42,"created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(payload.title.as_deref(), Some("A"));
        assert_eq!(payload.content.as_deref(), Some("B"));
    }
}
