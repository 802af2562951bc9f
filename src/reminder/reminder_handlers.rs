use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use super::{reminder_dto::CreateReminderRequest, reminder_models::Reminder};
use crate::{
    error::{AppError, Result},
    state::AppState,
};

#[derive(Deserialize)]
pub struct ListParams {
    skip: Option<i64>,
    limit: Option<i64>,
}

/// Create a new reminder
#[utoipa::path(
    post,
    path = "/api/v1/reminders/",
    request_body = CreateReminderRequest,
    responses(
        (status = 201, description = "Reminder created", body = Reminder),
        (status = 422, description = "Validation error")
    ),
    tag = "reminders"
)]
pub async fn create_reminder(
    State(state): State<AppState>,
    Json(payload): Json<CreateReminderRequest>,
) -> Result<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reminder = state.reminder_service.create_reminder(payload).await?;

    Ok((StatusCode::CREATED, Json(reminder)))
}

/// List reminders with offset/limit pagination
#[utoipa::path(
    get,
    path = "/api/v1/reminders/",
    params(
        ("skip" = Option<i64>, Query, description = "Number of reminders to skip"),
        ("limit" = Option<i64>, Query, description = "Maximum number of reminders to return")
    ),
    responses(
        (status = 200, description = "List of reminders", body = Vec<Reminder>)
    ),
    tag = "reminders"
)]
pub async fn get_reminders(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Reminder>>> {
    let skip = params.skip.unwrap_or(0);
    let limit = params.limit.unwrap_or(10);

    let reminders = state.reminder_service.list_reminders(skip, limit).await?;

    Ok(Json(reminders))
}

/// Get a single reminder by ID
#[utoipa::path(
    get,
    path = "/api/v1/reminders/{id}",
    params(
        ("id" = i64, Path, description = "Reminder ID")
    ),
    responses(
        (status = 200, description = "Reminder found", body = Reminder),
        (status = 404, description = "Reminder not found")
    ),
    tag = "reminders"
)]
pub async fn get_reminder(
    State(state): State<AppState>,
    Path(reminder_id): Path<i64>,
) -> Result<Json<Reminder>> {
    let reminder = state.reminder_service.get_reminder(reminder_id).await?;

    Ok(Json(reminder))
}

/// Delete a reminder and return its last value
#[utoipa::path(
    delete,
    path = "/api/v1/reminders/{id}",
    params(
        ("id" = i64, Path, description = "Reminder ID")
    ),
    responses(
        (status = 200, description = "Deleted reminder", body = Reminder),
        (status = 404, description = "Reminder not found")
    ),
    tag = "reminders"
)]
pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(reminder_id): Path<i64>,
) -> Result<Json<Reminder>> {
    let reminder = state.reminder_service.delete_reminder(reminder_id).await?;

    Ok(Json(reminder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_default_to_0_and_10() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip.unwrap_or(0), 0);
        assert_eq!(params.limit.unwrap_or(10), 10);
    }
}
