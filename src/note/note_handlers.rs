use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use super::{note_dto::CreateNoteRequest, note_models::Note};
use crate::{
    error::{AppError, Result},
    state::AppState,
};

#[derive(Deserialize)]
pub struct ListParams {
    skip: Option<i64>,
    limit: Option<i64>,
}

/// Create a new note
#[utoipa::path(
    post,
    path = "/api/v1/notes/",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 422, description = "Validation error")
    ),
    tag = "notes"
)]
pub async fn create_note(
    State(state): State<AppState>,
    Json(payload): Json<CreateNoteRequest>,
) -> Result<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let note = state.note_service.create_note(payload).await?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// List notes with offset/limit pagination
#[utoipa::path(
    get,
    path = "/api/v1/notes/",
    params(
        ("skip" = Option<i64>, Query, description = "Number of notes to skip"),
        ("limit" = Option<i64>, Query, description = "Maximum number of notes to return")
    ),
    responses(
        (status = 200, description = "List of notes", body = Vec<Note>)
    ),
    tag = "notes"
)]
pub async fn get_notes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Note>>> {
    let skip = params.skip.unwrap_or(0);
    let limit = params.limit.unwrap_or(10);

    let notes = state.note_service.list_notes(skip, limit).await?;

    Ok(Json(notes))
}

/// Get a single note by ID
#[utoipa::path(
    get,
    path = "/api/v1/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = Note),
        (status = 404, description = "Note not found")
    ),
    tag = "notes"
)]
pub async fn get_note(
    State(state): State<AppState>,
    Path(note_id): Path<i64>,
) -> Result<Json<Note>> {
    let note = state.note_service.get_note(note_id).await?;

    Ok(Json(note))
}

/// Delete a note and return its last value
#[utoipa::path(
    delete,
    path = "/api/v1/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Deleted note", body = Note),
        (status = 404, description = "Note not found")
    ),
    tag = "notes"
)]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<i64>,
) -> Result<Json<Note>> {
    let note = state.note_service.delete_note(note_id).await?;

    Ok(Json(note))
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

    #[test]
    fn test_list_params_passthrough() {
        let params: ListParams = serde_json::from_str(r#"{"skip":1,"limit":5}"#).unwrap();
        assert_eq!(params.skip, Some(1));
        assert_eq!(params.limit, Some(5));
    }
}
