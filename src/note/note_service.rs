use crate::error::{AppError, Result};
use crate::note::note_dto::CreateNoteRequest;
use crate::note::note_models::Note;
use crate::note::note_repository::NoteRepository;

/// Service layer for note-related logic.
#[derive(Clone)]
pub struct NoteService {
    repo: NoteRepository,
}

impl NoteService {
    pub fn new(repo: NoteRepository) -> Self {
        Self { repo }
    }

    pub async fn list_notes(&self, skip: i64, limit: i64) -> Result<Vec<Note>> {
        self.repo.find_all(skip, limit).await
    }

    pub async fn get_note(&self, note_id: i64) -> Result<Note> {
        self.repo
            .find_by_id(note_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Note not found".into()))
    }

    pub async fn create_note(&self, payload: CreateNoteRequest) -> Result<Note> {
        self.repo
            .create(payload.title.as_deref(), payload.content.as_deref())
            .await
    }

    pub async fn delete_note(&self, note_id: i64) -> Result<Note> {
        self.repo
            .delete(note_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Note not found".into()))
    }
}
