pub mod note_dto;
pub mod note_handlers;
pub mod note_models;
pub mod note_repository;
pub mod note_service;

pub use note_dto::CreateNoteRequest;
pub use note_handlers::{create_note, delete_note, get_note, get_notes};
pub use note_models::Note;
pub use note_repository::NoteRepository;
pub use note_service::NoteService;
