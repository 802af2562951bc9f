use crate::{
    note::{self, CreateNoteRequest, Note},
    reminder::{self, CreateReminderRequest, Reminder},
    state::AppState,
};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        note::note_handlers::get_notes,
        note::note_handlers::get_note,
        note::note_handlers::create_note,
        note::note_handlers::delete_note,
        reminder::reminder_handlers::get_reminders,
        reminder::reminder_handlers::get_reminder,
        reminder::reminder_handlers::create_reminder,
        reminder::reminder_handlers::delete_reminder,
    ),
    components(
        schemas(
            Note,
            CreateNoteRequest,
            Reminder,
            CreateReminderRequest,
        )
    ),
    tags(
        (name = "notes", description = "Note management endpoints"),
        (name = "reminders", description = "Reminder management endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let note_routes = Router::new()
        .route("/", get(note::get_notes).post(note::create_note))
        .route("/:id", get(note::get_note).delete(note::delete_note));

    let reminder_routes = Router::new()
        .route(
            "/",
            get(reminder::get_reminders).post(reminder::create_reminder),
        )
        .route(
            "/:id",
            get(reminder::get_reminder).delete(reminder::delete_reminder),
        );

    // Combine all routes under the versioned prefix
    let api_routes = Router::new()
        .nest("/notes", note_routes)
        .nest("/reminders", reminder_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
