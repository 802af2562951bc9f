mod db;
mod error;
mod note;
mod reminder;
mod routes;
mod state;

use anyhow::Context;
use db::{create_pool, init_schema};
use routes::create_router;
use state::{AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,notepad_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let database_url = config.database_url();

    tracing::info!("Connecting to database...");
    let db = create_pool(&database_url)
        .await
        .context("failed to connect to database")?;

    // Ensure tables exist
    tracing::info!("Initializing schema...");
    init_schema(&db).await.context("failed to initialize schema")?;

    // Create repositories
    let note_repository = note::NoteRepository::new(db.clone());
    let reminder_repository = reminder::ReminderRepository::new(db.clone());

    // Create services
    let note_service = note::NoteService::new(note_repository);
    let reminder_service = reminder::ReminderService::new(reminder_repository);

    // Create application state
    let state = AppState {
        note_service,
        reminder_service,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
