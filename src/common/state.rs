// Application state shared across all modules

use sqlx::SqlitePool;

/// Application state containing the shared database pool. Initialized
/// once at startup and injected into every handler via `Extension`.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}
