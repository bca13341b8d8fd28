// src/lib.rs
//! REST API over companies and their invoices, backed by SQLite.

use axum::{extract::Extension, Router};
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod common;
pub mod companies;
pub mod invoices;

use common::{ApiError, AppState};

/// Builds the application router with every resource mounted and the
/// shared state attached. The binary and the HTTP test suites both go
/// through this, so they exercise the same routing table.
pub fn app(state: Arc<RwLock<AppState>>) -> Router {
    Router::new()
        .merge(companies::companies_routes())
        .merge(invoices::invoices_routes())
        .fallback(unknown_route)
        .layer(Extension(state))
}

async fn unknown_route() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}
