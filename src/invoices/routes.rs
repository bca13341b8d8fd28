use super::handlers;
use axum::{routing::get, Router};

/// Creates the invoices router with all invoice routes
pub fn invoices_routes() -> Router {
    Router::new()
        .route(
            "/invoices",
            get(handlers::get_invoices).post(handlers::create_invoice),
        )
        .route(
            "/invoices/:id",
            get(handlers::get_invoice)
                .put(handlers::update_invoice)
                .delete(handlers::delete_invoice),
        )
}
