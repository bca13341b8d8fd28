use super::models::{
    CreateInvoiceRequest, InvoiceDetailResponse, InvoiceListResponse, InvoiceResponse,
    StatusResponse, UpdateInvoiceRequest,
};
use super::services::InvoicesService;
use super::validators::parse_invoice_id;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Invoice CRUD Handlers
// ============================================================================

/// GET /invoices - List all invoices
pub async fn get_invoices(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let invoices_service = InvoicesService::new(app_state.db.clone());

    let invoices = invoices_service.get_all_invoices().await?;

    Ok(Json(InvoiceListResponse { invoices }))
}

/// GET /invoices/:id - Get an invoice with its company embedded
pub async fn get_invoice(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice_id = parse_invoice_id(&id)?;

    let app_state = state.read().await;
    let invoices_service = InvoicesService::new(app_state.db.clone());

    let invoice = invoices_service.get_invoice_detail(invoice_id).await?;

    Ok(Json(InvoiceDetailResponse { invoice }))
}

/// POST /invoices - Create a new invoice
pub async fn create_invoice(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let invoices_service = InvoicesService::new(app_state.db.clone());

    let invoice = invoices_service.create_invoice(request).await?;

    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// PUT /invoices/:id - Update an invoice's amount and paid state
pub async fn update_invoice(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice_id = parse_invoice_id(&id)?;

    let app_state = state.read().await;
    let invoices_service = InvoicesService::new(app_state.db.clone());

    let invoice = invoices_service.update_invoice(invoice_id, request).await?;

    Ok(Json(InvoiceResponse { invoice }))
}

/// DELETE /invoices/:id - Delete an invoice
pub async fn delete_invoice(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice_id = parse_invoice_id(&id)?;

    let app_state = state.read().await;
    let invoices_service = InvoicesService::new(app_state.db.clone());

    invoices_service.delete_invoice(invoice_id).await?;

    Ok(Json(StatusResponse {
        status: "deleted".to_string(),
    }))
}
