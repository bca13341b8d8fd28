use super::models::{
    CompanyDetailResponse, CompanyListResponse, CompanyResponse, CreateCompanyRequest,
    StatusResponse, UpdateCompanyRequest,
};
use super::services::CompaniesService;
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
// Company CRUD Handlers
// ============================================================================

/// GET /companies - List all companies
pub async fn get_companies(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let companies_service = CompaniesService::new(app_state.db.clone());

    let companies = companies_service.get_all_companies().await?;

    Ok(Json(CompanyListResponse { companies }))
}

/// GET /companies/:code - Get a company with its invoice ids
pub async fn get_company(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let companies_service = CompaniesService::new(app_state.db.clone());

    let company = companies_service.get_company_detail(&code).await?;

    Ok(Json(CompanyDetailResponse { company }))
}

/// POST /companies - Create a new company, deriving its code from the name
pub async fn create_company(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let companies_service = CompaniesService::new(app_state.db.clone());

    let company = companies_service.create_company(request).await?;

    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// PUT /companies/:code - Replace a company's name and description
pub async fn update_company(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(code): Path<String>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let companies_service = CompaniesService::new(app_state.db.clone());

    let company = companies_service.update_company(&code, request).await?;

    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/:code - Delete a company
pub async fn delete_company(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let companies_service = CompaniesService::new(app_state.db.clone());

    companies_service.delete_company(&code).await?;

    Ok(Json(StatusResponse {
        status: "deleted".to_string(),
    }))
}
