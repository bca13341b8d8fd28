use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A company row, and the shape returned from create/update responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Listing shape: code and name only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// Single-company fetch shape, with the ids of its invoices embedded.
#[derive(Debug, Serialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i64>,
}

/// Required fields are still modeled as `Option` so that an incomplete
/// body reaches the validators instead of being rejected by the JSON
/// extractor; the contract maps missing fields to 500, not 422.
#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Updates are full replacement: both fields are required.
#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Serialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetail,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}
