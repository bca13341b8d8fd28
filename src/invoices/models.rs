use crate::companies::models::Company;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An invoice row, and the shape returned from create/update responses.
/// Timestamps are RFC 3339 UTC strings; `paid_date` is null while the
/// invoice is unpaid.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i64,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: String,
    pub paid_date: Option<String>,
}

/// Listing shape: id and company code only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvoiceSummary {
    pub id: i64,
    pub comp_code: String,
}

/// Single-invoice fetch shape: the company relation is resolved and
/// embedded in place of the bare code.
#[derive(Debug, Serialize)]
pub struct InvoiceDetail {
    pub id: i64,
    pub company: Company,
    pub amt: f64,
    pub paid: bool,
    pub add_date: String,
    pub paid_date: Option<String>,
}

/// Required fields are modeled as `Option` so an incomplete body reaches
/// the validators and maps to 500 per the contract.
#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub comp_code: Option<String>,
    pub amt: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub amt: Option<f64>,
    pub paid: Option<bool>,
}

#[derive(Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Serialize)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceDetail,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}
