use super::models::{CreateInvoiceRequest, UpdateInvoiceRequest};
use crate::common::{ApiError, ValidationResult, Validator};

impl Validator<CreateInvoiceRequest> for CreateInvoiceRequest {
    fn validate(&self, data: &CreateInvoiceRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.comp_code {
            Some(comp_code) if !comp_code.trim().is_empty() => {}
            _ => result.add_error("comp_code", "Company code is required"),
        }

        if data.amt.is_none() {
            result.add_error("amt", "Invoice amount is required");
        }

        result
    }
}

impl Validator<UpdateInvoiceRequest> for UpdateInvoiceRequest {
    fn validate(&self, data: &UpdateInvoiceRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.amt.is_none() {
            result.add_error("amt", "Invoice amount is required");
        }

        if data.paid.is_none() {
            result.add_error("paid", "Paid flag is required");
        }

        result
    }
}

/// Invoice ids are numeric; anything else behaves as an unknown invoice
/// rather than a malformed request.
pub fn parse_invoice_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound(format!("Invoice not found: {}", raw)))
}
