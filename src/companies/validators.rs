use super::models::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::common::{ValidationResult, Validator};

impl Validator<CreateCompanyRequest> for CreateCompanyRequest {
    fn validate(&self, data: &CreateCompanyRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.name {
            Some(name) if !name.trim().is_empty() => {
                if name.len() > 255 {
                    result.add_error("name", "Company name must not exceed 255 characters");
                }
                if slugify(name).is_empty() {
                    result.add_error("name", "Company name must contain alphanumeric characters");
                }
            }
            _ => result.add_error("name", "Company name is required"),
        }

        result
    }
}

impl Validator<UpdateCompanyRequest> for UpdateCompanyRequest {
    fn validate(&self, data: &UpdateCompanyRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.name {
            Some(name) if !name.trim().is_empty() => {}
            _ => result.add_error("name", "Company name is required"),
        }

        if data.description.is_none() {
            result.add_error("description", "Company description is required");
        }

        result
    }
}

/// Derives a company code from its display name: lower-cased, with
/// spaces and punctuation stripped. Deterministic, so "Google" always
/// yields "google".
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}
