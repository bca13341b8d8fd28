use super::models::{
    Company, CompanyDetail, CompanySummary, CreateCompanyRequest, UpdateCompanyRequest,
};
use super::validators::slugify;
use crate::common::{ApiError, Validator};
use sqlx::SqlitePool;
use tracing::info;

pub struct CompaniesService {
    db: SqlitePool,
}

impl CompaniesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all companies
    pub async fn get_all_companies(&self) -> Result<Vec<CompanySummary>, ApiError> {
        let companies = sqlx::query_as::<_, CompanySummary>(
            r#"
            SELECT code, name
            FROM companies
            ORDER BY code ASC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(companies)
    }

    /// Get company by code
    pub async fn get_company_by_code(&self, code: &str) -> Result<Company, ApiError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            SELECT code, name, description
            FROM companies
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound(format!("Company not found: {}", code)))?;

        Ok(company)
    }

    /// Get company by code with the ids of its invoices embedded.
    /// Two reads, not a transaction.
    pub async fn get_company_detail(&self, code: &str) -> Result<CompanyDetail, ApiError> {
        let company = self.get_company_by_code(code).await?;

        let invoice_ids: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT id
            FROM invoices
            WHERE comp_code = ?
            ORDER BY id ASC
            "#,
        )
        .bind(code)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(CompanyDetail {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices: invoice_ids.into_iter().map(|(id,)| id).collect(),
        })
    }

    /// Create a new company. The code is derived from the name; a
    /// collision with an existing code surfaces as a store error (500).
    pub async fn create_company(&self, request: CreateCompanyRequest) -> Result<Company, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let name = request.name.unwrap_or_default();
        let code = slugify(&name);

        sqlx::query(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&code)
        .bind(&name)
        .bind(&request.description)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!("Created company: {} ({})", name, code);

        self.get_company_by_code(&code).await
    }

    /// Update an existing company. Full replacement: both name and
    /// description are required. The code never changes.
    pub async fn update_company(
        &self,
        code: &str,
        request: UpdateCompanyRequest,
    ) -> Result<Company, ApiError> {
        // Existence check comes before field validation: unknown code is
        // a 404 even when the body is also bad.
        self.get_company_by_code(code).await?;

        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        sqlx::query(
            r#"
            UPDATE companies
            SET name = ?, description = ?
            WHERE code = ?
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(code)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!("Updated company: {}", code);

        self.get_company_by_code(code).await
    }

    /// Delete a company. Its invoices are removed by the store's
    /// cascade rule.
    pub async fn delete_company(&self, code: &str) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM companies WHERE code = ?")
            .bind(code)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Company not found: {}", code)));
        }

        info!("Deleted company: {}", code);

        Ok(())
    }
}
