use super::models::{
    CreateInvoiceRequest, Invoice, InvoiceDetail, InvoiceSummary, UpdateInvoiceRequest,
};
use crate::common::{ApiError, Validator};
use crate::companies::models::Company;
use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;
use tracing::info;

pub struct InvoicesService {
    db: SqlitePool,
}

impl InvoicesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all invoices
    pub async fn get_all_invoices(&self) -> Result<Vec<InvoiceSummary>, ApiError> {
        let invoices = sqlx::query_as::<_, InvoiceSummary>(
            r#"
            SELECT id, comp_code
            FROM invoices
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(invoices)
    }

    /// Get invoice by id
    pub async fn get_invoice_by_id(&self, invoice_id: i64) -> Result<Invoice, ApiError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, comp_code, amt, paid, add_date, paid_date
            FROM invoices
            WHERE id = ?
            "#,
        )
        .bind(invoice_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound(format!("Invoice not found: {}", invoice_id)))?;

        Ok(invoice)
    }

    /// Get invoice by id with its company embedded. Two reads, not a
    /// transaction; a concurrent company update between them can show
    /// through in the join.
    pub async fn get_invoice_detail(&self, invoice_id: i64) -> Result<InvoiceDetail, ApiError> {
        let invoice = self.get_invoice_by_id(invoice_id).await?;

        let company = sqlx::query_as::<_, Company>(
            r#"
            SELECT code, name, description
            FROM companies
            WHERE code = ?
            "#,
        )
        .bind(&invoice.comp_code)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound(format!("Company not found: {}", invoice.comp_code)))?;

        Ok(InvoiceDetail {
            id: invoice.id,
            company,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
        })
    }

    /// Create a new invoice. Starts unpaid with add_date stamped now; a
    /// comp_code that references no company fails the foreign-key check
    /// and surfaces as a store error (500).
    pub async fn create_invoice(&self, request: CreateInvoiceRequest) -> Result<Invoice, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let comp_code = request.comp_code.unwrap_or_default();
        let amt = request.amt.unwrap_or_default();
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let result = sqlx::query(
            r#"
            INSERT INTO invoices (comp_code, amt, paid, add_date, paid_date)
            VALUES (?, ?, 0, ?, NULL)
            "#,
        )
        .bind(&comp_code)
        .bind(amt)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let invoice_id = result.last_insert_rowid();

        info!("Created invoice {} for company {}", invoice_id, comp_code);

        self.get_invoice_by_id(invoice_id).await
    }

    /// Update an existing invoice's amount and paid flag, advancing the
    /// paid_date state machine.
    pub async fn update_invoice(
        &self,
        invoice_id: i64,
        request: UpdateInvoiceRequest,
    ) -> Result<Invoice, ApiError> {
        // Existence check comes before field validation: an unknown id
        // is a 404 even when the body is also bad.
        let current = self.get_invoice_by_id(invoice_id).await?;

        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let amt = request.amt.unwrap_or_default();
        let paid = request.paid.unwrap_or_default();
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let paid_date = next_paid_date(&current, paid, &now);

        sqlx::query(
            r#"
            UPDATE invoices
            SET amt = ?, paid = ?, paid_date = ?
            WHERE id = ?
            "#,
        )
        .bind(amt)
        .bind(paid)
        .bind(&paid_date)
        .bind(invoice_id)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!("Updated invoice {}", invoice_id);

        self.get_invoice_by_id(invoice_id).await
    }

    /// Delete an invoice
    pub async fn delete_invoice(&self, invoice_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = ?")
            .bind(invoice_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Invoice not found: {}",
                invoice_id
            )));
        }

        info!("Deleted invoice {}", invoice_id);

        Ok(())
    }
}

/// Paid-state transition: moving to paid stamps the payment time, moving
/// back to unpaid clears it, and resubmitting the same state leaves the
/// existing stamp untouched.
pub(crate) fn next_paid_date(current: &Invoice, paid: bool, now: &str) -> Option<String> {
    match (current.paid, paid) {
        (false, true) => Some(now.to_string()),
        (true, false) => None,
        _ => current.paid_date.clone(),
    }
}
