//! Monthly invoice aggregation.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use service_core::error::AppError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::models::{Invoice, InvoiceStatus, PaymentStatus, ShipmentFilter, ShipmentStatus};
use crate::services::repository::{InvoiceRepository, ShipmentRepository};

/// Generate a consolidated invoice for one business and one calendar month.
///
/// Selects the business's delivered, payment-confirmed shipments created in
/// that month and embeds them by value: the invoice is a snapshot and its
/// total is never recomputed afterwards. There is deliberately no
/// once-per-month guard; generating again yields an independent invoice
/// over whatever is eligible at that point.
#[instrument(skip(shipments, invoices, business_name))]
pub async fn generate_monthly_invoice(
    shipments: &ShipmentRepository,
    invoices: &InvoiceRepository,
    business_id: &str,
    business_name: &str,
    month: &str,
    due_days: i64,
) -> Result<Invoice, AppError> {
    let month = normalize_month(month)?;

    let filter = ShipmentFilter {
        business_id: Some(business_id.to_string()),
        status: Some(ShipmentStatus::Delivered),
        ..Default::default()
    };
    let selected: Vec<_> = shipments
        .list(&filter)
        .await?
        .into_iter()
        .filter(|s| {
            s.payment_status == PaymentStatus::Confirmed
                && s.created_at.format("%Y-%m").to_string() == month
        })
        .collect();

    let total_amount: Decimal = selected
        .iter()
        .map(|s| Decimal::from(s.price.unwrap_or(0)))
        .sum();

    let now = Utc::now();
    let invoice = Invoice {
        id: format!("inv-{}", Uuid::new_v4()),
        business_id: business_id.to_string(),
        business_name: business_name.to_string(),
        month: month.clone(),
        shipments: selected,
        total_amount,
        status: InvoiceStatus::Pending,
        due_date: now + Duration::days(due_days),
        created_at: now,
        paid_at: None,
    };

    info!(
        invoice_id = %invoice.id,
        month = %month,
        shipment_count = invoice.shipments.len(),
        total_amount = %invoice.total_amount,
        "Monthly invoice generated"
    );

    invoices.insert(invoice).await
}

/// Reduce a month argument to its "YYYY-MM" prefix, rejecting garbage.
fn normalize_month(month: &str) -> Result<String, AppError> {
    let prefix: String = month.chars().take(7).collect();
    NaiveDate::parse_from_str(&format!("{prefix}-01"), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid month '{month}', expected YYYY-MM")))?;
    Ok(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_prefix_is_accepted_with_or_without_day() {
        assert_eq!(normalize_month("2025-01").unwrap(), "2025-01");
        assert_eq!(normalize_month("2025-01-15").unwrap(), "2025-01");
    }

    #[test]
    fn garbage_months_are_rejected() {
        assert!(normalize_month("not-a-month").is_err());
        assert!(normalize_month("2025-13").is_err());
        assert!(normalize_month("").is_err());
    }
}
