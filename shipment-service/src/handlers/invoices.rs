//! Invoice handlers: monthly generation, listing, payment.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

use crate::{
    dtos::{GenerateInvoiceRequest, ListInvoicesQuery},
    models::Invoice,
    services::invoicing,
    AppState,
};

/// Generate the consolidated invoice for one business and month.
pub async fn generate_invoice(
    State(state): State<AppState>,
    Json(payload): Json<GenerateInvoiceRequest>,
) -> Result<(StatusCode, Json<Invoice>), AppError> {
    payload.validate()?;

    let invoice = invoicing::generate_monthly_invoice(
        &state.shipments,
        &state.invoices,
        &payload.business_id,
        &payload.business_name,
        &payload.month,
        state.config.billing.invoice_due_days,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(invoice)))
}

pub async fn list_invoices(
    State(state): State<AppState>,
    Query(query): Query<ListInvoicesQuery>,
) -> Result<Json<Vec<Invoice>>, AppError> {
    let invoices = state.invoices.list(query.business_id.as_deref()).await?;
    Ok(Json(invoices))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<Json<Invoice>, AppError> {
    let invoice = state
        .invoices
        .get(&invoice_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Invoice not found")))?;
    Ok(Json(invoice))
}

/// Settle a pending invoice.
pub async fn pay_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<Json<Invoice>, AppError> {
    tracing::info!(invoice_id = %invoice_id, "Paying invoice");

    let invoice = state.invoices.pay(&invoice_id).await?;
    Ok(Json(invoice))
}
