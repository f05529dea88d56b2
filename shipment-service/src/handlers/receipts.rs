//! Receipt handler.

use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

use crate::{models::Receipt, services::receipts, AppState};

/// Generate (or regenerate) the VAT receipt for a shipment.
pub async fn generate_receipt(
    State(state): State<AppState>,
    Path(shipment_id): Path<String>,
) -> Result<Json<Receipt>, AppError> {
    tracing::info!(shipment_id = %shipment_id, "Generating receipt");

    let receipt =
        receipts::generate_receipt(&state.shipments, &shipment_id, state.config.billing.vat_rate)
            .await?;
    Ok(Json(receipt))
}
