//! Tax receipt generation.
//!
//! Receipts are ephemeral and regenerable: the receipt number is the only
//! durable piece, stamped onto the shipment the first time one is issued.
//! The verification code is a fabricated placeholder; there is no real
//! tax-authority integration.

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use service_core::error::AppError;
use tracing::{info, instrument};

use crate::models::Receipt;
use crate::services::metrics;
use crate::services::repository::ShipmentRepository;

// Placeholder taxpayer identification numbers until party profiles exist.
const BUSINESS_TIN: &str = "102458976";
const TRUCKER_TIN: &str = "107654321";

/// Generate (or regenerate) the VAT receipt for one shipment.
///
/// The first generation stamps the minted receipt number onto the shipment
/// and confirms its payment; later calls reuse the stamped number and
/// recompute the figures fresh.
#[instrument(skip(shipments, tax_rate))]
pub async fn generate_receipt(
    shipments: &ShipmentRepository,
    shipment_id: &str,
    tax_rate: Decimal,
) -> Result<Receipt, AppError> {
    let candidate = mint_receipt_number();
    let shipment = shipments
        .stamp_receipt_number(shipment_id, &candidate)
        .await?;
    let receipt_number = shipment.ebm_receipt_number.clone().ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!(
            "Shipment {} has no receipt number after stamping",
            shipment_id
        ))
    })?;

    let amount = Decimal::from(shipment.price.unwrap_or(0));
    let tax_amount = (amount * tax_rate).round_dp(2);

    let receipt = Receipt {
        receipt_number,
        business_name: shipment.business_name.clone(),
        business_tin: BUSINESS_TIN.to_string(),
        trucker_name: shipment
            .trucker_name
            .clone()
            .unwrap_or_else(|| "Unknown Trucker".to_string()),
        trucker_tin: TRUCKER_TIN.to_string(),
        shipment_id: shipment.id.clone(),
        description: format!(
            "Transport services from {} to {}",
            shipment.pickup_location.name, shipment.delivery_location.name
        ),
        amount,
        tax_amount,
        total_amount: amount + tax_amount,
        issue_date: Utc::now(),
        verification_code: mint_verification_code(),
    };

    metrics::RECEIPTS_ISSUED_TOTAL.inc();
    info!(
        receipt_number = %receipt.receipt_number,
        total_amount = %receipt.total_amount,
        "Receipt generated"
    );

    Ok(receipt)
}

/// Mint an electronic-billing-machine receipt number placeholder.
pub fn mint_receipt_number() -> String {
    format!("EBM-{:06}", rand::thread_rng().gen_range(0..1_000_000))
}

/// Fabricate a verification code in lieu of a tax-authority call.
pub fn mint_verification_code() -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    let code: String = (0..8)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("RRA-{code}")
}
