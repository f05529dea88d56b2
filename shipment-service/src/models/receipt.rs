//! Tax receipt model for shipment-service.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// VAT receipt for a single shipment.
///
/// Regenerable on demand: the receipt number is stable once stamped on
/// the shipment, the remaining figures are recomputed fresh each time.
/// Invariant: `total_amount = amount + tax_amount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub receipt_number: String,
    pub business_name: String,
    pub business_tin: String,
    pub trucker_name: String,
    pub trucker_tin: String,
    pub shipment_id: String,
    pub description: String,
    pub amount: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub issue_date: DateTime<Utc>,
    pub verification_code: String,
}
