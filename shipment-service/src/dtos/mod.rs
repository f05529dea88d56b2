//! Request/response payloads for the HTTP API.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::{
    LoadType, Location, ShipmentFilter, ShipmentStatus, SortDir, SortKey, TruckType,
};

fn validate_location(location: &Location) -> Result<(), ValidationError> {
    if location.name.trim().is_empty() || location.address.trim().is_empty() {
        return Err(ValidationError::new("location_incomplete"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentRequest {
    #[validate(length(min = 1))]
    pub business_id: String,
    #[validate(length(min = 1))]
    pub business_name: String,
    pub load_type: LoadType,
    pub truck_type: TruckType,
    /// Weight in kilograms, must be positive.
    #[validate(range(exclusive_min = 0.0))]
    pub weight: f64,
    pub volume: Option<f64>,
    #[validate(custom(function = validate_location))]
    pub pickup_location: Location,
    #[validate(custom(function = validate_location))]
    pub delivery_location: Location,
    pub pickup_date: DateTime<Utc>,
    pub description: Option<String>,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: ShipmentStatus,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignTruckerRequest {
    #[validate(length(min = 1))]
    pub trucker_id: String,
    #[validate(length(min = 1))]
    pub trucker_name: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInvoiceRequest {
    #[validate(length(min = 1))]
    pub business_id: String,
    #[validate(length(min = 1))]
    pub business_name: String,
    /// Billing month, "YYYY-MM".
    #[validate(length(min = 7))]
    pub month: String,
}

/// Query parameters for `GET /shipments`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListShipmentsQuery {
    pub business_id: Option<String>,
    pub trucker_id: Option<String>,
    /// Only quoted shipments with no trucker attached.
    pub available: Option<bool>,
    pub status: Option<ShipmentStatus>,
    pub load_type: Option<LoadType>,
    pub truck_type: Option<TruckType>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub search: Option<String>,
    pub sort_by: Option<SortKey>,
    pub sort_dir: Option<SortDir>,
}

impl From<ListShipmentsQuery> for ShipmentFilter {
    fn from(query: ListShipmentsQuery) -> Self {
        ShipmentFilter {
            business_id: query.business_id,
            trucker_id: query.trucker_id,
            available_only: query.available.unwrap_or(false),
            status: query.status,
            load_type: query.load_type,
            truck_type: query.truck_type,
            created_from: query.from,
            created_to: query.to,
            search: query.search,
            sort_by: query.sort_by.unwrap_or_default(),
            sort_dir: query.sort_dir.unwrap_or_default(),
        }
    }
}

/// Query parameters for `GET /invoices`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInvoicesQuery {
    pub business_id: Option<String>,
}
