//! Shipment model for shipment-service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shipment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Pending,
    Quoted,
    Confirmed,
    Assigned,
    InTransit,
    Delivered,
    Canceled,
}

impl ShipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "pending",
            ShipmentStatus::Quoted => "quoted",
            ShipmentStatus::Confirmed => "confirmed",
            ShipmentStatus::Assigned => "assigned",
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::Delivered => "delivered",
            ShipmentStatus::Canceled => "canceled",
        }
    }

    /// Terminal states admit no further transitions, including cancellation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ShipmentStatus::Delivered | ShipmentStatus::Canceled)
    }
}

/// Category of cargo being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadType {
    Agricultural,
    Construction,
    Retail,
    Furniture,
    Electronics,
    Other,
}

impl LoadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadType::Agricultural => "agricultural",
            LoadType::Construction => "construction",
            LoadType::Retail => "retail",
            LoadType::Furniture => "furniture",
            LoadType::Electronics => "electronics",
            LoadType::Other => "other",
        }
    }
}

/// Truck class requested for the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruckType {
    Small,
    Medium,
    Large,
    Refrigerated,
}

impl TruckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TruckType::Small => "small",
            TruckType::Medium => "medium",
            TruckType::Large => "large",
            TruckType::Refrigerated => "refrigerated",
        }
    }
}

/// Payment progress of a shipment, independent of its transport status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Confirmed,
    Invoiced,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Confirmed => "confirmed",
            PaymentStatus::Invoiced => "invoiced",
            PaymentStatus::Paid => "paid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Named pickup or delivery point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// A transport contract between one business and at most one trucker.
///
/// `trucker_id` and `trucker_name` are both present or both absent;
/// `delivery_date` is set only once the shipment is delivered;
/// `ebm_receipt_number` is stamped by the receipt generator only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: String,
    pub business_id: String,
    pub business_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trucker_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trucker_name: Option<String>,
    pub status: ShipmentStatus,
    pub load_type: LoadType,
    pub truck_type: TruckType,
    /// Weight in kilograms.
    pub weight: f64,
    /// Volume in cubic meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    pub pickup_location: Location,
    pub delivery_location: Location,
    pub pickup_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    /// Quoted price in whole currency units, assigned once at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebm_receipt_number: Option<String>,
}

impl Shipment {
    /// A shipment is available for truckers while it sits quoted and unclaimed.
    pub fn is_available(&self) -> bool {
        self.status == ShipmentStatus::Quoted && self.trucker_id.is_none()
    }
}

/// Sort key for shipment listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Date,
    Price,
}

/// Sort direction for shipment listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

/// Filter parameters for listing shipments.
#[derive(Debug, Clone, Default)]
pub struct ShipmentFilter {
    pub business_id: Option<String>,
    pub trucker_id: Option<String>,
    /// Restrict to quoted shipments with no trucker attached.
    pub available_only: bool,
    pub status: Option<ShipmentStatus>,
    pub load_type: Option<LoadType>,
    pub truck_type: Option<TruckType>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    /// Case-insensitive substring match on the id and route names.
    pub search: Option<String>,
    pub sort_by: SortKey,
    pub sort_dir: SortDir,
}
