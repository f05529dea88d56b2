//! Demo fixtures for local development and tests.
//!
//! A small, self-consistent marketplace snapshot: three businesses, a few
//! truckers, shipments across the lifecycle and two settled invoices.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use service_core::error::AppError;
use tracing::info;

use crate::models::{
    Invoice, InvoiceStatus, LoadType, Location, PaymentStatus, Shipment, ShipmentStatus, TruckType,
};
use crate::services::repository::{InvoiceRepository, ShipmentRepository};

fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("fixture timestamp is valid RFC 3339")
        .with_timezone(&Utc)
}

fn location(name: &str, address: &str) -> Location {
    Location {
        name: name.to_string(),
        address: address.to_string(),
        coordinates: None,
    }
}

fn kigali() -> Location {
    location("Kigali", "KN 5 Ave, Kigali")
}

/// The demo shipment set. `ship-001`/`ship-004`/`ship-006` are delivered
/// and payment-confirmed, which makes them invoice-eligible.
pub fn demo_shipments() -> Vec<Shipment> {
    let base = Shipment {
        id: String::new(),
        business_id: String::new(),
        business_name: String::new(),
        trucker_id: None,
        trucker_name: None,
        status: ShipmentStatus::Quoted,
        load_type: LoadType::Other,
        truck_type: TruckType::Medium,
        weight: 0.0,
        volume: None,
        pickup_location: kigali(),
        delivery_location: kigali(),
        pickup_date: ts("2025-01-01T00:00:00Z"),
        delivery_date: None,
        description: None,
        special_instructions: None,
        price: None,
        payment_status: PaymentStatus::Pending,
        created_at: ts("2025-01-01T00:00:00Z"),
        updated_at: ts("2025-01-01T00:00:00Z"),
        ebm_receipt_number: None,
    };

    vec![
        Shipment {
            id: "ship-001".to_string(),
            business_id: "b-123".to_string(),
            business_name: "ABC Distributors".to_string(),
            trucker_id: Some("t-123".to_string()),
            trucker_name: Some("Jean Mutabazi".to_string()),
            status: ShipmentStatus::Delivered,
            load_type: LoadType::Agricultural,
            truck_type: TruckType::Medium,
            weight: 2500.0,
            delivery_location: location("Butare", "University Road, Butare"),
            pickup_date: ts("2025-01-15T09:00:00Z"),
            delivery_date: Some(ts("2025-01-15T14:30:00Z")),
            description: Some("Coffee beans in 50 sacks".to_string()),
            price: Some(85_000),
            payment_status: PaymentStatus::Confirmed,
            created_at: ts("2025-01-14T15:30:00Z"),
            updated_at: ts("2025-01-15T15:00:00Z"),
            ebm_receipt_number: Some("EBM-785412".to_string()),
            ..base.clone()
        },
        Shipment {
            id: "ship-002".to_string(),
            business_id: "b-123".to_string(),
            business_name: "ABC Distributors".to_string(),
            trucker_id: Some("t-456".to_string()),
            trucker_name: Some("Olivier Kamanzi".to_string()),
            status: ShipmentStatus::InTransit,
            load_type: LoadType::Retail,
            truck_type: TruckType::Large,
            weight: 3800.0,
            delivery_location: location("Gisenyi", "Lake Kivu Road, Gisenyi"),
            pickup_date: ts("2025-02-18T08:00:00Z"),
            description: Some("Retail goods for supermarket".to_string()),
            price: Some(120_000),
            created_at: ts("2025-02-16T11:20:00Z"),
            updated_at: ts("2025-02-18T08:30:00Z"),
            ..base.clone()
        },
        Shipment {
            id: "ship-003".to_string(),
            business_id: "b-123".to_string(),
            business_name: "ABC Distributors".to_string(),
            status: ShipmentStatus::Quoted,
            load_type: LoadType::Agricultural,
            truck_type: TruckType::Medium,
            weight: 1800.0,
            pickup_location: location("Rwamagana", "Market Street, Rwamagana"),
            pickup_date: ts("2025-02-25T10:00:00Z"),
            description: Some("Fresh produce for market".to_string()),
            special_instructions: Some("Handle with care, perishable goods".to_string()),
            price: Some(75_000),
            created_at: ts("2025-02-20T09:15:00Z"),
            updated_at: ts("2025-02-20T09:30:00Z"),
            ..base.clone()
        },
        Shipment {
            id: "ship-004".to_string(),
            business_id: "b-789".to_string(),
            business_name: "Kigali Food Supplies".to_string(),
            trucker_id: Some("t-123".to_string()),
            trucker_name: Some("Jean Mutabazi".to_string()),
            status: ShipmentStatus::Delivered,
            load_type: LoadType::Retail,
            truck_type: TruckType::Refrigerated,
            weight: 1200.0,
            pickup_location: location("Musanze", "Main Street, Musanze"),
            pickup_date: ts("2025-01-20T07:30:00Z"),
            delivery_date: Some(ts("2025-01-20T12:45:00Z")),
            description: Some("Refrigerated dairy products".to_string()),
            price: Some(95_000),
            payment_status: PaymentStatus::Confirmed,
            created_at: ts("2025-01-18T16:20:00Z"),
            updated_at: ts("2025-01-20T13:00:00Z"),
            ebm_receipt_number: Some("EBM-654789".to_string()),
            ..base.clone()
        },
        Shipment {
            id: "ship-005".to_string(),
            business_id: "b-123".to_string(),
            business_name: "ABC Distributors".to_string(),
            status: ShipmentStatus::Confirmed,
            load_type: LoadType::Construction,
            truck_type: TruckType::Large,
            weight: 5000.0,
            delivery_location: location("Muhanga", "Central Road, Muhanga"),
            pickup_date: ts("2025-02-28T08:00:00Z"),
            description: Some("Construction materials".to_string()),
            price: Some(150_000),
            created_at: ts("2025-02-22T10:40:00Z"),
            updated_at: ts("2025-02-22T14:15:00Z"),
            ..base.clone()
        },
        Shipment {
            id: "ship-006".to_string(),
            business_id: "b-123".to_string(),
            business_name: "ABC Distributors".to_string(),
            trucker_id: Some("t-789".to_string()),
            trucker_name: Some("Marie Uwase".to_string()),
            status: ShipmentStatus::Delivered,
            load_type: LoadType::Furniture,
            truck_type: TruckType::Medium,
            weight: 1500.0,
            delivery_location: location("Huye", "Southern Road, Huye"),
            pickup_date: ts("2025-01-25T09:30:00Z"),
            delivery_date: Some(ts("2025-01-25T15:20:00Z")),
            description: Some("Office furniture".to_string()),
            price: Some(85_000),
            payment_status: PaymentStatus::Confirmed,
            created_at: ts("2025-01-23T13:10:00Z"),
            updated_at: ts("2025-01-25T15:45:00Z"),
            ebm_receipt_number: Some("EBM-324567".to_string()),
            ..base.clone()
        },
        Shipment {
            id: "ship-007".to_string(),
            business_id: "b-456".to_string(),
            business_name: "Rwanda Electronics".to_string(),
            status: ShipmentStatus::Quoted,
            load_type: LoadType::Electronics,
            truck_type: TruckType::Small,
            weight: 800.0,
            delivery_location: location("Nyagatare", "Eastern Province, Nyagatare"),
            pickup_date: ts("2025-03-05T10:00:00Z"),
            description: Some("Electronic equipment and accessories".to_string()),
            special_instructions: Some("Fragile items, handle with extreme care".to_string()),
            price: Some(70_000),
            created_at: ts("2025-02-28T11:30:00Z"),
            updated_at: ts("2025-02-28T11:45:00Z"),
            ..base
        },
    ]
}

/// Settled January invoices plus an empty pending one for February.
pub fn demo_invoices() -> Vec<Invoice> {
    let shipments = demo_shipments();
    let january = |business_id: &str| -> Vec<Shipment> {
        shipments
            .iter()
            .filter(|s| {
                s.business_id == business_id
                    && s.status == ShipmentStatus::Delivered
                    && s.created_at.format("%Y-%m").to_string() == "2025-01"
            })
            .cloned()
            .collect()
    };

    vec![
        Invoice {
            id: "inv-001".to_string(),
            business_id: "b-123".to_string(),
            business_name: "ABC Distributors".to_string(),
            month: "2025-01".to_string(),
            shipments: january("b-123"),
            total_amount: Decimal::from(170_000),
            status: InvoiceStatus::Paid,
            due_date: ts("2025-02-15T00:00:00Z"),
            created_at: ts("2025-02-01T10:00:00Z"),
            paid_at: Some(ts("2025-02-10T14:30:00Z")),
        },
        Invoice {
            id: "inv-002".to_string(),
            business_id: "b-789".to_string(),
            business_name: "Kigali Food Supplies".to_string(),
            month: "2025-01".to_string(),
            shipments: january("b-789"),
            total_amount: Decimal::from(95_000),
            status: InvoiceStatus::Paid,
            due_date: ts("2025-02-15T00:00:00Z"),
            created_at: ts("2025-02-01T11:30:00Z"),
            paid_at: Some(ts("2025-02-08T09:15:00Z")),
        },
        Invoice {
            id: "inv-003".to_string(),
            business_id: "b-123".to_string(),
            business_name: "ABC Distributors".to_string(),
            month: "2025-02".to_string(),
            shipments: Vec::new(),
            total_amount: Decimal::ZERO,
            status: InvoiceStatus::Pending,
            due_date: ts("2025-03-15T00:00:00Z"),
            created_at: ts("2025-03-01T09:45:00Z"),
            paid_at: None,
        },
    ]
}

/// Load the demo fixtures into the repositories.
pub async fn seed_demo_data(
    shipments: &ShipmentRepository,
    invoices: &InvoiceRepository,
) -> Result<(), AppError> {
    for shipment in demo_shipments() {
        shipments.insert(shipment).await?;
    }
    for invoice in demo_invoices() {
        invoices.insert(invoice).await?;
    }
    info!("Demo data seeded");
    Ok(())
}
