//! Data models for shipment-service.

pub mod invoice;
pub mod receipt;
pub mod shipment;

pub use invoice::{Invoice, InvoiceStatus};
pub use receipt::Receipt;
pub use shipment::{
    Coordinates, LoadType, Location, PaymentStatus, Shipment, ShipmentFilter, ShipmentStatus,
    SortDir, SortKey, TruckType,
};
