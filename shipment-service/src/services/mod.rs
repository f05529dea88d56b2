//! Domain services for shipment-service.

pub mod invoicing;
pub mod lifecycle;
pub mod metrics;
pub mod pricing;
pub mod query;
pub mod receipts;
pub mod repository;
pub mod seed;

pub use invoicing::generate_monthly_invoice;
pub use lifecycle::TransitionError;
pub use metrics::{get_metrics, init_metrics};
pub use receipts::generate_receipt;
pub use repository::{InvoiceRepository, ShipmentRepository};
