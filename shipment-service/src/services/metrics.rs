//! Prometheus metrics for shipment-service.

use once_cell::sync::Lazy;
use prometheus::{register_counter, register_counter_vec, Counter, CounterVec, TextEncoder};

/// Shipments created, by load type.
pub static SHIPMENTS_CREATED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "shipment_created_total",
        "Total number of shipments created",
        &["load_type"]
    )
    .expect("Failed to register shipment_created_total")
});

/// Lifecycle transitions, by from/to status.
pub static SHIPMENT_TRANSITIONS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "shipment_transitions_total",
        "Total number of shipment status transitions",
        &["from", "to"]
    )
    .expect("Failed to register shipment_transitions_total")
});

/// Monthly invoices generated.
pub static INVOICES_GENERATED_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "shipment_invoices_generated_total",
        "Total number of monthly invoices generated"
    )
    .expect("Failed to register shipment_invoices_generated_total")
});

/// Tax receipts issued (including regenerations).
pub static RECEIPTS_ISSUED_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "shipment_receipts_issued_total",
        "Total number of tax receipts issued"
    )
    .expect("Failed to register shipment_receipts_issued_total")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&SHIPMENTS_CREATED_TOTAL);
    Lazy::force(&SHIPMENT_TRANSITIONS_TOTAL);
    Lazy::force(&INVOICES_GENERATED_TOTAL);
    Lazy::force(&RECEIPTS_ISSUED_TOTAL);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
