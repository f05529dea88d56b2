//! In-memory repositories for shipments and invoices.
//!
//! All mutation goes through the repositories. A mutating call holds the
//! entity map's write lock for the whole read-check-write, so lifecycle
//! preconditions cannot be raced within the process: two truckers claiming
//! the same shipment serialize on the lock and the second claim is rejected.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use service_core::error::AppError;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::models::{Invoice, InvoiceStatus, PaymentStatus, Shipment, ShipmentFilter, ShipmentStatus};
use crate::services::{lifecycle, metrics, query};

/// Shipment store. Cheap to clone; clones share the same map.
#[derive(Clone, Default)]
pub struct ShipmentRepository {
    shipments: Arc<RwLock<HashMap<String, Shipment>>>,
}

impl ShipmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly quoted shipment.
    #[instrument(skip(self, shipment), fields(shipment_id = %shipment.id))]
    pub async fn insert(&self, shipment: Shipment) -> Result<Shipment, AppError> {
        let mut shipments = self.shipments.write().await;
        if shipments.contains_key(&shipment.id) {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "Shipment {} already exists",
                shipment.id
            )));
        }
        shipments.insert(shipment.id.clone(), shipment.clone());

        metrics::SHIPMENTS_CREATED_TOTAL
            .with_label_values(&[shipment.load_type.as_str()])
            .inc();
        info!(status = shipment.status.as_str(), "Shipment stored");

        Ok(shipment)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Shipment>, AppError> {
        Ok(self.shipments.read().await.get(id).cloned())
    }

    /// List shipments matching the filter, sorted per the filter.
    pub async fn list(&self, filter: &ShipmentFilter) -> Result<Vec<Shipment>, AppError> {
        let all: Vec<Shipment> = self.shipments.read().await.values().cloned().collect();
        Ok(query::apply(filter, all))
    }

    /// Apply a lifecycle transition.
    ///
    /// Delivery stamps the delivery date. Receipt numbers are never minted
    /// here; that is the receipt generator's job alone.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: &str,
        new_status: ShipmentStatus,
    ) -> Result<Shipment, AppError> {
        let mut shipments = self.shipments.write().await;
        let shipment = shipments
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Shipment {} not found", id)))?;

        lifecycle::check_transition(shipment, new_status)?;

        let previous = shipment.status;
        shipment.status = new_status;
        if new_status == ShipmentStatus::Delivered {
            shipment.delivery_date = Some(Utc::now());
        }
        shipment.updated_at = Utc::now();

        metrics::SHIPMENT_TRANSITIONS_TOTAL
            .with_label_values(&[previous.as_str(), new_status.as_str()])
            .inc();
        info!(
            from = previous.as_str(),
            to = new_status.as_str(),
            "Shipment status updated"
        );

        Ok(shipment.clone())
    }

    /// Attach a trucker to a quoted, unassigned shipment and mark it assigned.
    #[instrument(skip(self, trucker_name))]
    pub async fn assign_trucker(
        &self,
        id: &str,
        trucker_id: &str,
        trucker_name: &str,
    ) -> Result<Shipment, AppError> {
        let mut shipments = self.shipments.write().await;
        let shipment = shipments
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Shipment {} not found", id)))?;

        lifecycle::check_assignable(shipment)?;

        shipment.trucker_id = Some(trucker_id.to_string());
        shipment.trucker_name = Some(trucker_name.to_string());
        shipment.status = ShipmentStatus::Assigned;
        shipment.updated_at = Utc::now();

        metrics::SHIPMENT_TRANSITIONS_TOTAL
            .with_label_values(&["quoted", "assigned"])
            .inc();
        info!(trucker_id = trucker_id, "Trucker assigned");

        Ok(shipment.clone())
    }

    /// Stamp a receipt number onto a shipment if it has none yet.
    ///
    /// The first stamp also confirms the payment; on a shipment that was
    /// already stamped the candidate is discarded and the stored shipment
    /// is returned unchanged, keeping the number stable across regenerations.
    #[instrument(skip(self, candidate))]
    pub async fn stamp_receipt_number(
        &self,
        id: &str,
        candidate: &str,
    ) -> Result<Shipment, AppError> {
        let mut shipments = self.shipments.write().await;
        let shipment = shipments
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Shipment {} not found", id)))?;

        if shipment.ebm_receipt_number.is_none() {
            shipment.ebm_receipt_number = Some(candidate.to_string());
            shipment.payment_status = PaymentStatus::Confirmed;
            shipment.updated_at = Utc::now();
            info!(receipt_number = candidate, "Receipt number stamped");
        }

        Ok(shipment.clone())
    }
}

/// Invoice store. Cheap to clone; clones share the same map.
#[derive(Clone, Default)]
pub struct InvoiceRepository {
    invoices: Arc<RwLock<HashMap<String, Invoice>>>,
}

impl InvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self, invoice), fields(invoice_id = %invoice.id))]
    pub async fn insert(&self, invoice: Invoice) -> Result<Invoice, AppError> {
        let mut invoices = self.invoices.write().await;
        if invoices.contains_key(&invoice.id) {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "Invoice {} already exists",
                invoice.id
            )));
        }
        invoices.insert(invoice.id.clone(), invoice.clone());

        metrics::INVOICES_GENERATED_TOTAL.inc();
        info!(
            month = %invoice.month,
            total_amount = %invoice.total_amount,
            "Invoice stored"
        );

        Ok(invoice)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Invoice>, AppError> {
        Ok(self.invoices.read().await.get(id).cloned())
    }

    /// List invoices, optionally scoped to one business, newest first.
    pub async fn list(&self, business_id: Option<&str>) -> Result<Vec<Invoice>, AppError> {
        let invoices = self.invoices.read().await;
        let mut selected: Vec<Invoice> = invoices
            .values()
            .filter(|inv| business_id.map_or(true, |b| inv.business_id == b))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(selected)
    }

    /// Mark a pending invoice as paid and stamp the payment time.
    #[instrument(skip(self))]
    pub async fn pay(&self, id: &str) -> Result<Invoice, AppError> {
        let mut invoices = self.invoices.write().await;
        let invoice = invoices
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Invoice {} not found", id)))?;

        if invoice.status == InvoiceStatus::Paid {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "Invoice {} is already paid",
                id
            )));
        }

        invoice.status = InvoiceStatus::Paid;
        invoice.paid_at = Some(Utc::now());
        info!("Invoice paid");

        Ok(invoice.clone())
    }
}
