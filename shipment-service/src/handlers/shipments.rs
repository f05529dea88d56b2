//! Shipment handlers: creation, listing, lifecycle actions.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use service_core::error::AppError;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dtos::{AssignTruckerRequest, CreateShipmentRequest, ListShipmentsQuery, UpdateStatusRequest},
    models::{PaymentStatus, Shipment, ShipmentFilter, ShipmentStatus},
    services::pricing,
    AppState,
};

/// Create a shipment. It enters the lifecycle at `quoted` with a price
/// already attached; quoting is synchronous at creation.
pub async fn create_shipment(
    State(state): State<AppState>,
    Json(payload): Json<CreateShipmentRequest>,
) -> Result<(StatusCode, Json<Shipment>), AppError> {
    payload.validate()?;

    let now = Utc::now();
    let shipment = Shipment {
        id: format!("ship-{}", Uuid::new_v4()),
        business_id: payload.business_id,
        business_name: payload.business_name,
        trucker_id: None,
        trucker_name: None,
        status: ShipmentStatus::Quoted,
        load_type: payload.load_type,
        truck_type: payload.truck_type,
        weight: payload.weight,
        volume: payload.volume,
        pickup_location: payload.pickup_location,
        delivery_location: payload.delivery_location,
        pickup_date: payload.pickup_date,
        delivery_date: None,
        description: payload.description,
        special_instructions: payload.special_instructions,
        price: Some(pricing::quote_price()),
        payment_status: PaymentStatus::Pending,
        created_at: now,
        updated_at: now,
        ebm_receipt_number: None,
    };

    tracing::info!(
        shipment_id = %shipment.id,
        business_id = %shipment.business_id,
        price = ?shipment.price,
        "Creating shipment"
    );

    let shipment = state.shipments.insert(shipment).await?;
    Ok((StatusCode::CREATED, Json(shipment)))
}

pub async fn list_shipments(
    State(state): State<AppState>,
    Query(query): Query<ListShipmentsQuery>,
) -> Result<Json<Vec<Shipment>>, AppError> {
    let filter = ShipmentFilter::from(query);
    let shipments = state.shipments.list(&filter).await?;
    Ok(Json(shipments))
}

pub async fn get_shipment(
    State(state): State<AppState>,
    Path(shipment_id): Path<String>,
) -> Result<Json<Shipment>, AppError> {
    let shipment = state
        .shipments
        .get(&shipment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Shipment not found")))?;
    Ok(Json(shipment))
}

/// Move a shipment through its lifecycle. Illegal jumps are rejected.
pub async fn update_status(
    State(state): State<AppState>,
    Path(shipment_id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<Shipment>, AppError> {
    tracing::info!(
        shipment_id = %shipment_id,
        new_status = payload.status.as_str(),
        "Updating shipment status"
    );

    let shipment = state
        .shipments
        .update_status(&shipment_id, payload.status)
        .await?;
    Ok(Json(shipment))
}

/// Claim a quoted shipment for a trucker. A second claim is rejected.
pub async fn assign_trucker(
    State(state): State<AppState>,
    Path(shipment_id): Path<String>,
    Json(payload): Json<AssignTruckerRequest>,
) -> Result<Json<Shipment>, AppError> {
    payload.validate()?;

    tracing::info!(
        shipment_id = %shipment_id,
        trucker_id = %payload.trucker_id,
        "Assigning trucker"
    );

    let shipment = state
        .shipments
        .assign_trucker(&shipment_id, &payload.trucker_id, &payload.trucker_name)
        .await?;
    Ok(Json(shipment))
}
