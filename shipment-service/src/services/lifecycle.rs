//! Shipment lifecycle rules.
//!
//! Status is only ever changed through the repository, which consults
//! these checks first; an illegal jump is rejected rather than written.

use service_core::error::AppError;
use thiserror::Error;

use crate::models::{Shipment, ShipmentStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("Shipment already has a trucker assigned")]
    AlreadyAssigned,
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        AppError::Conflict(anyhow::Error::new(err))
    }
}

/// Check whether a shipment may move to `to` via a plain status update.
///
/// Assignment is excluded here: it carries the trucker-attach side effect
/// and must go through [`check_assignable`] instead.
pub fn check_transition(shipment: &Shipment, to: ShipmentStatus) -> Result<(), TransitionError> {
    use ShipmentStatus::*;

    let from = shipment.status;
    let allowed = match (from, to) {
        (Quoted, Confirmed) => true,
        (Assigned, InTransit) => true,
        (InTransit, Delivered) => true,
        (_, Canceled) => !from.is_terminal(),
        _ => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(TransitionError::InvalidTransition {
            from: from.as_str(),
            to: to.as_str(),
        })
    }
}

/// Check whether a trucker may claim the shipment.
///
/// Only a quoted shipment with no trucker attached is claimable; a second
/// claim is rejected instead of silently overwriting the first.
pub fn check_assignable(shipment: &Shipment) -> Result<(), TransitionError> {
    if shipment.trucker_id.is_some() {
        return Err(TransitionError::AlreadyAssigned);
    }
    if shipment.status != ShipmentStatus::Quoted {
        return Err(TransitionError::InvalidTransition {
            from: shipment.status.as_str(),
            to: ShipmentStatus::Assigned.as_str(),
        });
    }
    Ok(())
}
