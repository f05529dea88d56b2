//! Stateless filtering and sorting over shipment listings.
//!
//! The whole result set is filtered in-process; there is no pagination.

use crate::models::{Shipment, ShipmentFilter, SortDir, SortKey};

/// Whether a shipment passes every predicate of the filter.
pub fn matches(filter: &ShipmentFilter, shipment: &Shipment) -> bool {
    if let Some(business_id) = &filter.business_id {
        if &shipment.business_id != business_id {
            return false;
        }
    }
    if let Some(trucker_id) = &filter.trucker_id {
        if shipment.trucker_id.as_deref() != Some(trucker_id.as_str()) {
            return false;
        }
    }
    if filter.available_only && !shipment.is_available() {
        return false;
    }
    if let Some(status) = filter.status {
        if shipment.status != status {
            return false;
        }
    }
    if let Some(load_type) = filter.load_type {
        if shipment.load_type != load_type {
            return false;
        }
    }
    if let Some(truck_type) = filter.truck_type {
        if shipment.truck_type != truck_type {
            return false;
        }
    }
    if let Some(from) = filter.created_from {
        if shipment.created_at < from {
            return false;
        }
    }
    if let Some(to) = filter.created_to {
        if shipment.created_at > to {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        let hit = shipment.id.to_lowercase().contains(&needle)
            || shipment.pickup_location.name.to_lowercase().contains(&needle)
            || shipment
                .delivery_location
                .name
                .to_lowercase()
                .contains(&needle);
        if !hit {
            return false;
        }
    }
    true
}

/// Filter and sort a listing according to the filter's predicates.
pub fn apply(filter: &ShipmentFilter, mut shipments: Vec<Shipment>) -> Vec<Shipment> {
    shipments.retain(|s| matches(filter, s));

    match filter.sort_by {
        SortKey::Date => shipments.sort_by_key(|s| s.created_at),
        SortKey::Price => shipments.sort_by_key(|s| s.price.unwrap_or(0)),
    }
    if filter.sort_dir == SortDir::Desc {
        shipments.reverse();
    }

    shipments
}
