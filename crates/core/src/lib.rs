#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod availability;
mod catalog;
mod command;
mod config;
mod eclc;
mod error;
mod pricing;
mod schedule;

#[cfg(test)]
mod tests;

use stayflow_domain::DomainError;

// Re-export public types and functions
pub use apply::{StayTransition, apply, stay_snapshot};
pub use availability::{
    AlternativeSlot, AvailabilityOutcome, AvailabilityRequest, ConflictDetail,
    DEFAULT_ALTERNATIVE_WINDOW_DAYS, MAX_ALTERNATIVES, check_availability,
    check_availability_with_window,
};
pub use catalog::HotelCatalog;
pub use command::Command;
pub use config::PricingConfig;
pub use eclc::{EclcEvaluation, EclcOutcome, evaluate_request};
pub use error::CoreError;
pub use pricing::{
    Adjustment, AdjustmentKind, BaseCharge, Discount, PriceBreakdown, PricingRequest, Supplement,
    SupplementKind, SupplementRequest, compute_price,
};
pub use schedule::{PlannedDates, resolve_actual_dates, resolve_planned_dates};

/// Validates that a room type exists in the catalog.
///
/// This is a read-only validation that does not create audit events.
///
/// # Arguments
///
/// * `catalog` - The reference data snapshot
/// * `room_type_id` - The room type to validate
///
/// # Errors
///
/// Returns an error if the room type has not been admitted.
pub fn validate_room_type_exists(
    catalog: &HotelCatalog,
    room_type_id: i64,
) -> Result<(), DomainError> {
    if catalog.room_type(room_type_id).is_none() {
        return Err(DomainError::RoomTypeNotFound(room_type_id));
    }
    Ok(())
}

/// Validates that a reservation type exists in the catalog.
///
/// This is a read-only validation that does not create audit events.
///
/// # Arguments
///
/// * `catalog` - The reference data snapshot
/// * `reservation_type_id` - The reservation type to validate
///
/// # Errors
///
/// Returns an error if the reservation type has not been admitted.
pub fn validate_reservation_type_exists(
    catalog: &HotelCatalog,
    reservation_type_id: i64,
) -> Result<(), DomainError> {
    if catalog.reservation_type(reservation_type_id).is_none() {
        return Err(DomainError::ReservationTypeNotFound(reservation_type_id));
    }
    Ok(())
}
