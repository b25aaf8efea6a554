//! Planned check-in/check-out resolution.
//!
//! Booking dates are calendar days; the configured slot for the room type
//! and reservation type turns them into planned datetimes. Flexible
//! reservation types are entered manually and bypass this computation
//! entirely, which is why absence of a slot is a silent cannot-compute
//! signal rather than an error.

use crate::catalog::HotelCatalog;
use stayflow_domain::{HourOfDay, ReservationTypeCode};
use time::{Date, Duration, PrimitiveDateTime};

/// The resolved planned interval of a stay.
///
/// Both fields are `None` when the dates cannot be computed (missing
/// inputs, flexible type, or no configured slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlannedDates {
    /// Planned check-in datetime.
    pub checkin: Option<PrimitiveDateTime>,
    /// Planned check-out datetime.
    pub checkout: Option<PrimitiveDateTime>,
}

impl PlannedDates {
    /// The empty, cannot-compute result.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            checkin: None,
            checkout: None,
        }
    }

    /// Whether both datetimes were resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.checkin.is_some() && self.checkout.is_some()
    }
}

/// Resolves the planned check-in/check-out datetimes for a booking.
///
/// Returns the empty result when the room type or reservation type is
/// unknown, either date is missing, the reservation type is flexible, or
/// no slot is configured for the pair. Otherwise combines each date with
/// the slot's times and applies the classic overnight rollover: a classic
/// stay whose computed check-out does not come after its check-in gets one
/// extra calendar day on the check-out.
///
/// Calling this twice with the same inputs yields the same output.
#[must_use]
pub fn resolve_planned_dates(
    catalog: &HotelCatalog,
    room_type_id: i64,
    reservation_type_id: i64,
    start_date: Option<Date>,
    end_date: Option<Date>,
) -> PlannedDates {
    let (Some(start), Some(end)) = (start_date, end_date) else {
        return PlannedDates::empty();
    };
    if catalog.room_type(room_type_id).is_none() {
        return PlannedDates::empty();
    }
    let Some(reservation_type) = catalog.reservation_type(reservation_type_id) else {
        return PlannedDates::empty();
    };
    if reservation_type.is_flexible {
        // Flexible types require manual entry.
        return PlannedDates::empty();
    }
    let Some(slot) = catalog.slot_for(room_type_id, reservation_type_id) else {
        return PlannedDates::empty();
    };

    let checkin: PrimitiveDateTime = slot.checkin_time.combine(start);
    let mut checkout: PrimitiveDateTime = slot.checkout_time.combine(end);

    if reservation_type.code == ReservationTypeCode::Classic && checkout <= checkin {
        // Same-day booking of an overnight slot: the departure belongs to
        // the next morning.
        checkout += Duration::days(1);
    }

    PlannedDates {
        checkin: Some(checkin),
        checkout: Some(checkout),
    }
}

/// Derives the actual occupancy interval from the planned one.
///
/// A granted early check-in or late check-out replaces the time-of-day of
/// the corresponding planned datetime; the classic overnight rollover is
/// re-applied afterwards. Without any override this returns the planned
/// dates unchanged.
#[must_use]
pub fn resolve_actual_dates(
    planned: &PlannedDates,
    early_hour: Option<HourOfDay>,
    late_hour: Option<HourOfDay>,
    code: ReservationTypeCode,
) -> PlannedDates {
    let (Some(planned_checkin), Some(planned_checkout)) = (planned.checkin, planned.checkout)
    else {
        return PlannedDates::empty();
    };

    let checkin: PrimitiveDateTime = early_hour
        .map_or(planned_checkin, |hour| hour.combine(planned_checkin.date()));
    let mut checkout: PrimitiveDateTime = late_hour
        .map_or(planned_checkout, |hour| hour.combine(planned_checkout.date()));

    if code == ReservationTypeCode::Classic && checkout <= checkin {
        checkout += Duration::days(1);
    }

    PlannedDates {
        checkin: Some(checkin),
        checkout: Some(checkout),
    }
}
