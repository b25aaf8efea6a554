use crate::catalog::HotelCatalog;
use crate::command::Command;
use crate::eclc::{EclcEvaluation, evaluate_request};
use crate::error::CoreError;
use crate::schedule::{PlannedDates, resolve_actual_dates, resolve_planned_dates};
use stayflow_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use stayflow_domain::{
    DomainError, PricingMode, RequestKind, ReservationTypeCode, Stay, StayState,
    intervals_overlap, validate_room_assignment, validate_stay_dates,
};
use time::PrimitiveDateTime;

/// The result of a successful stay transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects, and every success carries exactly one audit event.
#[derive(Debug, Clone, PartialEq)]
pub struct StayTransition {
    /// The stay after the transition.
    pub new_stay: Stay,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

fn format_optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("none"), |inner| inner.to_string())
}

/// Converts a stay to a compact snapshot for audit purposes.
#[must_use]
pub fn stay_snapshot(stay: &Stay) -> StateSnapshot {
    StateSnapshot::new(format!(
        "stay={},state={},room={},checkin={},checkout={}",
        stay.id,
        stay.state,
        format_optional(stay.room_id),
        format_optional(stay.actual_checkin_date),
        format_optional(stay.actual_checkout_date),
    ))
}

/// Applies a command to a stay, producing the new stay and audit event.
///
/// The input stay is never mutated. Date-affecting commands re-run the
/// whole scheduling pipeline: planned dates from the configured slot,
/// early/late evaluation, actual dates, and a conflict re-check when a
/// room is already assigned.
///
/// # Arguments
///
/// * `catalog` - The reference data snapshot
/// * `existing_stays` - Every other stay, for conflict re-checks
/// * `stay` - The stay being changed (immutable)
/// * `command` - The change to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if:
/// - The stay is terminal and the command mutates dates or rooms
/// - The command references unknown reference data
/// - The resulting dates violate ordering rules
/// - The assigned room conflicts with another stay
/// - A lifecycle transition is forbidden
#[allow(clippy::too_many_lines)]
pub fn apply(
    catalog: &HotelCatalog,
    existing_stays: &[Stay],
    stay: &Stay,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<StayTransition, CoreError> {
    let before: StateSnapshot = stay_snapshot(stay);

    let (new_stay, action): (Stay, Action) = match command {
        Command::SetBookingDates { start, end } => {
            guard_mutable(stay)?;
            let mut updated: Stay = stay.clone();
            updated.booking_start_date = Some(start);
            updated.booking_end_date = end;
            requalify(catalog, existing_stays, &mut updated)?;
            let action: Action = Action::new(
                String::from("SetBookingDates"),
                Some(format!(
                    "Booking dates set to {start} / {}",
                    format_optional(end)
                )),
            );
            (updated, action)
        }
        Command::SetReservationType {
            reservation_type_id,
        } => {
            guard_mutable(stay)?;
            if catalog.reservation_type(reservation_type_id).is_none() {
                return Err(CoreError::DomainViolation(
                    DomainError::ReservationTypeNotFound(reservation_type_id),
                ));
            }
            let mut updated: Stay = stay.clone();
            updated.reservation_type_id = reservation_type_id;
            requalify(catalog, existing_stays, &mut updated)?;
            let action: Action = Action::new(
                String::from("SetReservationType"),
                Some(format!("Reservation type set to {reservation_type_id}")),
            );
            (updated, action)
        }
        Command::SetRoomType { room_type_id } => {
            guard_mutable(stay)?;
            if catalog.room_type(room_type_id).is_none() {
                return Err(CoreError::DomainViolation(DomainError::RoomTypeNotFound(
                    room_type_id,
                )));
            }
            let mut updated: Stay = stay.clone();
            if updated.room_type_id != room_type_id {
                // The old room no longer matches the stay.
                updated.room_id = None;
            }
            updated.room_type_id = room_type_id;
            requalify(catalog, existing_stays, &mut updated)?;
            let action: Action = Action::new(
                String::from("SetRoomType"),
                Some(format!("Room type set to {room_type_id}")),
            );
            (updated, action)
        }
        Command::AssignRoom { room_id } => {
            guard_mutable(stay)?;
            let Some(room) = catalog.room(room_id) else {
                return Err(CoreError::DomainViolation(DomainError::RoomNotFound(
                    room_id,
                )));
            };
            validate_room_assignment(stay, room)?;
            if !room.active || room.status.blocks_allocation() {
                return Err(CoreError::DomainViolation(
                    DomainError::RoomNotAllocatable { room_id },
                ));
            }
            let mut updated: Stay = stay.clone();
            updated.room_id = Some(room_id);
            check_room_conflict(existing_stays, &updated)?;
            let action: Action = Action::new(
                String::from("AssignRoom"),
                Some(format!("Room {} assigned", room.name)),
            );
            (updated, action)
        }
        Command::RequestEarlyCheckin { hour } => {
            guard_mutable(stay)?;
            let mut updated: Stay = stay.clone();
            updated.early_checkin_requested = true;
            updated.early_checkin_hour = Some(hour);
            requalify(catalog, existing_stays, &mut updated)?;
            let action: Action = Action::new(
                String::from("RequestEarlyCheckin"),
                Some(format!("Early check-in requested at {hour}")),
            );
            (updated, action)
        }
        Command::RequestLateCheckout { hour } => {
            guard_mutable(stay)?;
            let mut updated: Stay = stay.clone();
            updated.late_checkout_requested = true;
            updated.late_checkout_hour = Some(hour);
            requalify(catalog, existing_stays, &mut updated)?;
            let action: Action = Action::new(
                String::from("RequestLateCheckout"),
                Some(format!("Late check-out requested at {hour}")),
            );
            (updated, action)
        }
        Command::WithdrawEclcRequests => {
            guard_mutable(stay)?;
            let mut updated: Stay = stay.clone();
            updated.early_checkin_requested = false;
            updated.early_checkin_hour = None;
            updated.late_checkout_requested = false;
            updated.late_checkout_hour = None;
            updated.early_pricing_mode = None;
            updated.late_pricing_mode = None;
            updated.extra_night_required = false;
            requalify(catalog, existing_stays, &mut updated)?;
            let action: Action = Action::new(
                String::from("WithdrawEclcRequests"),
                Some(String::from("Early/late requests withdrawn")),
            );
            (updated, action)
        }
        Command::Start => {
            let updated: Stay = transition_state(stay, StayState::Ongoing)?;
            (updated, Action::new(String::from("Start"), None))
        }
        Command::Checkout => {
            let updated: Stay = transition_state(stay, StayState::Completed)?;
            (updated, Action::new(String::from("Checkout"), None))
        }
        Command::Cancel => {
            let updated: Stay = transition_state(stay, StayState::Cancelled)?;
            (updated, Action::new(String::from("Cancel"), None))
        }
    };

    let after: StateSnapshot = stay_snapshot(&new_stay);
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after);

    Ok(StayTransition {
        new_stay,
        audit_event,
    })
}

fn guard_mutable(stay: &Stay) -> Result<(), CoreError> {
    if stay.state.is_terminal() {
        return Err(CoreError::DomainViolation(DomainError::StayLocked {
            stay_id: stay.id,
            state: stay.state,
        }));
    }
    Ok(())
}

fn transition_state(stay: &Stay, target: StayState) -> Result<Stay, CoreError> {
    if !stay.state.can_transition_to(target) {
        return Err(CoreError::DomainViolation(
            DomainError::InvalidLifecycleTransition {
                from: stay.state,
                to: target,
            },
        ));
    }
    let mut updated: Stay = stay.clone();
    updated.state = target;
    Ok(updated)
}

/// Re-runs the scheduling pipeline after a date-affecting change.
///
/// Flexible stays keep their manually entered dates; everything else gets
/// planned dates from the slot, early/late outcomes, actual dates, and a
/// conflict re-check against the assigned room.
fn requalify(
    catalog: &HotelCatalog,
    existing_stays: &[Stay],
    stay: &mut Stay,
) -> Result<(), CoreError> {
    let code: Option<ReservationTypeCode> = catalog
        .reservation_type(stay.reservation_type_id)
        .map(|reservation_type| reservation_type.code);

    if code == Some(ReservationTypeCode::Flexible) {
        // Manually entered dates are authoritative for flexible stays.
        validate_stay_dates(stay)?;
        check_room_conflict(existing_stays, stay)?;
        return Ok(());
    }

    let planned: PlannedDates = resolve_planned_dates(
        catalog,
        stay.room_type_id,
        stay.reservation_type_id,
        stay.booking_start_date,
        stay.booking_end_date.or(stay.booking_start_date),
    );
    stay.planned_checkin_date = planned.checkin;
    stay.planned_checkout_date = planned.checkout;

    if let Some(room_type) = catalog.room_type(stay.room_type_id) {
        stay.early_pricing_mode = if stay.early_checkin_requested {
            let requested: Option<PrimitiveDateTime> = stay
                .early_checkin_hour
                .zip(planned.checkin)
                .map(|(hour, checkin)| hour.combine(checkin.date()));
            let evaluation: EclcEvaluation =
                evaluate_request(RequestKind::Early, requested, planned.checkin, room_type);
            Some(evaluation.outcome.mode())
        } else {
            None
        };

        stay.late_pricing_mode = if stay.late_checkout_requested {
            let requested: Option<PrimitiveDateTime> = stay
                .late_checkout_hour
                .zip(planned.checkout)
                .map(|(hour, checkout)| hour.combine(checkout.date()));
            let evaluation: EclcEvaluation =
                evaluate_request(RequestKind::Late, requested, planned.checkout, room_type);
            Some(evaluation.outcome.mode())
        } else {
            None
        };
    }

    stay.extra_night_required = stay.early_pricing_mode == Some(PricingMode::ExtraNight)
        || stay.late_pricing_mode == Some(PricingMode::ExtraNight);

    let actual: PlannedDates = resolve_actual_dates(
        &planned,
        stay.early_checkin_hour.filter(|_| stay.early_checkin_requested),
        stay.late_checkout_hour.filter(|_| stay.late_checkout_requested),
        code.unwrap_or(ReservationTypeCode::Classic),
    );
    stay.actual_checkin_date = actual.checkin;
    stay.actual_checkout_date = actual.checkout;

    validate_stay_dates(stay)?;
    if let (Some(checkin), Some(checkout)) = (actual.checkin, actual.checkout)
        && checkout <= checkin
    {
        return Err(CoreError::DomainViolation(DomainError::InvalidStayDates {
            reason: format!("actual checkout {checkout} is not after actual checkin {checkin}"),
        }));
    }
    check_room_conflict(existing_stays, stay)?;
    Ok(())
}

/// Rejects the change when the assigned room is occupied by another stay
/// over the stay's effective interval.
fn check_room_conflict(existing_stays: &[Stay], stay: &Stay) -> Result<(), CoreError> {
    let Some(room_id) = stay.room_id else {
        return Ok(());
    };
    let Some((checkin, checkout)) = stay.occupancy() else {
        return Ok(());
    };

    for other in existing_stays {
        if other.id == stay.id || other.room_id != Some(room_id) || !other.state.blocks_room() {
            continue;
        }
        if let Some((other_checkin, other_checkout)) = other.occupancy()
            && intervals_overlap(checkin, checkout, other_checkin, other_checkout)
        {
            return Err(CoreError::DomainViolation(DomainError::RoomConflict {
                room_id,
                stay_id: other.id,
            }));
        }
    }
    Ok(())
}
