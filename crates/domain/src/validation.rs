use crate::error::DomainError;
use crate::types::{
    PriceUnit, PricingRule, ReservationSlot, ReservationType, Room, Season, Stay,
};

/// Validates that a slot is not attached to a flexible reservation type.
///
/// Flexible stays are entered manually; a configured slot for one is a
/// configuration defect, not a usable value.
///
/// # Errors
///
/// Returns an error if the reservation type is flexible.
pub fn validate_slot_reservation_type(
    slot: &ReservationSlot,
    reservation_type: &ReservationType,
) -> Result<(), DomainError> {
    debug_assert_eq!(slot.reservation_type_id, reservation_type.id);
    if reservation_type.is_flexible {
        return Err(DomainError::SlotOnFlexibleType {
            reservation_type: reservation_type.name.clone(),
        });
    }
    Ok(())
}

/// Validates that a season's date range is ordered.
///
/// # Errors
///
/// Returns an error if the start date is after the end date.
pub fn validate_season_dates(season: &Season) -> Result<(), DomainError> {
    if season.date_start > season.date_end {
        return Err(DomainError::InvalidSeasonDates {
            name: season.name.clone(),
            date_start: season.date_start,
            date_end: season.date_end,
        });
    }
    Ok(())
}

/// Validates a pricing rule's duration brackets.
///
/// Brackets are only meaningful on hour-based rules. They must be sorted
/// by minimum duration and each bounded bracket must satisfy `min < max`.
///
/// # Errors
///
/// Returns an error if:
/// - Brackets exist on a non-hourly rule
/// - A bounded bracket has `min >= max`
/// - Brackets are not ordered by minimum duration
pub fn validate_rule_lines(rule: &PricingRule) -> Result<(), DomainError> {
    if rule.lines.is_empty() {
        return Ok(());
    }
    if rule.unit != PriceUnit::Hour {
        return Err(DomainError::RuleLinesOnNonHourlyRule { rule_id: rule.id });
    }

    let mut previous_min: Option<u32> = None;
    for line in &rule.lines {
        if let Some(max) = line.max_duration_hours
            && line.min_duration_hours >= max
        {
            return Err(DomainError::InvalidRuleLines {
                rule_id: rule.id,
                reason: format!(
                    "bracket [{}, {max}) is empty",
                    line.min_duration_hours
                ),
            });
        }
        if let Some(prev) = previous_min
            && line.min_duration_hours < prev
        {
            return Err(DomainError::InvalidRuleLines {
                rule_id: rule.id,
                reason: String::from("brackets must be ordered by minimum duration"),
            });
        }
        previous_min = Some(line.min_duration_hours);
    }
    Ok(())
}

/// Validates a stay's date fields.
///
/// # Errors
///
/// Returns an error if:
/// - Both planned dates are set and checkout is not after checkin
/// - Both booking dates are set and the end precedes the start
pub fn validate_stay_dates(stay: &Stay) -> Result<(), DomainError> {
    if let (Some(checkin), Some(checkout)) = (stay.planned_checkin_date, stay.planned_checkout_date)
        && checkout <= checkin
    {
        return Err(DomainError::InvalidStayDates {
            reason: format!("planned checkout {checkout} is not after planned checkin {checkin}"),
        });
    }
    if let (Some(start), Some(end)) = (stay.booking_start_date, stay.booking_end_date)
        && end < start
    {
        return Err(DomainError::InvalidStayDates {
            reason: format!("booking end date {end} precedes booking start date {start}"),
        });
    }
    Ok(())
}

/// Validates that a room may be assigned to a stay.
///
/// A stay may only hold a room whose type matches its own.
///
/// # Errors
///
/// Returns an error if the room's type differs from the stay's.
pub fn validate_room_assignment(stay: &Stay, room: &Room) -> Result<(), DomainError> {
    if room.room_type_id != stay.room_type_id {
        return Err(DomainError::RoomTypeMismatch {
            stay_room_type: stay.room_type_id,
            room_room_type: room.room_type_id,
        });
    }
    Ok(())
}
