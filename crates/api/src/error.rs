//! Error types for the API layer.

use stayflow::CoreError;
use stayflow_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidHourOfDay(value) => ApiError::InvalidInput {
            field: String::from("hour"),
            message: format!("Hour of day must be in [0, 24), got {value}"),
        },
        DomainError::SlotOnFlexibleType { reservation_type } => ApiError::DomainRuleViolation {
            rule: String::from("no_slot_on_flexible_type"),
            message: format!(
                "Cannot define a time slot for flexible reservation type '{reservation_type}'"
            ),
        },
        DomainError::InvalidSeasonDates {
            name,
            date_start,
            date_end,
        } => ApiError::InvalidInput {
            field: String::from("season_dates"),
            message: format!("Season '{name}' starts {date_start} after it ends {date_end}"),
        },
        DomainError::InvalidRuleLines { rule_id, reason } => ApiError::InvalidInput {
            field: String::from("rule_lines"),
            message: format!("Pricing rule {rule_id} has invalid lines: {reason}"),
        },
        DomainError::RuleLinesOnNonHourlyRule { rule_id } => ApiError::DomainRuleViolation {
            rule: String::from("brackets_require_hourly_unit"),
            message: format!(
                "Pricing rule {rule_id} defines duration brackets but is not hour-based"
            ),
        },
        DomainError::InvalidStayDates { reason } => ApiError::InvalidInput {
            field: String::from("dates"),
            message: reason,
        },
        DomainError::RoomTypeMismatch {
            stay_room_type,
            room_room_type,
        } => ApiError::DomainRuleViolation {
            rule: String::from("room_matches_stay_type"),
            message: format!(
                "Room of type {room_room_type} cannot be assigned to a stay of type {stay_room_type}"
            ),
        },
        DomainError::InvalidLifecycleTransition { from, to } => ApiError::DomainRuleViolation {
            rule: String::from("lifecycle_order"),
            message: format!("Stay cannot transition from {from} to {to}"),
        },
        DomainError::StayLocked { stay_id, state } => ApiError::DomainRuleViolation {
            rule: String::from("terminal_stays_are_frozen"),
            message: format!("Stay {stay_id} is {state} and can no longer change"),
        },
        DomainError::InvalidStayState(code) => ApiError::InvalidInput {
            field: String::from("state"),
            message: format!("Unknown stay state '{code}'"),
        },
        DomainError::InvalidReservationTypeCode(code) => ApiError::InvalidInput {
            field: String::from("reservation_type_code"),
            message: format!("Unknown reservation type code '{code}'"),
        },
        DomainError::InvalidPricingMode(code) => ApiError::InvalidInput {
            field: String::from("pricing_mode"),
            message: format!("Unknown pricing mode '{code}'"),
        },
        DomainError::InvalidRequestKind(kind) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!("Request kind must be 'early' or 'late', got '{kind}'"),
        },
        DomainError::InvalidBedType(code) => ApiError::InvalidInput {
            field: String::from("bed_type"),
            message: format!("Unknown bed type '{code}'"),
        },
        DomainError::InvalidPriceUnit(code) => ApiError::InvalidInput {
            field: String::from("unit"),
            message: format!("Unknown price unit '{code}'"),
        },
        DomainError::InvalidRoomStatus(code) => ApiError::InvalidInput {
            field: String::from("room_status"),
            message: format!("Unknown room status '{code}'"),
        },
        DomainError::RoomTypeNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Room type"),
            message: format!("Room type {id} does not exist"),
        },
        DomainError::ReservationTypeNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Reservation type"),
            message: format!("Reservation type {id} does not exist"),
        },
        DomainError::RoomNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room {id} does not exist"),
        },
        DomainError::DuplicateRoomType(id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_room_type"),
            message: format!("Room type {id} already exists"),
        },
        DomainError::DuplicateReservationType(id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_reservation_type"),
            message: format!("Reservation type {id} already exists"),
        },
        DomainError::DuplicateRoom(id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_room"),
            message: format!("Room {id} already exists"),
        },
        DomainError::DuplicateSlot {
            room_type_id,
            reservation_type_id,
        } => ApiError::DomainRuleViolation {
            rule: String::from("unique_slot"),
            message: format!(
                "A slot already exists for room type {room_type_id} and reservation type {reservation_type_id}"
            ),
        },
        DomainError::DuplicateSeason(id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_season"),
            message: format!("Season {id} already exists"),
        },
        DomainError::DuplicatePricingRule(id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_pricing_rule"),
            message: format!("Pricing rule {id} already exists"),
        },
        DomainError::DurationBelowBrackets { hours, minimum } => ApiError::DomainRuleViolation {
            rule: String::from("minimum_bracket_duration"),
            message: format!(
                "Stay of {hours}h is shorter than the smallest bracket ({minimum}h)"
            ),
        },
        DomainError::MissingNightFallback {
            room_type_id,
            hours,
        } => ApiError::DomainRuleViolation {
            rule: String::from("night_fallback_required"),
            message: format!(
                "Stay of {hours}h exceeds every hourly bracket and room type {room_type_id} has no night rate to fall back on"
            ),
        },
        DomainError::RoomNotAllocatable { room_id } => ApiError::DomainRuleViolation {
            rule: String::from("room_allocatable"),
            message: format!("Room {room_id} is inactive or withdrawn and cannot be assigned"),
        },
        DomainError::RoomConflict { room_id, stay_id } => ApiError::DomainRuleViolation {
            rule: String::from("room_free_over_interval"),
            message: format!(
                "Room {room_id} is already occupied by stay {stay_id} over the requested interval"
            ),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal {
            message: format!("Internal error: {msg}"),
        },
    }
}
