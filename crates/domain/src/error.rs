use crate::types::StayState;
use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Hour-of-day value outside `[0, 24)`.
    InvalidHourOfDay(f64),
    /// A reservation slot was attached to a flexible reservation type.
    SlotOnFlexibleType {
        /// The name of the flexible reservation type.
        reservation_type: String,
    },
    /// Season start date is after its end date.
    InvalidSeasonDates {
        /// The season name.
        name: String,
        /// The invalid start date.
        date_start: Date,
        /// The invalid end date.
        date_end: Date,
    },
    /// Pricing rule lines are malformed.
    InvalidRuleLines {
        /// The rule identifier.
        rule_id: i64,
        /// Description of the defect.
        reason: String,
    },
    /// Duration brackets were defined on a rule that is not hour-based.
    RuleLinesOnNonHourlyRule {
        /// The rule identifier.
        rule_id: i64,
    },
    /// Stay date fields are inconsistent or unusable.
    InvalidStayDates {
        /// Description of the defect.
        reason: String,
    },
    /// A room of a different type was assigned to a stay.
    RoomTypeMismatch {
        /// The room type expected by the stay.
        stay_room_type: i64,
        /// The room type of the assigned room.
        room_room_type: i64,
    },
    /// A lifecycle transition that the state machine forbids.
    InvalidLifecycleTransition {
        /// The current state.
        from: StayState,
        /// The requested state.
        to: StayState,
    },
    /// A stay in a terminal state was asked to change.
    StayLocked {
        /// The stay identifier.
        stay_id: i64,
        /// The terminal state it is in.
        state: StayState,
    },
    /// Unknown stay state code.
    InvalidStayState(String),
    /// Unknown reservation type code.
    InvalidReservationTypeCode(String),
    /// Unknown pricing mode code.
    InvalidPricingMode(String),
    /// Unknown early/late request kind.
    InvalidRequestKind(String),
    /// Unknown bed type code.
    InvalidBedType(String),
    /// Unknown price unit code.
    InvalidPriceUnit(String),
    /// Unknown room status code.
    InvalidRoomStatus(String),
    /// Room type does not exist in the catalog.
    RoomTypeNotFound(i64),
    /// Reservation type does not exist in the catalog.
    ReservationTypeNotFound(i64),
    /// Room does not exist in the catalog.
    RoomNotFound(i64),
    /// Room type already exists in the catalog.
    DuplicateRoomType(i64),
    /// Reservation type already exists in the catalog.
    DuplicateReservationType(i64),
    /// Room already exists in the catalog.
    DuplicateRoom(i64),
    /// A slot already exists for this room type and reservation type.
    DuplicateSlot {
        /// The room type identifier.
        room_type_id: i64,
        /// The reservation type identifier.
        reservation_type_id: i64,
    },
    /// Season already exists in the catalog.
    DuplicateSeason(i64),
    /// Pricing rule already exists in the catalog.
    DuplicatePricingRule(i64),
    /// Hourly stay shorter than the smallest configured bracket.
    DurationBelowBrackets {
        /// The stay duration in whole hours.
        hours: u32,
        /// The smallest bracket minimum.
        minimum: u32,
    },
    /// Hourly stay outlasts every bracket and no night rate exists to fall
    /// back on. Raised rather than zeroed so overlong stays are never
    /// under-billed.
    MissingNightFallback {
        /// The room type identifier.
        room_type_id: i64,
        /// The stay duration in whole hours.
        hours: u32,
    },
    /// The room is inactive or withdrawn and cannot be assigned.
    RoomNotAllocatable {
        /// The room identifier.
        room_id: i64,
    },
    /// The assigned room is already occupied over the requested interval.
    RoomConflict {
        /// The room identifier.
        room_id: i64,
        /// The blocking stay.
        stay_id: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHourOfDay(value) => {
                write!(f, "Hour of day must be in [0, 24), got {value}")
            }
            Self::SlotOnFlexibleType { reservation_type } => {
                write!(
                    f,
                    "Cannot define a time slot for flexible reservation type '{reservation_type}'"
                )
            }
            Self::InvalidSeasonDates {
                name,
                date_start,
                date_end,
            } => {
                write!(
                    f,
                    "Season '{name}' starts {date_start} after it ends {date_end}"
                )
            }
            Self::InvalidRuleLines { rule_id, reason } => {
                write!(f, "Pricing rule {rule_id} has invalid lines: {reason}")
            }
            Self::RuleLinesOnNonHourlyRule { rule_id } => {
                write!(
                    f,
                    "Pricing rule {rule_id} defines duration brackets but is not hour-based"
                )
            }
            Self::InvalidStayDates { reason } => write!(f, "Invalid stay dates: {reason}"),
            Self::RoomTypeMismatch {
                stay_room_type,
                room_room_type,
            } => {
                write!(
                    f,
                    "Room of type {room_room_type} cannot be assigned to a stay of type {stay_room_type}"
                )
            }
            Self::InvalidLifecycleTransition { from, to } => {
                write!(f, "Stay cannot transition from {from} to {to}")
            }
            Self::StayLocked { stay_id, state } => {
                write!(f, "Stay {stay_id} is {state} and can no longer change")
            }
            Self::InvalidStayState(code) => write!(f, "Unknown stay state '{code}'"),
            Self::InvalidReservationTypeCode(code) => {
                write!(f, "Unknown reservation type code '{code}'")
            }
            Self::InvalidPricingMode(code) => write!(f, "Unknown pricing mode '{code}'"),
            Self::InvalidRequestKind(kind) => {
                write!(f, "Request kind must be 'early' or 'late', got '{kind}'")
            }
            Self::InvalidBedType(code) => write!(f, "Unknown bed type '{code}'"),
            Self::InvalidPriceUnit(code) => write!(f, "Unknown price unit '{code}'"),
            Self::InvalidRoomStatus(code) => write!(f, "Unknown room status '{code}'"),
            Self::RoomTypeNotFound(id) => write!(f, "Room type {id} not found"),
            Self::ReservationTypeNotFound(id) => write!(f, "Reservation type {id} not found"),
            Self::RoomNotFound(id) => write!(f, "Room {id} not found"),
            Self::DuplicateRoomType(id) => write!(f, "Room type {id} already exists"),
            Self::DuplicateReservationType(id) => {
                write!(f, "Reservation type {id} already exists")
            }
            Self::DuplicateRoom(id) => write!(f, "Room {id} already exists"),
            Self::DuplicateSlot {
                room_type_id,
                reservation_type_id,
            } => {
                write!(
                    f,
                    "A slot already exists for room type {room_type_id} and reservation type {reservation_type_id}"
                )
            }
            Self::DuplicateSeason(id) => write!(f, "Season {id} already exists"),
            Self::DuplicatePricingRule(id) => write!(f, "Pricing rule {id} already exists"),
            Self::DurationBelowBrackets { hours, minimum } => {
                write!(
                    f,
                    "Stay of {hours}h is shorter than the smallest bracket ({minimum}h)"
                )
            }
            Self::MissingNightFallback {
                room_type_id,
                hours,
            } => {
                write!(
                    f,
                    "Stay of {hours}h exceeds every hourly bracket and room type {room_type_id} has no night rate to fall back on"
                )
            }
            Self::RoomNotAllocatable { room_id } => {
                write!(
                    f,
                    "Room {room_id} is inactive or withdrawn and cannot be assigned"
                )
            }
            Self::RoomConflict { room_id, stay_id } => {
                write!(
                    f,
                    "Room {room_id} is already occupied by stay {stay_id} over the requested interval"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
