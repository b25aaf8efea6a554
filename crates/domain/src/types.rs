use crate::error::DomainError;
use crate::hour_of_day::HourOfDay;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, PrimitiveDateTime};

/// Represents the lifecycle state of a stay.
///
/// Explicit lifecycle states govern which operations are permitted and
/// which stays block a room during availability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StayState {
    /// Initial state after creation. Dates and room may still change.
    #[default]
    Pending,
    /// The guest has checked in.
    Ongoing,
    /// The guest has checked out. Terminal.
    Completed,
    /// The stay was cancelled. Terminal, reachable from any live state.
    Cancelled,
}

impl FromStr for StayState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStayState(s.to_string())),
        }
    }
}

impl std::fmt::Display for StayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StayState {
    /// Converts this state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Ongoing
    /// - Ongoing → Completed
    /// - any state except Cancelled → Cancelled
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Ongoing)
                | (Self::Ongoing, Self::Completed)
                | (
                    Self::Pending | Self::Ongoing | Self::Completed,
                    Self::Cancelled
                )
        )
    }

    /// Returns whether this state is terminal.
    ///
    /// Terminal stays no longer accept date or room mutations; a completed
    /// stay may still be voided to cancelled.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns whether a stay in this state occupies its room.
    ///
    /// Only pending and ongoing stays block availability; terminal stays
    /// never do.
    #[must_use]
    pub const fn blocks_room(&self) -> bool {
        matches!(self, Self::Pending | Self::Ongoing)
    }
}

/// The billing/time-model category of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationTypeCode {
    /// Classic nightly stay: check-in one day, check-out a later day.
    Classic,
    /// Day use: check-in and check-out on the same calendar day.
    DayUse,
    /// Flexible: dates are entered manually, no configured slot.
    Flexible,
}

impl ReservationTypeCode {
    /// Converts this code to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::DayUse => "day_use",
            Self::Flexible => "flexible",
        }
    }
}

impl FromStr for ReservationTypeCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "day_use" => Ok(Self::DayUse),
            "flexible" => Ok(Self::Flexible),
            _ => Err(DomainError::InvalidReservationTypeCode(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReservationTypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reservation type (classic, day use, flexible).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationType {
    /// The canonical numeric identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// The billing/time-model code.
    pub code: ReservationTypeCode,
    /// Whether dates are entered manually rather than computed from a slot.
    pub is_flexible: bool,
    /// Whether this type is currently offered.
    pub active: bool,
}

impl ReservationType {
    /// Creates a new reservation type. The flexible flag follows the code.
    #[must_use]
    pub fn new(id: i64, name: &str, code: ReservationTypeCode) -> Self {
        Self {
            id,
            name: name.to_string(),
            code,
            is_flexible: code == ReservationTypeCode::Flexible,
            active: true,
        }
    }
}

/// Bed configuration of a room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BedType {
    Single,
    Double,
    Queen,
    King,
}

impl BedType {
    /// Converts this bed type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

impl FromStr for BedType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "queen" => Ok(Self::Queen),
            "king" => Ok(Self::King),
            _ => Err(DomainError::InvalidBedType(s.to_string())),
        }
    }
}

/// A room type: shared physical attributes and early/late policy for a
/// family of interchangeable rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    /// The canonical numeric identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Maximum number of guests, when enforced.
    pub capacity: Option<u32>,
    /// Bed configuration.
    pub bed_type: Option<BedType>,
    /// Reference price per night, before any pricing rule applies.
    pub base_price: f64,
    /// Arrivals earlier than this hour require the previous night.
    pub early_checkin_hour_limit: HourOfDay,
    /// Departures later than this hour require an extra night.
    pub late_checkout_hour_limit: HourOfDay,
    /// Whether rooms of this type are currently sold.
    pub active: bool,
}

impl RoomType {
    /// Default early check-in hour limit (06:00).
    pub const DEFAULT_EARLY_LIMIT: f64 = 6.0;
    /// Default late check-out hour limit (18:00).
    pub const DEFAULT_LATE_LIMIT: f64 = 18.0;

    /// Creates a new room type with the default early/late limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the default limits fail hour validation (they
    /// cannot; the signature keeps construction fallible for custom
    /// limits set afterwards).
    pub fn new(id: i64, name: &str, base_price: f64) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: name.to_string(),
            capacity: None,
            bed_type: None,
            base_price,
            early_checkin_hour_limit: HourOfDay::new(Self::DEFAULT_EARLY_LIMIT)?,
            late_checkout_hour_limit: HourOfDay::new(Self::DEFAULT_LATE_LIMIT)?,
            active: true,
        })
    }
}

/// A configured check-in/check-out time pair for a room type and
/// reservation type.
///
/// At most one slot exists per `(room_type, reservation_type)` pair;
/// flexible reservation types never have one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationSlot {
    /// The room type this slot applies to.
    pub room_type_id: i64,
    /// The reservation type this slot applies to.
    pub reservation_type_id: i64,
    /// Configured arrival hour.
    pub checkin_time: HourOfDay,
    /// Configured departure hour. May precede `checkin_time` for overnight
    /// classic slots.
    pub checkout_time: HourOfDay,
}

impl ReservationSlot {
    /// Creates a new reservation slot.
    #[must_use]
    pub const fn new(
        room_type_id: i64,
        reservation_type_id: i64,
        checkin_time: HourOfDay,
        checkout_time: HourOfDay,
    ) -> Self {
        Self {
            room_type_id,
            reservation_type_id,
            checkin_time,
            checkout_time,
        }
    }
}

/// A tariff season: a date range with a priority.
///
/// Overlapping seasons are resolved highest priority first; a pricing rule
/// without a season acts as the universal default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// The canonical numeric identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// First day the season covers (inclusive).
    pub date_start: Date,
    /// Last day the season covers (inclusive).
    pub date_end: Date,
    /// Higher priority seasons override lower ones when overlapping.
    pub priority: i32,
    /// Whether the season participates in rule resolution.
    pub active: bool,
}

impl Season {
    /// Creates a new season.
    #[must_use]
    pub fn new(id: i64, name: &str, date_start: Date, date_end: Date, priority: i32) -> Self {
        Self {
            id,
            name: name.to_string(),
            date_start,
            date_end,
            priority,
            active: true,
        }
    }

    /// Checks whether a date falls within this season.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.date_start <= date && date <= self.date_end
    }
}

/// The billing unit of a pricing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceUnit {
    /// Price per night.
    Night,
    /// Price per hour, optionally bracketed by duration lines.
    Hour,
    /// Flat price regardless of duration.
    Slot,
}

impl PriceUnit {
    /// Converts this unit to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Night => "night",
            Self::Hour => "hour",
            Self::Slot => "slot",
        }
    }
}

impl FromStr for PriceUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "night" => Ok(Self::Night),
            "hour" => Ok(Self::Hour),
            "slot" => Ok(Self::Slot),
            _ => Err(DomainError::InvalidPriceUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A duration bracket for an hour-based rule: a fixed price for stays
/// whose whole-hour duration falls in `[min, max)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRuleLine {
    /// Smallest whole-hour duration the bracket covers (inclusive).
    pub min_duration_hours: u32,
    /// Upper bound (exclusive); `None` means unbounded.
    pub max_duration_hours: Option<u32>,
    /// Fixed price charged for any duration in the bracket.
    pub price: f64,
}

impl PricingRuleLine {
    /// Creates a new bracket line.
    #[must_use]
    pub const fn new(min_duration_hours: u32, max_duration_hours: Option<u32>, price: f64) -> Self {
        Self {
            min_duration_hours,
            max_duration_hours,
            price,
        }
    }

    /// Checks whether a whole-hour duration falls in this bracket.
    #[must_use]
    pub fn contains(&self, hours: u32) -> bool {
        hours >= self.min_duration_hours
            && self.max_duration_hours.is_none_or(|max| hours < max)
    }
}

/// A tariff rule: the price for a (room type, reservation type, season)
/// combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRule {
    /// The canonical numeric identifier.
    pub id: i64,
    /// The room type the rule prices.
    pub room_type_id: i64,
    /// The reservation type the rule prices.
    pub reservation_type_id: i64,
    /// Season restriction; `None` makes this the universal default.
    pub season_id: Option<i64>,
    /// The billing unit.
    pub unit: PriceUnit,
    /// Unit price (per night, per hour, or flat for slot rules).
    pub price: f64,
    /// ISO currency code of the price.
    pub currency: String,
    /// Whether the rule participates in resolution.
    pub active: bool,
    /// Duration brackets; only meaningful for hour-based rules.
    pub lines: Vec<PricingRuleLine>,
}

impl PricingRule {
    /// Creates a new pricing rule without duration brackets.
    #[must_use]
    pub fn new(
        id: i64,
        room_type_id: i64,
        reservation_type_id: i64,
        season_id: Option<i64>,
        unit: PriceUnit,
        price: f64,
        currency: &str,
    ) -> Self {
        Self {
            id,
            room_type_id,
            reservation_type_id,
            season_id,
            unit,
            price,
            currency: currency.to_string(),
            active: true,
            lines: Vec::new(),
        }
    }
}

/// Operational status of a physical room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoomStatus {
    /// Sellable.
    #[default]
    Available,
    /// Currently occupied by a guest.
    Occupied,
    /// Withdrawn for maintenance.
    Maintenance,
    /// Withdrawn as out of order.
    OutOfOrder,
}

impl RoomStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::OutOfOrder => "out_of_order",
        }
    }

    /// Returns whether this status removes the room from allocation.
    ///
    /// Occupied rooms still participate in the scan; their stays decide.
    #[must_use]
    pub const fn blocks_allocation(&self) -> bool {
        matches!(self, Self::Maintenance | Self::OutOfOrder)
    }
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            "out_of_order" => Ok(Self::OutOfOrder),
            _ => Err(DomainError::InvalidRoomStatus(s.to_string())),
        }
    }
}

/// A physical room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// The canonical numeric identifier.
    pub id: i64,
    /// Room name/number, the deterministic ordering key for availability
    /// scans.
    pub name: String,
    /// The type this room belongs to.
    pub room_type_id: i64,
    /// Operational status.
    pub status: RoomStatus,
    /// Whether the room exists in the sellable inventory.
    pub active: bool,
}

impl Room {
    /// Creates a new active, available room.
    #[must_use]
    pub fn new(id: i64, name: &str, room_type_id: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            room_type_id,
            status: RoomStatus::Available,
            active: true,
        }
    }
}

/// Which optional supplement a stay has earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingMode {
    /// Early check-in accepted within the allowed window; a fee applies.
    EarlyFee,
    /// Late check-out accepted within the allowed window; a fee applies.
    LateFee,
    /// The request falls outside the window; a full extra night is billed.
    ExtraNight,
    /// The request could not be evaluated.
    InvalidRequest,
}

impl PricingMode {
    /// Converts this mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EarlyFee => "early_fee",
            Self::LateFee => "late_fee",
            Self::ExtraNight => "extra_night",
            Self::InvalidRequest => "invalid_request",
        }
    }
}

impl FromStr for PricingMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "early_fee" => Ok(Self::EarlyFee),
            "late_fee" => Ok(Self::LateFee),
            "extra_night" => Ok(Self::ExtraNight),
            "invalid_request" => Ok(Self::InvalidRequest),
            _ => Err(DomainError::InvalidPricingMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for PricingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The direction of an early/late request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    /// Early check-in: arrive before the planned check-in.
    Early,
    /// Late check-out: leave after the planned check-out.
    Late,
}

impl RequestKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Late => "late",
        }
    }
}

impl FromStr for RequestKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "early" => Ok(Self::Early),
            "late" => Ok(Self::Late),
            _ => Err(DomainError::InvalidRequestKind(s.to_string())),
        }
    }
}

/// One occupancy of one room by one or more guests.
///
/// The central mutable entity. Booking dates are what the user picked;
/// planned dates are derived from the configured slot; actual dates start
/// equal to planned and move when early/late requests are granted. The two
/// pricing-mode fields are deliberately independent so a stay can carry an
/// early and a late supplement at the same time without one overwriting
/// the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stay {
    /// The canonical numeric identifier.
    pub id: i64,
    /// Guests occupying the room.
    pub occupant_ids: Vec<i64>,
    /// The room type requested.
    pub room_type_id: i64,
    /// The assigned room, once availability has picked one.
    pub room_id: Option<i64>,
    /// The reservation type in force.
    pub reservation_type_id: i64,
    /// First calendar day of the booking, as chosen by the user.
    pub booking_start_date: Option<Date>,
    /// Last calendar day of the booking (classic multi-night stays).
    pub booking_end_date: Option<Date>,
    /// Check-in derived from the configured slot.
    pub planned_checkin_date: Option<PrimitiveDateTime>,
    /// Check-out derived from the configured slot.
    pub planned_checkout_date: Option<PrimitiveDateTime>,
    /// Effective check-in after early/late adjustments.
    pub actual_checkin_date: Option<PrimitiveDateTime>,
    /// Effective check-out after early/late adjustments.
    pub actual_checkout_date: Option<PrimitiveDateTime>,
    /// Whether an early check-in was requested.
    pub early_checkin_requested: bool,
    /// Requested early arrival hour.
    pub early_checkin_hour: Option<HourOfDay>,
    /// Whether a late check-out was requested.
    pub late_checkout_requested: bool,
    /// Requested late departure hour.
    pub late_checkout_hour: Option<HourOfDay>,
    /// Outcome of the early evaluation.
    pub early_pricing_mode: Option<PricingMode>,
    /// Outcome of the late evaluation.
    pub late_pricing_mode: Option<PricingMode>,
    /// Whether either evaluation demanded a full extra night.
    pub extra_night_required: bool,
    /// Lifecycle state.
    pub state: StayState,
}

impl Stay {
    /// Creates a new pending stay with no dates resolved yet.
    #[must_use]
    pub const fn new(id: i64, room_type_id: i64, reservation_type_id: i64) -> Self {
        Self {
            id,
            occupant_ids: Vec::new(),
            room_type_id,
            room_id: None,
            reservation_type_id,
            booking_start_date: None,
            booking_end_date: None,
            planned_checkin_date: None,
            planned_checkout_date: None,
            actual_checkin_date: None,
            actual_checkout_date: None,
            early_checkin_requested: false,
            early_checkin_hour: None,
            late_checkout_requested: false,
            late_checkout_hour: None,
            early_pricing_mode: None,
            late_pricing_mode: None,
            extra_night_required: false,
            state: StayState::Pending,
        }
    }

    /// The effective occupancy interval, preferring actual over planned
    /// dates.
    #[must_use]
    pub fn occupancy(&self) -> Option<(PrimitiveDateTime, PrimitiveDateTime)> {
        let checkin: PrimitiveDateTime = self.actual_checkin_date.or(self.planned_checkin_date)?;
        let checkout: PrimitiveDateTime =
            self.actual_checkout_date.or(self.planned_checkout_date)?;
        Some((checkin, checkout))
    }
}
