//! API request and response data transfer objects.
//!
//! DTOs are distinct from domain types and represent the API contract:
//! enums travel as their string codes, datetimes as `time` values the host
//! renders as ISO-8601.

use time::{Date, PrimitiveDateTime};

/// API request to resolve planned check-in/check-out datetimes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvePlannedDatesRequest {
    /// The room type identifier.
    pub room_type_id: i64,
    /// The reservation type identifier.
    pub reservation_type_id: i64,
    /// First calendar day of the booking.
    pub start_date: Option<Date>,
    /// Last calendar day of the booking.
    pub end_date: Option<Date>,
}

/// API response with the resolved planned datetimes.
///
/// Both datetimes are null when the combination cannot be computed
/// (flexible type, missing slot or missing dates).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResolvePlannedDatesResponse {
    /// Planned check-in, if computable.
    pub checkin: Option<PrimitiveDateTime>,
    /// Planned check-out, if computable.
    pub checkout: Option<PrimitiveDateTime>,
    /// A human-readable summary.
    pub message: String,
}

/// API request to evaluate an early check-in or late check-out.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateEclcRequest {
    /// `"early"` or `"late"`.
    pub kind: String,
    /// The datetime the guest asked for.
    pub requested_datetime: Option<PrimitiveDateTime>,
    /// The standard planned datetime.
    pub planned_datetime: Option<PrimitiveDateTime>,
    /// The room type supplying the hour limits.
    pub room_type_id: i64,
}

/// API response with the early/late decision.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EvaluateEclcResponse {
    /// `"accepted"`, `"extra_night"` or `"refused"`.
    pub status: String,
    /// The pricing mode code the decision carries.
    pub pricing_mode: String,
    /// Hours between planned and requested time, for audit.
    pub difference_hours: f64,
    /// A human-readable narration of the decision.
    pub message: String,
}

/// API request to check room availability.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckAvailabilityRequest {
    /// The room type to search.
    pub room_type_id: i64,
    /// Requested check-in.
    pub checkin_datetime: PrimitiveDateTime,
    /// Requested check-out.
    pub checkout_datetime: PrimitiveDateTime,
    /// A stay to ignore while scanning (the stay being modified).
    pub exclude_stay_id: Option<i64>,
    /// Cleaning turnaround margin in hours.
    pub buffer_hours: Option<f64>,
    /// Constrains alternative slots to this reservation type's times.
    pub reservation_type_id: Option<i64>,
}

/// One alternative slot offered when nothing is free.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AlternativeSlotInfo {
    /// The room the slot is on.
    pub room_id: i64,
    /// The room name.
    pub room_name: String,
    /// Slot check-in.
    pub checkin: PrimitiveDateTime,
    /// Slot check-out.
    pub checkout: PrimitiveDateTime,
    /// Slot length in hours.
    pub duration_hours: f64,
}

/// One blocking stay, for user-facing diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConflictDetailInfo {
    /// The blocking stay.
    pub stay_id: i64,
    /// The room it occupies.
    pub room_id: i64,
    /// The room name.
    pub room_name: String,
    /// The blocking stay's check-in.
    pub checkin: PrimitiveDateTime,
    /// The blocking stay's check-out.
    pub checkout: PrimitiveDateTime,
    /// The overlap classification tag.
    pub overlap: String,
}

/// API response for an availability check.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckAvailabilityResponse {
    /// `"available"` or `"unavailable"`.
    pub status: String,
    /// The first free room, when available.
    pub room_id: Option<i64>,
    /// Its name, when available.
    pub room_name: Option<String>,
    /// A human-readable summary.
    pub message: String,
    /// Machine-readable reason tag, when unavailable.
    pub reason: Option<String>,
    /// The earliest buffered liberation at or after the requested
    /// check-in.
    pub earliest_liberation: Option<PrimitiveDateTime>,
    /// Up to three alternative slots of the requested duration.
    pub alternatives: Vec<AlternativeSlotInfo>,
    /// Every stay that blocked a room.
    pub conflict_details: Vec<ConflictDetailInfo>,
}

/// One pricing mode entry for a price computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingModeRequest {
    /// The pricing mode code (`"early_fee"`, `"late_fee"`,
    /// `"extra_night"`).
    pub mode: String,
    /// The requested datetime, recorded for audit.
    pub requested_datetime: Option<PrimitiveDateTime>,
}

/// API request to price a stay.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputePriceRequest {
    /// The room type identifier.
    pub room_type_id: i64,
    /// The reservation type identifier.
    pub reservation_type_id: i64,
    /// Planned check-in.
    pub planned_checkin: PrimitiveDateTime,
    /// Planned check-out.
    pub planned_checkout: PrimitiveDateTime,
    /// Number of guests.
    pub nb_persons: u32,
    /// Supplements earned by early/late evaluations.
    pub pricing_modes: Vec<PricingModeRequest>,
}

/// The rule-dictated base layer of a price.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BaseChargeInfo {
    /// The applied rule.
    pub rule_id: i64,
    /// The billing unit code.
    pub unit: String,
    /// Unit price.
    pub unit_price: f64,
    /// Number of units billed.
    pub quantity: u32,
    /// The layer amount.
    pub amount: f64,
}

/// One automatic adjustment entry.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AdjustmentInfo {
    /// The adjustment kind code.
    pub kind: String,
    /// Human-readable label for invoicing.
    pub label: String,
    /// The room type's capacity.
    pub capacity: u32,
    /// Guests on the stay.
    pub persons: u32,
    /// Guests above capacity.
    pub extra_count: u32,
    /// Rate per extra guest.
    pub unit_price: f64,
    /// The entry amount.
    pub amount: f64,
}

/// One supplement entry.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SupplementInfo {
    /// The supplement kind code.
    pub kind: String,
    /// Human-readable label for invoicing.
    pub label: String,
    /// The entry amount.
    pub amount: f64,
    /// The requested datetime, for audit.
    pub requested_datetime: Option<PrimitiveDateTime>,
}

/// One discount entry. The layer is reserved and currently always empty.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiscountInfo {
    /// Human-readable label for invoicing.
    pub label: String,
    /// The entry amount.
    pub amount: f64,
}

/// API response with the layered price breakdown.
///
/// `base` is null when no tariff rule matched; callers must check for
/// this explicit unpriced signal.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComputePriceResponse {
    /// The base layer, if a rule matched.
    pub base: Option<BaseChargeInfo>,
    /// Automatic corrections.
    pub adjustments: Vec<AdjustmentInfo>,
    /// Chosen add-ons.
    pub supplements: Vec<SupplementInfo>,
    /// Reserved promotional layer.
    pub discounts: Vec<DiscountInfo>,
    /// Currency of every amount.
    pub currency: String,
    /// Sum of all layers.
    pub total: f64,
}
