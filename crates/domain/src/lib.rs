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

mod error;
mod hour_of_day;
mod overlap;
mod season;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use hour_of_day::HourOfDay;
pub use overlap::{OverlapKind, intervals_overlap, overlap_kind};
pub use season::seasons_covering;
pub use types::{
    BedType, PriceUnit, PricingMode, PricingRule, PricingRuleLine, RequestKind, ReservationSlot,
    ReservationType, ReservationTypeCode, Room, RoomStatus, RoomType, Season, Stay, StayState,
};
pub use validation::{
    validate_room_assignment, validate_rule_lines, validate_season_dates,
    validate_slot_reservation_type, validate_stay_dates,
};
