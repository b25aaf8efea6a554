use crate::HotelCatalog;
use stayflow_audit::{Actor, Cause};
use stayflow_domain::{
    HourOfDay, PriceUnit, PricingRule, PricingRuleLine, ReservationSlot, ReservationType,
    ReservationTypeCode, Room, RoomStatus, RoomType, Season, Stay,
};
use time::{Date, Month, PrimitiveDateTime, Time};

/// Room type ids used throughout the core tests.
pub const DELUXE: i64 = 10;
pub const SUITE: i64 = 20;
pub const PENTHOUSE: i64 = 30;

/// Reservation type ids.
pub const CLASSIC: i64 = 1;
pub const DAY_USE: i64 = 2;
pub const FLEXIBLE: i64 = 3;

pub fn hour(value: f64) -> HourOfDay {
    HourOfDay::new(value).unwrap()
}

pub fn date(month: Month, day: u8) -> Date {
    Date::from_calendar_date(2025, month, day).unwrap()
}

pub fn datetime(month: Month, day: u8, h: u8, m: u8) -> PrimitiveDateTime {
    PrimitiveDateTime::new(date(month, day), Time::from_hms(h, m, 0).unwrap())
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("rec-07"), String::from("receptionist"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-123"), String::from("Front desk request"))
}

/// A catalog with two sellable deluxe rooms, one suite, an empty
/// penthouse type, a summer season and a spread of tariff rules.
pub fn create_test_catalog() -> HotelCatalog {
    let mut catalog: HotelCatalog = HotelCatalog::new();

    let mut deluxe: RoomType = RoomType::new(DELUXE, "Deluxe", 50_000.0).unwrap();
    deluxe.capacity = Some(2);
    catalog.add_room_type(deluxe).unwrap();
    catalog
        .add_room_type(RoomType::new(SUITE, "Suite", 90_000.0).unwrap())
        .unwrap();
    catalog
        .add_room_type(RoomType::new(PENTHOUSE, "Penthouse", 200_000.0).unwrap())
        .unwrap();

    catalog
        .add_reservation_type(ReservationType::new(
            CLASSIC,
            "Classic",
            ReservationTypeCode::Classic,
        ))
        .unwrap();
    catalog
        .add_reservation_type(ReservationType::new(
            DAY_USE,
            "Day use",
            ReservationTypeCode::DayUse,
        ))
        .unwrap();
    catalog
        .add_reservation_type(ReservationType::new(
            FLEXIBLE,
            "Flexible",
            ReservationTypeCode::Flexible,
        ))
        .unwrap();

    catalog
        .add_slot(ReservationSlot::new(DELUXE, CLASSIC, hour(14.0), hour(12.0)))
        .unwrap();
    catalog
        .add_slot(ReservationSlot::new(DELUXE, DAY_USE, hour(10.0), hour(17.0)))
        .unwrap();
    catalog
        .add_slot(ReservationSlot::new(SUITE, CLASSIC, hour(15.0), hour(11.0)))
        .unwrap();

    catalog
        .add_season(Season::new(
            1,
            "Summer",
            date(Month::June, 1),
            date(Month::August, 31),
            10,
        ))
        .unwrap();

    // Deluxe: night rates (default and summer), hourly brackets for
    // flexible stays, a flat day-use rate.
    catalog
        .add_pricing_rule(PricingRule::new(
            1,
            DELUXE,
            CLASSIC,
            None,
            PriceUnit::Night,
            50_000.0,
            "XOF",
        ))
        .unwrap();
    catalog
        .add_pricing_rule(PricingRule::new(
            2,
            DELUXE,
            CLASSIC,
            Some(1),
            PriceUnit::Night,
            75_000.0,
            "XOF",
        ))
        .unwrap();
    let mut hourly: PricingRule =
        PricingRule::new(3, DELUXE, FLEXIBLE, None, PriceUnit::Hour, 0.0, "XOF");
    hourly.lines = vec![
        PricingRuleLine::new(2, Some(6), 5_000.0),
        PricingRuleLine::new(6, Some(12), 9_000.0),
    ];
    catalog.add_pricing_rule(hourly).unwrap();
    catalog
        .add_pricing_rule(PricingRule::new(
            4,
            DELUXE,
            DAY_USE,
            None,
            PriceUnit::Slot,
            30_000.0,
            "XOF",
        ))
        .unwrap();

    // Suite: a night rate and a plain (bracket-less) hourly rate.
    catalog
        .add_pricing_rule(PricingRule::new(
            5,
            SUITE,
            CLASSIC,
            None,
            PriceUnit::Night,
            90_000.0,
            "XOF",
        ))
        .unwrap();
    catalog
        .add_pricing_rule(PricingRule::new(
            7,
            SUITE,
            FLEXIBLE,
            None,
            PriceUnit::Hour,
            2_000.0,
            "XOF",
        ))
        .unwrap();

    // Penthouse: hourly brackets with no night rate to fall back on.
    let mut penthouse_hourly: PricingRule =
        PricingRule::new(6, PENTHOUSE, FLEXIBLE, None, PriceUnit::Hour, 0.0, "XOF");
    penthouse_hourly.lines = vec![PricingRuleLine::new(2, Some(6), 25_000.0)];
    catalog.add_pricing_rule(penthouse_hourly).unwrap();

    catalog.add_room(Room::new(101, "R101", DELUXE)).unwrap();
    catalog.add_room(Room::new(102, "R102", DELUXE)).unwrap();
    let mut maintenance_room: Room = Room::new(103, "R103", DELUXE);
    maintenance_room.status = RoomStatus::Maintenance;
    catalog.add_room(maintenance_room).unwrap();
    catalog.add_room(Room::new(201, "R201", SUITE)).unwrap();

    catalog
}

/// A pending stay occupying a room over an explicit interval.
pub fn create_occupying_stay(
    id: i64,
    room_type_id: i64,
    room_id: i64,
    checkin: PrimitiveDateTime,
    checkout: PrimitiveDateTime,
) -> Stay {
    let mut stay: Stay = Stay::new(id, room_type_id, CLASSIC);
    stay.room_id = Some(room_id);
    stay.actual_checkin_date = Some(checkin);
    stay.actual_checkout_date = Some(checkout);
    stay.planned_checkin_date = Some(checkin);
    stay.planned_checkout_date = Some(checkout);
    stay
}
