use crate::catalog_loader::{CatalogData, load_catalog};
use stayflow::HotelCatalog;
use stayflow_audit::{Actor, Cause};
use stayflow_domain::{
    HourOfDay, PriceUnit, PricingRule, PricingRuleLine, ReservationSlot, ReservationType,
    ReservationTypeCode, Room, RoomType, Season,
};
use time::{Date, Month, PrimitiveDateTime, Time};

pub const DELUXE: i64 = 10;
pub const SUITE: i64 = 20;

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

/// The plain records a persistence collaborator would hand over.
pub fn create_test_data() -> CatalogData {
    let mut deluxe: RoomType = RoomType::new(DELUXE, "Deluxe", 50_000.0).unwrap();
    deluxe.capacity = Some(2);

    let mut hourly: PricingRule =
        PricingRule::new(3, DELUXE, FLEXIBLE, None, PriceUnit::Hour, 0.0, "XOF");
    hourly.lines = vec![
        PricingRuleLine::new(2, Some(6), 5_000.0),
        PricingRuleLine::new(6, Some(12), 9_000.0),
    ];

    CatalogData {
        room_types: vec![deluxe, RoomType::new(SUITE, "Suite", 90_000.0).unwrap()],
        reservation_types: vec![
            ReservationType::new(CLASSIC, "Classic", ReservationTypeCode::Classic),
            ReservationType::new(DAY_USE, "Day use", ReservationTypeCode::DayUse),
            ReservationType::new(FLEXIBLE, "Flexible", ReservationTypeCode::Flexible),
        ],
        slots: vec![
            ReservationSlot::new(DELUXE, CLASSIC, hour(14.0), hour(12.0)),
            ReservationSlot::new(DELUXE, DAY_USE, hour(10.0), hour(17.0)),
            ReservationSlot::new(SUITE, CLASSIC, hour(15.0), hour(11.0)),
        ],
        seasons: vec![Season::new(
            1,
            "Summer",
            date(Month::June, 1),
            date(Month::August, 31),
            10,
        )],
        pricing_rules: vec![
            PricingRule::new(1, DELUXE, CLASSIC, None, PriceUnit::Night, 50_000.0, "XOF"),
            PricingRule::new(
                2,
                DELUXE,
                CLASSIC,
                Some(1),
                PriceUnit::Night,
                75_000.0,
                "XOF",
            ),
            hourly,
        ],
        rooms: vec![Room::new(201, "R201", SUITE)],
    }
}

pub fn create_test_catalog() -> HotelCatalog {
    load_catalog(create_test_data()).unwrap()
}
