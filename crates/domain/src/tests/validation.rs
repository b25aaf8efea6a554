use crate::{
    DomainError, HourOfDay, PriceUnit, PricingRule, PricingRuleLine, ReservationSlot,
    ReservationType, ReservationTypeCode, Room, Season, Stay, validate_room_assignment,
    validate_rule_lines, validate_season_dates, validate_slot_reservation_type,
    validate_stay_dates,
};
use time::{Date, Month, PrimitiveDateTime, Time};

fn hour(value: f64) -> HourOfDay {
    HourOfDay::new(value).unwrap()
}

fn date(day: u8) -> Date {
    Date::from_calendar_date(2025, Month::June, day).unwrap()
}

fn datetime(day: u8, h: u8) -> PrimitiveDateTime {
    PrimitiveDateTime::new(date(day), Time::from_hms(h, 0, 0).unwrap())
}

#[test]
fn test_slot_on_classic_type_is_accepted() {
    let classic: ReservationType = ReservationType::new(1, "Classic", ReservationTypeCode::Classic);
    let slot: ReservationSlot = ReservationSlot::new(10, 1, hour(14.0), hour(12.0));

    let result: Result<(), DomainError> = validate_slot_reservation_type(&slot, &classic);
    assert!(result.is_ok());
}

#[test]
fn test_slot_on_flexible_type_is_rejected() {
    let flexible: ReservationType =
        ReservationType::new(3, "Flexible", ReservationTypeCode::Flexible);
    let slot: ReservationSlot = ReservationSlot::new(10, 3, hour(14.0), hour(18.0));

    let result: Result<(), DomainError> = validate_slot_reservation_type(&slot, &flexible);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::SlotOnFlexibleType { .. }
    ));
}

#[test]
fn test_season_dates_must_be_ordered() {
    let season: Season = Season::new(1, "Backwards", date(10), date(1), 10);

    let result: Result<(), DomainError> = validate_season_dates(&season);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidSeasonDates { .. }
    ));
}

#[test]
fn test_rule_without_lines_is_valid() {
    let rule: PricingRule = PricingRule::new(1, 10, 1, None, PriceUnit::Night, 50_000.0, "XOF");
    assert!(validate_rule_lines(&rule).is_ok());
}

#[test]
fn test_ordered_hourly_brackets_are_valid() {
    let mut rule: PricingRule = PricingRule::new(1, 10, 3, None, PriceUnit::Hour, 0.0, "XOF");
    rule.lines = vec![
        PricingRuleLine::new(2, Some(6), 5_000.0),
        PricingRuleLine::new(6, Some(12), 9_000.0),
        PricingRuleLine::new(12, None, 15_000.0),
    ];

    assert!(validate_rule_lines(&rule).is_ok());
}

#[test]
fn test_brackets_on_night_rule_are_rejected() {
    let mut rule: PricingRule = PricingRule::new(1, 10, 1, None, PriceUnit::Night, 50_000.0, "XOF");
    rule.lines = vec![PricingRuleLine::new(2, Some(6), 5_000.0)];

    assert!(matches!(
        validate_rule_lines(&rule).unwrap_err(),
        DomainError::RuleLinesOnNonHourlyRule { rule_id: 1 }
    ));
}

#[test]
fn test_empty_bracket_is_rejected() {
    let mut rule: PricingRule = PricingRule::new(1, 10, 3, None, PriceUnit::Hour, 0.0, "XOF");
    rule.lines = vec![PricingRuleLine::new(6, Some(6), 9_000.0)];

    assert!(matches!(
        validate_rule_lines(&rule).unwrap_err(),
        DomainError::InvalidRuleLines { .. }
    ));
}

#[test]
fn test_unordered_brackets_are_rejected() {
    let mut rule: PricingRule = PricingRule::new(1, 10, 3, None, PriceUnit::Hour, 0.0, "XOF");
    rule.lines = vec![
        PricingRuleLine::new(6, Some(12), 9_000.0),
        PricingRuleLine::new(2, Some(6), 5_000.0),
    ];

    assert!(matches!(
        validate_rule_lines(&rule).unwrap_err(),
        DomainError::InvalidRuleLines { .. }
    ));
}

#[test]
fn test_stay_with_ordered_dates_is_valid() {
    let mut stay: Stay = Stay::new(1, 10, 1);
    stay.planned_checkin_date = Some(datetime(1, 14));
    stay.planned_checkout_date = Some(datetime(2, 12));

    assert!(validate_stay_dates(&stay).is_ok());
}

#[test]
fn test_stay_checkout_before_checkin_is_rejected() {
    let mut stay: Stay = Stay::new(1, 10, 1);
    stay.planned_checkin_date = Some(datetime(2, 12));
    stay.planned_checkout_date = Some(datetime(1, 14));

    assert!(matches!(
        validate_stay_dates(&stay).unwrap_err(),
        DomainError::InvalidStayDates { .. }
    ));
}

#[test]
fn test_stay_checkout_equal_checkin_is_rejected() {
    let mut stay: Stay = Stay::new(1, 10, 1);
    stay.planned_checkin_date = Some(datetime(1, 14));
    stay.planned_checkout_date = Some(datetime(1, 14));

    assert!(validate_stay_dates(&stay).is_err());
}

#[test]
fn test_booking_end_before_start_is_rejected() {
    let mut stay: Stay = Stay::new(1, 10, 1);
    stay.booking_start_date = Some(date(5));
    stay.booking_end_date = Some(date(3));

    assert!(matches!(
        validate_stay_dates(&stay).unwrap_err(),
        DomainError::InvalidStayDates { .. }
    ));
}

#[test]
fn test_room_of_matching_type_may_be_assigned() {
    let stay: Stay = Stay::new(1, 10, 1);
    let room: Room = Room::new(101, "R101", 10);

    assert!(validate_room_assignment(&stay, &room).is_ok());
}

#[test]
fn test_room_of_other_type_is_rejected() {
    let stay: Stay = Stay::new(1, 10, 1);
    let room: Room = Room::new(201, "R201", 20);

    let result: Result<(), DomainError> = validate_room_assignment(&stay, &room);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::RoomTypeMismatch {
            stay_room_type: 10,
            room_room_type: 20,
        }
    ));
}
