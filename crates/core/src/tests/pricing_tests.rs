//! Tests for the pricing service.

use crate::pricing::{
    PriceBreakdown, PricingRequest, SupplementKind, SupplementRequest, compute_price,
};
use crate::{CoreError, HotelCatalog, PricingConfig};
use stayflow_domain::{DomainError, PriceUnit, PricingMode};

use super::helpers::{
    CLASSIC, DAY_USE, DELUXE, FLEXIBLE, PENTHOUSE, SUITE, create_test_catalog, datetime,
};
use time::{Month, PrimitiveDateTime};

fn night_request(
    checkin: PrimitiveDateTime,
    checkout: PrimitiveDateTime,
) -> PricingRequest {
    PricingRequest {
        room_type_id: DELUXE,
        reservation_type_id: CLASSIC,
        planned_checkin: checkin,
        planned_checkout: checkout,
        nb_persons: 1,
        supplements: Vec::new(),
    }
}

fn flexible_request(
    checkin: PrimitiveDateTime,
    checkout: PrimitiveDateTime,
) -> PricingRequest {
    PricingRequest {
        room_type_id: DELUXE,
        reservation_type_id: FLEXIBLE,
        planned_checkin: checkin,
        planned_checkout: checkout,
        nb_persons: 1,
        supplements: Vec::new(),
    }
}

fn assert_additive(breakdown: &PriceBreakdown) {
    let expected: f64 = breakdown.base.as_ref().map_or(0.0, |base| base.amount)
        + breakdown.adjustments.iter().map(|adj| adj.amount).sum::<f64>()
        + breakdown.supplements.iter().map(|sup| sup.amount).sum::<f64>();
    assert!((breakdown.total - expected).abs() < 1e-9);
}

#[test]
fn test_one_night_at_the_default_rate() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    // May is outside the summer season, so the season-less rule applies.
    let breakdown: PriceBreakdown = compute_price(
        &catalog,
        &config,
        &night_request(
            datetime(Month::May, 1, 14, 0),
            datetime(Month::May, 2, 12, 0),
        ),
    )
    .unwrap();

    let base = breakdown.base.as_ref().unwrap();
    assert_eq!(base.rule_id, 1);
    assert_eq!(base.unit, PriceUnit::Night);
    assert_eq!(base.quantity, 1);
    assert!((base.amount - 50_000.0).abs() < f64::EPSILON);
    assert_eq!(breakdown.currency, "XOF");
    assert_additive(&breakdown);
}

#[test]
fn test_seasonal_rule_wins_inside_the_season() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let breakdown: PriceBreakdown = compute_price(
        &catalog,
        &config,
        &night_request(
            datetime(Month::June, 10, 14, 0),
            datetime(Month::June, 11, 12, 0),
        ),
    )
    .unwrap();

    let base = breakdown.base.as_ref().unwrap();
    assert_eq!(base.rule_id, 2);
    assert!((base.amount - 75_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_multi_night_stay_multiplies_the_rate() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    // Three calendar days minus two hours: two whole days, billed as two
    // nights.
    let breakdown: PriceBreakdown = compute_price(
        &catalog,
        &config,
        &night_request(
            datetime(Month::May, 1, 14, 0),
            datetime(Month::May, 4, 12, 0),
        ),
    )
    .unwrap();

    let base = breakdown.base.as_ref().unwrap();
    assert_eq!(base.quantity, 2);
    assert!((base.amount - 100_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_hourly_bracket_price_is_flat() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    // Seven hours lands in the [6, 12) bracket.
    let breakdown: PriceBreakdown = compute_price(
        &catalog,
        &config,
        &flexible_request(
            datetime(Month::May, 1, 9, 0),
            datetime(Month::May, 1, 16, 0),
        ),
    )
    .unwrap();

    let base = breakdown.base.as_ref().unwrap();
    assert_eq!(base.rule_id, 3);
    assert!((base.amount - 9_000.0).abs() < f64::EPSILON);
    assert!((base.unit_price - 9_000.0).abs() < f64::EPSILON);
    assert_eq!(base.quantity, 1);
    assert_additive(&breakdown);
}

#[test]
fn test_duration_below_every_bracket_is_rejected() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let result: Result<PriceBreakdown, CoreError> = compute_price(
        &catalog,
        &config,
        &flexible_request(
            datetime(Month::May, 1, 9, 0),
            datetime(Month::May, 1, 10, 0),
        ),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::DurationBelowBrackets {
            hours: 1,
            minimum: 2
        })
    ));
}

#[test]
fn test_overlong_hourly_stay_falls_back_to_the_night_rate() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    // Thirteen hours outlasts the [6, 12) bracket; the deluxe night rule
    // takes over, prorated by calendar days.
    let breakdown: PriceBreakdown = compute_price(
        &catalog,
        &config,
        &flexible_request(
            datetime(Month::May, 1, 9, 0),
            datetime(Month::May, 1, 22, 0),
        ),
    )
    .unwrap();

    let base = breakdown.base.as_ref().unwrap();
    assert_eq!(base.rule_id, 1);
    assert_eq!(base.unit, PriceUnit::Night);
    assert_eq!(base.quantity, 1);
    assert!((base.amount - 50_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_overlong_hourly_stay_without_night_rate_is_an_error() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let result: Result<PriceBreakdown, CoreError> = compute_price(
        &catalog,
        &config,
        &PricingRequest {
            room_type_id: PENTHOUSE,
            reservation_type_id: FLEXIBLE,
            planned_checkin: datetime(Month::May, 1, 9, 0),
            planned_checkout: datetime(Month::May, 1, 17, 0),
            nb_persons: 1,
            supplements: Vec::new(),
        },
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::MissingNightFallback {
            room_type_id: PENTHOUSE,
            hours: 8
        })
    ));
}

#[test]
fn test_plain_hourly_rate_multiplies_by_hours() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let breakdown: PriceBreakdown = compute_price(
        &catalog,
        &config,
        &PricingRequest {
            room_type_id: SUITE,
            reservation_type_id: FLEXIBLE,
            planned_checkin: datetime(Month::May, 1, 9, 0),
            planned_checkout: datetime(Month::May, 1, 14, 0),
            nb_persons: 1,
            supplements: Vec::new(),
        },
    )
    .unwrap();

    let base = breakdown.base.as_ref().unwrap();
    assert_eq!(base.quantity, 5);
    assert!((base.amount - 10_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_slot_rate_is_flat_regardless_of_duration() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let breakdown: PriceBreakdown = compute_price(
        &catalog,
        &config,
        &PricingRequest {
            room_type_id: DELUXE,
            reservation_type_id: DAY_USE,
            planned_checkin: datetime(Month::May, 1, 10, 0),
            planned_checkout: datetime(Month::May, 1, 17, 0),
            nb_persons: 1,
            supplements: Vec::new(),
        },
    )
    .unwrap();

    let base = breakdown.base.as_ref().unwrap();
    assert_eq!(base.unit, PriceUnit::Slot);
    assert_eq!(base.quantity, 1);
    assert!((base.amount - 30_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_no_matching_rule_is_an_unpriced_result_not_an_error() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    // The suite has no day-use rule.
    let breakdown: PriceBreakdown = compute_price(
        &catalog,
        &config,
        &PricingRequest {
            room_type_id: SUITE,
            reservation_type_id: DAY_USE,
            planned_checkin: datetime(Month::May, 1, 10, 0),
            planned_checkout: datetime(Month::May, 1, 17, 0),
            nb_persons: 1,
            supplements: Vec::new(),
        },
    )
    .unwrap();

    assert!(breakdown.base.is_none());
    assert!((breakdown.total).abs() < f64::EPSILON);
    assert_eq!(breakdown.currency, "XOF");
}

#[test]
fn test_extra_guests_add_an_adjustment() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig {
        extra_guest_fee: 5_000.0,
        ..PricingConfig::default()
    };

    let mut request: PricingRequest = night_request(
        datetime(Month::May, 1, 14, 0),
        datetime(Month::May, 2, 12, 0),
    );
    request.nb_persons = 4;

    let breakdown: PriceBreakdown = compute_price(&catalog, &config, &request).unwrap();

    assert_eq!(breakdown.adjustments.len(), 1);
    let adjustment = &breakdown.adjustments[0];
    assert_eq!(adjustment.capacity, 2);
    assert_eq!(adjustment.extra_count, 2);
    assert!((adjustment.amount - 10_000.0).abs() < f64::EPSILON);
    assert!((breakdown.total - 60_000.0).abs() < f64::EPSILON);
    assert_additive(&breakdown);
}

#[test]
fn test_guests_within_capacity_add_nothing() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig {
        extra_guest_fee: 5_000.0,
        ..PricingConfig::default()
    };

    let mut request: PricingRequest = night_request(
        datetime(Month::May, 1, 14, 0),
        datetime(Month::May, 2, 12, 0),
    );
    request.nb_persons = 2;

    let breakdown: PriceBreakdown = compute_price(&catalog, &config, &request).unwrap();

    assert!(breakdown.adjustments.is_empty());
}

#[test]
fn test_early_and_late_supplements_sum_independently() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let mut request: PricingRequest = night_request(
        datetime(Month::May, 1, 14, 0),
        datetime(Month::May, 2, 12, 0),
    );
    request.supplements = vec![
        SupplementRequest {
            mode: PricingMode::EarlyFee,
            requested_datetime: Some(datetime(Month::May, 1, 8, 0)),
        },
        SupplementRequest {
            mode: PricingMode::LateFee,
            requested_datetime: Some(datetime(Month::May, 2, 16, 0)),
        },
    ];

    let breakdown: PriceBreakdown = compute_price(&catalog, &config, &request).unwrap();

    assert_eq!(breakdown.supplements.len(), 2);
    assert_eq!(breakdown.supplements[0].kind, SupplementKind::EarlyCheckin);
    assert_eq!(breakdown.supplements[1].kind, SupplementKind::LateCheckout);
    assert!((breakdown.total - 80_000.0).abs() < f64::EPSILON);
    assert_additive(&breakdown);
}

#[test]
fn test_extra_night_supplement_uses_the_night_rate() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let mut request: PricingRequest = night_request(
        datetime(Month::May, 1, 14, 0),
        datetime(Month::May, 2, 12, 0),
    );
    request.supplements = vec![SupplementRequest {
        mode: PricingMode::ExtraNight,
        requested_datetime: Some(datetime(Month::May, 1, 4, 0)),
    }];

    let breakdown: PriceBreakdown = compute_price(&catalog, &config, &request).unwrap();

    assert_eq!(breakdown.supplements.len(), 1);
    assert_eq!(breakdown.supplements[0].kind, SupplementKind::ExtraNight);
    // The night rule's per-night price, not the configured fallback.
    assert!((breakdown.supplements[0].amount - 50_000.0).abs() < f64::EPSILON);
    assert!((breakdown.total - 100_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_extra_night_on_an_hourly_rule_resolves_the_night_rate() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let mut request: PricingRequest = flexible_request(
        datetime(Month::May, 1, 9, 0),
        datetime(Month::May, 1, 12, 0),
    );
    request.supplements = vec![SupplementRequest {
        mode: PricingMode::ExtraNight,
        requested_datetime: None,
    }];

    let breakdown: PriceBreakdown = compute_price(&catalog, &config, &request).unwrap();

    // Base from the [2, 6) bracket, extra night from the deluxe night
    // rule.
    assert!((breakdown.supplements[0].amount - 50_000.0).abs() < f64::EPSILON);
    assert!((breakdown.total - 55_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_duplicate_modes_are_billed_once() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let mut request: PricingRequest = night_request(
        datetime(Month::May, 1, 14, 0),
        datetime(Month::May, 2, 12, 0),
    );
    request.supplements = vec![
        SupplementRequest {
            mode: PricingMode::EarlyFee,
            requested_datetime: None,
        },
        SupplementRequest {
            mode: PricingMode::EarlyFee,
            requested_datetime: None,
        },
    ];

    let breakdown: PriceBreakdown = compute_price(&catalog, &config, &request).unwrap();

    assert_eq!(breakdown.supplements.len(), 1);
}

#[test]
fn test_invalid_request_mode_contributes_nothing() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let mut request: PricingRequest = night_request(
        datetime(Month::May, 1, 14, 0),
        datetime(Month::May, 2, 12, 0),
    );
    request.supplements = vec![SupplementRequest {
        mode: PricingMode::InvalidRequest,
        requested_datetime: None,
    }];

    let breakdown: PriceBreakdown = compute_price(&catalog, &config, &request).unwrap();

    assert!(breakdown.supplements.is_empty());
    assert!((breakdown.total - 50_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_discount_layer_is_reserved_and_empty() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let breakdown: PriceBreakdown = compute_price(
        &catalog,
        &config,
        &night_request(
            datetime(Month::May, 1, 14, 0),
            datetime(Month::May, 2, 12, 0),
        ),
    )
    .unwrap();

    assert!(breakdown.discounts.is_empty());
}

#[test]
fn test_unknown_room_type_is_an_error() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let mut request: PricingRequest = night_request(
        datetime(Month::May, 1, 14, 0),
        datetime(Month::May, 2, 12, 0),
    );
    request.room_type_id = 999;

    let result: Result<PriceBreakdown, CoreError> =
        compute_price(&catalog, &config, &request);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::RoomTypeNotFound(999))
    ));
}

#[test]
fn test_inverted_planned_interval_is_an_error() {
    let catalog: HotelCatalog = create_test_catalog();
    let config: PricingConfig = PricingConfig::default();

    let result: Result<PriceBreakdown, CoreError> = compute_price(
        &catalog,
        &config,
        &night_request(
            datetime(Month::May, 2, 12, 0),
            datetime(Month::May, 1, 14, 0),
        ),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidStayDates { .. })
    ));
}
