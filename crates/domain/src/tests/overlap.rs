use crate::{OverlapKind, intervals_overlap, overlap_kind};
use time::{Date, Month, PrimitiveDateTime, Time};

fn at(day: u8, hour: u8) -> PrimitiveDateTime {
    let date: Date = Date::from_calendar_date(2025, Month::June, day).unwrap();
    PrimitiveDateTime::new(date, Time::from_hms(hour, 0, 0).unwrap())
}

#[test]
fn test_disjoint_intervals_do_not_overlap() {
    assert!(!intervals_overlap(at(1, 14), at(2, 12), at(2, 14), at(3, 12)));
}

#[test]
fn test_touching_endpoints_do_not_overlap() {
    // Half-open semantics: checkout at 12:00 and checkin at 12:00 coexist.
    assert!(!intervals_overlap(at(1, 14), at(2, 12), at(2, 12), at(3, 12)));
}

#[test]
fn test_intersecting_intervals_overlap() {
    assert!(intervals_overlap(at(1, 14), at(2, 12), at(2, 11), at(3, 12)));
}

#[test]
fn test_overlap_is_symmetric() {
    let cases: [(PrimitiveDateTime, PrimitiveDateTime, PrimitiveDateTime, PrimitiveDateTime); 4] = [
        (at(1, 14), at(2, 12), at(2, 11), at(3, 12)),
        (at(1, 14), at(2, 12), at(2, 12), at(3, 12)),
        (at(1, 0), at(5, 0), at(2, 0), at(3, 0)),
        (at(1, 0), at(2, 0), at(1, 0), at(2, 0)),
    ];

    for (a_start, a_end, b_start, b_end) in cases {
        assert_eq!(
            intervals_overlap(a_start, a_end, b_start, b_end),
            intervals_overlap(b_start, b_end, a_start, a_end)
        );
    }
}

#[test]
fn test_classification_total_inclusion() {
    // Existing stay entirely inside the requested interval.
    let kind: Option<OverlapKind> = overlap_kind(at(1, 0), at(5, 0), at(2, 0), at(3, 0));
    assert_eq!(kind, Some(OverlapKind::TotalInclusion));
}

#[test]
fn test_classification_total_coverage() {
    // Existing stay swallows the requested interval.
    let kind: Option<OverlapKind> = overlap_kind(at(2, 0), at(3, 0), at(1, 0), at(5, 0));
    assert_eq!(kind, Some(OverlapKind::TotalCoverage));
}

#[test]
fn test_classification_partial_start() {
    // Existing stay overhangs the start of the request.
    let kind: Option<OverlapKind> = overlap_kind(at(2, 0), at(5, 0), at(1, 0), at(3, 0));
    assert_eq!(kind, Some(OverlapKind::PartialStart));
}

#[test]
fn test_classification_partial_end() {
    // Existing stay overhangs the end of the request.
    let kind: Option<OverlapKind> = overlap_kind(at(1, 0), at(3, 0), at(2, 0), at(5, 0));
    assert_eq!(kind, Some(OverlapKind::PartialEnd));
}

#[test]
fn test_classification_none_for_disjoint() {
    assert_eq!(overlap_kind(at(1, 0), at(2, 0), at(3, 0), at(4, 0)), None);
}

#[test]
fn test_identical_intervals_classify_as_inclusion() {
    let kind: Option<OverlapKind> = overlap_kind(at(1, 0), at(2, 0), at(1, 0), at(2, 0));
    assert_eq!(kind, Some(OverlapKind::TotalInclusion));
}

#[test]
fn test_wire_tags() {
    assert_eq!(OverlapKind::TotalInclusion.as_str(), "TOTAL_INCLUSION");
    assert_eq!(OverlapKind::TotalCoverage.as_str(), "TOTAL_COVERAGE");
    assert_eq!(OverlapKind::PartialStart.as_str(), "PARTIEL_DEBUT");
    assert_eq!(OverlapKind::PartialEnd.as_str(), "PARTIEL_FIN");
    assert_eq!(OverlapKind::PartialOther.as_str(), "PARTIEL_AUTRE");
}
