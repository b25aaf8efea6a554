//! Half-open interval intersection.
//!
//! Two occupancy intervals conflict when `start1 < end2 && start2 < end1`.
//! Endpoints that merely touch do not count as overlap, so a check-out at
//! 12:00 and a check-in at 12:00 coexist once buffers are applied.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// How an existing occupancy intersects a requested interval.
///
/// The wire tags are the diagnostic labels surfaced to reception staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlapKind {
    /// The existing stay lies entirely inside the requested interval.
    TotalInclusion,
    /// The existing stay covers the whole requested interval.
    TotalCoverage,
    /// The existing stay overhangs the start of the requested interval.
    PartialStart,
    /// The existing stay overhangs the end of the requested interval.
    PartialEnd,
    /// Any other intersecting arrangement.
    PartialOther,
}

impl OverlapKind {
    /// Converts this classification to its diagnostic tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TotalInclusion => "TOTAL_INCLUSION",
            Self::TotalCoverage => "TOTAL_COVERAGE",
            Self::PartialStart => "PARTIEL_DEBUT",
            Self::PartialEnd => "PARTIEL_FIN",
            Self::PartialOther => "PARTIEL_AUTRE",
        }
    }
}

impl std::fmt::Display for OverlapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tests whether two half-open intervals intersect.
///
/// Symmetric: swapping the two intervals never changes the answer.
#[must_use]
pub fn intervals_overlap(
    start1: PrimitiveDateTime,
    end1: PrimitiveDateTime,
    start2: PrimitiveDateTime,
    end2: PrimitiveDateTime,
) -> bool {
    start1 < end2 && start2 < end1
}

/// Classifies how an existing interval intersects a requested one.
///
/// Returns `None` when the intervals do not intersect at all. The
/// classification is directional: it describes the existing interval
/// relative to the request.
#[must_use]
pub fn overlap_kind(
    requested_start: PrimitiveDateTime,
    requested_end: PrimitiveDateTime,
    existing_start: PrimitiveDateTime,
    existing_end: PrimitiveDateTime,
) -> Option<OverlapKind> {
    if !intervals_overlap(requested_start, requested_end, existing_start, existing_end) {
        return None;
    }

    let kind: OverlapKind =
        if existing_start >= requested_start && existing_end <= requested_end {
            OverlapKind::TotalInclusion
        } else if existing_start <= requested_start && existing_end >= requested_end {
            OverlapKind::TotalCoverage
        } else if existing_start < requested_start {
            OverlapKind::PartialStart
        } else if existing_end > requested_end {
            OverlapKind::PartialEnd
        } else {
            OverlapKind::PartialOther
        };

    Some(kind)
}
