//! Room availability and conflict resolution.
//!
//! The engine scans the rooms of one type in name order and hands back the
//! first one whose existing stays, widened by the cleaning buffer, leave
//! the requested interval free. Rooms of one type are interchangeable, so
//! the greedy first-fit is deliberate. When nothing is free it explains
//! itself: which stays block, when the earliest room frees up, and up to
//! three alternative slots of the same duration.

use crate::catalog::HotelCatalog;
use crate::error::CoreError;
use stayflow_domain::{
    DomainError, HourOfDay, OverlapKind, ReservationSlot, Room, Stay, intervals_overlap,
    overlap_kind,
};
use time::{Duration, PrimitiveDateTime};

/// Default forward search window for alternative slots, in days.
pub const DEFAULT_ALTERNATIVE_WINDOW_DAYS: u32 = 14;

/// Maximum number of alternative slots returned.
pub const MAX_ALTERNATIVES: usize = 3;

/// Duration tolerance when fitting alternatives into free gaps.
const SLOT_TOLERANCE: Duration = Duration::hours(1);

/// An availability question for one room type and interval.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityRequest {
    /// The room type to search.
    pub room_type_id: i64,
    /// Requested check-in.
    pub checkin: PrimitiveDateTime,
    /// Requested check-out.
    pub checkout: PrimitiveDateTime,
    /// A stay to ignore while scanning (the stay being modified).
    pub exclude_stay_id: Option<i64>,
    /// Cleaning turnaround margin applied on both ends of every interval.
    pub buffer_hours: Option<f64>,
    /// When set, alternative slots are constrained to this reservation
    /// type's configured times.
    pub reservation_type_id: Option<i64>,
}

/// One existing stay that blocks the requested interval.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictDetail {
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
    /// How the occupancy intersects the request, after buffering.
    pub overlap: OverlapKind,
}

/// A free slot of the requested duration offered as a fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeSlot {
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

/// The outcome of an availability check.
///
/// Unavailability is a normal business outcome, not an error; malformed
/// input is rejected with a `CoreError` before any scanning happens.
#[derive(Debug, Clone, PartialEq)]
pub enum AvailabilityOutcome {
    /// A room is free over the requested interval.
    Available {
        /// The first free room, in name order.
        room_id: i64,
        /// Its name.
        room_name: String,
        /// Human-readable confirmation.
        message: String,
    },
    /// Every room of the type is blocked.
    Unavailable {
        /// Human-readable explanation.
        message: String,
        /// Machine-readable reason tag.
        reason: String,
        /// The earliest buffered check-out at or after the requested
        /// check-in, if any stay frees a room.
        earliest_liberation: Option<PrimitiveDateTime>,
        /// Up to three free slots matching the requested duration.
        alternatives: Vec<AlternativeSlot>,
        /// Every stay that blocked a room.
        conflicts: Vec<ConflictDetail>,
    },
}

/// Checks availability with the default alternative-search window.
///
/// # Errors
///
/// Returns an error if the room type is unknown, the interval is inverted
/// or in the past, the duration is under one hour, or the buffer is
/// negative.
pub fn check_availability(
    catalog: &HotelCatalog,
    stays: &[Stay],
    request: &AvailabilityRequest,
    now: PrimitiveDateTime,
) -> Result<AvailabilityOutcome, CoreError> {
    check_availability_with_window(catalog, stays, request, now, DEFAULT_ALTERNATIVE_WINDOW_DAYS)
}

/// Checks availability, searching alternatives within `window_days` of the
/// requested check-in.
///
/// Deterministic and order-stable: with unchanged stays, repeated calls
/// return the same room or the same alternatives.
///
/// # Errors
///
/// Returns an error under the same conditions as [`check_availability`].
pub fn check_availability_with_window(
    catalog: &HotelCatalog,
    stays: &[Stay],
    request: &AvailabilityRequest,
    now: PrimitiveDateTime,
    window_days: u32,
) -> Result<AvailabilityOutcome, CoreError> {
    validate_request(catalog, request, now)?;

    let buffer: Duration = buffer_duration(request.buffer_hours);
    let rooms: Vec<&Room> = catalog.rooms_of_type(request.room_type_id);

    if rooms.is_empty() {
        return Ok(AvailabilityOutcome::Unavailable {
            message: String::from("No room of this type exists in the inventory."),
            reason: String::from("no_rooms"),
            earliest_liberation: None,
            alternatives: Vec::new(),
            conflicts: Vec::new(),
        });
    }

    let mut conflicts: Vec<ConflictDetail> = Vec::new();
    let requested_start: PrimitiveDateTime = request.checkin - buffer;
    let requested_end: PrimitiveDateTime = request.checkout + buffer;

    for room in &rooms {
        let room_conflicts: Vec<ConflictDetail> = blocking_stays(stays, room, request)
            .into_iter()
            .filter_map(|(stay_id, stay_start, stay_end)| {
                let buffered_start: PrimitiveDateTime = stay_start - buffer;
                let buffered_end: PrimitiveDateTime = stay_end + buffer;
                if !intervals_overlap(requested_start, requested_end, buffered_start, buffered_end)
                {
                    return None;
                }
                let overlap: OverlapKind =
                    overlap_kind(requested_start, requested_end, buffered_start, buffered_end)
                        .unwrap_or(OverlapKind::PartialOther);
                Some(ConflictDetail {
                    stay_id,
                    room_id: room.id,
                    room_name: room.name.clone(),
                    checkin: stay_start,
                    checkout: stay_end,
                    overlap,
                })
            })
            .collect();

        if room_conflicts.is_empty() {
            return Ok(AvailabilityOutcome::Available {
                room_id: room.id,
                room_name: room.name.clone(),
                message: format!("Room {} is available.", room.name),
            });
        }
        conflicts.extend(room_conflicts);
    }

    let earliest_liberation: Option<PrimitiveDateTime> = conflicts
        .iter()
        .map(|conflict| conflict.checkout + buffer)
        .filter(|liberation| *liberation >= request.checkin)
        .min();

    let alternatives: Vec<AlternativeSlot> =
        find_alternative_slots(catalog, stays, &rooms, request, buffer, window_days);

    Ok(AvailabilityOutcome::Unavailable {
        message: String::from("All rooms of this type are occupied over the requested period."),
        reason: String::from("occupied"),
        earliest_liberation,
        alternatives,
        conflicts,
    })
}

fn validate_request(
    catalog: &HotelCatalog,
    request: &AvailabilityRequest,
    now: PrimitiveDateTime,
) -> Result<(), CoreError> {
    if catalog.room_type(request.room_type_id).is_none() {
        return Err(CoreError::DomainViolation(DomainError::RoomTypeNotFound(
            request.room_type_id,
        )));
    }
    if request.checkout <= request.checkin {
        return Err(CoreError::DomainViolation(DomainError::InvalidStayDates {
            reason: String::from("check-out must be after check-in"),
        }));
    }
    if request.checkin < now {
        return Err(CoreError::DomainViolation(DomainError::InvalidStayDates {
            reason: String::from("check-in is in the past"),
        }));
    }
    if request.checkout - request.checkin < Duration::HOUR {
        return Err(CoreError::DomainViolation(DomainError::InvalidStayDates {
            reason: String::from("a stay must last at least one hour"),
        }));
    }
    if request
        .buffer_hours
        .is_some_and(|hours| !hours.is_finite() || hours < 0.0)
    {
        return Err(CoreError::DomainViolation(DomainError::InvalidStayDates {
            reason: String::from("the cleaning buffer must be a non-negative number of hours"),
        }));
    }
    Ok(())
}

fn buffer_duration(buffer_hours: Option<f64>) -> Duration {
    buffer_hours.map_or(Duration::ZERO, |hours| {
        Duration::seconds_f64(hours * 3600.0)
    })
}

/// The occupancy intervals that block a room, sorted by check-in.
fn blocking_stays(
    stays: &[Stay],
    room: &Room,
    request: &AvailabilityRequest,
) -> Vec<(i64, PrimitiveDateTime, PrimitiveDateTime)> {
    let mut intervals: Vec<(i64, PrimitiveDateTime, PrimitiveDateTime)> = stays
        .iter()
        .filter(|stay| {
            stay.room_id == Some(room.id)
                && stay.state.blocks_room()
                && request.exclude_stay_id != Some(stay.id)
        })
        .filter_map(|stay| {
            stay.occupancy()
                .map(|(checkin, checkout)| (stay.id, checkin, checkout))
        })
        .collect();
    intervals.sort_by_key(|(_, checkin, _)| *checkin);
    intervals
}

fn find_alternative_slots(
    catalog: &HotelCatalog,
    stays: &[Stay],
    rooms: &[&Room],
    request: &AvailabilityRequest,
    buffer: Duration,
    window_days: u32,
) -> Vec<AlternativeSlot> {
    let duration: Duration = request.checkout - request.checkin;
    let window_start: PrimitiveDateTime = request.checkin;
    let window_end: PrimitiveDateTime = request.checkin + Duration::days(i64::from(window_days));
    let slot: Option<&ReservationSlot> = request
        .reservation_type_id
        .and_then(|reservation_type_id| {
            catalog.slot_for(request.room_type_id, reservation_type_id)
        });

    let mut alternatives: Vec<AlternativeSlot> = Vec::new();

    for room in rooms {
        let occupied: Vec<(i64, PrimitiveDateTime, PrimitiveDateTime)> =
            blocking_stays(stays, room, request);
        for (gap_start, gap_end) in free_gaps(&occupied, window_start, window_end, buffer) {
            for (candidate_start, candidate_end) in
                candidates_in_gap(gap_start, gap_end, duration, slot)
            {
                let duplicate: bool = alternatives.iter().any(|alt| {
                    alt.room_id == room.id
                        && alt.checkin == candidate_start
                        && alt.checkout == candidate_end
                });
                if duplicate {
                    continue;
                }
                alternatives.push(AlternativeSlot {
                    room_id: room.id,
                    room_name: room.name.clone(),
                    checkin: candidate_start,
                    checkout: candidate_end,
                    duration_hours: (candidate_end - candidate_start).as_seconds_f64() / 3600.0,
                });
            }
        }
    }

    alternatives.sort_by_key(|alt| (alt.checkin - request.checkin).abs());
    alternatives.truncate(MAX_ALTERNATIVES);
    alternatives
}

/// The free, buffered gaps of one room inside the search window: before
/// the first stay, between consecutive stays, after the last one.
fn free_gaps(
    occupied: &[(i64, PrimitiveDateTime, PrimitiveDateTime)],
    window_start: PrimitiveDateTime,
    window_end: PrimitiveDateTime,
    buffer: Duration,
) -> Vec<(PrimitiveDateTime, PrimitiveDateTime)> {
    let in_window: Vec<&(i64, PrimitiveDateTime, PrimitiveDateTime)> = occupied
        .iter()
        .filter(|(_, checkin, checkout)| *checkin < window_end && *checkout > window_start)
        .collect();

    let Some(first) = in_window.first() else {
        return vec![(window_start, window_end)];
    };

    let mut gaps: Vec<(PrimitiveDateTime, PrimitiveDateTime)> = Vec::new();

    let first_start_buffered: PrimitiveDateTime = first.1 - buffer;
    if window_start < first_start_buffered {
        gaps.push((window_start, first_start_buffered.min(window_end)));
    }

    for pair in in_window.windows(2) {
        let gap_start: PrimitiveDateTime = (pair[0].2 + buffer).max(window_start);
        let gap_end: PrimitiveDateTime = (pair[1].1 - buffer).min(window_end);
        if gap_end > gap_start {
            gaps.push((gap_start, gap_end));
        }
    }

    if let Some(last) = in_window.last() {
        let last_end_buffered: PrimitiveDateTime = last.2 + buffer;
        if window_end > last_end_buffered {
            gaps.push((last_end_buffered.max(window_start), window_end));
        }
    }

    gaps
}

/// Candidate slots of the requested duration inside one free gap.
///
/// With a configured slot, candidates start at the slot's check-in time on
/// each day of the gap and must end within an hour of its check-out time.
/// Without one, the gap start anchors a single candidate; a gap short of
/// the duration by less than the tolerance still qualifies, truncated.
fn candidates_in_gap(
    gap_start: PrimitiveDateTime,
    gap_end: PrimitiveDateTime,
    duration: Duration,
    slot: Option<&ReservationSlot>,
) -> Vec<(PrimitiveDateTime, PrimitiveDateTime)> {
    let mut candidates: Vec<(PrimitiveDateTime, PrimitiveDateTime)> = Vec::new();

    match slot {
        Some(slot) => {
            let mut day = gap_start.date();
            while day <= gap_end.date() {
                let candidate_start: PrimitiveDateTime = slot.checkin_time.combine(day);
                let candidate_end: PrimitiveDateTime = candidate_start + duration;
                if candidate_start >= gap_start && candidate_end <= gap_end {
                    let end_hour: f64 = HourOfDay::of(&candidate_end).value();
                    let checkout_hour: f64 = slot.checkout_time.value();
                    if (end_hour - checkout_hour).abs() <= 1.0 {
                        candidates.push((candidate_start, candidate_end));
                    }
                }
                let Some(next) = day.next_day() else { break };
                day = next;
            }
        }
        None => {
            let gap_length: Duration = gap_end - gap_start;
            if gap_length >= duration {
                candidates.push((gap_start, gap_start + duration));
            } else if gap_length >= duration - SLOT_TOLERANCE && gap_length > Duration::ZERO {
                candidates.push((gap_start, gap_end));
            }
        }
    }

    candidates
}
