//! The four public operations of the scheduling engine.
//!
//! Each operation resolves identifiers against the catalog snapshot,
//! delegates to the core engine, translates errors into the API contract
//! and emits exactly one audit event alongside the response.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AdjustmentInfo, AlternativeSlotInfo, BaseChargeInfo, CheckAvailabilityRequest,
    CheckAvailabilityResponse, ComputePriceRequest, ComputePriceResponse, ConflictDetailInfo,
    EvaluateEclcRequest, EvaluateEclcResponse, ResolvePlannedDatesRequest,
    ResolvePlannedDatesResponse, SupplementInfo,
};
use stayflow::{
    AvailabilityOutcome, AvailabilityRequest, EclcEvaluation, HotelCatalog, PlannedDates,
    PriceBreakdown, PricingConfig, PricingRequest, SupplementRequest,
    check_availability_with_window, compute_price as compute_price_core, evaluate_request,
    resolve_planned_dates as resolve_planned_dates_core,
};
use stayflow_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use stayflow_domain::{PricingMode, RequestKind, Stay};
use std::str::FromStr;
use time::PrimitiveDateTime;

/// The result of an API operation: the response plus its audit event.
///
/// This ensures that API operations always produce an audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
}

fn format_optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("none"), |inner| inner.to_string())
}

/// Resolves the planned check-in/check-out datetimes for a booking.
///
/// Never fails: combinations that cannot be computed (flexible type,
/// missing slot, missing dates) come back with both datetimes null, so
/// flexible and day-use paths can proceed.
///
/// # Arguments
///
/// * `catalog` - The reference data snapshot
/// * `request` - The resolution request
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// This operation currently never returns an error; the `Result` is part
/// of the uniform operation contract.
pub fn resolve_planned_dates(
    catalog: &HotelCatalog,
    request: &ResolvePlannedDatesRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<ResolvePlannedDatesResponse>, ApiError> {
    tracing::info!(
        room_type_id = request.room_type_id,
        reservation_type_id = request.reservation_type_id,
        start_date = %format_optional(request.start_date),
        end_date = %format_optional(request.end_date),
        "Resolving planned dates"
    );

    let planned: PlannedDates = resolve_planned_dates_core(
        catalog,
        request.room_type_id,
        request.reservation_type_id,
        request.start_date,
        request.end_date,
    );

    let message: String = if planned.is_resolved() {
        String::from("Planned dates computed.")
    } else {
        tracing::debug!(
            room_type_id = request.room_type_id,
            reservation_type_id = request.reservation_type_id,
            "No slot-based schedule for this combination"
        );
        String::from("Planned dates could not be computed for this combination.")
    };

    let before: StateSnapshot = StateSnapshot::new(format!(
        "room_type={},reservation_type={},start={},end={}",
        request.room_type_id,
        request.reservation_type_id,
        format_optional(request.start_date),
        format_optional(request.end_date),
    ));
    let after: StateSnapshot = StateSnapshot::new(format!(
        "checkin={},checkout={}",
        format_optional(planned.checkin),
        format_optional(planned.checkout),
    ));
    let action: Action = Action::new(String::from("ResolvePlannedDates"), None);

    Ok(ApiResult {
        response: ResolvePlannedDatesResponse {
            checkin: planned.checkin,
            checkout: planned.checkout,
            message,
        },
        audit_event: AuditEvent::new(actor, cause, action, before, after),
    })
}

/// Evaluates an early check-in or late check-out request.
///
/// An unknown request kind is a refusal, not an error: the decision comes
/// back with status `"refused"` and pricing mode `"invalid_request"`,
/// matching the fail-fast contract of the evaluation engine.
///
/// # Errors
///
/// Returns an error if the room type does not exist.
pub fn evaluate_eclc_request(
    catalog: &HotelCatalog,
    request: &EvaluateEclcRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<EvaluateEclcResponse>, ApiError> {
    tracing::info!(
        kind = %request.kind,
        room_type_id = request.room_type_id,
        requested = %format_optional(request.requested_datetime),
        planned = %format_optional(request.planned_datetime),
        "Evaluating early/late request"
    );

    let Some(room_type) = catalog.room_type(request.room_type_id) else {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Room type"),
            message: format!("Room type {} does not exist", request.room_type_id),
        });
    };

    let response: EvaluateEclcResponse = match RequestKind::from_str(&request.kind) {
        Ok(kind) => {
            let evaluation: EclcEvaluation = evaluate_request(
                kind,
                request.requested_datetime,
                request.planned_datetime,
                room_type,
            );
            EvaluateEclcResponse {
                status: evaluation.outcome.status().to_string(),
                pricing_mode: evaluation.outcome.mode().as_str().to_string(),
                difference_hours: evaluation.difference_hours,
                message: evaluation.message,
            }
        }
        Err(_) => {
            tracing::warn!(kind = %request.kind, "Invalid request kind");
            EvaluateEclcResponse {
                status: String::from("refused"),
                pricing_mode: PricingMode::InvalidRequest.as_str().to_string(),
                difference_hours: 0.0,
                message: String::from("Request kind must be 'early' or 'late'."),
            }
        }
    };

    tracing::info!(
        status = %response.status,
        pricing_mode = %response.pricing_mode,
        difference_hours = response.difference_hours,
        "Early/late request evaluated"
    );

    let before: StateSnapshot = StateSnapshot::new(format!(
        "kind={},room_type={},requested={}",
        request.kind,
        request.room_type_id,
        format_optional(request.requested_datetime),
    ));
    let after: StateSnapshot = StateSnapshot::new(format!(
        "status={},pricing_mode={}",
        response.status, response.pricing_mode
    ));
    let action: Action = Action::new(String::from("EvaluateEclcRequest"), None);

    Ok(ApiResult {
        response,
        audit_event: AuditEvent::new(actor, cause, action, before, after),
    })
}

fn availability_response(outcome: AvailabilityOutcome) -> CheckAvailabilityResponse {
    match outcome {
        AvailabilityOutcome::Available {
            room_id,
            room_name,
            message,
        } => CheckAvailabilityResponse {
            status: String::from("available"),
            room_id: Some(room_id),
            room_name: Some(room_name),
            message,
            reason: None,
            earliest_liberation: None,
            alternatives: Vec::new(),
            conflict_details: Vec::new(),
        },
        AvailabilityOutcome::Unavailable {
            message,
            reason,
            earliest_liberation,
            alternatives,
            conflicts,
        } => CheckAvailabilityResponse {
            status: String::from("unavailable"),
            room_id: None,
            room_name: None,
            message,
            reason: Some(reason),
            earliest_liberation,
            alternatives: alternatives
                .into_iter()
                .map(|slot| AlternativeSlotInfo {
                    room_id: slot.room_id,
                    room_name: slot.room_name,
                    checkin: slot.checkin,
                    checkout: slot.checkout,
                    duration_hours: slot.duration_hours,
                })
                .collect(),
            conflict_details: conflicts
                .into_iter()
                .map(|conflict| ConflictDetailInfo {
                    stay_id: conflict.stay_id,
                    room_id: conflict.room_id,
                    room_name: conflict.room_name,
                    checkin: conflict.checkin,
                    checkout: conflict.checkout,
                    overlap: conflict.overlap.as_str().to_string(),
                })
                .collect(),
        },
    }
}

/// Checks room availability for an interval and suggests alternatives.
///
/// "No room free" is a normal outcome carried in the response; malformed
/// input (inverted or past dates, sub-hour duration, negative buffer,
/// unknown room type) is the error face of the contract.
///
/// # Arguments
///
/// * `catalog` - The reference data snapshot
/// * `stays` - Every existing stay, fetched by the caller
/// * `request` - The availability question
/// * `now` - The caller's clock, for past-date validation
/// * `config` - Supplies the alternative search window
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if the request fails validation.
pub fn check_availability(
    catalog: &HotelCatalog,
    stays: &[Stay],
    request: &CheckAvailabilityRequest,
    now: PrimitiveDateTime,
    config: &PricingConfig,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<CheckAvailabilityResponse>, ApiError> {
    tracing::info!(
        room_type_id = request.room_type_id,
        checkin = %request.checkin_datetime,
        checkout = %request.checkout_datetime,
        buffer_hours = request.buffer_hours,
        "Checking availability"
    );

    let core_request: AvailabilityRequest = AvailabilityRequest {
        room_type_id: request.room_type_id,
        checkin: request.checkin_datetime,
        checkout: request.checkout_datetime,
        exclude_stay_id: request.exclude_stay_id,
        buffer_hours: request.buffer_hours,
        reservation_type_id: request.reservation_type_id,
    };

    let outcome: AvailabilityOutcome = check_availability_with_window(
        catalog,
        stays,
        &core_request,
        now,
        config.alternative_window_days,
    )
    .map_err(translate_core_error)?;

    let response: CheckAvailabilityResponse = availability_response(outcome);
    if response.status == "available" {
        tracing::info!(room_id = ?response.room_id, "Room found");
    } else {
        tracing::warn!(
            room_type_id = request.room_type_id,
            alternatives = response.alternatives.len(),
            "No room available"
        );
    }

    let before: StateSnapshot = StateSnapshot::new(format!(
        "room_type={},checkin={},checkout={}",
        request.room_type_id, request.checkin_datetime, request.checkout_datetime,
    ));
    let after: StateSnapshot = StateSnapshot::new(format!(
        "status={},room={},alternatives={}",
        response.status,
        format_optional(response.room_id),
        response.alternatives.len(),
    ));
    let action: Action = Action::new(String::from("CheckAvailability"), None);

    Ok(ApiResult {
        response,
        audit_event: AuditEvent::new(actor, cause, action, before, after),
    })
}

/// Computes the layered price of a stay.
///
/// # Arguments
///
/// * `catalog` - The reference data snapshot
/// * `config` - Fee amounts and fallback rates
/// * `request` - The pricing question
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if:
/// - A pricing mode code is unknown
/// - The room type or reservation type does not exist
/// - The planned interval is inverted
/// - The hourly bracket configuration cannot price the duration
pub fn compute_price(
    catalog: &HotelCatalog,
    config: &PricingConfig,
    request: &ComputePriceRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<ComputePriceResponse>, ApiError> {
    tracing::info!(
        room_type_id = request.room_type_id,
        reservation_type_id = request.reservation_type_id,
        checkin = %request.planned_checkin,
        checkout = %request.planned_checkout,
        nb_persons = request.nb_persons,
        "Computing price"
    );

    let mut supplements: Vec<SupplementRequest> = Vec::with_capacity(request.pricing_modes.len());
    for entry in &request.pricing_modes {
        let mode: PricingMode =
            PricingMode::from_str(&entry.mode).map_err(translate_domain_error)?;
        supplements.push(SupplementRequest {
            mode,
            requested_datetime: entry.requested_datetime,
        });
    }

    let core_request: PricingRequest = PricingRequest {
        room_type_id: request.room_type_id,
        reservation_type_id: request.reservation_type_id,
        planned_checkin: request.planned_checkin,
        planned_checkout: request.planned_checkout,
        nb_persons: request.nb_persons,
        supplements,
    };

    let breakdown: PriceBreakdown =
        compute_price_core(catalog, config, &core_request).map_err(translate_core_error)?;

    if breakdown.base.is_none() {
        tracing::warn!(
            room_type_id = request.room_type_id,
            reservation_type_id = request.reservation_type_id,
            "No tariff rule matched; returning unpriced breakdown"
        );
    } else {
        tracing::info!(total = breakdown.total, currency = %breakdown.currency, "Price computed");
    }

    let before: StateSnapshot = StateSnapshot::new(format!(
        "room_type={},reservation_type={},persons={}",
        request.room_type_id, request.reservation_type_id, request.nb_persons,
    ));
    let after: StateSnapshot = StateSnapshot::new(format!(
        "total={},currency={},priced={}",
        breakdown.total,
        breakdown.currency,
        breakdown.base.is_some(),
    ));
    let action: Action = Action::new(String::from("ComputePrice"), None);

    let response: ComputePriceResponse = ComputePriceResponse {
        base: breakdown.base.map(|base| BaseChargeInfo {
            rule_id: base.rule_id,
            unit: base.unit.as_str().to_string(),
            unit_price: base.unit_price,
            quantity: base.quantity,
            amount: base.amount,
        }),
        adjustments: breakdown
            .adjustments
            .into_iter()
            .map(|adjustment| AdjustmentInfo {
                kind: adjustment.kind.as_str().to_string(),
                label: adjustment.label,
                capacity: adjustment.capacity,
                persons: adjustment.persons,
                extra_count: adjustment.extra_count,
                unit_price: adjustment.unit_price,
                amount: adjustment.amount,
            })
            .collect(),
        supplements: breakdown
            .supplements
            .into_iter()
            .map(|supplement| SupplementInfo {
                kind: supplement.kind.as_str().to_string(),
                label: supplement.label,
                amount: supplement.amount,
                requested_datetime: supplement.requested_datetime,
            })
            .collect(),
        discounts: Vec::new(),
        currency: breakdown.currency,
        total: breakdown.total,
    };

    Ok(ApiResult {
        response,
        audit_event: AuditEvent::new(actor, cause, action, before, after),
    })
}
