//! Early check-in / late check-out evaluation.
//!
//! Each request is evaluated independently: a stay may carry an early and
//! a late request at the same time, with independent outcomes stored in
//! two dedicated pricing-mode fields. The threshold comparison projects
//! the requested datetime onto its hour of day, because the limits are
//! daily boundaries.

use stayflow_domain::{HourOfDay, PricingMode, RequestKind, RoomType};
use time::PrimitiveDateTime;

/// The decision for one early/late request.
#[derive(Debug, Clone, PartialEq)]
pub enum EclcOutcome {
    /// The requested time is within the allowed window; a fee applies.
    Accepted {
        /// The supplement this acceptance earns (early or late fee).
        mode: PricingMode,
    },
    /// The requested time falls outside the window; a full extra night
    /// must be billed.
    ExtraNight {
        /// Always `PricingMode::ExtraNight`.
        mode: PricingMode,
    },
    /// The request could not be evaluated.
    Refused {
        /// Always `PricingMode::InvalidRequest`.
        mode: PricingMode,
    },
}

impl EclcOutcome {
    /// The status tag of this outcome.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Accepted { .. } => "accepted",
            Self::ExtraNight { .. } => "extra_night",
            Self::Refused { .. } => "refused",
        }
    }

    /// The pricing mode this outcome carries.
    #[must_use]
    pub const fn mode(&self) -> PricingMode {
        match self {
            Self::Accepted { mode } | Self::ExtraNight { mode } | Self::Refused { mode } => *mode,
        }
    }
}

/// The full evaluation result for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct EclcEvaluation {
    /// The request direction.
    pub kind: RequestKind,
    /// The decision.
    pub outcome: EclcOutcome,
    /// Hours between planned and requested time, reported for audit
    /// regardless of the decision. Early: `planned - requested`; late:
    /// `requested - planned`.
    pub difference_hours: f64,
    /// Human-readable narration of the decision.
    pub message: String,
}

fn round_hours(duration: time::Duration) -> f64 {
    let hours: f64 = duration.as_seconds_f64() / 3600.0;
    (hours * 100.0).round() / 100.0
}

/// Evaluates one early check-in or late check-out request.
///
/// Pure over its inputs: the caller persists the resulting pricing mode
/// and may subsequently re-check availability with adjusted actual dates.
///
/// # Arguments
///
/// * `kind` - Early or late
/// * `requested` - The datetime the guest asked for
/// * `planned` - The standard planned datetime
/// * `room_type` - Supplies the early/late hour limits
#[must_use]
pub fn evaluate_request(
    kind: RequestKind,
    requested: Option<PrimitiveDateTime>,
    planned: Option<PrimitiveDateTime>,
    room_type: &RoomType,
) -> EclcEvaluation {
    let (Some(requested), Some(planned)) = (requested, planned) else {
        return EclcEvaluation {
            kind,
            outcome: EclcOutcome::Refused {
                mode: PricingMode::InvalidRequest,
            },
            difference_hours: 0.0,
            message: String::from("Incomplete schedule data for the request."),
        };
    };

    let difference_hours: f64 = match kind {
        RequestKind::Early => round_hours(planned - requested),
        RequestKind::Late => round_hours(requested - planned),
    };
    let requested_hour: f64 = HourOfDay::of(&requested).value();

    let (outcome, message): (EclcOutcome, String) = match kind {
        RequestKind::Early => {
            let limit: f64 = room_type.early_checkin_hour_limit.value();
            if requested_hour < limit {
                (
                    EclcOutcome::ExtraNight {
                        mode: PricingMode::ExtraNight,
                    },
                    format!(
                        "Arrival at {requested_hour:.2}h is before the {limit:.2}h limit: the previous night must be billed."
                    ),
                )
            } else {
                (
                    EclcOutcome::Accepted {
                        mode: PricingMode::EarlyFee,
                    },
                    format!("Early check-in accepted ({requested_hour:.2}h)."),
                )
            }
        }
        RequestKind::Late => {
            let limit: f64 = room_type.late_checkout_hour_limit.value();
            if requested_hour > limit {
                (
                    EclcOutcome::ExtraNight {
                        mode: PricingMode::ExtraNight,
                    },
                    format!(
                        "Departure at {requested_hour:.2}h is after the {limit:.2}h limit: an extra night must be billed."
                    ),
                )
            } else {
                (
                    EclcOutcome::Accepted {
                        mode: PricingMode::LateFee,
                    },
                    format!("Late check-out accepted ({requested_hour:.2}h)."),
                )
            }
        }
    };

    EclcEvaluation {
        kind,
        outcome,
        difference_hours,
        message,
    }
}
