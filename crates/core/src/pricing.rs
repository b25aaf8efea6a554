//! Tariff computation.
//!
//! A price is a layered breakdown: the base amount the resolved rule
//! dictates, automatic adjustments the system derives (extra guests),
//! supplements the stay earned (early/late fees, extra nights), and a
//! reserved discounts layer. Each layer has a distinct trust profile and
//! is computed independently, then summed, so invoicing can itemize
//! without recomputing.

use crate::catalog::HotelCatalog;
use crate::config::PricingConfig;
use crate::error::CoreError;
use stayflow_domain::{DomainError, PriceUnit, PricingMode, PricingRule, Season};
use time::PrimitiveDateTime;

/// One requested supplement with its audit datetime.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplementRequest {
    /// The supplement mode the stay earned.
    pub mode: PricingMode,
    /// The datetime the guest asked for, recorded for audit.
    pub requested_datetime: Option<PrimitiveDateTime>,
}

/// A pricing question for one stay.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRequest {
    /// The room type to price.
    pub room_type_id: i64,
    /// The reservation type to price.
    pub reservation_type_id: i64,
    /// Planned check-in.
    pub planned_checkin: PrimitiveDateTime,
    /// Planned check-out.
    pub planned_checkout: PrimitiveDateTime,
    /// Number of guests.
    pub nb_persons: u32,
    /// Supplements earned by early/late evaluations.
    pub supplements: Vec<SupplementRequest>,
}

/// The base layer: what the resolved rule dictates.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseCharge {
    /// The applied rule.
    pub rule_id: i64,
    /// The billing unit the amount was computed under.
    pub unit: PriceUnit,
    /// Unit price (a bracket's flat price counts as one unit).
    pub unit_price: f64,
    /// Number of units billed.
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub amount: f64,
}

/// Automatic adjustment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentKind {
    /// Guests above the room type's capacity.
    ExtraGuest,
}

impl AdjustmentKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExtraGuest => "extra_guest",
        }
    }
}

/// One automatic, system-derived correction.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    /// What triggered the adjustment.
    pub kind: AdjustmentKind,
    /// Human-readable label for invoicing.
    pub label: String,
    /// The room type's capacity.
    pub capacity: u32,
    /// Guests on the stay.
    pub persons: u32,
    /// Guests above capacity.
    pub extra_count: u32,
    /// Rate per extra guest.
    pub unit_price: f64,
    /// `extra_count * unit_price`.
    pub amount: f64,
}

/// Supplement kinds a stay can earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplementKind {
    /// Accepted early check-in.
    EarlyCheckin,
    /// Accepted late check-out.
    LateCheckout,
    /// A full extra night.
    ExtraNight,
}

impl SupplementKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EarlyCheckin => "early_checkin",
            Self::LateCheckout => "late_checkout",
            Self::ExtraNight => "extra_night",
        }
    }
}

/// One chosen, optional add-on.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplement {
    /// What the supplement is.
    pub kind: SupplementKind,
    /// Human-readable label for invoicing.
    pub label: String,
    /// The billed amount.
    pub amount: f64,
    /// The requested datetime, recorded for audit.
    pub requested_datetime: Option<PrimitiveDateTime>,
}

/// A promotional reduction. Reserved: nothing produces one yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    /// Human-readable label for invoicing.
    pub label: String,
    /// The (negative-effect) amount.
    pub amount: f64,
}

/// The complete layered price of a stay.
///
/// `base` is `None` when no tariff rule matched: an explicit "unpriced"
/// signal callers must check for, deliberately not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    /// The rule-dictated base layer, if a rule matched.
    pub base: Option<BaseCharge>,
    /// Automatic corrections.
    pub adjustments: Vec<Adjustment>,
    /// Chosen add-ons.
    pub supplements: Vec<Supplement>,
    /// Reserved promotional layer, currently always empty.
    pub discounts: Vec<Discount>,
    /// Currency of every amount.
    pub currency: String,
    /// Sum of all layers.
    pub total: f64,
}

impl PriceBreakdown {
    /// The explicit unpriced result for when no rule matches.
    #[must_use]
    pub const fn unpriced(currency: String) -> Self {
        Self {
            base: None,
            adjustments: Vec::new(),
            supplements: Vec::new(),
            discounts: Vec::new(),
            currency,
            total: 0.0,
        }
    }
}

/// Computes the layered price of a stay.
///
/// Resolves the seasonal tariff rule, computes the base amount per the
/// rule's unit (with bracket logic and night-rate fallback for hourly
/// rules), layers automatic adjustments and earned supplements on top and
/// returns the itemized breakdown.
///
/// # Errors
///
/// Returns an error if:
/// - The room type or reservation type is unknown
/// - The planned interval is inverted
/// - An hourly stay is shorter than the smallest configured bracket
/// - An hourly stay outlasts every bracket and no night rate exists
pub fn compute_price(
    catalog: &HotelCatalog,
    config: &PricingConfig,
    request: &PricingRequest,
) -> Result<PriceBreakdown, CoreError> {
    if catalog.room_type(request.room_type_id).is_none() {
        return Err(CoreError::DomainViolation(DomainError::RoomTypeNotFound(
            request.room_type_id,
        )));
    }
    if catalog.reservation_type(request.reservation_type_id).is_none() {
        return Err(CoreError::DomainViolation(
            DomainError::ReservationTypeNotFound(request.reservation_type_id),
        ));
    }
    if request.planned_checkout <= request.planned_checkin {
        return Err(CoreError::DomainViolation(DomainError::InvalidStayDates {
            reason: String::from("planned check-out must be after planned check-in"),
        }));
    }

    let seasons: Vec<&Season> = catalog.seasons_covering(request.planned_checkin.date());
    let Some(rule) = resolve_rule(catalog, request, &seasons) else {
        return Ok(PriceBreakdown::unpriced(config.default_currency.clone()));
    };

    let base: BaseCharge = compute_base(catalog, request, rule, &seasons)?;
    let adjustments: Vec<Adjustment> = compute_adjustments(catalog, config, request);
    let supplements: Vec<Supplement> = compute_supplements(catalog, config, request, rule, &seasons);

    let total: f64 = base.amount
        + adjustments.iter().map(|adj| adj.amount).sum::<f64>()
        + supplements.iter().map(|sup| sup.amount).sum::<f64>();

    Ok(PriceBreakdown {
        base: Some(base),
        adjustments,
        supplements,
        discounts: Vec::new(),
        currency: rule.currency.clone(),
        total,
    })
}

/// Resolves the applicable rule: seasonal rules in season-priority order,
/// then the season-less default.
fn resolve_rule<'a>(
    catalog: &'a HotelCatalog,
    request: &PricingRequest,
    seasons: &[&Season],
) -> Option<&'a PricingRule> {
    let rules: Vec<&PricingRule> =
        catalog.rules_for(request.room_type_id, request.reservation_type_id);

    for season in seasons {
        if let Some(rule) = rules
            .iter()
            .find(|rule| rule.season_id == Some(season.id))
        {
            return Some(*rule);
        }
    }
    rules.iter().find(|rule| rule.season_id.is_none()).copied()
}

/// The room type's night rule, season-aware, usable as a fallback rate.
fn night_rule<'a>(
    catalog: &'a HotelCatalog,
    room_type_id: i64,
    seasons: &[&Season],
) -> Option<&'a PricingRule> {
    let night_rules: Vec<&PricingRule> = catalog
        .rules_for_room_type(room_type_id)
        .into_iter()
        .filter(|rule| rule.unit == PriceUnit::Night)
        .collect();

    for season in seasons {
        if let Some(rule) = night_rules
            .iter()
            .find(|rule| rule.season_id == Some(season.id))
        {
            return Some(*rule);
        }
    }
    night_rules
        .iter()
        .find(|rule| rule.season_id.is_none())
        .copied()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_nights(checkin: PrimitiveDateTime, checkout: PrimitiveDateTime) -> u32 {
    (checkout - checkin).whole_days().max(1) as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_hours(checkin: PrimitiveDateTime, checkout: PrimitiveDateTime) -> u32 {
    ((checkout - checkin).whole_seconds() / 3600).max(1) as u32
}

fn compute_base(
    catalog: &HotelCatalog,
    request: &PricingRequest,
    rule: &PricingRule,
    seasons: &[&Season],
) -> Result<BaseCharge, CoreError> {
    match rule.unit {
        PriceUnit::Night => {
            let nights: u32 = whole_nights(request.planned_checkin, request.planned_checkout);
            Ok(BaseCharge {
                rule_id: rule.id,
                unit: PriceUnit::Night,
                unit_price: rule.price,
                quantity: nights,
                amount: rule.price * f64::from(nights),
            })
        }
        PriceUnit::Hour => {
            let hours: u32 = whole_hours(request.planned_checkin, request.planned_checkout);
            if rule.lines.is_empty() {
                return Ok(BaseCharge {
                    rule_id: rule.id,
                    unit: PriceUnit::Hour,
                    unit_price: rule.price,
                    quantity: hours,
                    amount: rule.price * f64::from(hours),
                });
            }

            let minimum: u32 = rule
                .lines
                .iter()
                .map(|line| line.min_duration_hours)
                .min()
                .unwrap_or(0);
            if hours < minimum {
                return Err(CoreError::DomainViolation(
                    DomainError::DurationBelowBrackets { hours, minimum },
                ));
            }

            if let Some(line) = rule.lines.iter().find(|line| line.contains(hours)) {
                // Bracket prices are flat for the whole bracket, not
                // hour-multiplied.
                return Ok(BaseCharge {
                    rule_id: rule.id,
                    unit: PriceUnit::Hour,
                    unit_price: line.price,
                    quantity: 1,
                    amount: line.price,
                });
            }

            // The stay outlasts every bracket: bill it as nights instead.
            let Some(fallback) = night_rule(catalog, request.room_type_id, seasons) else {
                return Err(CoreError::DomainViolation(
                    DomainError::MissingNightFallback {
                        room_type_id: request.room_type_id,
                        hours,
                    },
                ));
            };
            let nights: u32 = whole_nights(request.planned_checkin, request.planned_checkout);
            Ok(BaseCharge {
                rule_id: fallback.id,
                unit: PriceUnit::Night,
                unit_price: fallback.price,
                quantity: nights,
                amount: fallback.price * f64::from(nights),
            })
        }
        PriceUnit::Slot => Ok(BaseCharge {
            rule_id: rule.id,
            unit: PriceUnit::Slot,
            unit_price: rule.price,
            quantity: 1,
            amount: rule.price,
        }),
    }
}

fn compute_adjustments(
    catalog: &HotelCatalog,
    config: &PricingConfig,
    request: &PricingRequest,
) -> Vec<Adjustment> {
    let mut adjustments: Vec<Adjustment> = Vec::new();

    let capacity: Option<u32> = catalog
        .room_type(request.room_type_id)
        .and_then(|room_type| room_type.capacity);
    if let Some(capacity) = capacity
        && request.nb_persons > capacity
    {
        let extra_count: u32 = request.nb_persons - capacity;
        adjustments.push(Adjustment {
            kind: AdjustmentKind::ExtraGuest,
            label: String::from("Extra guest supplement"),
            capacity,
            persons: request.nb_persons,
            extra_count,
            unit_price: config.extra_guest_fee,
            amount: f64::from(extra_count) * config.extra_guest_fee,
        });
    }

    adjustments
}

fn compute_supplements(
    catalog: &HotelCatalog,
    config: &PricingConfig,
    request: &PricingRequest,
    rule: &PricingRule,
    seasons: &[&Season],
) -> Vec<Supplement> {
    let mut supplements: Vec<Supplement> = Vec::new();
    let mut seen: Vec<PricingMode> = Vec::new();

    for supplement_request in &request.supplements {
        if seen.contains(&supplement_request.mode) {
            continue;
        }
        seen.push(supplement_request.mode);

        match supplement_request.mode {
            PricingMode::EarlyFee => supplements.push(Supplement {
                kind: SupplementKind::EarlyCheckin,
                label: String::from("Early check-in supplement"),
                amount: config.early_checkin_fee,
                requested_datetime: supplement_request.requested_datetime,
            }),
            PricingMode::LateFee => supplements.push(Supplement {
                kind: SupplementKind::LateCheckout,
                label: String::from("Late check-out supplement"),
                amount: config.late_checkout_fee,
                requested_datetime: supplement_request.requested_datetime,
            }),
            PricingMode::ExtraNight => {
                // Prefer the real night rate; the configured fallback only
                // covers properties with no night rule at all.
                let amount: f64 = if rule.unit == PriceUnit::Night {
                    rule.price
                } else {
                    night_rule(catalog, request.room_type_id, seasons)
                        .map_or(config.extra_night_fallback, |night| night.price)
                };
                supplements.push(Supplement {
                    kind: SupplementKind::ExtraNight,
                    label: String::from("Extra night"),
                    amount,
                    requested_datetime: supplement_request.requested_datetime,
                });
            }
            PricingMode::InvalidRequest => {}
        }
    }

    supplements
}
