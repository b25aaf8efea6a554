/// Tunable amounts and limits for the pricing and availability engines.
///
/// The defaults mirror the property's historical constants; deployments
/// override individual fields rather than hardcoding amounts in the
/// engines.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Fee charged for an accepted early check-in.
    pub early_checkin_fee: f64,
    /// Fee charged for an accepted late check-out.
    pub late_checkout_fee: f64,
    /// Amount billed for an extra night when no night rate can be
    /// resolved from the tariff rules.
    pub extra_night_fallback: f64,
    /// Amount billed per guest above the room type's capacity.
    pub extra_guest_fee: f64,
    /// Currency used when no tariff rule carries one.
    pub default_currency: String,
    /// Forward search window for alternative slots, in days.
    pub alternative_window_days: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            early_checkin_fee: 15_000.0,
            late_checkout_fee: 15_000.0,
            extra_night_fallback: 50_000.0,
            extra_guest_fee: 0.0,
            default_currency: String::from("XOF"),
            alternative_window_days: 14,
        }
    }
}
