#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod catalog_loader;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use catalog_loader::{CatalogData, CatalogError, load_catalog};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, check_availability, compute_price, evaluate_eclc_request, resolve_planned_dates,
};
pub use request_response::{
    AdjustmentInfo, AlternativeSlotInfo, BaseChargeInfo, CheckAvailabilityRequest,
    CheckAvailabilityResponse, ComputePriceRequest, ComputePriceResponse, ConflictDetailInfo,
    DiscountInfo, EvaluateEclcRequest, EvaluateEclcResponse, PricingModeRequest,
    ResolvePlannedDatesRequest, ResolvePlannedDatesResponse, SupplementInfo,
};
