//! Bulk catalog admission at the service boundary.
//!
//! The persistence layer is an external collaborator; it hands over plain
//! reference records, and this loader turns them into a validated
//! [`HotelCatalog`] snapshot for the engines to evaluate against.

use stayflow::{CoreError, HotelCatalog};
use stayflow_domain::{PricingRule, ReservationSlot, ReservationType, Room, RoomType, Season};
use thiserror::Error;

/// Errors raised while assembling a catalog from plain records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A record failed domain validation on admission.
    #[error("catalog admission failed: {0}")]
    Admission(#[from] CoreError),
}

/// The plain reference records a catalog is assembled from.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct CatalogData {
    /// Room types.
    pub room_types: Vec<RoomType>,
    /// Reservation types.
    pub reservation_types: Vec<ReservationType>,
    /// Configured slots.
    pub slots: Vec<ReservationSlot>,
    /// Tariff seasons.
    pub seasons: Vec<Season>,
    /// Tariff rules.
    pub pricing_rules: Vec<PricingRule>,
    /// Physical rooms.
    pub rooms: Vec<Room>,
}

/// Assembles a validated catalog from plain records.
///
/// Admission order matters: types first, then the records that reference
/// them. Every record passes the domain validations; the first failure
/// aborts the load.
///
/// # Errors
///
/// Returns an error if any record is rejected on admission.
pub fn load_catalog(data: CatalogData) -> Result<HotelCatalog, CatalogError> {
    let mut catalog: HotelCatalog = HotelCatalog::new();

    for room_type in data.room_types {
        catalog.add_room_type(room_type)?;
    }
    for reservation_type in data.reservation_types {
        catalog.add_reservation_type(reservation_type)?;
    }
    for slot in data.slots {
        catalog.add_slot(slot)?;
    }
    for season in data.seasons {
        catalog.add_season(season)?;
    }
    for rule in data.pricing_rules {
        catalog.add_pricing_rule(rule)?;
    }
    for room in data.rooms {
        catalog.add_room(room)?;
    }

    Ok(catalog)
}
