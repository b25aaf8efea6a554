use crate::error::CoreError;
use stayflow_domain::{
    DomainError, PricingRule, ReservationSlot, ReservationType, Room, RoomType, Season,
    seasons_covering, validate_rule_lines, validate_season_dates, validate_slot_reservation_type,
};
use time::Date;

/// The reference data an evaluation runs against.
///
/// This is a read-only snapshot fetched by the caller at call time: room
/// types, reservation types, configured slots, seasons, tariff rules and
/// physical rooms. The engines never mutate it; admission happens through
/// the validated `add_*` methods before any evaluation starts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HotelCatalog {
    /// All room types.
    pub room_types: Vec<RoomType>,
    /// All reservation types.
    pub reservation_types: Vec<ReservationType>,
    /// Configured check-in/check-out slots.
    pub slots: Vec<ReservationSlot>,
    /// Tariff seasons.
    pub seasons: Vec<Season>,
    /// Tariff rules.
    pub pricing_rules: Vec<PricingRule>,
    /// Physical rooms.
    pub rooms: Vec<Room>,
}

impl HotelCatalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            room_types: Vec::new(),
            reservation_types: Vec::new(),
            slots: Vec::new(),
            seasons: Vec::new(),
            pricing_rules: Vec::new(),
            rooms: Vec::new(),
        }
    }

    /// Admits a room type.
    ///
    /// # Errors
    ///
    /// Returns an error if a room type with the same id already exists.
    pub fn add_room_type(&mut self, room_type: RoomType) -> Result<(), CoreError> {
        if self.room_type(room_type.id).is_some() {
            return Err(CoreError::DomainViolation(DomainError::DuplicateRoomType(
                room_type.id,
            )));
        }
        self.room_types.push(room_type);
        Ok(())
    }

    /// Admits a reservation type.
    ///
    /// # Errors
    ///
    /// Returns an error if a reservation type with the same id already
    /// exists.
    pub fn add_reservation_type(
        &mut self,
        reservation_type: ReservationType,
    ) -> Result<(), CoreError> {
        if self.reservation_type(reservation_type.id).is_some() {
            return Err(CoreError::DomainViolation(
                DomainError::DuplicateReservationType(reservation_type.id),
            ));
        }
        self.reservation_types.push(reservation_type);
        Ok(())
    }

    /// Admits a reservation slot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The room type or reservation type does not exist
    /// - The reservation type is flexible
    /// - A slot for the pair already exists
    pub fn add_slot(&mut self, slot: ReservationSlot) -> Result<(), CoreError> {
        let Some(_room_type) = self.room_type(slot.room_type_id) else {
            return Err(CoreError::DomainViolation(DomainError::RoomTypeNotFound(
                slot.room_type_id,
            )));
        };
        let Some(reservation_type) = self.reservation_type(slot.reservation_type_id) else {
            return Err(CoreError::DomainViolation(
                DomainError::ReservationTypeNotFound(slot.reservation_type_id),
            ));
        };
        validate_slot_reservation_type(&slot, reservation_type)?;
        if self
            .slot_for(slot.room_type_id, slot.reservation_type_id)
            .is_some()
        {
            return Err(CoreError::DomainViolation(DomainError::DuplicateSlot {
                room_type_id: slot.room_type_id,
                reservation_type_id: slot.reservation_type_id,
            }));
        }
        self.slots.push(slot);
        Ok(())
    }

    /// Admits a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the date range is inverted or the id already
    /// exists.
    pub fn add_season(&mut self, season: Season) -> Result<(), CoreError> {
        validate_season_dates(&season)?;
        if self.seasons.iter().any(|s| s.id == season.id) {
            return Err(CoreError::DomainViolation(DomainError::DuplicateSeason(
                season.id,
            )));
        }
        self.seasons.push(season);
        Ok(())
    }

    /// Admits a pricing rule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The room type or reservation type does not exist
    /// - The rule's duration brackets are malformed
    /// - The id already exists
    pub fn add_pricing_rule(&mut self, rule: PricingRule) -> Result<(), CoreError> {
        if self.room_type(rule.room_type_id).is_none() {
            return Err(CoreError::DomainViolation(DomainError::RoomTypeNotFound(
                rule.room_type_id,
            )));
        }
        if self.reservation_type(rule.reservation_type_id).is_none() {
            return Err(CoreError::DomainViolation(
                DomainError::ReservationTypeNotFound(rule.reservation_type_id),
            ));
        }
        validate_rule_lines(&rule)?;
        if self.pricing_rules.iter().any(|r| r.id == rule.id) {
            return Err(CoreError::DomainViolation(
                DomainError::DuplicatePricingRule(rule.id),
            ));
        }
        self.pricing_rules.push(rule);
        Ok(())
    }

    /// Admits a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room type does not exist or the id already
    /// exists.
    pub fn add_room(&mut self, room: Room) -> Result<(), CoreError> {
        if self.room_type(room.room_type_id).is_none() {
            return Err(CoreError::DomainViolation(DomainError::RoomTypeNotFound(
                room.room_type_id,
            )));
        }
        if self.room(room.id).is_some() {
            return Err(CoreError::DomainViolation(DomainError::DuplicateRoom(
                room.id,
            )));
        }
        self.rooms.push(room);
        Ok(())
    }

    /// Looks up a room type by id.
    #[must_use]
    pub fn room_type(&self, id: i64) -> Option<&RoomType> {
        self.room_types.iter().find(|room_type| room_type.id == id)
    }

    /// Looks up a reservation type by id.
    #[must_use]
    pub fn reservation_type(&self, id: i64) -> Option<&ReservationType> {
        self.reservation_types.iter().find(|rt| rt.id == id)
    }

    /// Looks up a room by id.
    #[must_use]
    pub fn room(&self, id: i64) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Returns the configured slot for a room type and reservation type.
    ///
    /// At most one slot is supported per pair; the first match wins.
    #[must_use]
    pub fn slot_for(&self, room_type_id: i64, reservation_type_id: i64) -> Option<&ReservationSlot> {
        self.slots.iter().find(|slot| {
            slot.room_type_id == room_type_id && slot.reservation_type_id == reservation_type_id
        })
    }

    /// Returns the allocatable rooms of a type, ordered by name.
    ///
    /// Inactive, maintenance and out-of-order rooms are excluded. The name
    /// ordering is the deterministic tie-break behind "first available".
    #[must_use]
    pub fn rooms_of_type(&self, room_type_id: i64) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self
            .rooms
            .iter()
            .filter(|room| {
                room.room_type_id == room_type_id
                    && room.active
                    && !room.status.blocks_allocation()
            })
            .collect();
        rooms.sort_by(|a, b| a.name.cmp(&b.name));
        rooms
    }

    /// Returns the active rules for a room type and reservation type.
    #[must_use]
    pub fn rules_for(&self, room_type_id: i64, reservation_type_id: i64) -> Vec<&PricingRule> {
        self.pricing_rules
            .iter()
            .filter(|rule| {
                rule.active
                    && rule.room_type_id == room_type_id
                    && rule.reservation_type_id == reservation_type_id
            })
            .collect()
    }

    /// Returns the active rules for a room type across all reservation
    /// types.
    #[must_use]
    pub fn rules_for_room_type(&self, room_type_id: i64) -> Vec<&PricingRule> {
        self.pricing_rules
            .iter()
            .filter(|rule| rule.active && rule.room_type_id == room_type_id)
            .collect()
    }

    /// Returns the active seasons covering a date, highest priority first.
    #[must_use]
    pub fn seasons_covering(&self, date: Date) -> Vec<&Season> {
        seasons_covering(&self.seasons, date)
    }
}
