//! Strongly typed identifiers for EVE Online entities.
//!
//! Character IDs are wrapped in a non-zero newtype so that anything keyed by a character,
//! such as location tree UIDs, can be constructed without runtime validation. Item and
//! location IDs share the same ID space in ESI (an asset's `location_id` may reference either
//! a location or another asset), so both are plain `i64` newtypes that convert into each other.

use std::fmt;
use std::num::NonZeroI32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when constructing an identifier from an invalid raw value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The raw ID was zero, which ESI never assigns to an entity.
    #[error("{0} ID must not be zero")]
    Zero(&'static str),
}

/// EVE Online character ID, guaranteed to be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct CharacterId(NonZeroI32);

impl CharacterId {
    /// Creates a character ID from a raw ESI value.
    ///
    /// # Arguments
    /// - `id` - Raw character ID
    ///
    /// # Returns
    /// - `Ok(CharacterId)` - For any non-zero value
    /// - `Err(IdError::Zero)` - When `id` is zero
    pub fn new(id: i32) -> Result<Self, IdError> {
        NonZeroI32::new(id)
            .map(Self)
            .ok_or(IdError::Zero("character"))
    }

    /// Returns the raw ID.
    pub fn get(self) -> i32 {
        self.0.get()
    }
}

impl TryFrom<i32> for CharacterId {
    type Error = IdError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CharacterId> for i32 {
    fn from(value: CharacterId) -> Self {
        value.get()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ID of an asset item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub i64);

/// ID of a location, i.e. a station, structure, solar system or another asset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LocationId(pub i64);

/// ID of a solar system.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SolarSystemId(pub i32);

impl From<ItemId> for LocationId {
    fn from(value: ItemId) -> Self {
        Self(value.0)
    }
}

impl From<LocationId> for ItemId {
    fn from(value: LocationId) -> Self {
        Self(value.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SolarSystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect zero to be rejected and any other value accepted
    #[test]
    fn character_id_rejects_zero() {
        assert_eq!(CharacterId::new(0), Err(IdError::Zero("character")));
        assert_eq!(CharacterId::new(42).map(CharacterId::get), Ok(42));
        assert_eq!(CharacterId::new(-7).map(CharacterId::get), Ok(-7));
    }

    /// Expect deserialization of a zero character ID to fail
    #[test]
    fn character_id_deserialize_rejects_zero() {
        let result: Result<CharacterId, _> = serde_json::from_str("0");
        assert!(result.is_err());

        let id: CharacterId = serde_json::from_str("93000001").unwrap();
        assert_eq!(id.get(), 93000001);
    }

    /// Expect item and location IDs to convert into each other unchanged
    #[test]
    fn item_and_location_ids_share_id_space() {
        let item = ItemId(1_000_000_000_001);
        let location: LocationId = item.into();
        assert_eq!(location.0, item.0);
        assert_eq!(ItemId::from(location), item);
    }
}
