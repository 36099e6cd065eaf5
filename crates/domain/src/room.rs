//! Room: a space inside a house.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::key::{EntityKind, HouseKey, Keyed, RoomKey};
use crate::metadata::Metadata;
use crate::validation::{integer, non_empty, required, same_key};

/// A room, identified by `(house_name, name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub house_name: String,
    pub name: String,
    pub floor: i64,
    pub size: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Keyed for Room {
    type Key = RoomKey;
    const KIND: EntityKind = EntityKind::Room;

    fn key(&self) -> RoomKey {
        RoomKey::new(self.house_name.clone(), self.name.clone())
    }
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    /// Key of the containing house.
    #[must_use]
    pub fn house(&self) -> HouseKey {
        HouseKey::new(self.house_name.clone())
    }

    /// Check field-level invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `house_name`, `name`, or `size` is
    /// empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty(Self::KIND, "house_name", &self.house_name)?;
        non_empty(Self::KIND, "name", &self.name)?;
        non_empty(Self::KIND, "size", &self.size)?;
        Ok(())
    }
}

/// Step-by-step builder for [`Room`], also used as the request payload.
///
/// `floor` is kept as raw JSON until [`build`](Self::build) so that a
/// non-integer value is reported as a validation failure on that field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomBuilder {
    house_name: Option<String>,
    name: Option<String>,
    floor: Option<serde_json::Value>,
    size: Option<String>,
    #[serde(default)]
    metadata: Metadata,
}

impl RoomBuilder {
    #[must_use]
    pub fn house_name(mut self, house_name: impl Into<String>) -> Self {
        self.house_name = Some(house_name.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn floor(mut self, floor: i64) -> Self {
        self.floor = Some(floor.into());
        self
    }

    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Pin the payload to an existing key before an update.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the payload names a different house
    /// or room.
    pub fn for_key(mut self, key: &RoomKey) -> Result<Self, ValidationError> {
        same_key(Room::KIND, "house_name", self.house_name.as_deref(), &key.house_name)?;
        same_key(Room::KIND, "name", self.name.as_deref(), &key.name)?;
        self.house_name = Some(key.house_name.clone());
        self.name = Some(key.name.clone());
        Ok(self)
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a field is missing, empty, or if
    /// `floor` is not an integer.
    pub fn build(self) -> Result<Room, ValidationError> {
        let room = Room {
            house_name: required(Room::KIND, "house_name", self.house_name)?,
            name: required(Room::KIND, "name", self.name)?,
            floor: integer(Room::KIND, "floor", self.floor.as_ref())?,
            size: required(Room::KIND, "size", self.size)?,
            metadata: self.metadata,
        };
        room.validate()?;
        Ok(room)
    }
}
