//! Device: a controllable or observable thing placed in a room.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::key::{DeviceKey, EntityKind, HouseKey, Keyed, RoomKey};
use crate::metadata::Metadata;
use crate::validation::{non_empty, required, same_key};

/// A device, identified by `(house_name, room_name, name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub house_name: String,
    pub room_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Keyed for Device {
    type Key = DeviceKey;
    const KIND: EntityKind = EntityKind::Device;

    fn key(&self) -> DeviceKey {
        DeviceKey::new(
            self.house_name.clone(),
            self.room_name.clone(),
            self.name.clone(),
        )
    }
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Key of the room the device is placed in.
    #[must_use]
    pub fn room(&self) -> RoomKey {
        RoomKey::new(self.house_name.clone(), self.room_name.clone())
    }

    /// Key of the house the device is placed in.
    #[must_use]
    pub fn house(&self) -> HouseKey {
        HouseKey::new(self.house_name.clone())
    }

    /// Check field-level invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `house_name`, `room_name`, `type`,
    /// or `name` is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty(Self::KIND, "house_name", &self.house_name)?;
        non_empty(Self::KIND, "room_name", &self.room_name)?;
        non_empty(Self::KIND, "type", &self.kind)?;
        non_empty(Self::KIND, "name", &self.name)?;
        Ok(())
    }
}

/// Step-by-step builder for [`Device`], also used as the request payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceBuilder {
    house_name: Option<String>,
    room_name: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    status: Option<String>,
    #[serde(default)]
    metadata: Metadata,
}

impl DeviceBuilder {
    #[must_use]
    pub fn house_name(mut self, house_name: impl Into<String>) -> Self {
        self.house_name = Some(house_name.into());
        self
    }

    #[must_use]
    pub fn room_name(mut self, room_name: impl Into<String>) -> Self {
        self.room_name = Some(room_name.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
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
    /// Returns a [`ValidationError`] if the payload names a different house,
    /// room, or device.
    pub fn for_key(mut self, key: &DeviceKey) -> Result<Self, ValidationError> {
        same_key(Device::KIND, "house_name", self.house_name.as_deref(), &key.house_name)?;
        same_key(Device::KIND, "room_name", self.room_name.as_deref(), &key.room_name)?;
        same_key(Device::KIND, "name", self.name.as_deref(), &key.name)?;
        self.house_name = Some(key.house_name.clone());
        self.room_name = Some(key.room_name.clone());
        self.name = Some(key.name.clone());
        Ok(self)
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a required field is missing or empty.
    pub fn build(self) -> Result<Device, ValidationError> {
        let device = Device {
            house_name: required(Device::KIND, "house_name", self.house_name)?,
            room_name: required(Device::KIND, "room_name", self.room_name)?,
            kind: required(Device::KIND, "type", self.kind)?,
            name: required(Device::KIND, "name", self.name)?,
            status: self.status,
            metadata: self.metadata,
        };
        device.validate()?;
        Ok(device)
    }
}
