//! House: the root of the containment hierarchy, optionally owned by a user.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::key::{EntityKind, HouseKey, Keyed, UserKey};
use crate::metadata::Metadata;
use crate::validation::{non_empty, required, same_key};

/// A house, identified by `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_username: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Keyed for House {
    type Key = HouseKey;
    const KIND: EntityKind = EntityKind::House;

    fn key(&self) -> HouseKey {
        HouseKey::new(self.name.clone())
    }
}

impl House {
    /// Create a builder for constructing a [`House`].
    #[must_use]
    pub fn builder() -> HouseBuilder {
        HouseBuilder::default()
    }

    /// Key of the owning user, if one is referenced.
    #[must_use]
    pub fn owner(&self) -> Option<UserKey> {
        self.owner_username.as_deref().map(UserKey::from)
    }

    /// Check field-level invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `name` is empty, or when
    /// `owner_username` is supplied but blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty(Self::KIND, "name", &self.name)?;
        if let Some(owner) = &self.owner_username {
            non_empty(Self::KIND, "owner_username", owner)?;
        }
        Ok(())
    }
}

/// Step-by-step builder for [`House`], also used as the request payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HouseBuilder {
    name: Option<String>,
    address: Option<String>,
    owner_username: Option<String>,
    #[serde(default)]
    metadata: Metadata,
}

impl HouseBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn owner_username(mut self, owner_username: impl Into<String>) -> Self {
        self.owner_username = Some(owner_username.into());
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
    /// Returns a [`ValidationError`] on `name` if the payload names a
    /// different house.
    pub fn for_key(mut self, key: &HouseKey) -> Result<Self, ValidationError> {
        same_key(House::KIND, "name", self.name.as_deref(), key.as_str())?;
        self.name = Some(key.to_string());
        Ok(self)
    }

    /// Consume the builder, validate, and return a [`House`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` is missing or empty.
    pub fn build(self) -> Result<House, ValidationError> {
        let house = House {
            name: required(House::KIND, "name", self.name)?,
            address: self.address,
            owner_username: self.owner_username,
            metadata: self.metadata,
        };
        house.validate()?;
        Ok(house)
    }
}
