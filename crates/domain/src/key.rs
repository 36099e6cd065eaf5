//! Entity kinds and the typed keys that identify stored entities.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// One of the four kinds of entity managed by the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    House,
    Room,
    Device,
}

impl EntityKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::House => "house",
            Self::Room => "room",
            Self::Device => "device",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity that can be stored under a unique key.
pub trait Keyed {
    /// Key type; its `Display` form is used in errors, logs, and events.
    type Key: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Kind reported in errors about this entity.
    const KIND: EntityKind;

    /// Build the key identifying this value.
    fn key(&self) -> Self::Key;
}

macro_rules! define_name_key {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_name_key!(
    /// Key of a [`User`](crate::user::User): its `username`.
    UserKey
);

define_name_key!(
    /// Key of a [`House`](crate::house::House): its `name`.
    HouseKey
);

/// Composite key of a [`Room`](crate::room::Room).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomKey {
    pub house_name: String,
    pub name: String,
}

impl RoomKey {
    #[must_use]
    pub fn new(house_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            house_name: house_name.into(),
            name: name.into(),
        }
    }

    /// Key of the house containing this room.
    #[must_use]
    pub fn house(&self) -> HouseKey {
        HouseKey::new(self.house_name.clone())
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.house_name, self.name)
    }
}

/// Composite key of a [`Device`](crate::device::Device).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceKey {
    pub house_name: String,
    pub room_name: String,
    pub name: String,
}

impl DeviceKey {
    #[must_use]
    pub fn new(
        house_name: impl Into<String>,
        room_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            house_name: house_name.into(),
            room_name: room_name.into(),
            name: name.into(),
        }
    }

    /// Key of the room containing this device.
    #[must_use]
    pub fn room(&self) -> RoomKey {
        RoomKey::new(self.house_name.clone(), self.room_name.clone())
    }

    /// Key of the house containing this device.
    #[must_use]
    pub fn house(&self) -> HouseKey {
        HouseKey::new(self.house_name.clone())
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.house_name, self.room_name, self.name)
    }
}
