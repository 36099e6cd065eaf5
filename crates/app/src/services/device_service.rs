//! Device service: use-cases for managing devices.

use homehub_domain::device::{Device, DeviceBuilder};
use homehub_domain::error::HomeHubError;
use homehub_domain::event::{Event, EventType};
use homehub_domain::house::House;
use homehub_domain::key::{DeviceKey, Keyed, RoomKey};
use homehub_domain::room::Room;
use homehub_domain::user::User;

use crate::integrity::IntegrityGraph;
use crate::ports::{EntityStore, EventPublisher};

/// Application service for device CRUD operations.
pub struct DeviceService<U, H, R, D, P> {
    store: D,
    integrity: IntegrityGraph<U, H, R>,
    publisher: P,
}

impl<U, H, R, D, P> DeviceService<U, H, R, D, P>
where
    U: EntityStore<User>,
    H: EntityStore<House>,
    R: EntityStore<Room>,
    D: EntityStore<Device>,
    P: EventPublisher,
{
    /// Create a new service writing to `store` and checking rooms through
    /// `integrity`.
    pub fn new(store: D, integrity: IntegrityGraph<U, H, R>, publisher: P) -> Self {
        Self {
            store,
            integrity,
            publisher,
        }
    }

    /// Validate the payload, check the room and house, and store a new
    /// device.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::Validation`] for an invalid payload,
    /// [`HomeHubError::Integrity`] when the room or house does not exist, or
    /// [`HomeHubError::Duplicate`] if the room already has a device of that
    /// name.
    #[tracing::instrument(skip_all)]
    pub fn create_device(&self, payload: DeviceBuilder) -> Result<Device, HomeHubError> {
        let device = payload.build()?;
        self.integrity.check_device(&device)?;
        let created = self.store.create(device)?;
        tracing::debug!(device = %created.key(), kind = %created.kind, "device created");
        self.publisher
            .publish(Event::for_entity(EventType::Created, &created));
        Ok(created)
    }

    /// Look up a device by `(house_name, room_name, name)`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NotFound`] when no such device exists.
    pub fn read_device(&self, key: &DeviceKey) -> Result<Device, HomeHubError> {
        self.store.read(key).map_err(HomeHubError::from)
    }

    /// List all devices in creation order.
    pub fn list_devices(&self) -> Vec<Device> {
        self.store.list()
    }

    /// List the devices of one room in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NotFound`] when the house or the room does not
    /// exist.
    pub fn list_devices_in_room(&self, room: &RoomKey) -> Result<Vec<Device>, HomeHubError> {
        self.integrity.require_house(&room.house())?;
        self.integrity.require_room(room)?;
        Ok(self
            .store
            .list()
            .into_iter()
            .filter(|device| device.room() == *room)
            .collect())
    }

    /// Replace every non-key field of an existing device.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::Validation`], [`HomeHubError::Integrity`], or
    /// [`HomeHubError::NotFound`].
    #[tracing::instrument(skip(self, payload), fields(device = %key))]
    pub fn update_device(
        &self,
        key: &DeviceKey,
        payload: DeviceBuilder,
    ) -> Result<Device, HomeHubError> {
        let device = payload.for_key(key)?.build()?;
        self.integrity.check_device(&device)?;
        let updated = self.store.update(device)?;
        tracing::debug!("device updated");
        self.publisher
            .publish(Event::for_entity(EventType::Updated, &updated));
        Ok(updated)
    }

    /// Delete a device, returning the removed value.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NotFound`] when no such device exists.
    #[tracing::instrument(skip(self), fields(device = %key))]
    pub fn delete_device(&self, key: &DeviceKey) -> Result<Device, HomeHubError> {
        let removed = self.store.delete(key)?;
        tracing::debug!("device deleted");
        self.publisher
            .publish(Event::for_entity(EventType::Deleted, &removed));
        Ok(removed)
    }
}
