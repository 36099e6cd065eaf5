//! Room service: use-cases for managing rooms.

use homehub_domain::error::HomeHubError;
use homehub_domain::event::{Event, EventType};
use homehub_domain::house::House;
use homehub_domain::key::{HouseKey, Keyed, RoomKey};
use homehub_domain::room::{Room, RoomBuilder};
use homehub_domain::user::User;

use crate::integrity::IntegrityGraph;
use crate::ports::{EntityStore, EventPublisher};

/// Application service for room CRUD operations.
pub struct RoomService<U, H, R, P> {
    store: R,
    integrity: IntegrityGraph<U, H, R>,
    publisher: P,
}

impl<U, H, R, P> RoomService<U, H, R, P>
where
    U: EntityStore<User>,
    H: EntityStore<House>,
    R: EntityStore<Room>,
    P: EventPublisher,
{
    /// Create a new service writing to `store` and checking houses through
    /// `integrity`.
    pub fn new(store: R, integrity: IntegrityGraph<U, H, R>, publisher: P) -> Self {
        Self {
            store,
            integrity,
            publisher,
        }
    }

    /// Validate the payload, check the house, and store a new room.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::Validation`] for an invalid payload,
    /// [`HomeHubError::Integrity`] when the house does not exist, or
    /// [`HomeHubError::Duplicate`] if the house already has a room of that
    /// name.
    #[tracing::instrument(skip_all)]
    pub fn create_room(&self, payload: RoomBuilder) -> Result<Room, HomeHubError> {
        let room = payload.build()?;
        self.integrity.check_room(&room)?;
        let created = self.store.create(room)?;
        tracing::debug!(room = %created.key(), "room created");
        self.publisher
            .publish(Event::for_entity(EventType::Created, &created));
        Ok(created)
    }

    /// Look up a room by `(house_name, name)`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NotFound`] when no such room exists.
    pub fn read_room(&self, key: &RoomKey) -> Result<Room, HomeHubError> {
        self.store.read(key).map_err(HomeHubError::from)
    }

    /// List all rooms in creation order.
    pub fn list_rooms(&self) -> Vec<Room> {
        self.store.list()
    }

    /// List the rooms of one house in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NotFound`] when the house does not exist.
    pub fn list_rooms_in_house(&self, house: &HouseKey) -> Result<Vec<Room>, HomeHubError> {
        self.integrity.require_house(house)?;
        Ok(self
            .store
            .list()
            .into_iter()
            .filter(|room| room.house_name == house.as_str())
            .collect())
    }

    /// Replace every non-key field of an existing room.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::Validation`], [`HomeHubError::Integrity`], or
    /// [`HomeHubError::NotFound`].
    #[tracing::instrument(skip(self, payload), fields(room = %key))]
    pub fn update_room(&self, key: &RoomKey, payload: RoomBuilder) -> Result<Room, HomeHubError> {
        let room = payload.for_key(key)?.build()?;
        self.integrity.check_room(&room)?;
        let updated = self.store.update(room)?;
        tracing::debug!("room updated");
        self.publisher
            .publish(Event::for_entity(EventType::Updated, &updated));
        Ok(updated)
    }

    /// Delete a room, returning the removed value.
    ///
    /// Devices inside the room are not removed.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NotFound`] when no such room exists.
    #[tracing::instrument(skip(self), fields(room = %key))]
    pub fn delete_room(&self, key: &RoomKey) -> Result<Room, HomeHubError> {
        let removed = self.store.delete(key)?;
        tracing::debug!("room deleted");
        self.publisher
            .publish(Event::for_entity(EventType::Deleted, &removed));
        Ok(removed)
    }
}
